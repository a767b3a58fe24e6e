//! Tab bar error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabBarError {
    #[error("tab index {index} is out of range for a collection of {len} tabs")]
    IndexOutOfRange { index: usize, len: usize },
}
