//! A multiplatform-style tab bar widget for Leptos.
//!
//! Renders a strip of tappable icon tabs plus the content of the currently
//! selected tab. The bar can sit on any edge of its container and the
//! button cluster can be start-aligned, centered or end-aligned within it.
//! The selection index lives in a caller-owned signal.
//!
//! ```
//! use leptos::prelude::*;
//! use multitab::{TabBar, TabBarPosition, TabBarView};
//!
//! # let owner = leptos::reactive::owner::Owner::new();
//! # owner.set();
//! let selection = RwSignal::new(0);
//! let bar = TabBar::new(selection)
//!     .position(TabBarPosition::Top)
//!     .tab_with("Tab 1", || "*", || view! { <p>"Body of Tab 1"</p> })
//!     .tab_with("Tab 2", || "*", || view! { <p>"Body of Tab 2"</p> });
//!
//! let _ = view! { <TabBarView bar=bar /> };
//! ```

pub mod alignment;
pub mod bar;
pub mod collection;
pub mod error;
pub mod position;
pub mod tab;

pub use alignment::{BarHorizontalAlignment, BarVerticalAlignment};
pub use bar::{TabBar, TabBarView};
pub use collection::TabCollection;
pub use error::TabBarError;
pub use position::TabBarPosition;
pub use tab::Tab;
