//! Tab descriptor: the immutable value describing one tab.

use leptos::prelude::*;
use std::fmt;

/// Holds the data for a tab that can be added to a
/// [`TabBar`](crate::TabBar): a title, an icon, an optional tag and the
/// content shown while the tab is selected.
///
/// Icon and content are stored as [`ViewFn`] render callbacks, so any
/// renderable can back them without the widget knowing its concrete type.
/// The descriptor has no public mutators; once built it only changes hands
/// by value.
#[derive(Clone)]
pub struct Tab {
    title: String,
    icon: ViewFn,
    tag: String,
    content: ViewFn,
}

impl Tab {
    /// Creates a descriptor with an empty tag.
    pub fn new(
        title: impl Into<String>,
        icon: impl Into<ViewFn>,
        content: impl Into<ViewFn>,
    ) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            tag: String::new(),
            content: content.into(),
        }
    }

    /// Attaches a tag. Tags are free-form; they may be empty and may
    /// repeat across tabs.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// The title shown under the icon.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The tag, or `""` when none was set.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Runs the content callback to produce the page body.
    pub(crate) fn content_view(&self) -> AnyView {
        self.content.run()
    }

    /// The label drawn inside a tab button: the icon fit into a fixed
    /// square, stacked above a small caption.
    pub(crate) fn label(&self) -> impl IntoView {
        let icon = self.icon.run();
        let title = self.title.clone();
        view! {
            <span
                class="multitab__icon"
                style="display:flex;align-items:center;justify-content:center;width:24px;height:24px;overflow:hidden;"
            >
                {icon}
            </span>
            <span class="multitab__caption" style="font-size:12px;line-height:1;">{title}</span>
        }
    }
}

impl fmt::Debug for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tab")
            .field("title", &self.title)
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_preserves_title() {
        let tab = Tab::new("Categories", || (), || ());
        assert_eq!(tab.title(), "Categories");
        assert_eq!(tab.tag(), "");
    }

    #[test]
    fn test_with_tag() {
        let tab = Tab::new("Categories", || (), || ()).with_tag("contents");
        assert_eq!(tab.tag(), "contents");
    }

    #[test]
    fn test_clone_keeps_fields() {
        let tab = Tab::new("A", || (), || ()).with_tag("t");
        let copy = tab.clone();
        assert_eq!(copy.title(), "A");
        assert_eq!(copy.tag(), "t");
    }
}
