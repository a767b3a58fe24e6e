//! Placement of the tab bar within its container.

/// Edge of the container the tab bar is drawn on.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TabBarPosition {
    /// Tabs across the top of the container.
    #[default]
    Top,
    /// Tabs across the bottom of the container.
    Bottom,
    /// Tabs down the left side of the container.
    Left,
    /// Tabs down the right side of the container.
    Right,
}

impl TabBarPosition {
    /// Returns the position name as a string (used for the CSS modifier class).
    pub fn as_str(&self) -> &'static str {
        match self {
            TabBarPosition::Top => "top",
            TabBarPosition::Bottom => "bottom",
            TabBarPosition::Left => "left",
            TabBarPosition::Right => "right",
        }
    }

    /// Top and bottom bars lay their buttons out in a row; left and right
    /// bars in a column.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, TabBarPosition::Top | TabBarPosition::Bottom)
    }

    /// Whether the bar renders before the content pane in composition order.
    pub fn bar_leads_content(&self) -> bool {
        matches!(self, TabBarPosition::Top | TabBarPosition::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis() {
        assert!(TabBarPosition::Top.is_horizontal());
        assert!(TabBarPosition::Bottom.is_horizontal());
        assert!(!TabBarPosition::Left.is_horizontal());
        assert!(!TabBarPosition::Right.is_horizontal());
    }

    #[test]
    fn test_composition_order() {
        assert!(TabBarPosition::Top.bar_leads_content());
        assert!(TabBarPosition::Left.bar_leads_content());
        assert!(!TabBarPosition::Bottom.bar_leads_content());
        assert!(!TabBarPosition::Right.bar_leads_content());
    }

    #[test]
    fn test_default_is_top() {
        assert_eq!(TabBarPosition::default(), TabBarPosition::Top);
    }
}
