//! Tab bar composition: the builder handle and the composite view.

use leptos::prelude::*;

use crate::alignment::{BarHorizontalAlignment, BarVerticalAlignment};
use crate::collection::TabCollection;
use crate::position::TabBarPosition;
use crate::tab::Tab;

const TAB_STYLE: &str = "display:flex;flex-direction:column;align-items:center;justify-content:center;gap:4px;width:65px;height:65px;border-radius:10px;border:none;padding:0;cursor:pointer;background:transparent;color:inherit;";
const TAB_STYLE_ACTIVE: &str = "display:flex;flex-direction:column;align-items:center;justify-content:center;gap:4px;width:65px;height:65px;border-radius:10px;border:none;padding:0;cursor:pointer;background:var(--multitab-selected-fill, #d1d1d6);color:var(--multitab-accent, #0a84ff);";

/// Builder-style handle describing one tab bar.
///
/// The handle is `Copy` and every copy acts on the same underlying
/// collection, so a bar can be configured, populated and handed to
/// [`TabBarView`] in a single chained expression:
///
/// ```
/// use leptos::prelude::*;
/// use multitab::{TabBar, TabBarPosition};
///
/// let selection = RwSignal::new(0);
/// let bar = TabBar::new(selection)
///     .position(TabBarPosition::Bottom)
///     .tab_with("Tab 1", || "*", || view! { <p>"Body of Tab 1"</p> })
///     .tab_with("Tab 2", || "*", || view! { <p>"Body of Tab 2"</p> });
/// assert_eq!(bar.tab_set().len(), 2);
/// ```
#[derive(Clone, Copy)]
pub struct TabBar {
    position: TabBarPosition,
    vertical_alignment: BarVerticalAlignment,
    horizontal_alignment: BarHorizontalAlignment,
    selection: RwSignal<usize>,
    tab_set: TabCollection,
    on_select: Option<Callback<usize>>,
}

impl TabBar {
    /// Creates a bar over a caller-owned selection index.
    ///
    /// Defaults: bar at the top, button cluster centered in both axes.
    /// The widget never writes an initial value into `selection` and never
    /// validates it; keeping `selection < len` while tabs exist is the
    /// caller's side of the contract.
    pub fn new(selection: RwSignal<usize>) -> Self {
        Self {
            position: TabBarPosition::default(),
            vertical_alignment: BarVerticalAlignment::default(),
            horizontal_alignment: BarHorizontalAlignment::default(),
            selection,
            tab_set: TabCollection::new(),
            on_select: None,
        }
    }

    /// Sets the edge the bar is drawn on.
    pub fn position(mut self, position: TabBarPosition) -> Self {
        self.position = position;
        self
    }

    /// Sets the vertical alignment used by left and right bars.
    pub fn vertical_alignment(mut self, alignment: BarVerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    /// Sets the horizontal alignment used by top and bottom bars.
    pub fn horizontal_alignment(mut self, alignment: BarHorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Registers a callback fired after a tap moves the selection.
    pub fn on_select(mut self, callback: Callback<usize>) -> Self {
        self.on_select = Some(callback);
        self
    }

    /// Appends a prepared descriptor. Returns the bar for chaining.
    pub fn tab(self, tab: Tab) -> Self {
        self.tab_set.push(tab);
        self
    }

    /// Builds a descriptor from its parts and appends it.
    pub fn tab_with(
        self,
        title: impl Into<String>,
        icon: impl Into<ViewFn>,
        content: impl Into<ViewFn>,
    ) -> Self {
        self.tab(Tab::new(title, icon, content))
    }

    /// The tabs currently in the bar.
    pub fn tab_set(&self) -> TabCollection {
        self.tab_set
    }

    /// The caller-owned selection signal.
    pub fn selection(&self) -> RwSignal<usize> {
        self.selection
    }
}

/// The composite view: button strip, divider and the selected content.
///
/// Bar and content stack in the order implied by the position: bar first
/// for top/left, content first for bottom/right, with the divider on the
/// content-facing side of the strip. With an empty collection only the
/// strip renders, without a content pane.
#[component]
pub fn TabBarView(bar: TabBar) -> impl IntoView {
    let class = format!("multitab multitab--{}", bar.position.as_str());
    let style = if bar.position.is_horizontal() {
        "display:flex;flex-direction:column;width:100%;height:100%;"
    } else {
        "display:flex;flex-direction:row;width:100%;height:100%;"
    };

    if bar.position.bar_leads_content() {
        view! {
            <div class=class style=style>
                {strip(bar)}
                {content_pane(bar)}
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class=class style=style>
                {content_pane(bar)}
                {strip(bar)}
            </div>
        }
        .into_any()
    }
}

/// One tab button, 65x65 logical px; fill and tint follow the selection.
#[component]
fn TabButton(
    tab: Tab,
    index: usize,
    selection: RwSignal<usize>,
    on_select: Option<Callback<usize>>,
) -> impl IntoView {
    let is_active = Memo::new(move |_| selection.get() == index);
    let class = move || {
        if is_active.get() {
            "multitab__tab multitab__tab--active"
        } else {
            "multitab__tab"
        }
    };
    let style = move || if is_active.get() { TAB_STYLE_ACTIVE } else { TAB_STYLE };

    view! {
        <button
            type="button"
            class=class
            style=style
            on:click=move |_| {
                log::debug!("tab {index} tapped");
                selection.set(index);
                if let Some(callback) = on_select {
                    callback.run(index);
                }
            }
        >
            {tab.label()}
        </button>
    }
}

/// The bar strip: the button rail plus its divider.
fn strip(bar: TabBar) -> AnyView {
    let horizontal = bar.position.is_horizontal();
    let (leading, trailing) = if horizontal {
        bar.horizontal_alignment.spacers()
    } else {
        bar.vertical_alignment.spacers()
    };

    let rail_style = if horizontal {
        "display:flex;flex-direction:row;align-items:center;padding:5px;"
    } else {
        "display:flex;flex-direction:column;align-items:center;padding:5px;flex:1 1 auto;"
    };
    let divider_style = if horizontal {
        "height:1px;align-self:stretch;background:var(--multitab-divider, rgba(0, 0, 0, 0.12));"
    } else {
        "width:1px;align-self:stretch;background:var(--multitab-divider, rgba(0, 0, 0, 0.12));"
    };
    let strip_class = format!(
        "multitab__bar multitab__bar--{}",
        if horizontal { "horizontal" } else { "vertical" }
    );
    let alignment_token = if horizontal {
        bar.horizontal_alignment.as_str()
    } else {
        bar.vertical_alignment.as_str()
    };
    let rail_class = format!("multitab__rail multitab__rail--{alignment_token}");
    let strip_style = if horizontal {
        "display:flex;flex-direction:column;"
    } else {
        "display:flex;flex-direction:row;"
    };

    let rail = view! {
        <div class=rail_class style=rail_style>
            {leading.then(spacer)}
            <For
                each=move || {
                    bar.tab_set
                        .with(|tabs| tabs.iter().cloned().enumerate().collect::<Vec<_>>())
                }
                key=|(index, _)| *index
                children=move |(index, tab)| {
                    view! {
                        <TabButton
                            tab=tab
                            index=index
                            selection=bar.selection
                            on_select=bar.on_select
                        />
                    }
                }
            />
            {trailing.then(spacer)}
        </div>
    };
    let divider = view! { <div class="multitab__divider" style=divider_style></div> };

    // The divider sits on the content-facing side of the rail.
    if bar.position.bar_leads_content() {
        view! {
            <div class=strip_class style=strip_style>
                {rail}
                {divider}
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class=strip_class style=strip_style>
                {divider}
                {rail}
            </div>
        }
        .into_any()
    }
}

/// The page body of the selected tab, expanded to fill the remaining
/// space. Renders nothing while the collection is empty.
fn content_pane(bar: TabBar) -> impl Fn() -> Option<AnyView> + Send + Sync + 'static {
    move || {
        if bar.tab_set.is_empty() {
            return None;
        }
        let index = bar.selection.get();
        let tab = match bar.tab_set.at(index) {
            Ok(tab) => tab,
            // Caller precondition: selection stays inside the collection.
            Err(err) => panic!("{err}"),
        };
        Some(
            view! {
                <div
                    class="multitab__content"
                    style="flex:1 1 auto;min-width:0;min-height:0;"
                >
                    {tab.content_view()}
                </div>
            }
            .into_any(),
        )
    }
}

/// Flexible spacer used to align the button cluster inside the rail.
fn spacer() -> AnyView {
    view! { <span class="multitab__spacer" style="flex:1 1 0%;" aria-hidden="true"></span> }
        .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bar(selection: usize) -> TabBar {
        TabBar::new(RwSignal::new(selection))
            .tab_with("A", || (), || "body of A")
            .tab_with("B", || (), || "body of B")
            .tab_with("C", || (), || "body of C")
    }

    fn render(bar: TabBar) -> String {
        leptos::reactive::owner::Owner::new()
            .with(|| view! { <TabBarView bar=bar /> }.to_html())
    }

    #[test]
    fn test_chained_calls_share_one_collection() {
        let bar = sample_bar(0);
        assert_eq!(bar.tab_set().len(), 3);
        assert_eq!(bar.tab_set().at(1).unwrap().title(), "B");
    }

    #[test]
    fn test_three_tabs_selection_highlights_second() {
        let html = render(sample_bar(1));
        assert_eq!(html.matches("<button").count(), 3);
        assert_eq!(html.matches("multitab__tab--active").count(), 1);
        assert!(html.contains("body of B"));
        assert!(!html.contains("body of A"));
        assert!(!html.contains("body of C"));
    }

    #[test]
    fn test_content_pane_tracks_each_valid_selection() {
        for (index, body) in ["body of A", "body of B", "body of C"].into_iter().enumerate() {
            let html = render(sample_bar(index));
            assert!(html.contains(body), "selection {index} should show {body}");
        }
    }

    #[test]
    fn test_active_button_uses_theme_tokens() {
        let html = render(sample_bar(0));
        assert_eq!(html.matches("--multitab-selected-fill").count(), 1);
        assert_eq!(html.matches("--multitab-accent").count(), 1);
    }

    #[test]
    fn test_empty_collection_renders_bar_only() {
        // The selection value is irrelevant while no tabs exist.
        let html = render(TabBar::new(RwSignal::new(9)));
        assert_eq!(html.matches("<button").count(), 0);
        assert!(html.contains("multitab__bar"));
        assert!(!html.contains("multitab__content"));
    }

    #[test]
    fn test_bar_precedes_content_for_top_and_left() {
        for position in [TabBarPosition::Top, TabBarPosition::Left] {
            let html = render(sample_bar(0).position(position));
            let bar = html.find("multitab__bar").unwrap();
            let content = html.find("multitab__content").unwrap();
            assert!(bar < content, "bar should lead content for {position:?}");
        }
    }

    #[test]
    fn test_content_precedes_bar_for_bottom_and_right() {
        for position in [TabBarPosition::Bottom, TabBarPosition::Right] {
            let html = render(sample_bar(0).position(position));
            let bar = html.find("multitab__bar").unwrap();
            let content = html.find("multitab__content").unwrap();
            assert!(content < bar, "content should lead bar for {position:?}");
        }
    }

    #[test]
    fn test_center_alignment_has_both_spacers() {
        let html = render(sample_bar(0).horizontal_alignment(BarHorizontalAlignment::Center));
        assert_eq!(html.matches("multitab__spacer").count(), 2);
        assert!(html.contains("multitab__rail--center"));
    }

    #[test]
    fn test_left_alignment_has_trailing_spacer_only() {
        let html = render(sample_bar(0).horizontal_alignment(BarHorizontalAlignment::Left));
        assert_eq!(html.matches("multitab__spacer").count(), 1);
        let last_button = html.rfind("<button").unwrap();
        let spacer = html.find("multitab__spacer").unwrap();
        assert!(spacer > last_button);
    }

    #[test]
    fn test_right_alignment_has_leading_spacer_only() {
        let html = render(sample_bar(0).horizontal_alignment(BarHorizontalAlignment::Right));
        assert_eq!(html.matches("multitab__spacer").count(), 1);
        let first_button = html.find("<button").unwrap();
        let spacer = html.find("multitab__spacer").unwrap();
        assert!(spacer < first_button);
    }

    #[test]
    fn test_vertical_bar_uses_vertical_alignment() {
        let html = render(
            sample_bar(0)
                .position(TabBarPosition::Left)
                .vertical_alignment(BarVerticalAlignment::Top),
        );
        assert!(html.contains("multitab__bar--vertical"));
        assert_eq!(html.matches("multitab__spacer").count(), 1);
        let last_button = html.rfind("<button").unwrap();
        let spacer = html.find("multitab__spacer").unwrap();
        assert!(spacer > last_button);
    }

    #[test]
    fn test_divider_rendered_once() {
        let html = render(sample_bar(0));
        assert_eq!(html.matches("multitab__divider").count(), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_selection_panics() {
        render(sample_bar(7));
    }
}
