use leptos::prelude::*;
use multitab::{BarHorizontalAlignment, Tab, TabBar, TabBarPosition, TabBarView};

use crate::icons::icon;

#[component]
pub fn App() -> impl IntoView {
    // The selection index is owned here, outside the widget.
    let selection = RwSignal::new(0);

    let bar = TabBar::new(selection)
        .position(TabBarPosition::Top)
        .horizontal_alignment(BarHorizontalAlignment::Center)
        .on_select(Callback::new(|index: usize| {
            log::info!("tab {index} selected");
        }))
        .tab_with(
            "Inbox",
            || icon("inbox"),
            || {
                view! {
                    <div class="demo-page">
                        <h2>"Inbox"</h2>
                        <p>"Nothing new today."</p>
                    </div>
                }
            },
        )
        .tab_with(
            "Contacts",
            || icon("user"),
            || {
                view! {
                    <div class="demo-page">
                        <h2>"Contacts"</h2>
                        <p>"Your address book lives here."</p>
                    </div>
                }
            },
        )
        .tab_with(
            "Reports",
            || icon("chart"),
            || {
                view! {
                    <div class="demo-page">
                        <h2>"Reports"</h2>
                        <p>"Charts and numbers."</p>
                    </div>
                }
            },
        )
        .tab(
            Tab::new(
                "Settings",
                || icon("settings"),
                || {
                    view! {
                        <div class="demo-page">
                            <h2>"Settings"</h2>
                            <p>"Preferences for the demo."</p>
                        </div>
                    }
                },
            )
            .with_tag("settings"),
        );

    view! {
        <main class="demo-shell">
            <header class="demo-header">
                <h1>"multitab demo"</h1>
                <span class="demo-selection">
                    "selected tab: " {move || selection.get()}
                </span>
            </header>
            <section class="demo-body">
                <TabBarView bar=bar />
            </section>
        </main>
    }
}
