pub mod footer;
pub mod global_context;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;
use tabs::TabsContainer;
use top_header::TopHeader;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |   TopHeader (title, print, copy link)    |
/// +------------------------------------------+
/// |   Tab list                               |
/// |   Panel of the selected group            |
/// |   Footer                                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <main class="app-main">
                <TabsContainer />
                <footer::Footer />
            </main>
        </div>
    }
}
