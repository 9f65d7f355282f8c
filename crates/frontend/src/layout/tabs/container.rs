use super::{TabPanel, TabStrip};
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Tab list followed by one panel per group.
///
/// All panels are rendered once; selection only toggles `hidden`.
#[component]
pub fn TabsContainer() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let groups = ctx.groups();
    let label = ctx.config().tablist_label;

    let panels = groups
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, group)| view! { <TabPanel index=index group=group /> })
        .collect_view();

    view! {
        <div class="tabs">
            <TabStrip groups=groups label=label />
            {panels}
        </div>
    }
}
