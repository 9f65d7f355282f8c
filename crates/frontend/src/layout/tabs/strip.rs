use crate::layout::global_context::AppGlobalContext;
use contracts::Group;
use leptos::prelude::*;

/// Кнопки вкладок.
///
/// Roving tabindex: only the selected tab is in the Tab order; arrows,
/// Home and End move between tabs. Other keys keep their default action.
#[component]
pub fn TabStrip(groups: Vec<Group>, label: String) -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ctx.handle_key(&ev.key()) {
            ev.prevent_default();
        }
    };

    let tabs = groups
        .into_iter()
        .enumerate()
        .map(|(index, group)| {
            let is_selected = move || ctx.selected.get() == index;
            let tab_id = group.tab_dom_id();
            let panel_id = group.panel_dom_id();

            view! {
                <button
                    type="button"
                    role="tab"
                    id=tab_id
                    class="tabs__tab"
                    class:tabs__tab--active=is_selected
                    aria-selected=move || if is_selected() { "true" } else { "false" }
                    aria-controls=panel_id
                    tabindex=move || if is_selected() { "0" } else { "-1" }
                    on:click=move |_| ctx.select(index)
                >
                    {group.title}
                </button>
            }
        })
        .collect_view();

    view! {
        <div role="tablist" aria-label=label class="tabs__list" on:keydown=on_keydown>
            {tabs}
        </div>
    }
}
