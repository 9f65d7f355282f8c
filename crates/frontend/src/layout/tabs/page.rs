//! TabPanel component - панель содержимого одной группы
//!
//! Отвечает за:
//! - Показ/скрытие панели в зависимости от выбранной вкладки
//! - Логирование создания/уничтожения для отладки
//! - Вызов registry для рендера содержимого

use super::registry::render_group_content;
use crate::layout::global_context::AppGlobalContext;
use contracts::Group;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn TabPanel(index: usize, group: Group) -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_active = move || ctx.selected.get() == index;

    log!("TabPanel created: '{}'", group.id);
    let id_for_cleanup = group.id.clone();
    on_cleanup(move || {
        log!("TabPanel destroyed: '{}'", id_for_cleanup);
    });

    let panel_id = group.panel_dom_id();
    let tab_id = group.tab_dom_id();
    let content = render_group_content(&group.content);
    let lead = group
        .lead
        .map(|lead| view! { <p class="tabs__panel-lead">{lead}</p> });

    view! {
        <section
            role="tabpanel"
            id=panel_id
            class="tabs__panel"
            aria-labelledby=tab_id
            hidden=move || !is_active()
            data-group-id=group.id
        >
            <header class="tabs__panel-header">
                <h2 class="tabs__panel-title">{group.title}</h2>
                {lead}
            </header>
            <div class="tabs__panel-body">{content}</div>
        </section>
    }
}
