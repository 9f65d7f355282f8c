use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let text = ctx.config().footer;

    view! {
        <footer data-zone="footer" class="page-footer">
            <p>{text}</p>
        </footer>
    }
}
