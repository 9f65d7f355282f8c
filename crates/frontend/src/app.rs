use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use contracts::embedded_site;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match embedded_site() {
        Ok(site) => {
            // Provide the AppGlobalContext store to the whole app via context.
            let ctx = AppGlobalContext::new(site);
            ctx.init_fragment_integration();
            provide_context(ctx);

            view! { <Shell /> }.into_any()
        }
        Err(err) => {
            log::error!("embedded site content is invalid: {}", err);
            view! { <ContentErrorPage title=err.user_message() details=err.to_string() /> }
                .into_any()
        }
    }
}

/// Shown instead of the tabs when the embedded content cannot be loaded.
#[component]
fn ContentErrorPage(title: &'static str, details: String) -> impl IntoView {
    view! {
        <main class="app-main">
            <section class="content-error" role="alert">
                <h1>{title}</h1>
                <p class="content-error__details">{details}</p>
            </section>
        </main>
    }
}
