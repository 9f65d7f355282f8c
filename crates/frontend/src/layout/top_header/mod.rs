//! TopHeader component - page title bar.
//!
//! Contains:
//! - Page title and subtitle
//! - Print/PDF button
//! - Copy-link button with its notification

use crate::layout::global_context::AppGlobalContext;
use crate::shared::notice::NoticeBanner;
use crate::shared::print::print_page;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = ctx.config();

    let print = move |_| {
        print_page();
    };

    let copy_link = move |_| {
        ctx.copy_share_link();
    };

    view! {
        <header class="top-header">
            <div class="top-header__inner">
                <div class="top-header__brand">
                    <div class="top-header__logo" aria-hidden="true"></div>
                    <div>
                        <h1 class="top-header__title">{config.title}</h1>
                        <p class="top-header__subtitle">{config.subtitle}</p>
                    </div>
                </div>

                <div class="top-header__actions">
                    <button
                        type="button"
                        class="top-header__btn"
                        aria-label=config.print_label.clone()
                        on:click=print
                    >
                        {config.print_label.clone()}
                    </button>
                    <button
                        type="button"
                        class="top-header__btn"
                        aria-label=config.copy_label.clone()
                        on:click=copy_link
                    >
                        {config.copy_label.clone()}
                    </button>
                </div>
            </div>

            <NoticeBanner notice=ctx.notice />
        </header>
    }
}
