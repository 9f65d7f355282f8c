use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice--success",
            NoticeKind::Error => "notice--error",
        }
    }
}

/// Short-lived message shown under the header.
///
/// `seq` lets an expiring timer tell whether its notice was already replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            view! {
                <div class=format!("notice {}", n.kind.css_class()) role="status" aria-live="polite">
                    {n.message}
                </div>
            }
        })
    }
}
