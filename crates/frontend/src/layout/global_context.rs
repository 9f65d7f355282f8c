use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::location::{page_origin_and_path, BrowserHost};
use crate::shared::notice::{Notice, NoticeKind};
use contracts::{Group, LoadedSite, SiteConfig, TabController, TabHost};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Page-wide state shared through context.
///
/// The `TabController` is the only writer of the selection; `selected`
/// mirrors its index so views can react to it.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub selected: RwSignal<usize>,
    pub notice: RwSignal<Option<Notice>>,
    controller: StoredValue<TabController<BrowserHost>>,
    config: StoredValue<SiteConfig>,
    notice_seq: StoredValue<u64>,
}

impl AppGlobalContext {
    pub fn new(site: &LoadedSite) -> Self {
        let host = BrowserHost::new(site.config.fragment_history);
        let controller = TabController::new(site.groups.clone(), host);
        Self {
            selected: RwSignal::new(controller.selected_index()),
            notice: RwSignal::new(None),
            controller: StoredValue::new(controller),
            config: StoredValue::new(site.config.clone()),
            notice_seq: StoredValue::new(0),
        }
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    pub fn groups(&self) -> Vec<Group> {
        self.controller
            .with_value(|c| c.groups().as_slice().to_vec())
    }

    /// Follow back/forward navigation and pasted links.
    pub fn init_fragment_integration(&self) {
        let this = *self;
        let _ = window_event_listener(leptos::ev::hashchange, move |_| {
            this.sync_from_location();
        });
    }

    pub fn sync_from_location(&self) {
        let changed = self
            .controller
            .try_update_value(sync_with_host)
            .unwrap_or(false);
        if changed {
            self.publish();
        }
    }

    /// Click or programmatic selection.
    pub fn select(&self, index: usize) {
        let applied = self
            .controller
            .try_update_value(|c| c.select_by_index(index))
            .unwrap_or(false);
        if applied {
            self.publish();
        }
    }

    /// Returns `true` when the key was a tab navigation key.
    pub fn handle_key(&self, key: &str) -> bool {
        let consumed = self
            .controller
            .try_update_value(|c| c.handle_key(key))
            .unwrap_or(false);
        if consumed {
            self.publish();
        }
        consumed
    }

    pub fn share_url(&self) -> Option<String> {
        let (origin, pathname) = page_origin_and_path()?;
        Some(
            self.controller
                .with_value(|c| c.share_url(&origin, &pathname)),
        )
    }

    pub fn copy_share_link(&self) {
        let Some(url) = self.share_url() else {
            log::warn!("copy link: page location unavailable");
            return;
        };
        log::debug!("copying share link: {}", url);
        let this = *self;
        copy_to_clipboard(&url, move |result| match result {
            Ok(()) => {
                let message = this.config.with_value(|c| c.copy_success.clone());
                this.notify(NoticeKind::Success, message);
            }
            Err(err) => {
                log::warn!("clipboard write failed: {}", err);
                let message = this.config.with_value(|c| c.copy_failure.clone());
                this.notify(NoticeKind::Error, message);
            }
        });
    }

    /// Show a notice; it clears itself after `notice_ms` unless replaced.
    pub fn notify(&self, kind: NoticeKind, message: String) {
        let seq = self.notice_seq.with_value(|s| s + 1);
        self.notice_seq.set_value(seq);
        self.notice.set(Some(Notice { seq, kind, message }));

        let ttl = self.config.with_value(|c| c.notice_ms);
        let notice = self.notice;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(ttl).await;
            let _ = notice.try_update(|current| {
                if current.as_ref().map(|n| n.seq) == Some(seq) {
                    *current = None;
                }
            });
        });
    }

    fn publish(&self) {
        let index = self.controller.with_value(|c| c.selected_index());
        self.selected.set(index);
    }
}

/// Re-read the host's fragment after a `hashchange`. Returns `true` when the
/// selection moved.
fn sync_with_host<H: TabHost>(controller: &mut TabController<H>) -> bool {
    let fragment = controller.host().fragment();
    controller.handle_external_fragment_change(&fragment)
}
