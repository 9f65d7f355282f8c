use log::debug;

use super::fragment::{initial_index, match_fragment, share_url};
use crate::domain::group::{Group, Groups};
use crate::enums::tab_key::TabKey;

/// Side effects the controller needs from its environment.
///
/// In the browser this is `window.location` plus DOM focus; tests use a
/// recording double.
pub trait TabHost {
    /// Current URL fragment, including the leading `#` when present.
    fn fragment(&self) -> String;

    /// Write `fragment` (always `#<id>`) into the URL.
    fn set_fragment(&mut self, fragment: &str);

    /// Move input focus to the tab control of `group` at `index`.
    fn focus_tab(&mut self, index: usize, group: &Group);
}

/// Owns the selected tab and keeps it in step with the URL fragment.
///
/// `selected` is always a valid index into `groups`. After every transition
/// the host's fragment is `#<id>` of the selected group.
#[derive(Debug, Clone)]
pub struct TabController<H> {
    groups: Groups,
    selected: usize,
    host: H,
}

impl<H: TabHost> TabController<H> {
    /// Select the group named by the host's current fragment, or the first one.
    ///
    /// The URL is left untouched on load.
    pub fn new(groups: Groups, host: H) -> Self {
        let fragment = host.fragment();
        let selected = initial_index(&groups, &fragment);
        debug!(
            "tabs initialized: fragment='{}' -> index {} of {}",
            fragment,
            selected,
            groups.len()
        );
        Self {
            groups,
            selected,
            host,
        }
    }

    pub fn groups(&self) -> &Groups {
        &self.groups
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &Group {
        &self.groups.as_slice()[self.selected]
    }

    /// Fragment that mirrors the current selection.
    pub fn fragment(&self) -> String {
        self.selected().fragment()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Deep link to the selected group.
    pub fn share_url(&self, origin: &str, pathname: &str) -> String {
        share_url(origin, pathname, self.selected())
    }

    /// Select tab `index`, write its fragment and focus it.
    ///
    /// Returns `false` (and changes nothing) when `index` is out of range.
    pub fn select_by_index(&mut self, index: usize) -> bool {
        let Some(group) = self.groups.get(index) else {
            debug!(
                "select_by_index({}) ignored: only {} tabs",
                index,
                self.groups.len()
            );
            return false;
        };

        let fragment = group.fragment();
        if self.host.fragment() != fragment {
            self.host.set_fragment(&fragment);
        }
        self.host.focus_tab(index, group);

        if self.selected != index {
            debug!("tab selected: {} -> {} ({})", self.selected, index, group.id);
        }
        self.selected = index;
        true
    }

    /// Apply a navigation key. Returns the newly selected index.
    pub fn handle_tab_key(&mut self, key: TabKey) -> usize {
        let next = key.next_index(self.selected, self.groups.last_index());
        debug!("key {}: {} -> {}", key.as_str(), self.selected, next);
        self.select_by_index(next);
        self.selected
    }

    /// Handle a raw `KeyboardEvent.key`.
    ///
    /// Returns `true` when the key was consumed; for any other key nothing
    /// happens and the caller should leave the browser default alone.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match TabKey::from_key(key) {
            Some(tab_key) => {
                self.handle_tab_key(tab_key);
                true
            }
            None => false,
        }
    }

    /// The URL fragment changed outside the controller (back/forward, pasted link).
    ///
    /// An unknown fragment keeps the current selection, unlike `new`, which
    /// falls back to the first tab. The echo of our own write is a no-op.
    /// Returns `true` when the selection changed.
    pub fn handle_external_fragment_change(&mut self, fragment: &str) -> bool {
        match match_fragment(&self.groups, fragment) {
            Some(index) if index != self.selected => {
                debug!(
                    "fragment '{}' changed selection: {} -> {}",
                    fragment, self.selected, index
                );
                self.selected = index;
                true
            }
            Some(_) => false,
            None => {
                debug!("fragment '{}' matches no tab, selection kept", fragment);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Default, Clone)]
    struct RecordingHost {
        fragment: String,
        writes: Vec<String>,
        focused: Vec<usize>,
    }

    impl RecordingHost {
        fn at(fragment: &str) -> Self {
            Self {
                fragment: fragment.to_string(),
                ..Self::default()
            }
        }
    }

    impl TabHost for RecordingHost {
        fn fragment(&self) -> String {
            self.fragment.clone()
        }

        fn set_fragment(&mut self, fragment: &str) {
            self.fragment = fragment.to_string();
            self.writes.push(fragment.to_string());
        }

        fn focus_tab(&mut self, index: usize, group: &Group) {
            assert_eq!(group.tab_dom_id(), format!("tab-grupo-{}", index + 1));
            self.focused.push(index);
        }
    }

    fn groups(n: usize) -> Groups {
        Groups::new(
            (1..=n)
                .map(|i| Group {
                    id: format!("grupo-{i}"),
                    title: format!("Grupo {i}"),
                    lead: None,
                    content: vec![],
                })
                .collect(),
        )
        .unwrap()
    }

    fn controller(n: usize, fragment: &str) -> TabController<RecordingHost> {
        TabController::new(groups(n), RecordingHost::at(fragment))
    }

    #[test]
    fn test_new_reads_fragment() {
        assert_eq!(controller(8, "#grupo-3").selected_index(), 2);
        assert_eq!(controller(8, "").selected_index(), 0);
        assert_eq!(controller(8, "#unknown").selected_index(), 0);
    }

    #[test]
    fn test_new_does_not_touch_url() {
        let c = controller(8, "");
        assert!(c.host().writes.is_empty());
        assert!(c.host().focused.is_empty());
        assert_eq!(c.fragment(), "#grupo-1");
    }

    #[test]
    fn test_load_last_then_wrap_forward() {
        let mut c = controller(8, "#grupo-8");
        assert_eq!(c.selected_index(), 7);

        assert!(c.handle_key("ArrowRight"));
        assert_eq!(c.selected_index(), 0);
        assert_eq!(c.host().fragment, "#grupo-1");
        assert_eq!(c.host().focused, [0]);
    }

    #[test]
    fn test_select_by_index_syncs_fragment_and_focus() {
        let mut c = controller(8, "");
        assert!(c.select_by_index(4));
        assert_eq!(c.selected_index(), 4);
        assert_eq!(c.selected().id, "grupo-5");
        assert_eq!(c.host().fragment, "#grupo-5");
        assert_eq!(c.host().focused, [4]);
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let mut c = controller(8, "#grupo-2");
        assert!(!c.select_by_index(8));
        assert!(!c.select_by_index(usize::MAX));
        assert_eq!(c.selected_index(), 1);
        assert_eq!(c.host().fragment, "#grupo-2");
        assert!(c.host().writes.is_empty());
        assert!(c.host().focused.is_empty());
    }

    #[test]
    fn test_select_twice_is_idempotent() {
        let mut once = controller(8, "");
        once.select_by_index(3);

        let mut twice = controller(8, "");
        twice.select_by_index(3);
        twice.select_by_index(3);

        assert_eq!(once.selected_index(), twice.selected_index());
        assert_eq!(once.host().fragment, twice.host().fragment);
        assert_eq!(twice.host().writes, ["#grupo-4"]);
    }

    #[test]
    fn test_other_keys_not_consumed() {
        let mut c = controller(8, "#grupo-4");
        for key in ["Enter", "Tab", "ArrowUp", "ArrowDown", "a", "Escape"] {
            assert!(!c.handle_key(key), "{key}");
        }
        assert_eq!(c.selected_index(), 3);
        assert!(c.host().writes.is_empty());
        assert!(c.host().focused.is_empty());
    }

    #[test]
    fn test_home_and_end() {
        let mut c = controller(8, "#grupo-4");
        assert!(c.handle_key("End"));
        assert_eq!(c.selected_index(), 7);
        assert_eq!(c.host().fragment, "#grupo-8");
        assert!(c.handle_key("Home"));
        assert_eq!(c.selected_index(), 0);
        assert_eq!(c.host().fragment, "#grupo-1");
    }

    #[test]
    fn test_arrow_left_wraps_backward() {
        let mut c = controller(8, "");
        assert_eq!(c.handle_tab_key(TabKey::ArrowLeft), 7);
        assert_eq!(c.host().fragment, "#grupo-8");
    }

    #[test]
    fn test_external_fragment_change() {
        let mut c = controller(8, "#grupo-2");

        assert!(c.handle_external_fragment_change("#grupo-6"));
        assert_eq!(c.selected_index(), 5);

        // unknown fragment keeps the selection
        assert!(!c.handle_external_fragment_change("#unknown"));
        assert!(!c.handle_external_fragment_change(""));
        assert_eq!(c.selected_index(), 5);

        // external changes never write the URL or steal focus
        assert!(c.host().writes.is_empty());
        assert!(c.host().focused.is_empty());
    }

    #[test]
    fn test_echo_of_own_write_is_noop() {
        let mut c = controller(8, "");
        c.select_by_index(2);
        let echoed = c.host().fragment.clone();
        assert!(!c.handle_external_fragment_change(&echoed));
        assert_eq!(c.selected_index(), 2);
        assert_eq!(c.host().writes, ["#grupo-3"]);
    }

    #[test]
    fn test_single_group() {
        let mut c = controller(1, "#whatever");
        assert_eq!(c.selected_index(), 0);
        for key in TabKey::all() {
            assert_eq!(c.handle_tab_key(key), 0);
        }
        assert_eq!(c.host().fragment, "#grupo-1");
    }

    #[test]
    fn test_share_url() {
        let mut c = controller(8, "");
        c.select_by_index(6);
        assert_eq!(
            c.share_url("http://localhost:8080", "/"),
            "http://localhost:8080/#grupo-7"
        );
    }

    #[test]
    fn test_keys_use_last_index() {
        let mut c = controller(5, "");
        let last = c.groups().last_index();
        assert_eq!(c.handle_tab_key(TabKey::End), last);
        assert_eq!(c.handle_tab_key(TabKey::ArrowRight), 0);
        assert_eq!(c.handle_tab_key(TabKey::ArrowLeft), last);
    }

    mod log_capture {
        use log::{Level, LevelFilter, Log, Metadata, Record};
        use std::sync::{Mutex, Once};

        static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
        static INIT: Once = Once::new();

        struct Capture;

        impl Log for Capture {
            fn enabled(&self, _: &Metadata) -> bool {
                true
            }

            fn log(&self, record: &Record) {
                RECORDS
                    .lock()
                    .unwrap()
                    .push((record.level(), record.args().to_string()));
            }

            fn flush(&self) {}
        }

        static CAPTURE: Capture = Capture;

        pub fn install() {
            INIT.call_once(|| {
                let _ = log::set_logger(&CAPTURE);
                log::set_max_level(LevelFilter::Trace);
            });
        }

        pub fn levels_of(needle: &str) -> Vec<Level> {
            RECORDS
                .lock()
                .unwrap()
                .iter()
                .filter(|(_, message)| message.contains(needle))
                .map(|(level, _)| *level)
                .collect()
        }
    }

    #[test]
    fn test_out_of_range_logged_at_debug() {
        log_capture::install();
        let mut c = controller(3, "");
        assert!(!c.select_by_index(4242));

        let levels = log_capture::levels_of("select_by_index(4242) ignored");
        assert!(!levels.is_empty());
        assert!(levels.iter().all(|level| *level == log::Level::Debug));
    }

    proptest! {
        #[test]
        fn prop_select_any_valid_index(n in 1usize..20, pick in 0usize..20) {
            let i = pick % n;
            let mut c = controller(n, "");
            prop_assert!(c.select_by_index(i));
            prop_assert_eq!(c.selected_index(), i);
            prop_assert_eq!(c.host().fragment.clone(), format!("#grupo-{}", i + 1));
            prop_assert_eq!(c.fragment(), c.host().fragment.clone());
        }

        #[test]
        fn prop_arrow_right_n_times_is_identity(n in 1usize..20, start in 0usize..20) {
            let start = start % n;
            let mut c = controller(n, &format!("#grupo-{}", start + 1));
            for _ in 0..n {
                c.handle_key("ArrowRight");
            }
            prop_assert_eq!(c.selected_index(), start);
        }

        #[test]
        fn prop_arrow_left_inverts_arrow_right(n in 1usize..20, start in 0usize..20) {
            let start = start % n;
            let mut c = controller(n, &format!("#grupo-{}", start + 1));
            c.handle_key("ArrowRight");
            c.handle_key("ArrowLeft");
            prop_assert_eq!(c.selected_index(), start);
            c.handle_key("ArrowLeft");
            c.handle_key("ArrowRight");
            prop_assert_eq!(c.selected_index(), start);
        }

        #[test]
        fn prop_home_end_ignore_start(n in 1usize..20, start in 0usize..20) {
            let start = start % n;
            let mut c = controller(n, &format!("#grupo-{}", start + 1));
            c.handle_key("End");
            prop_assert_eq!(c.selected_index(), n - 1);
            c.select_by_index(start);
            c.handle_key("Home");
            prop_assert_eq!(c.selected_index(), 0);
        }

        #[test]
        fn prop_out_of_range_never_changes_state(n in 1usize..20, start in 0usize..20, extra in 0usize..100) {
            let start = start % n;
            let mut c = controller(n, &format!("#grupo-{}", start + 1));
            prop_assert!(!c.select_by_index(n + extra));
            prop_assert_eq!(c.selected_index(), start);
        }
    }
}
