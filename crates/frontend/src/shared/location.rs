//! Browser side of the tab controller: `window.location` and DOM focus.

use contracts::{FragmentHistory, Group, TabHost};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlElement};

/// `TabHost` backed by the real page.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost {
    history: FragmentHistory,
}

impl BrowserHost {
    pub fn new(history: FragmentHistory) -> Self {
        Self { history }
    }
}

impl TabHost for BrowserHost {
    fn fragment(&self) -> String {
        current_fragment()
    }

    fn set_fragment(&mut self, fragment: &str) {
        let Some(w) = window() else {
            return;
        };
        match self.history {
            FragmentHistory::Push => {
                let _ = w.location().set_hash(fragment);
            }
            FragmentHistory::Replace => {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(fragment));
                }
            }
        }
    }

    fn focus_tab(&mut self, _index: usize, group: &Group) {
        let element = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&group.tab_dom_id()))
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());
        if let Some(element) = element {
            let _ = element.focus();
        }
    }
}

/// Current `location.hash`, percent-decoded. Empty when there is no window.
pub fn current_fragment() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .map(|raw| decode_fragment(&raw))
        .unwrap_or_default()
}

/// Browsers report non-ASCII fragments percent-encoded; ids are matched decoded.
pub fn decode_fragment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// `origin` and `pathname` of the current page.
pub fn page_origin_and_path() -> Option<(String, String)> {
    let location = window()?.location();
    let origin = location.origin().ok()?;
    let pathname = location.pathname().ok()?;
    Some((origin, pathname))
}
