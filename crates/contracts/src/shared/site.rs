//! Site configuration and content embedded at build time.
//!
//! The whole page is described by `content/site.json`: a `config` object
//! (labels, messages, URL behaviour) and the ordered `groups` list.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::group::{Group, Groups};
use crate::shared::error::ContentError;

/// Embedded content, edited by hand and compiled into the binary
const EMBEDDED_SITE: &str = include_str!("../../content/site.json");

static SITE: Lazy<Result<LoadedSite, ContentError>> = Lazy::new(|| parse_site(EMBEDDED_SITE));

/// How a selection change is written into the URL fragment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentHistory {
    /// Adds a history entry, so back/forward walks through visited tabs
    #[default]
    Push,
    /// Rewrites the current entry in place
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub subtitle: String,
    /// aria-label of the tab list
    pub tablist_label: String,
    pub footer: String,
    pub print_label: String,
    pub copy_label: String,
    pub copy_success: String,
    pub copy_failure: String,
    /// How long a notification stays visible, in milliseconds
    pub notice_ms: u32,
    pub fragment_history: FragmentHistory,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Groups".to_string(),
            subtitle: String::new(),
            tablist_label: "Groups".to_string(),
            footer: String::new(),
            print_label: "Print/PDF".to_string(),
            copy_label: "Copy link".to_string(),
            copy_success: "Link copied!".to_string(),
            copy_failure: "Could not copy the link".to_string(),
            notice_ms: 2500,
            fragment_history: FragmentHistory::Push,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSite {
    #[serde(default)]
    config: SiteConfig,
    groups: Vec<Group>,
}

/// Parsed and validated page content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSite {
    pub config: SiteConfig,
    pub groups: Groups,
}

/// Parse a site document. Missing config fields fall back to defaults;
/// the group list must be non-empty with unique, non-blank ids.
pub fn parse_site(json: &str) -> Result<LoadedSite, ContentError> {
    let raw: RawSite = serde_json::from_str(json)?;
    let groups = Groups::new(raw.groups)?;
    log::debug!("site content loaded: {} groups", groups.len());
    Ok(LoadedSite {
        config: raw.config,
        groups,
    })
}

/// The content compiled into this build, parsed once on first access.
pub fn embedded_site() -> Result<&'static LoadedSite, ContentError> {
    Lazy::force(&SITE).as_ref().map_err(Clone::clone)
}
