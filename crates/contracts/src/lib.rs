//! Shared, platform-free types for the group showcase page.
//!
//! Everything here compiles and is tested natively; the browser glue lives in
//! the `frontend` crate.

pub mod domain;
pub mod enums;
pub mod shared;

pub use domain::group::{ContentBlock, Group, Groups};
pub use enums::tab_key::TabKey;
pub use shared::error::ContentError;
pub use shared::site::{embedded_site, parse_site, FragmentHistory, LoadedSite, SiteConfig};
pub use shared::tabs::{TabController, TabHost};
