//! Tab management module
//!
//! Содержит:
//! - `container` - `TabsContainer`: список вкладок + панели всех групп
//! - `strip` - `TabStrip`: кнопки вкладок (role="tablist"), клик и клавиатура
//! - `page` - `TabPanel`: панель группы, скрыта если вкладка не выбрана
//! - `registry` - рендер `ContentBlock` → View (единственное место)

pub mod container;
pub mod page;
pub mod registry;
pub mod strip;

pub use container::TabsContainer;
pub use page::TabPanel;
pub use strip::TabStrip;
