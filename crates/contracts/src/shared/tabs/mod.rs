//! Tab selection state machine
//!
//! Содержит:
//! - `controller` - `TabController`: выбранный индекс, синхронизация с фрагментом URL, клавиатура
//! - `fragment` - чистые функции сопоставления фрагмента URL и групп

pub mod controller;
pub mod fragment;

pub use controller::{TabController, TabHost};
pub use fragment::{fragment_id, initial_index, share_url};
