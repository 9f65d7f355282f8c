pub mod clipboard;
pub mod location;
pub mod notice;
pub mod print;
