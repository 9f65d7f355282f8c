pub mod tab_key;
