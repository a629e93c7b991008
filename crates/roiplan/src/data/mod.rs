pub mod config_data;
pub mod docs;
pub mod storage;
