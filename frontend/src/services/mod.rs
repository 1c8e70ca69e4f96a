pub mod api;
pub mod history;
pub mod logging;
pub mod storage;
