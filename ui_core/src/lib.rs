pub mod assets;
pub mod constants;
pub mod event;
pub mod host;
pub mod logging;
pub mod storage;
pub mod ui;
