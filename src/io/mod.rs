pub mod config_io;
pub mod log;
pub mod state;
pub mod store;
