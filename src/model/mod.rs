pub mod config;
pub mod habit;
pub mod item;

pub use config::*;
pub use habit::*;
pub use item::*;
