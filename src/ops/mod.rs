pub mod habit_ops;
pub mod item_ops;
