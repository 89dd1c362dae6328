//! tend — a terminal todo list and habit tracker with a pomodoro timer.
//!
//! Layering: `model` holds the serialized data types, `ops` holds pure
//! collection operations (no I/O), `io` persists whole collections as JSON
//! slots in a data directory, and `cli`/`tui` are the two front ends over
//! the same store.

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod tui;
