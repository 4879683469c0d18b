//! petcare: Text menu front end for the adopt-a-pet game
//!
//! The session reads from any `BufRead` and writes to any `Write`, so the
//! whole game can be driven from a script in tests.

pub mod app;
pub mod menu;

pub use app::{Session, Settings};
pub use menu::MenuChoice;
