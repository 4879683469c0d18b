//! pet-core: Stat engine for the adopt-a-pet game
//!
//! This crate contains the pet and owner model with no I/O dependencies.
//! Time only moves when the caller says so, which keeps every rule here
//! deterministic and testable.

pub mod command;
pub mod mood;
pub mod owner;
pub mod pet;

mod consts;

pub use command::{Command, CommandError, Target};
pub use consts::*;
pub use mood::{Mood, MoodReport};
pub use owner::Owner;
pub use pet::{Pet, Stats};
