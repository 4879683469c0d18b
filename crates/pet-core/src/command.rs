//! Care commands issued by the interaction loop
//!
//! The loop picks a command and a target; `Owner::apply` runs it against
//! every matching pet and hands back the lines to show the player.

use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

use crate::consts::*;
use crate::owner::Owner;

/// Errors a care command can report. None of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("You don't have any pets yet!")]
    NoPets,

    #[error("Pet not found: {0}")]
    PetNotFound(String),

    #[error("A pet must have a name.")]
    EmptyName,
}

/// Which pets a command applies to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// The first pet answering to this name
    Named(String),
    /// Every pet the owner has
    All,
}

impl Target {
    /// Word the player types to address every pet
    pub const ALL_KEYWORD: &'static str = "all";

    /// Parse what the player typed. `all` in any case means every pet.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case(Self::ALL_KEYWORD) {
            Target::All
        } else {
            Target::Named(input.to_string())
        }
    }
}

/// A care action with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Command {
    #[strum(serialize = "feed")]
    Feed,
    #[strum(serialize = "play")]
    Play,
    #[strum(serialize = "sleep")]
    Sleep { hours: i32 },
    #[strum(serialize = "heal")]
    Heal,
}

impl Command {
    /// Sleep for the default number of hours
    pub const fn nap() -> Self {
        Command::Sleep { hours: SLEEP_HOURS }
    }

    /// Whether the pet's mood is reported after this command
    const fn reports_mood(&self) -> bool {
        matches!(self, Command::Feed | Command::Play)
    }
}

impl Owner {
    /// Run `command` on the pets selected by `target`
    ///
    /// Returns the description lines in pet order. Feeding and playing also
    /// report each pet's mood afterwards.
    pub fn apply(&mut self, command: Command, target: &Target) -> Result<Vec<String>, CommandError> {
        if self.is_empty() {
            return Err(CommandError::NoPets);
        }

        let pets = match target {
            Target::All => self.pets_mut(),
            Target::Named(name) => {
                let index = self
                    .pets()
                    .iter()
                    .position(|p| p.answers_to(name))
                    .ok_or_else(|| CommandError::PetNotFound(name.clone()))?;
                &mut self.pets_mut()[index..=index]
            }
        };

        let mut lines = Vec::with_capacity(pets.len() * 2);
        for pet in pets {
            let line = match command {
                Command::Feed => pet.feed(FEED_AMOUNT),
                Command::Play => pet.play(PLAY_DURATION),
                Command::Sleep { hours } => pet.sleep(hours),
                Command::Heal => pet.heal(HEAL_AMOUNT),
            };
            lines.push(line);
            if command.reports_mood() {
                lines.push(pet.mood());
            }
        }
        Ok(lines)
    }

    /// Rename the first pet answering to `name`
    pub fn rename_pet(&mut self, name: &str, new_name: &str) -> Result<String, CommandError> {
        if self.is_empty() {
            return Err(CommandError::NoPets);
        }
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(CommandError::EmptyName);
        }
        let pet = self
            .find_mut(name)
            .ok_or_else(|| CommandError::PetNotFound(name.to_string()))?;
        Ok(pet.rename(new_name))
    }
}
