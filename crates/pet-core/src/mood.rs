//! Pet mood derived from stat thresholds
//!
//! Moods are never stored. They are recomputed from the current stats.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::pet::Stats;

/// A single mood descriptor
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Mood {
    #[strum(serialize = "very hungry")]
    VeryHungry,
    #[strum(serialize = "hungry")]
    Hungry,
    #[strum(serialize = "sad")]
    Sad,
    #[strum(serialize = "very happy")]
    VeryHappy,
    #[strum(serialize = "exhausted")]
    Exhausted,
    #[strum(serialize = "sick")]
    Sick,
}

/// Ordered list of moods that currently apply
///
/// Displays as a comma separated list, or "content" when nothing applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodReport(Vec<Mood>);

impl MoodReport {
    /// Evaluate the thresholds in display order
    pub fn from_stats(stats: &Stats) -> Self {
        let mut moods = Vec::new();

        if stats.hunger > 80 {
            moods.push(Mood::VeryHungry);
        } else if stats.hunger > 50 {
            moods.push(Mood::Hungry);
        }

        if stats.happiness < 30 {
            moods.push(Mood::Sad);
        } else if stats.happiness > 80 {
            moods.push(Mood::VeryHappy);
        }

        if stats.energy < 20 {
            moods.push(Mood::Exhausted);
        }

        if stats.health < 40 {
            moods.push(Mood::Sick);
        }

        Self(moods)
    }

    pub fn is_content(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, mood: Mood) -> bool {
        self.0.contains(&mood)
    }

    pub fn moods(&self) -> &[Mood] {
        &self.0
    }
}

impl fmt::Display for MoodReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("content");
        }
        for (i, mood) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", mood)?;
        }
        Ok(())
    }
}
