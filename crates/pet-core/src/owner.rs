//! Owner and their pets
//!
//! Pets are kept in adoption order. Lookups are case-insensitive and return
//! the first match; nothing stops two pets sharing a name.

use log::debug;

use crate::consts::TURNS_PER_DAY;
use crate::pet::Pet;

/// The player and the pets they have adopted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    name: String,
    pets: Vec<Pet>,
}

impl Owner {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pets: Vec::new(),
        }
    }

    /// Create an owner that already has pets (used when restoring a save)
    pub fn with_pets(name: impl Into<String>, pets: Vec<Pet>) -> Self {
        Self {
            name: name.into(),
            pets,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn pets_mut(&mut self) -> &mut [Pet] {
        &mut self.pets
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// Add a pet to the end of the list. Always succeeds.
    pub fn adopt(&mut self, pet: Pet) -> String {
        let msg = format!("{} adopted {} the {}!", self.name, pet.name(), pet.species());
        self.pets.push(pet);
        msg
    }

    /// Check if some pet already answers to `name`
    pub fn name_taken(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove the first pet that answers to `name`
    ///
    /// Returns `None` and leaves the list untouched when there is no match.
    pub fn release(&mut self, name: &str) -> Option<Pet> {
        let index = self.position(name)?;
        let pet = self.pets.remove(index);
        debug!("{} released {} (slot {})", self.name, pet.name(), index);
        Some(pet)
    }

    pub fn find(&self, name: &str) -> Option<&Pet> {
        self.pets.iter().find(|p| p.answers_to(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|p| p.answers_to(name))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.pets.iter().position(|p| p.answers_to(name))
    }

    /// Printable list of every pet
    pub fn roster(&self) -> String {
        if self.pets.is_empty() {
            return format!("{} has no pets yet.", self.name);
        }

        let mut out = format!("{}'s pets:", self.name);
        for pet in &self.pets {
            out.push_str("\n - ");
            out.push_str(&pet.status());
        }
        out
    }

    /// Advance every pet by one turn
    ///
    /// `turn` is the caller's running turn count. Each call ticks every pet
    /// once; on every `TURNS_PER_DAY`-th turn the pets also age a day.
    pub fn pass_time(&mut self, turn: u64) {
        let new_day = turn > 0 && turn % TURNS_PER_DAY == 0;
        for pet in &mut self.pets {
            pet.tick(1);
            if new_day {
                pet.age_one_day();
            }
        }
        if new_day {
            debug!("turn {}: a day has passed for {}'s pets", turn, self.name);
        }
    }
}
