//! Pet record and stat rules
//!
//! Every stat except age lives in `STAT_MIN..=STAT_MAX`. Each operation
//! clamps after it mutates, so no sequence of calls can leave a pet out
//! of range.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::mood::MoodReport;

/// The four bounded stats of a pet
///
/// Hunger runs the other way from the rest: 0 is full, 100 is starving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub hunger: i32,
    pub happiness: i32,
    pub health: i32,
    pub energy: i32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            hunger: DEFAULT_HUNGER,
            happiness: DEFAULT_HAPPINESS,
            health: DEFAULT_HEALTH,
            energy: DEFAULT_ENERGY,
        }
    }
}

impl Stats {
    /// Copy of these stats with every value forced into range
    pub fn clamped(self) -> Self {
        Self {
            hunger: clamp_stat(self.hunger),
            happiness: clamp_stat(self.happiness),
            health: clamp_stat(self.health),
            energy: clamp_stat(self.energy),
        }
    }

    /// Check that every value is in range
    pub fn in_range(&self) -> bool {
        [self.hunger, self.happiness, self.health, self.energy]
            .iter()
            .all(|v| (STAT_MIN..=STAT_MAX).contains(v))
    }
}

fn clamp_stat(value: i32) -> i32 {
    value.clamp(STAT_MIN, STAT_MAX)
}

/// Apply a signed change to a stat and clamp the result
fn adjust(value: i32, delta: i32) -> i32 {
    clamp_stat(value.saturating_add(delta))
}

/// One adopted pet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    name: String,
    species: String,
    stats: Stats,
    age_days: u32,
}

impl Pet {
    /// Create a freshly adopted pet with default stats
    pub fn new(name: impl Into<String>, species: impl Into<String>) -> Self {
        Self::restore(name, species, Stats::default(), DEFAULT_AGE_DAYS)
    }

    /// Rebuild a pet from stored values, clamping any stat that is out of range
    pub fn restore(
        name: impl Into<String>,
        species: impl Into<String>,
        stats: Stats,
        age_days: u32,
    ) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            stats: stats.clamped(),
            age_days,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn hunger(&self) -> i32 {
        self.stats.hunger
    }

    pub fn happiness(&self) -> i32 {
        self.stats.happiness
    }

    pub fn health(&self) -> i32 {
        self.stats.health
    }

    pub fn energy(&self) -> i32 {
        self.stats.energy
    }

    pub fn age_days(&self) -> u32 {
        self.age_days
    }

    /// Check if this pet answers to `name` (case-insensitive)
    pub fn answers_to(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Feed the pet. Lowers hunger by `amount`, raises happiness by a third of it.
    pub fn feed(&mut self, amount: i32) -> String {
        let prev_hunger = self.stats.hunger;
        self.stats.hunger = adjust(self.stats.hunger, amount.saturating_neg());
        self.stats.happiness = adjust(self.stats.happiness, amount / 3);
        format!(
            "You fed {}! Hunger: {} -> {}, Happiness: {}",
            self.name, prev_hunger, self.stats.hunger, self.stats.happiness
        )
    }

    /// Play with the pet
    ///
    /// A pet with less than `MIN_PLAY_ENERGY` refuses and nothing changes.
    pub fn play(&mut self, duration: i32) -> String {
        if self.stats.energy < MIN_PLAY_ENERGY {
            return format!("{} is too tired to play. Try sleeping first.", self.name);
        }

        let prev_happy = self.stats.happiness;
        let prev_energy = self.stats.energy;
        // duration / 1.5, truncated
        self.stats.happiness = adjust(self.stats.happiness, duration.saturating_mul(2) / 3);
        self.stats.hunger = adjust(self.stats.hunger, duration / 2);
        self.stats.energy = adjust(self.stats.energy, (duration / 2).saturating_neg());
        format!(
            "You played with {}! Happiness: {} -> {}, Energy: {} -> {}",
            self.name, prev_happy, self.stats.happiness, prev_energy, self.stats.energy
        )
    }

    /// Let the pet sleep. Restores 10 energy and costs 2 hunger per hour.
    pub fn sleep(&mut self, hours: i32) -> String {
        let prev_energy = self.stats.energy;
        self.stats.energy = adjust(self.stats.energy, hours.saturating_mul(10));
        self.stats.hunger = adjust(self.stats.hunger, hours.saturating_mul(2));
        format!(
            "{} slept for {} hours. Energy: {} -> {}",
            self.name, hours, prev_energy, self.stats.energy
        )
    }

    /// Take the pet to the vet
    pub fn heal(&mut self, amount: i32) -> String {
        let prev_health = self.stats.health;
        self.stats.health = adjust(self.stats.health, amount);
        self.stats.happiness = adjust(self.stats.happiness, VET_HAPPINESS_BONUS);
        format!(
            "You took {} to the vet. Health: {} -> {}",
            self.name, prev_health, self.stats.health
        )
    }

    pub fn age_one_day(&mut self) {
        self.age_days = self.age_days.saturating_add(1);
    }

    /// Give the pet a new name. Uniqueness among siblings is not checked here.
    pub fn rename(&mut self, new_name: impl Into<String>) -> String {
        let old = std::mem::replace(&mut self.name, new_name.into());
        format!("{} has been renamed to {}.", old, self.name)
    }

    /// Apply `time_units` of decay
    ///
    /// Health only drops when the pet is starving or exhausted after the
    /// decay has been applied.
    pub fn tick(&mut self, time_units: i32) {
        self.stats.hunger = adjust(self.stats.hunger, time_units.saturating_mul(3));
        self.stats.happiness = adjust(self.stats.happiness, time_units.saturating_mul(-2));
        self.stats.energy = adjust(self.stats.energy, time_units.saturating_mul(-3));

        if self.stats.hunger > STARVING_HUNGER || self.stats.energy < EXHAUSTED_ENERGY {
            self.stats.health = adjust(self.stats.health, time_units.saturating_mul(-2));
        }
    }

    /// Current mood descriptors, in display order
    pub fn moods(&self) -> MoodReport {
        MoodReport::from_stats(&self.stats)
    }

    /// Mood as a sentence, e.g. "Rex is hungry, sad."
    pub fn mood(&self) -> String {
        let report = self.moods();
        if report.is_content() {
            format!("{} seems content.", self.name)
        } else {
            format!("{} is {}.", self.name, report)
        }
    }

    /// One-line status summary
    pub fn status(&self) -> String {
        format!(
            "{} ({}) | Age: {}d | Hunger: {} | Happiness: {} | Energy: {} | Health: {}",
            self.name,
            self.species,
            self.age_days,
            self.stats.hunger,
            self.stats.happiness,
            self.stats.energy,
            self.stats.health
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet_with(hunger: i32, happiness: i32, health: i32, energy: i32) -> Pet {
        Pet::restore(
            "Rex",
            "dog",
            Stats {
                hunger,
                happiness,
                health,
                energy,
            },
            0,
        )
    }

    #[test]
    fn test_new_pet_defaults() {
        let pet = Pet::new("Rex", "dog");
        assert_eq!(pet.hunger(), 50);
        assert_eq!(pet.happiness(), 50);
        assert_eq!(pet.health(), 100);
        assert_eq!(pet.energy(), 70);
        assert_eq!(pet.age_days(), 0);
    }

    #[test]
    fn test_restore_clamps() {
        let pet = pet_with(150, -20, 300, 101);
        assert_eq!(pet.hunger(), 100);
        assert_eq!(pet.happiness(), 0);
        assert_eq!(pet.health(), 100);
        assert_eq!(pet.energy(), 100);
    }

    #[test]
    fn test_feed() {
        let mut pet = Pet::new("Rex", "dog");
        let msg = pet.feed(FEED_AMOUNT);
        assert_eq!(pet.hunger(), 35);
        assert_eq!(pet.happiness(), 55);
        assert_eq!(msg, "You fed Rex! Hunger: 50 -> 35, Happiness: 55");
    }

    #[test]
    fn test_feed_never_below_zero() {
        let mut pet = pet_with(5, 98, 100, 70);
        pet.feed(FEED_AMOUNT);
        assert_eq!(pet.hunger(), 0);
        assert_eq!(pet.happiness(), 100);
    }

    #[test]
    fn test_play_too_tired() {
        let mut pet = pet_with(50, 50, 100, 14);
        let before = pet.clone();
        let msg = pet.play(PLAY_DURATION);
        assert_eq!(pet, before);
        assert!(msg.contains("too tired"));
    }

    #[test]
    fn test_play() {
        let mut pet = Pet::new("Rex", "dog");
        pet.play(PLAY_DURATION);
        assert_eq!(pet.happiness(), 56);
        assert_eq!(pet.hunger(), 55);
        assert_eq!(pet.energy(), 65);
    }

    #[test]
    fn test_play_at_threshold() {
        let mut pet = pet_with(50, 50, 100, 15);
        pet.play(PLAY_DURATION);
        assert_eq!(pet.energy(), 10);
    }

    #[test]
    fn test_sleep() {
        let mut pet = Pet::new("Rex", "dog");
        let msg = pet.sleep(SLEEP_HOURS);
        assert_eq!(pet.energy(), 100);
        assert_eq!(pet.hunger(), 56);
        assert_eq!(msg, "Rex slept for 3 hours. Energy: 70 -> 100");
    }

    #[test]
    fn test_sleep_huge_hours() {
        let mut pet = Pet::new("Rex", "dog");
        pet.sleep(i32::MAX);
        assert_eq!(pet.energy(), 100);
        assert_eq!(pet.hunger(), 100);
    }

    #[test]
    fn test_heal() {
        let mut pet = pet_with(50, 50, 30, 70);
        pet.heal(HEAL_AMOUNT);
        assert_eq!(pet.health(), 50);
        assert_eq!(pet.happiness(), 55);

        // No illness needed
        let mut healthy = Pet::new("Rex", "dog");
        healthy.heal(HEAL_AMOUNT);
        assert_eq!(healthy.health(), 100);
        assert_eq!(healthy.happiness(), 55);
    }

    #[test]
    fn test_rename() {
        let mut pet = Pet::new("Rex", "dog");
        let msg = pet.rename("Max");
        assert_eq!(pet.name(), "Max");
        assert_eq!(msg, "Rex has been renamed to Max.");
    }

    #[test]
    fn test_age_one_day() {
        let mut pet = Pet::new("Rex", "dog");
        pet.age_one_day();
        pet.age_one_day();
        assert_eq!(pet.age_days(), 2);
    }

    #[test]
    fn test_tick_decay() {
        let mut pet = Pet::new("Rex", "dog");
        pet.tick(1);
        assert_eq!(pet.hunger(), 53);
        assert_eq!(pet.happiness(), 48);
        assert_eq!(pet.energy(), 67);
        assert_eq!(pet.health(), 100);
    }

    #[test]
    fn test_tick_starvation() {
        let mut pet = pet_with(0, 50, 100, 100);
        for _ in 0..34 {
            pet.tick(1);
        }
        assert_eq!(pet.hunger(), 100);

        let health = pet.health();
        pet.tick(1);
        assert_eq!(pet.hunger(), 100);
        assert_eq!(pet.health(), health - 2);
    }

    #[test]
    fn test_tick_health_penalty_starts_past_threshold() {
        // 88 -> 91 crosses the threshold within the same tick
        let mut pet = pet_with(88, 50, 100, 100);
        pet.tick(1);
        assert_eq!(pet.health(), 98);

        let mut fed = pet_with(87, 50, 100, 100);
        fed.tick(1);
        assert_eq!(fed.hunger(), 90);
        assert_eq!(fed.health(), 100);
    }

    #[test]
    fn test_tick_exhaustion_penalty() {
        let mut pet = pet_with(0, 50, 100, 12);
        pet.tick(1);
        assert_eq!(pet.energy(), 9);
        assert_eq!(pet.health(), 98);
    }

    #[test]
    fn test_mood_sentence() {
        let pet = pet_with(85, 20, 50, 15);
        assert_eq!(pet.mood(), "Rex is very hungry, sad, exhausted.");

        let content = Pet::new("Rex", "dog");
        assert_eq!(content.mood(), "Rex seems content.");
    }

    #[test]
    fn test_status() {
        let pet = Pet::new("Rex", "dog");
        assert_eq!(
            pet.status(),
            "Rex (dog) | Age: 0d | Hunger: 50 | Happiness: 50 | Energy: 70 | Health: 100"
        );
    }

    #[test]
    fn test_answers_to() {
        let pet = Pet::new("Rex", "dog");
        assert!(pet.answers_to("rex"));
        assert!(pet.answers_to("REX"));
        assert!(!pet.answers_to("Rexy"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Feed(i32),
        Play(i32),
        Sleep(i32),
        Heal(i32),
        Tick(i32),
    }

    fn arb_stat() -> impl Strategy<Value = i32> {
        STAT_MIN..=STAT_MAX
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-50i32..200).prop_map(Op::Feed),
            (-50i32..200).prop_map(Op::Play),
            (-20i32..50).prop_map(Op::Sleep),
            (-50i32..200).prop_map(Op::Heal),
            (0i32..10).prop_map(Op::Tick),
        ]
    }

    proptest! {
        #[test]
        fn stats_stay_in_range(
            hunger in arb_stat(),
            happiness in arb_stat(),
            health in arb_stat(),
            energy in arb_stat(),
            ops in proptest::collection::vec(arb_op(), 1..60),
        ) {
            let mut pet = Pet::restore("Rex", "dog", Stats { hunger, happiness, health, energy }, 0);
            for op in ops {
                match op {
                    Op::Feed(n) => { pet.feed(n); }
                    Op::Play(n) => { pet.play(n); }
                    Op::Sleep(n) => { pet.sleep(n); }
                    Op::Heal(n) => { pet.heal(n); }
                    Op::Tick(n) => pet.tick(n),
                }
                prop_assert!(pet.stats().in_range(), "out of range: {:?}", pet.stats());
            }
        }

        #[test]
        fn tired_pets_never_change(
            hunger in arb_stat(),
            happiness in arb_stat(),
            health in arb_stat(),
            energy in STAT_MIN..MIN_PLAY_ENERGY,
            duration in -50i32..200,
        ) {
            let mut pet = Pet::restore("Rex", "dog", Stats { hunger, happiness, health, energy }, 0);
            let before = pet.clone();
            pet.play(duration);
            prop_assert_eq!(pet, before);
        }
    }
}
