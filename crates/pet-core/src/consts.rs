//! Game constants

/// Lowest value any bounded stat can hold
pub const STAT_MIN: i32 = 0;

/// Highest value any bounded stat can hold
pub const STAT_MAX: i32 = 100;

/// Starting hunger for a newly adopted pet (0 = full, 100 = starving)
pub const DEFAULT_HUNGER: i32 = 50;
pub const DEFAULT_HAPPINESS: i32 = 50;
pub const DEFAULT_HEALTH: i32 = 100;
pub const DEFAULT_ENERGY: i32 = 70;
pub const DEFAULT_AGE_DAYS: u32 = 0;

/// Default food amount for feeding
pub const FEED_AMOUNT: i32 = 15;

/// Default play session length
pub const PLAY_DURATION: i32 = 10;

/// Default nap length in hours
pub const SLEEP_HOURS: i32 = 3;

/// Default health restored by a vet visit
pub const HEAL_AMOUNT: i32 = 20;

/// Happiness bonus from every vet visit
pub const VET_HAPPINESS_BONUS: i32 = 5;

/// Below this energy a pet refuses to play
pub const MIN_PLAY_ENERGY: i32 = 15;

/// Hunger above this hurts health on a tick
pub const STARVING_HUNGER: i32 = 90;

/// Energy below this hurts health on a tick
pub const EXHAUSTED_ENERGY: i32 = 10;

/// Number of turns that make up one in-game day
pub const TURNS_PER_DAY: u64 = 24;

/// Owner name used when none is known
pub const DEFAULT_OWNER_NAME: &str = "Player";

/// Species used when the player doesn't give one
pub const DEFAULT_SPECIES: &str = "pet";
