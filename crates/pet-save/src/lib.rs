//! pet-save: Save/restore system for the adopt-a-pet game
//!
//! Saves are a single pretty-printed JSON document:
//!
//! ```json
//! {
//!   "owner": "Sam",
//!   "saved_at": "2026-01-02T03:04:05.678901Z",
//!   "pets": [
//!     { "name": "Rex", "species": "dog", "hunger": 50, "happiness": 50,
//!       "health": 100, "energy": 70, "age_days": 0 }
//!   ]
//! }
//! ```
//!
//! Any missing field falls back to the same default a new pet gets.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use pet_core::{
    DEFAULT_AGE_DAYS, DEFAULT_ENERGY, DEFAULT_HAPPINESS, DEFAULT_HEALTH, DEFAULT_HUNGER,
    DEFAULT_OWNER_NAME, DEFAULT_SPECIES, Owner, Pet, Stats,
};

/// File name used inside the default save directory
pub const SAVE_FILE_NAME: &str = "savefile.json";

/// Name given to a saved pet that has none
pub const UNNAMED_PET: &str = "Unnamed";

/// Save/restore errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Save file {path} is corrupted: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SaveError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        SaveError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn default_owner() -> String {
    DEFAULT_OWNER_NAME.to_string()
}

fn default_name() -> String {
    UNNAMED_PET.to_string()
}

fn default_species() -> String {
    DEFAULT_SPECIES.to_string()
}

fn default_hunger() -> i32 {
    DEFAULT_HUNGER
}

fn default_happiness() -> i32 {
    DEFAULT_HAPPINESS
}

fn default_health() -> i32 {
    DEFAULT_HEALTH
}

fn default_energy() -> i32 {
    DEFAULT_ENERGY
}

fn default_age_days() -> u32 {
    DEFAULT_AGE_DAYS
}

/// One pet as it appears in a save file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRecord {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_species")]
    pub species: String,
    #[serde(default = "default_hunger")]
    pub hunger: i32,
    #[serde(default = "default_happiness")]
    pub happiness: i32,
    #[serde(default = "default_health")]
    pub health: i32,
    #[serde(default = "default_energy")]
    pub energy: i32,
    #[serde(default = "default_age_days")]
    pub age_days: u32,
}

impl From<&Pet> for PetRecord {
    fn from(pet: &Pet) -> Self {
        let stats = pet.stats();
        Self {
            name: pet.name().to_string(),
            species: pet.species().to_string(),
            hunger: stats.hunger,
            happiness: stats.happiness,
            health: stats.health,
            energy: stats.energy,
            age_days: pet.age_days(),
        }
    }
}

impl From<PetRecord> for Pet {
    fn from(record: PetRecord) -> Self {
        let stats = Stats {
            hunger: record.hunger,
            happiness: record.happiness,
            health: record.health,
            energy: record.energy,
        };
        Pet::restore(record.name, record.species, stats, record.age_days)
    }
}

/// Complete save file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDocument {
    #[serde(default = "default_owner")]
    pub owner: String,
    /// UTC time of the save, RFC 3339 with a `Z` suffix
    #[serde(default)]
    pub saved_at: String,
    #[serde(default)]
    pub pets: Vec<PetRecord>,
}

impl SaveDocument {
    /// Snapshot an owner, stamped with the current time
    pub fn from_owner(owner: &Owner) -> Self {
        Self {
            owner: owner.name().to_string(),
            saved_at: timestamp(),
            pets: owner.pets().iter().map(PetRecord::from).collect(),
        }
    }

    /// Rebuild the owner. Stats are clamped on the way in.
    pub fn into_owner(self) -> Owner {
        let pets = self.pets.into_iter().map(Pet::from).collect();
        Owner::with_pets(self.owner, pets)
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Current UTC time in the save file format
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Where saves are read from and written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Save file in the platform data directory, or the working directory
    /// when there is none
    pub fn default_location() -> Self {
        let path = match dirs::data_local_dir() {
            Some(mut dir) => {
                dir.push("adoptapet");
                dir.push(SAVE_FILE_NAME);
                dir
            }
            None => PathBuf::from(SAVE_FILE_NAME),
        };
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Check if a save file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write a document, replacing any previous save
    ///
    /// The document goes to a temporary file first and is renamed over the
    /// old save only once it is fully on disk.
    pub fn write(&self, document: &SaveDocument) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SaveError::io(parent, e))?;
        }

        let temp_path = self.temp_path();
        let result = self.write_temp(&temp_path, document).and_then(|()| {
            fs::rename(&temp_path, &self.path).map_err(|e| SaveError::io(&self.path, e))
        });

        if let Err(e) = &result {
            warn!("Save to {} failed: {}", self.path.display(), e);
            fs::remove_file(&temp_path).ok();
        } else {
            debug!("Saved {} pets to {}", document.pets.len(), self.path.display());
        }
        result
    }

    fn write_temp(&self, temp_path: &Path, document: &SaveDocument) -> Result<(), SaveError> {
        let file = File::create(temp_path).map_err(|e| SaveError::io(temp_path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, document)?;
        writer.flush().map_err(|e| SaveError::io(temp_path, e))?;
        let file = writer
            .into_inner()
            .map_err(|e| SaveError::io(temp_path, e.into_error()))?;
        file.sync_all().map_err(|e| SaveError::io(temp_path, e))
    }

    /// Read the save document
    ///
    /// `Ok(None)` means there is no save yet, which is not an error.
    pub fn read(&self) -> Result<Option<SaveDocument>, SaveError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No save file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(SaveError::io(&self.path, e)),
        };

        let reader = BufReader::new(file);
        let document = serde_json::from_reader(reader).map_err(|e| {
            warn!("Could not parse {}: {}", self.path.display(), e);
            SaveError::Parse {
                path: self.path.clone(),
                source: e,
            }
        })?;
        Ok(Some(document))
    }

    /// Save an owner and all of their pets
    pub fn save(&self, owner: &Owner) -> Result<(), SaveError> {
        self.write(&SaveDocument::from_owner(owner))
    }

    /// Load the saved owner, if there is one
    pub fn load(&self) -> Result<Option<Owner>, SaveError> {
        Ok(self.read()?.map(SaveDocument::into_owner))
    }

    /// Delete the save file. Deleting a save that doesn't exist is fine.
    pub fn delete(&self) -> Result<(), SaveError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SaveError::io(&self.path, e)),
        }
    }
}
