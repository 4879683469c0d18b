//! Interactive session: prompts, menu dispatch and the turn counter

use std::io::{self, BufRead, Write};

use log::{debug, info};

use pet_core::{
    Command, CommandError, DEFAULT_OWNER_NAME, DEFAULT_SPECIES, Owner, Pet, SLEEP_HOURS, Target,
};
use pet_save::SaveStore;

use crate::menu::MenuChoice;

/// How a session is set up
#[derive(Debug, Clone)]
pub struct Settings {
    /// Where saves live
    pub store: SaveStore,
    /// Save automatically on quit
    pub autosave: bool,
    /// Skip the name prompt when set
    pub player_name: Option<String>,
}

/// Parse a sleep length, falling back to the default on blank or bad input
pub fn parse_hours(input: &str) -> i32 {
    input.trim().parse().unwrap_or(SLEEP_HOURS)
}

/// One game session
pub struct Session<R, W> {
    input: R,
    output: W,
    owner: Owner,
    store: SaveStore,
    autosave: bool,
    turn: u64,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Greet the player, ask for their name and offer to load a save
    pub fn start(input: R, output: W, settings: Settings) -> io::Result<Self> {
        let mut session = Self {
            input,
            output,
            owner: Owner::new(DEFAULT_OWNER_NAME),
            store: settings.store,
            autosave: settings.autosave,
            turn: 0,
        };

        session.say("Welcome to Adopt-a-Pet!")?;

        let player_name = match settings.player_name {
            Some(name) => name,
            None => session.prompt("What is your name? ")?.unwrap_or_default(),
        };
        let player_name = match player_name.trim() {
            "" => DEFAULT_OWNER_NAME.to_string(),
            name => name.to_string(),
        };
        session.owner = Owner::new(player_name);

        if session.store.exists() {
            let answer = session.prompt("Found a saved game. Load it? (y/n): ")?;
            if answer.is_some_and(|a| a.eq_ignore_ascii_case("y")) {
                session.load()?;
            }
        }

        info!("Session started for {}", session.owner.name());
        Ok(session)
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Run the menu loop until the player quits or input runs out
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.turn += 1;
            self.owner.pass_time(self.turn);

            self.say(&MenuChoice::render())?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                debug!("Input closed, quitting");
                self.quit()?;
                return Ok(());
            };

            match MenuChoice::from_input(&choice) {
                Some(MenuChoice::Adopt) => self.adopt()?,
                Some(MenuChoice::View) => {
                    let roster = self.owner.roster();
                    self.say(&roster)?;
                }
                Some(MenuChoice::Feed) => {
                    self.care(
                        "Which pet do you want to feed? (name or 'all'): ",
                        |_| Ok(Command::Feed),
                    )?;
                }
                Some(MenuChoice::Play) => {
                    self.care(
                        "Which pet do you want to play with? (name or 'all'): ",
                        |_| Ok(Command::Play),
                    )?;
                }
                Some(MenuChoice::Sleep) => {
                    self.care(
                        "Which pet do you want to put to sleep? (name or 'all'): ",
                        |session| {
                            let hours = session
                                .prompt("How many hours should they sleep? (default 3): ")?
                                .map(|h| parse_hours(&h))
                                .unwrap_or(SLEEP_HOURS);
                            Ok(Command::Sleep { hours })
                        },
                    )?;
                }
                Some(MenuChoice::Vet) => {
                    self.care(
                        "Which pet to take to the vet? (name or 'all'): ",
                        |_| Ok(Command::Heal),
                    )?;
                }
                Some(MenuChoice::Rename) => self.rename()?,
                Some(MenuChoice::Release) => self.release()?,
                Some(MenuChoice::Save) => self.save()?,
                Some(MenuChoice::Load) => self.load()?,
                Some(MenuChoice::Quit) => {
                    self.quit()?;
                    return Ok(());
                }
                None => self.say("Invalid choice, please try again.")?,
            }
        }
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Print `text` and read one line. `None` when input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask which pet(s) to act on
    ///
    /// Reports and returns `None` when there are no pets or no match.
    fn ask_target(&mut self, text: &str) -> io::Result<Option<Target>> {
        if self.owner.is_empty() {
            self.say(&CommandError::NoPets.to_string())?;
            return Ok(None);
        }
        let Some(answer) = self.prompt(text)? else {
            return Ok(None);
        };
        let target = Target::parse(&answer);
        if let Target::Named(name) = &target {
            if self.owner.find(name).is_none() {
                self.say(&CommandError::PetNotFound(name.clone()).to_string())?;
                return Ok(None);
            }
        }
        Ok(Some(target))
    }

    /// Pick a target, build the command and run it
    fn care(
        &mut self,
        text: &str,
        build: impl FnOnce(&mut Self) -> io::Result<Command>,
    ) -> io::Result<()> {
        let Some(target) = self.ask_target(text)? else {
            return Ok(());
        };
        let command = build(self)?;

        debug!("turn {}: {} {:?}", self.turn, command, target);
        match self.owner.apply(command, &target) {
            Ok(lines) => {
                for line in lines {
                    self.say(&line)?;
                }
            }
            Err(e) => self.say(&e.to_string())?,
        }
        Ok(())
    }

    fn adopt(&mut self) -> io::Result<()> {
        let name = self
            .prompt("Enter a name for your new pet: ")?
            .unwrap_or_default();
        if name.is_empty() {
            return self.say(&CommandError::EmptyName.to_string());
        }

        let species = match self
            .prompt("What species is your pet? (dog, cat, rabbit, etc.): ")?
            .unwrap_or_default()
        {
            s if s.is_empty() => DEFAULT_SPECIES.to_string(),
            s => s,
        };

        if self.owner.name_taken(&name) {
            self.say(&format!(
                "You already have a pet called {}. Commands will pick the first one.",
                name
            ))?;
        }
        let msg = self.owner.adopt(Pet::new(name, species));
        self.say(&msg)
    }

    fn rename(&mut self) -> io::Result<()> {
        let Some(target) = self.ask_target("Which pet do you want to rename? (name): ")? else {
            return Ok(());
        };
        let Target::Named(name) = target else {
            return self.say("You can only rename one pet at a time.");
        };

        let current = self
            .owner
            .find(&name)
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| name.clone());
        let new_name = self
            .prompt(&format!("What should {}'s new name be? ", current))?
            .unwrap_or_default();
        if new_name.is_empty() {
            return Ok(());
        }

        match self.owner.rename_pet(&name, &new_name) {
            Ok(msg) => self.say(&msg),
            Err(e) => self.say(&e.to_string()),
        }
    }

    fn release(&mut self) -> io::Result<()> {
        let name = self
            .prompt("Which pet do you want to release? ")?
            .unwrap_or_default();
        if name.is_empty() {
            return Ok(());
        }

        match self.owner.release(&name) {
            Some(pet) => {
                let msg = format!("{} released {}.", self.owner.name(), pet.name());
                self.say(&msg)
            }
            None => self.say("Pet not found."),
        }
    }

    fn save(&mut self) -> io::Result<()> {
        match self.store.save(&self.owner) {
            Ok(()) => {
                let msg = format!("Game saved to {}.", self.store.path().display());
                self.say(&msg)
            }
            Err(e) => self.say(&format!("Failed to save: {}", e)),
        }
    }

    /// Replace the current owner with the saved one, if a save can be read
    fn load(&mut self) -> io::Result<()> {
        match self.store.load() {
            Ok(Some(owner)) => {
                let msg = format!(
                    "Loaded game for {} from {}.",
                    owner.name(),
                    self.store.path().display()
                );
                self.owner = owner;
                self.say(&msg)
            }
            Ok(None) => self.say("No save file found."),
            Err(e) => self.say(&format!("Failed to load save file: {}", e)),
        }
    }

    fn quit(&mut self) -> io::Result<()> {
        if self.autosave {
            self.save()?;
        }
        info!("Session ended after {} turns", self.turn);
        self.say("Thanks for playing!")
    }
}
