//! Main menu entries

use strum::{EnumIter, IntoEnumIterator};

/// One entry of the main menu, listed in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum MenuChoice {
    Adopt,
    View,
    Feed,
    Play,
    Sleep,
    Vet,
    Rename,
    Release,
    Save,
    Load,
    Quit,
}

impl MenuChoice {
    pub const fn label(&self) -> &'static str {
        match self {
            MenuChoice::Adopt => "Adopt a pet",
            MenuChoice::View => "View your pets",
            MenuChoice::Feed => "Feed a pet (or all)",
            MenuChoice::Play => "Play with a pet (or all)",
            MenuChoice::Sleep => "Put a pet to sleep",
            MenuChoice::Vet => "Take a pet to the vet (heal)",
            MenuChoice::Rename => "Rename a pet",
            MenuChoice::Release => "Release a pet",
            MenuChoice::Save => "Save game",
            MenuChoice::Load => "Load game",
            MenuChoice::Quit => "Quit game",
        }
    }

    /// Menu number shown to the player (1-based)
    pub fn number(&self) -> usize {
        MenuChoice::iter().position(|c| c == *self).unwrap_or(0) + 1
    }

    /// Parse the number the player typed
    pub fn from_input(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        MenuChoice::iter().nth(n.checked_sub(1)?)
    }

    /// The whole menu as printable text
    pub fn render() -> String {
        let mut out = String::from("\n---~~Main Menu~~---");
        for choice in MenuChoice::iter() {
            out.push_str(&format!("\n{}. {}", choice.number(), choice.label()));
        }
        out
    }
}
