//! Application state management.
//!
//! The Elm Architecture pattern: `State + Message → (State, Command)`.
//! Side effects the page cannot perform itself (opening an external link,
//! smooth-scrolling to an anchor) are returned as [`Command`] values for
//! the host shell to execute.

use serde::{Deserialize, Serialize};

/// Application state trait.
pub trait State: Clone + Serialize + for<'de> Deserialize<'de> + Send + Sync {
    /// Message type for state updates
    type Message: Send;

    /// Update state in response to a message.
    ///
    /// Returns a command describing side effects for the host shell.
    fn update(&mut self, msg: Self::Message) -> Command;
}

/// Side effects requested from the host shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// No side effect
    #[default]
    None,
    /// Execute multiple commands in order
    Batch(Vec<Command>),
    /// Open an external URL in a new context
    OpenUrl {
        /// Absolute URL
        url: String,
    },
    /// Smooth-scroll to an in-page anchor
    ScrollTo {
        /// Anchor id without the leading '#'
        anchor: String,
    },
}

impl Command {
    /// Create a batch of commands, flattening trivial cases.
    #[must_use]
    pub fn batch(commands: impl IntoIterator<Item = Self>) -> Self {
        let mut commands: Vec<Self> = commands
            .into_iter()
            .filter(|c| !matches!(c, Self::None))
            .collect();
        match commands.len() {
            0 => Self::None,
            1 => commands.remove(0),
            _ => Self::Batch(commands),
        }
    }

    /// Whether this is the no-op command.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
