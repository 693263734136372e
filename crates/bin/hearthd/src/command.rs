//! Sub-commands understood by `hearthd`.

use std::str::FromStr;

/// What the daemon does once wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Print the registered sensor and actuator kinds.
    Kinds,
    /// Summarise stored devices, sensors and actuators.
    #[default]
    Status,
}

/// An unrecognised sub-command.
#[derive(Debug, thiserror::Error)]
#[error("unknown command {0:?}, expected `kinds` or `status`")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kinds" => Ok(Self::Kinds),
            "status" => Ok(Self::Status),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

impl Command {
    /// Read the command from the first process argument, defaulting to [`Command::Status`].
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCommand`] for anything but `kinds` or `status`.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, UnknownCommand> {
        args.next().map_or(Ok(Self::default()), |arg| arg.parse())
    }
}
