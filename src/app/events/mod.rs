//! ExplorerIntent- und ExplorerCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::ExplorerCommand;
pub use intent::ExplorerIntent;
