//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_sync;
pub mod state;

pub use command_log::CommandLog;
pub use controller::ExplorerController;
pub use events::{ExplorerCommand, ExplorerIntent};
pub use render_sync::push as push_render_state;
pub use state::{
    BasketMode, DefaultVisibility, ExplorerGlobals, ExplorerState, HighlightCollection, ViewState,
};
