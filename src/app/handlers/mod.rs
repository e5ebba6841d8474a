//! Feature-Handler für ExplorerCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod bookmark;
pub mod groups;
pub mod selection;
pub mod view;
