//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konstanten und Utilities, die zwischen `app`, `bookmark` und
//! `engine` geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod abort;
pub mod options;

pub use abort::AbortSignal;
pub use options::{
    FORMS_COMPLETED_COLOR_DEFAULT, FORMS_NEW_COLOR_DEFAULT, FORMS_ONGOING_COLOR_DEFAULT,
    GROUP_COLOR_DEFAULT, GUID_CHUNK_SIZE, GUID_MAX_PARALLEL, GUID_WAVE_YIELD_MS,
    HIGHLIGHT_COLOR_DEFAULT, SECONDARY_HIGHLIGHT_COLOR_DEFAULT, THUMBNAIL_HEIGHT,
};
