//! Abbruch-Signal für langlaufende Capture-/Auflösungs-Flows.
//!
//! Der Kern ist single-threaded event-getrieben; das Signal existiert, damit
//! ein später gestarteter User-Flow einen noch laufenden asynchronen Flow
//! entwerten kann. Konvention: vor jedem Commit in einen Store wird
//! `aborted()` geprüft, ein abgebrochener Flow hinterlässt keinen
//! Teil-Commit und ist für den Nutzer ein stiller No-op.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Klonbares Abbruch-Signal (geteiltes Flag).
#[derive(Debug, Clone, Default)]
pub struct AbortSignal(Arc<AtomicBool>);

impl AbortSignal {
    /// Erstellt ein frisches, nicht abgebrochenes Signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Markiert das Signal als abgebrochen. Idempotent.
    pub fn abort(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// `true` sobald `abort()` gerufen wurde.
    pub fn aborted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
