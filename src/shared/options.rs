//! Zentrale Konstanten des Explorer-Zustandskerns.
//!
//! Laufzeit-Defaults (Farben, Batch-Größen) liegen hier gebündelt, damit
//! Stores, Bookmark-Codec und Engine-Anbindung dieselben Werte teilen.

use crate::core::VecRGBA;

// ── Highlight-Farben ────────────────────────────────────────────────

/// Standard-Farbe der primären Selektion (RGBA: Rot).
pub const HIGHLIGHT_COLOR_DEFAULT: VecRGBA = [1.0, 0.0, 0.0, 1.0];
/// Standard-Farbe der Sekundär-Highlight-Collection (RGBA: Gelb).
pub const SECONDARY_HIGHLIGHT_COLOR_DEFAULT: VecRGBA = [1.0, 1.0, 0.0, 1.0];
/// Formular-Lifecycle-Collections: neu (Rot), in Arbeit (Orange), fertig (Grün).
pub const FORMS_NEW_COLOR_DEFAULT: VecRGBA = [1.0, 0.1, 0.1, 1.0];
pub const FORMS_ONGOING_COLOR_DEFAULT: VecRGBA = [1.0, 0.6, 0.2, 1.0];
pub const FORMS_COMPLETED_COLOR_DEFAULT: VecRGBA = [0.1, 0.8, 0.2, 1.0];
/// Standard-Farbe neuer Objekt-Gruppen (RGBA: Blau).
pub const GROUP_COLOR_DEFAULT: VecRGBA = [0.0, 0.5, 1.0, 1.0];

// ── Bookmark-Thumbnail ──────────────────────────────────────────────

/// Nominale Thumbnail-Höhe in Pixeln (Breite folgt dem Seitenverhältnis).
pub const THUMBNAIL_HEIGHT: u32 = 350;

// ── ID→GUID-Auflösung (BCF-Interop) ─────────────────────────────────

/// Maximale IDs pro Query gegen die externe Objekt-Datenbank.
pub const GUID_CHUNK_SIZE: usize = 100;
/// Maximale Chunks pro Abfrage-Welle.
pub const GUID_MAX_PARALLEL: usize = 5;
/// Pause zwischen Abfrage-Wellen, damit der Render-Loop des Hosts nicht
/// ausgehungert wird.
pub const GUID_WAVE_YIELD_MS: u64 = 1;
