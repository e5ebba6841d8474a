//! Gebatchte ID→GUID-Auflösung gegen die Objekt-Datenbank.
//!
//! Rate-Limiting-Konvention gegen die externe Query-Engine: höchstens
//! `GUID_CHUNK_SIZE` IDs pro Query, höchstens `GUID_MAX_PARALLEL` Chunks
//! pro Welle, zwischen Wellen eine kurze Pause, damit der Render-Loop des
//! Hosts nicht ausgehungert wird. Das Abort-Signal wird vor dem Commit
//! jeder Welle geprüft; ein Abbruch liefert `None` ohne Teilergebnis.

use super::ObjectDb;
use crate::core::ObjectId;
use crate::shared::options::{GUID_CHUNK_SIZE, GUID_MAX_PARALLEL, GUID_WAVE_YIELD_MS};
use crate::shared::AbortSignal;
use std::time::Duration;

/// Löst Objekt-IDs wellenweise zu GUIDs auf.
///
/// Ergebnis-Reihenfolge entspricht der Eingabe. `None` bei Abbruch.
pub fn resolve_guids(
    db: &dyn ObjectDb,
    ids: &[ObjectId],
    abort: &AbortSignal,
) -> anyhow::Result<Option<Vec<(ObjectId, String)>>> {
    let mut resolved = Vec::with_capacity(ids.len());
    let wave_size = GUID_CHUNK_SIZE * GUID_MAX_PARALLEL;

    for (wave_index, wave) in ids.chunks(wave_size).enumerate() {
        if wave_index > 0 {
            std::thread::sleep(Duration::from_millis(GUID_WAVE_YIELD_MS));
        }

        let mut wave_result = Vec::with_capacity(wave.len());
        for chunk in wave.chunks(GUID_CHUNK_SIZE) {
            let guids = db.guids(chunk)?;
            wave_result.extend(chunk.iter().copied().zip(guids));
        }

        // Abbruch vor dem Commit der Welle: kein Teilergebnis nach außen.
        if abort.aborted() {
            log::debug!(
                "GUID-Aufloesung abgebrochen nach {} IDs",
                resolved.len()
            );
            return Ok(None);
        }
        resolved.extend(wave_result);
    }

    if abort.aborted() {
        return Ok(None);
    }
    Ok(Some(resolved))
}
