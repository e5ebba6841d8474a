//! Mess-Selektion: angeklickte Messpunkte auf Szene-Objekten.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Ein Messpunkt auf einem Objekt.
///
/// `id` ist normalerweise eine Objekt-ID; aus Legacy-Bookmarks abgeleitete
/// Punkte tragen negative Platzhalter-IDs (-1, -2, index-basiert), weil das
/// alte Format nur nackte Positionen speicherte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureEntity {
    pub id: i32,
    pub pos: Vec3,
}

impl MeasureEntity {
    /// Leitet aus einem Legacy-Messpunkt (nur Position) eine Entity mit
    /// negativem Platzhalter als ID ab.
    pub fn from_legacy_point(index: usize, pos: Vec3) -> Self {
        Self {
            id: -(index as i32 + 1),
            pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_punkte_bekommen_negative_index_ids() {
        let a = MeasureEntity::from_legacy_point(0, Vec3::ZERO);
        let b = MeasureEntity::from_legacy_point(1, Vec3::ONE);

        assert_eq!(a.id, -1);
        assert_eq!(b.id, -2);
    }
}
