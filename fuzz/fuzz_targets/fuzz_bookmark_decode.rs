//! Fuzzt den Bookmark-JSON-Decoder: beliebige Bytes duerfen nie paniken.
//! Parsbare Dokumente, die sich wieder kodieren lassen, muessen den
//! Roundtrip ueberleben.

#![no_main]

use explorer_scene_state::Bookmark;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(bookmark) = serde_json::from_str::<Bookmark>(text) {
        // Nicht-finite Floats sind in JSON nicht kodierbar, daher kein
        // harter Roundtrip-Zwang auf dem Encode.
        if let Ok(encoded) = serde_json::to_string(&bookmark) {
            serde_json::from_str::<Bookmark>(&encoded).expect("Roundtrip muss parsen");
        }
    }
});
