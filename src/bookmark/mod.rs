//! Bookmark-Codec: Capture und Restore konsistenter Zustands-Schnappschüsse.
//!
//! Der schwerste Einzelvertrag des Kerns: ein Bookmark umfasst Kamera,
//! Clipping, Highlight-/Hidden-/Gruppen-Zustand, Basket und Messung und
//! muss beim Restore alle Stores gemeinsam konsistent setzen.

pub mod capture;
pub mod model;
pub mod restore;
pub mod thumbnail;

pub use capture::create_bookmark;
pub use model::{Bookmark, BookmarkBasket, BookmarkFollowPath, BookmarkGroup};
pub use restore::select_bookmark;
