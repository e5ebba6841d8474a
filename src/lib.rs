//! Explorer Scene State Library.
//! Zustandskern des webbasierten BIM/Punktwolken-Explorers: Selektion,
//! Sichtbarkeit, Objekt-Gruppen und Bookmarks, als Library exportiert für
//! Host-Shell, Tests und Wiederverwendung.

pub mod app;
pub mod bookmark;
pub mod core;
pub mod engine;
pub mod shared;

pub use app::{
    BasketMode, CommandLog, DefaultVisibility, ExplorerCommand, ExplorerController,
    ExplorerIntent, ExplorerState, HighlightCollection,
};
pub use bookmark::{create_bookmark, select_bookmark, Bookmark, BookmarkGroup};
pub use core::{
    rgb_to_vec, vec_to_rgb, CameraState, ClippingState, GridSettings, GroupStatus, GroupUpdate,
    IdSet, MeasureEntity, ObjectGroup, ObjectId, OrthoParams, PinholeCamera, Rgb, SearchPattern,
    VecRGB, VecRGBA,
};
pub use engine::{
    resolve_guids, CanvasImage, HighlightTarget, ObjectDb, PathCurve, PathDataSource, RenderEngine,
};
pub use shared::AbortSignal;
