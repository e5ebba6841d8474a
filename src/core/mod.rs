//! Core-Domänentypen: IdSet, Farben, Objekt-Gruppen, Kamera, Clipping, Messung.

pub mod camera;
pub mod clipping;
pub mod color;
pub mod grid;
pub mod id_set;
pub mod measurement;
pub mod object_group;

pub use camera::{CameraState, OrthoParams, PinholeCamera};
pub use clipping::{ClippingMode, ClippingPlanes, ClippingState, ClippingVolume};
pub use color::{rgb_to_vec, vec_to_rgb, Rgb, VecRGB, VecRGBA};
pub use grid::GridSettings;
pub use id_set::{IdSet, ObjectId};
pub use measurement::MeasureEntity;
pub use object_group::{
    GroupStatus, GroupUpdate, ObjectGroup, SearchPattern, SYSTEM_GROUPING_PREFIX,
    TEMPORARY_GROUPING_PREFIX,
};
