//! Gemeinsame Test-Doubles: Mock-Engine und Follow-Path-Quelle.
//!
//! Nicht jede Integration nutzt jedes Double.
#![allow(dead_code)]

use explorer_scene_state::{
    BasketMode, CameraState, CanvasImage, ClippingState, DefaultVisibility, GridSettings,
    HighlightTarget, ObjectId, OrthoParams, PathCurve, PathDataSource, PinholeCamera,
    RenderEngine, VecRGBA,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Zeichnet alle Engine-Aufrufe auf und liefert konfigurierbare Rückgaben.
#[derive(Default)]
pub struct MockEngine {
    pub highlights: Mutex<Vec<(HighlightTarget, Vec<ObjectId>, VecRGBA)>>,
    pub last_hidden: Mutex<Vec<ObjectId>>,
    pub hidden_pushes: AtomicUsize,
    pub last_basket: Mutex<Option<(Vec<ObjectId>, BasketMode)>>,
    pub last_visibility: Mutex<Option<DefaultVisibility>>,
    pub applied_clipping: Mutex<Option<ClippingState>>,
    pub flown_to: Mutex<Option<PinholeCamera>>,
    pub ortho_set: Mutex<Option<OrthoParams>>,
    pub grid_applied: Mutex<Option<GridSettings>>,

    pub camera_response: Mutex<CameraState>,
    pub clipping_response: Mutex<ClippingState>,
    pub grid_response: Mutex<GridSettings>,
    pub canvas_response: Mutex<Option<CanvasImage>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock mit einfarbigem Canvas der gegebenen Größe.
    pub fn with_canvas(width: u32, height: u32) -> Self {
        let engine = Self::default();
        *engine.canvas_response.lock().unwrap() = Some(CanvasImage {
            width,
            height,
            rgba: vec![200; (width * height * 4) as usize],
        });
        engine
    }

    /// Letzter Push für ein Highlight-Ziel.
    pub fn last_highlight(&self, target: HighlightTarget) -> Option<(Vec<ObjectId>, VecRGBA)> {
        self.highlights
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(t, _, _)| *t == target)
            .map(|(_, ids, color)| (ids.clone(), *color))
    }
}

impl RenderEngine for MockEngine {
    fn set_highlight(&self, target: HighlightTarget, ids: &[ObjectId], color: VecRGBA) {
        self.highlights
            .lock()
            .unwrap()
            .push((target, ids.to_vec(), color));
    }

    fn set_hidden(&self, ids: &[ObjectId]) {
        self.hidden_pushes.fetch_add(1, Ordering::Relaxed);
        *self.last_hidden.lock().unwrap() = ids.to_vec();
    }

    fn set_basket(&self, ids: &[ObjectId], mode: BasketMode) {
        *self.last_basket.lock().unwrap() = Some((ids.to_vec(), mode));
    }

    fn set_default_visibility(&self, mode: DefaultVisibility) {
        *self.last_visibility.lock().unwrap() = Some(mode);
    }

    fn fly_to(&self, camera: &PinholeCamera) {
        *self.flown_to.lock().unwrap() = Some(*camera);
    }

    fn set_ortho(&self, params: &OrthoParams) {
        *self.ortho_set.lock().unwrap() = Some(*params);
    }

    fn apply_clipping(&self, clipping: &ClippingState) {
        *self.applied_clipping.lock().unwrap() = Some(clipping.clone());
    }

    fn apply_grid(&self, grid: &GridSettings) {
        *self.grid_applied.lock().unwrap() = Some(grid.clone());
    }

    fn camera(&self) -> CameraState {
        *self.camera_response.lock().unwrap()
    }

    fn clipping(&self) -> ClippingState {
        self.clipping_response.lock().unwrap().clone()
    }

    fn grid(&self) -> GridSettings {
        self.grid_response.lock().unwrap().clone()
    }

    fn canvas_snapshot(&self) -> Option<CanvasImage> {
        self.canvas_response.lock().unwrap().clone()
    }
}

/// Follow-Path-Quelle mit konfigurierbarem Ergebnis.
pub struct MockPathSource {
    pub curve: Option<PathCurve>,
    pub calls: AtomicUsize,
}

impl MockPathSource {
    pub fn with_curve(curve: PathCurve) -> Self {
        Self {
            curve: Some(curve),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            curve: None,
            calls: AtomicUsize::new(0),
        }
    }
}

impl PathDataSource for MockPathSource {
    fn load_curve(&self, path_id: u64) -> anyhow::Result<PathCurve> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.curve
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Pfad {path_id} nicht erreichbar"))
    }
}

/// Initialisiert env_logger einmalig für Integrationstests.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
