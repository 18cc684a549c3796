use crate::core::WallVolume;
use crate::shared::PlanMode;
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktiver Ansichtsmodus (2D-Zeichnen / 3D-Ansicht)
    pub mode: PlanMode,
    /// Letzte rohe Cursor-Position in Grundriss-Koordinaten
    pub cursor_world: Option<Vec2>,
    /// Extrudierte Wände; nur im 3D-Modus befüllt
    pub volumes: Vec<WallVolume>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (2D, kein Cursor).
    pub fn new() -> Self {
        Self::default()
    }
}
