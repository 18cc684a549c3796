//! State-Definitionen und Konstruktor für den PlanBuilder.

use crate::core::{PlanPhase, PlanState};
use crate::shared::{CLOSURE_THRESHOLD, GRID_SIZE};

/// Zustandsmaschine für den gerade gezeichneten Raum.
///
/// Besitzt nur die Punktkette; die Wände gehören dem `SegmentStore`,
/// der bei jedem Klick explizit übergeben wird.
#[derive(Debug, Clone)]
pub struct PlanBuilder {
    /// Punktkette + Geschlossen-Flag
    pub(crate) plan: PlanState,
    /// Raster-Zellgröße (aus EditorOptions)
    pub(crate) grid_size: f32,
    /// Schließ-Abstand zum ersten Punkt (aus EditorOptions)
    pub(crate) closure_threshold: f32,
}

impl PlanBuilder {
    /// Erstellt einen leeren PlanBuilder mit Standardwerten.
    pub fn new() -> Self {
        Self::with_settings(GRID_SIZE, CLOSURE_THRESHOLD)
    }

    /// Erstellt einen leeren PlanBuilder mit expliziten Raster-/Schließ-Werten.
    pub fn with_settings(grid_size: f32, closure_threshold: f32) -> Self {
        Self {
            plan: PlanState::new(),
            grid_size,
            closure_threshold,
        }
    }

    /// Read-only Sicht auf Punktkette und Geschlossen-Flag.
    pub fn state(&self) -> &PlanState {
        &self.plan
    }

    /// Aktuelle Phase (Leer / Offen / Geschlossen).
    pub fn phase(&self) -> PlanPhase {
        self.plan.phase()
    }

    /// Raster-Zellgröße.
    pub fn grid_size(&self) -> f32 {
        self.grid_size
    }

    /// Setzt die Raster-Zellgröße für folgende Klicks.
    pub fn set_grid_size(&mut self, grid_size: f32) {
        self.grid_size = grid_size;
    }

    /// Schließ-Abstand.
    pub fn closure_threshold(&self) -> f32 {
        self.closure_threshold
    }

    /// Setzt den Schließ-Abstand für folgende Klicks.
    pub fn set_closure_threshold(&mut self, threshold: f32) {
        self.closure_threshold = threshold;
    }
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}
