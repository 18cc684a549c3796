use crate::app::tools::PlanBuilder;
use crate::shared::EditorOptions;

/// Aktives Editor-Werkzeug im 2D-Modus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Klicks setzen Grundriss-Punkte
    #[default]
    Draw,
    /// Klick entfernt die nächstgelegene Wand
    DeleteWall,
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Debug, Clone)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Grundriss-Zustandsmaschine (Punktkette)
    pub plan_builder: PlanBuilder,
}

impl Default for EditorToolState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Zeichnen aktiv).
    pub fn new() -> Self {
        Self {
            active_tool: EditorTool::Draw,
            plan_builder: PlanBuilder::new(),
        }
    }

    /// Übernimmt Raster- und Schließ-Werte aus den Optionen.
    pub fn apply_options(&mut self, options: &EditorOptions) {
        self.plan_builder.set_grid_size(options.grid_size);
        self.plan_builder.set_closure_threshold(options.closure_threshold);
    }
}
