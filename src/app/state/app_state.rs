use crate::app::CommandLog;
use crate::core::{PlanPhase, PlanState, SegmentStore};
use crate::shared::EditorOptions;

use super::{EditorToolState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle festgeschriebenen Wände (einzige Quelle für 2D und 3D)
    pub segments: SegmentStore,
    /// View-State
    pub view: ViewState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Raster, Wandmaße, Einheit)
    pub options: EditorOptions,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit vorgegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut editor = EditorToolState::new();
        editor.apply_options(&options);
        Self {
            segments: SegmentStore::new(),
            view: ViewState::new(),
            editor,
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Read-only Sicht auf die Punktkette.
    pub fn plan(&self) -> &PlanState {
        self.editor.plan_builder.state()
    }

    /// Aktuelle Phase der Raum-Konstruktion.
    pub fn phase(&self) -> PlanPhase {
        self.editor.plan_builder.phase()
    }

    /// Gibt die Anzahl der Wände zurück (für UI-Anzeige)
    pub fn wall_count(&self) -> usize {
        self.segments.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
