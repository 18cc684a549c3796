//! Handler für Optionen und Anwendungssteuerung.

use super::plan::refresh_volumes;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen: PlanBuilder-Werte und ggf. 3D-Körper werden aktualisiert.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.options = options;
    state.editor.apply_options(&state.options);
    refresh_volumes(state);
}

/// Signalisiert dem Host das kontrollierte Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
