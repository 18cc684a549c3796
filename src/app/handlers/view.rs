//! Handler für Ansichtsmodus und Werkzeugwahl.

use super::plan::refresh_volumes;
use crate::app::state::EditorTool;
use crate::app::AppState;
use crate::shared::PlanMode;

/// Wechselt den Ansichtsmodus.
///
/// 3D extrudiert die aktuell festgeschriebenen Wände (auch bei offenem Raum),
/// zurück in 2D werden die Körper verworfen. Der Grundriss bleibt erhalten.
pub fn set_plan_mode(state: &mut AppState, mode: PlanMode) {
    state.view.mode = mode;
    match mode {
        PlanMode::View3D => {
            refresh_volumes(state);
            log::info!("3D-Ansicht: {} Wandkörper", state.view.volumes.len());
        }
        PlanMode::Draw2D => {
            state.view.volumes.clear();
            log::info!("2D-Ansicht");
        }
    }
}

/// Wechselt das Editor-Werkzeug.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    state.editor.active_tool = tool;
    log::debug!("Werkzeug: {tool:?}");
}
