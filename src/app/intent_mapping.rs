//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::EditorTool;
use super::{AppCommand, AppIntent, AppState};
use crate::core::PlanPhase;
use crate::shared::PlanMode;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerClicked { world_pos } => map_click(state, world_pos),
        AppIntent::PointerMoved { world_pos } => vec![AppCommand::UpdateCursor {
            world_pos: Some(world_pos),
        }],
        AppIntent::PointerLeft => vec![AppCommand::UpdateCursor { world_pos: None }],
        AppIntent::ResetRequested => vec![AppCommand::ResetPlan],
        AppIntent::SetPlanModeRequested { mode } => vec![AppCommand::SetPlanMode { mode }],
        AppIntent::TogglePlanModeRequested => vec![AppCommand::SetPlanMode {
            mode: state.view.mode.toggled(),
        }],
        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::DeleteWallRequested { segment } => vec![AppCommand::RemoveWall { segment }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

/// Klicks wirken nur im 2D-Modus; nach dem Schließen ist Zeichnen gesperrt.
fn map_click(state: &AppState, world_pos: glam::Vec2) -> Vec<AppCommand> {
    if state.view.mode != PlanMode::Draw2D {
        log::debug!("Klick im 3D-Modus ignoriert");
        return Vec::new();
    }

    match state.editor.active_tool {
        EditorTool::Draw if state.phase() == PlanPhase::Closed => {
            log::debug!("Raum geschlossen, Zeichen-Klick ignoriert");
            Vec::new()
        }
        EditorTool::Draw => vec![AppCommand::AddPlanPoint { world_pos }],
        EditorTool::DeleteWall => vec![AppCommand::DeleteWallAt {
            world_pos,
            max_distance: state.options.wall_pick_radius,
        }],
    }
}
