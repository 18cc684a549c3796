//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Alle Mutationen laufen synchron über `handle_command`; der Frame-Aufbau
/// (`build_render_scene`) liest nur.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Grundriss ===
            AppCommand::AddPlanPoint { world_pos } => {
                let action = handlers::plan::add_point(state, world_pos);
                log::debug!("Klick {world_pos}: {action:?}");
            }
            AppCommand::UpdateCursor { world_pos } => {
                handlers::plan::update_cursor(state, world_pos)
            }
            AppCommand::DeleteWallAt {
                world_pos,
                max_distance,
            } => handlers::plan::delete_wall_at(state, world_pos, max_distance),
            AppCommand::RemoveWall { segment } => handlers::plan::remove_wall(state, segment),
            AppCommand::ResetPlan => handlers::plan::reset(state),

            // === Ansicht & Werkzeug ===
            AppCommand::SetPlanMode { mode } => handlers::view::set_plan_mode(state, mode),
            AppCommand::SetEditorTool { tool } => handlers::view::set_editor_tool(state, tool),

            // === Optionen & Anwendungssteuerung ===
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
