//! Handler für Grundriss-Operationen (Punkt setzen, Wand löschen, Reset).

use crate::app::tools::PlanAction;
use crate::app::AppState;
use crate::core::{extrude_with_thickness, WallSegment};
use crate::shared::PlanMode;

/// Übergibt einen Klick an den PlanBuilder.
pub fn add_point(state: &mut AppState, world_pos: glam::Vec2) -> PlanAction {
    state
        .editor
        .plan_builder
        .add_point(world_pos, &mut state.segments)
}

/// Merkt sich die rohe Cursor-Position; die Vorschau entsteht erst beim Frame-Aufbau.
pub fn update_cursor(state: &mut AppState, world_pos: Option<glam::Vec2>) {
    state.view.cursor_world = world_pos;
}

/// Entfernt die Wand unter dem Cursor (Löschen-Werkzeug).
pub fn delete_wall_at(state: &mut AppState, world_pos: glam::Vec2, max_distance: f32) {
    match state.segments.nearest_within(world_pos, max_distance) {
        Some(hit) => remove_wall(state, hit.segment),
        None => log::debug!("Keine Wand innerhalb {max_distance} bei {world_pos}"),
    }
}

/// Entfernt den ersten strukturell gleichen Eintrag; fehlt er, passiert nichts.
pub fn remove_wall(state: &mut AppState, segment: WallSegment) {
    if state.segments.remove_by_identity(&segment) {
        log::info!("Wand {} → {} gelöscht", segment.from, segment.to);
        refresh_volumes(state);
    } else {
        log::debug!("Wand {} → {} nicht gefunden", segment.from, segment.to);
    }
}

/// Verwirft Punktkette, Wände, Cursor und 3D-Körper in einem Schritt.
pub fn reset(state: &mut AppState) {
    state.editor.plan_builder.reset();
    state.segments.clear();
    state.view.cursor_world = None;
    state.view.volumes.clear();
    refresh_volumes(state);
    log::info!("Grundriss zurückgesetzt");
}

/// Baut die 3D-Körper neu auf, sofern die 3D-Ansicht aktiv ist.
pub(crate) fn refresh_volumes(state: &mut AppState) {
    if state.view.mode == PlanMode::View3D {
        state.view.volumes = extrude_with_thickness(
            state.segments.all(),
            state.options.wall_height,
            state.options.wall_thickness_3d,
        );
    }
}
