//! Builder für Render-Szenen aus dem AppState.
//!
//! Wird einmal pro Frame aufgerufen und liest nur: Vorschau, Labels und
//! Füllfläche sind reine Funktionen des aktuellen Zustands.

use crate::app::AppState;
use crate::core::{PlanPhase, WallSegment, WallVolume};
use crate::shared::{
    DistanceLabel, EditorOptions, PlanMode, PointMarker, PreviewWall, RenderScene,
};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let options = &state.options;
    let walls = state.segments.all().to_vec();
    let phase = state.phase();

    let wall_outlines = walls
        .iter()
        .map(|wall| WallVolume::from_segment(wall, 0.0, options.wall_thickness_2d).footprint())
        .collect();

    let labels = walls.iter().map(|wall| distance_label(wall, options)).collect();

    let preview = match (state.view.mode, state.view.cursor_world) {
        (PlanMode::Draw2D, Some(cursor)) => {
            state
                .editor
                .plan_builder
                .preview(cursor)
                .map(|segment| PreviewWall {
                    label: distance_label(&segment, options),
                    segment,
                })
        }
        _ => None,
    };

    let room_fill = (phase == PlanPhase::Closed).then(|| state.plan().points().to_vec());

    let point_markers = state
        .plan()
        .points()
        .iter()
        .map(|&position| PointMarker {
            position,
            radius: options.point_marker_radius,
        })
        .collect();

    RenderScene {
        mode: state.view.mode,
        phase,
        walls,
        wall_outlines,
        point_markers,
        labels,
        preview,
        room_fill,
        volumes: state.view.volumes.clone(),
        options: options.clone(),
    }
}

fn distance_label(wall: &WallSegment, options: &EditorOptions) -> DistanceLabel {
    DistanceLabel {
        anchor: wall.midpoint(),
        text: options.format_length(wall.length()),
    }
}
