//! Vorschau-Wand ("Geisterwand") vom letzten Kettenpunkt zum Cursor.
//!
//! Sichtbarkeit ist eine reine Funktion des aktuellen Zustands: Es gibt
//! kein Gedächtnis über frühere Frames, daher bleibt nach Reset oder
//! Schließen keine veraltete Vorschau stehen.

use crate::core::{snap_to_grid, PlanPhase, PlanState, WallSegment};
use glam::Vec2;

/// Berechnet die Vorschau-Wand für die aktuelle Cursor-Position.
///
/// `None`, wenn die Kette leer oder der Raum geschlossen ist. Sonst eine
/// Wand vom letzten Kettenpunkt zur eingerasteten Cursor-Position.
pub fn current_preview(plan: &PlanState, cursor_pos: Vec2, grid_size: f32) -> Option<WallSegment> {
    if plan.phase() != PlanPhase::Open {
        return None;
    }
    let last = plan.last_point()?;
    Some(WallSegment::new(last, snap_to_grid(cursor_pos, grid_size)))
}
