//! Lifecycle-Methoden des PlanBuilder: Klick, Vorschau, Reset.

use super::super::{preview, PlanAction};
use super::state::PlanBuilder;
use crate::core::{closes_room, snap_to_grid, PlanPhase, SegmentStore, WallSegment};
use glam::Vec2;

impl PlanBuilder {
    /// Verarbeitet einen Klick in Grundriss-Koordinaten.
    ///
    /// Pro Aufruf entsteht höchstens eine Wand und höchstens ein Kettenpunkt.
    /// Das Schließen erzeugt genau eine Wand (letzter → erster Punkt) und
    /// keinen neuen Punkt. Im geschlossenen Zustand passiert nichts.
    pub fn add_point(&mut self, raw_pos: Vec2, store: &mut SegmentStore) -> PlanAction {
        if self.plan.is_closed() {
            log::debug!("Raum bereits geschlossen, Klick bei {raw_pos} ignoriert");
            return PlanAction::Ignored;
        }

        let snapped = snap_to_grid(raw_pos, self.grid_size);

        let (Some(first), Some(last)) = (self.plan.first_point(), self.plan.last_point()) else {
            self.plan.push_point(snapped);
            log::debug!("Startpunkt gesetzt: {snapped}");
            return PlanAction::Started;
        };

        if closes_room(self.plan.points(), snapped, self.closure_threshold) {
            store.append(WallSegment::new(last, first));
            self.plan.close();
            log::info!(
                "Raum geschlossen: {} Punkte, {} Wände",
                self.plan.points().len(),
                store.len()
            );
            return PlanAction::RoomClosed;
        }

        self.plan.push_point(snapped);
        store.append(WallSegment::new(last, snapped));
        log::debug!("Wand {last} → {snapped} hinzugefügt");
        PlanAction::WallAdded
    }

    /// Vorschau-Wand zur aktuellen Cursor-Position (nicht gespeichert).
    pub fn preview(&self, cursor_pos: Vec2) -> Option<WallSegment> {
        preview::current_preview(&self.plan, cursor_pos, self.grid_size)
    }

    /// Statustext für die Statusleiste.
    pub fn status_text(&self) -> &'static str {
        match self.phase() {
            PlanPhase::Empty => "Startpunkt klicken",
            PlanPhase::Open => "Nächsten Punkt klicken (nahe am Start schließt den Raum)",
            PlanPhase::Closed => "Raum geschlossen, Reset für einen neuen Grundriss",
        }
    }

    /// Verwirft die Punktkette (zurück zu Leer).
    pub fn reset(&mut self) {
        self.plan.clear();
    }
}
