//! Punktkette des gerade gezeichneten Raums.

use glam::Vec2;

/// Mindestanzahl Kettenpunkte, bevor ein Raum geschlossen werden kann.
pub const MIN_POINTS_FOR_CLOSURE: usize = 3;

/// Phase der Raum-Konstruktion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanPhase {
    /// Noch kein Punkt gesetzt
    #[default]
    Empty,
    /// Mindestens ein Punkt, Kette wächst
    Open,
    /// Raum geschlossen (Endzustand bis zum Reset)
    Closed,
}

/// Geordnete Kette der gesetzten Punkte plus Geschlossen-Flag.
///
/// Offen gilt `points.len() == walls + 1`, geschlossen `points.len() == walls`
/// (solange keine Wand nachträglich gelöscht wurde).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanState {
    points: Vec<Vec2>,
    closed: bool,
}

impl PlanState {
    /// Erstellt eine leere Kette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle Kettenpunkte in Klick-Reihenfolge.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Erster Punkt der Kette (Schließ-Ziel).
    pub fn first_point(&self) -> Option<Vec2> {
        self.points.first().copied()
    }

    /// Zuletzt gesetzter Punkt.
    pub fn last_point(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    /// Gibt zurück ob der Raum geschlossen ist.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> PlanPhase {
        if self.closed {
            PlanPhase::Closed
        } else if self.points.is_empty() {
            PlanPhase::Empty
        } else {
            PlanPhase::Open
        }
    }

    pub(crate) fn push_point(&mut self, point: Vec2) {
        self.points.push(point);
    }

    pub(crate) fn close(&mut self) {
        self.closed = true;
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
        self.closed = false;
    }
}

/// Prüft, ob `candidate` die Kette auf ihren ersten Punkt schließt.
///
/// Erfordert mindestens drei Kettenpunkte; der Vergleich ist strikt (`<`).
pub fn closes_room(chain: &[Vec2], candidate: Vec2, threshold: f32) -> bool {
    if chain.len() < MIN_POINTS_FOR_CLOSURE {
        return false;
    }
    chain
        .first()
        .is_some_and(|first| candidate.distance(*first) < threshold)
}
