//! Repräsentiert eine Wand zwischen zwei Grundriss-Punkten.

use glam::Vec2;

/// Eine gezeichnete Wand (Start- und Endpunkt in Grundriss-Koordinaten, z = 0).
///
/// Die Richtung `from` → `to` bestimmt nur die Ausrichtung der Wand,
/// nicht ihre Identität. Vertauschte Endpunkte werden nicht zusammengeführt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    /// Startpunkt der Wand
    pub from: Vec2,
    /// Endpunkt der Wand
    pub to: Vec2,
}

impl WallSegment {
    /// Erstellt ein neues Wandsegment (Punkte werden kopiert, nicht geteilt).
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    /// Länge der Wand (euklidisch).
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }

    /// Ausrichtung der Wand in Radiant: `atan2(to.y - from.y, to.x - from.x)`.
    pub fn angle(&self) -> f32 {
        let direction = self.to - self.from;
        direction.y.atan2(direction.x)
    }

    /// Mittelpunkt der Wand (immer ein neuer Wert).
    pub fn midpoint(&self) -> Vec2 {
        (self.from + self.to) * 0.5
    }

    /// Null-Länge-Wand (Start == Ende nach dem Snappen).
    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }

    /// Kürzester Abstand eines Punktes zur Wand-Strecke.
    pub fn distance_to_point(&self, pos: Vec2) -> f32 {
        let axis = self.to - self.from;
        let len_sq = axis.length_squared();
        if len_sq < f32::EPSILON {
            return pos.distance(self.from);
        }
        let t = ((pos - self.from).dot(axis) / len_sq).clamp(0.0, 1.0);
        pos.distance(self.from + axis * t)
    }
}
