//! Extrusion der Wandsegmente zu 3D-Wandkörpern.
//!
//! Reine Funktion ohne eigenen Zustand: Die 3D-Ansicht wird bei jedem
//! Moduswechsel komplett neu aufgebaut statt inkrementell gepatcht.

use super::WallSegment;
use glam::{Vec2, Vec3};

/// Standard-Wandhöhe in Grundriss-Einheiten.
pub const DEFAULT_WALL_HEIGHT: f32 = 250.0;
/// Standard-Wandstärke des 3D-Körpers.
pub const DEFAULT_WALL_THICKNESS: f32 = 10.0;

/// Quader einer extrudierten Wand.
///
/// Die 3D-Szene ist Y-oben; Grundriss-y liegt auf Welt-z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallVolume {
    /// Länge entlang der Wandachse
    pub length: f32,
    /// Ausrichtung im Grundriss (Radiant, atan2)
    pub orientation: f32,
    /// Mittelpunkt im Grundriss
    pub center: Vec2,
    /// Höhe der Wand
    pub height: f32,
    /// Stärke quer zur Wandachse
    pub thickness: f32,
}

impl WallVolume {
    /// Leitet den Wandkörper aus einem Segment ab.
    pub fn from_segment(segment: &WallSegment, height: f32, thickness: f32) -> Self {
        Self {
            length: segment.length(),
            orientation: segment.angle(),
            center: segment.midpoint(),
            height,
            thickness,
        }
    }

    /// Mittelpunkt des Quaders im Y-oben-Weltsystem.
    pub fn world_center(&self) -> Vec3 {
        Vec3::new(self.center.x, self.height * 0.5, self.center.y)
    }

    /// Drehung um die Welt-Y-Achse (Grundriss-y zeigt auf Welt-z, daher negiert).
    pub fn yaw(&self) -> f32 {
        -self.orientation
    }

    /// Grundfläche als Rechteck (gegen den Uhrzeigersinn, ab hinten-rechts).
    pub fn footprint(&self) -> [Vec2; 4] {
        let axis = Vec2::from_angle(self.orientation);
        let half_len = axis * (self.length * 0.5);
        let half_thick = axis.perp() * (self.thickness * 0.5);
        let c = self.center;
        [
            c - half_len - half_thick,
            c + half_len - half_thick,
            c + half_len + half_thick,
            c - half_len + half_thick,
        ]
    }
}

/// Ein Wandkörper pro Segment, Reihenfolge wie im Store.
pub fn extrude(segments: &[WallSegment], wall_height: f32) -> Vec<WallVolume> {
    extrude_with_thickness(segments, wall_height, DEFAULT_WALL_THICKNESS)
}

/// Wie [`extrude`], mit expliziter Wandstärke.
pub fn extrude_with_thickness(
    segments: &[WallSegment],
    wall_height: f32,
    thickness: f32,
) -> Vec<WallVolume> {
    segments
        .iter()
        .map(|segment| WallVolume::from_segment(segment, wall_height, thickness))
        .collect()
}
