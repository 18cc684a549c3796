//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderern.
//!
//! `app` baut sie, die Renderer konsumieren sie. Jede visuelle Kategorie
//! hat eine eigene Liste; Renderer müssen nichts aus Szenen-Metadaten ableiten.

use super::options::EditorOptions;
use super::PlanMode;
use crate::core::{PlanPhase, WallSegment, WallVolume};
use glam::Vec2;

/// Distanz-Label an einer Wand (Anker in Grundriss-Koordinaten).
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceLabel {
    /// Wand-Mittelpunkt
    pub anchor: Vec2,
    /// Angezeigter Text, z.B. "100 cm"
    pub text: String,
}

/// Marker eines gesetzten Kettenpunkts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMarker {
    /// Position in Grundriss-Koordinaten
    pub position: Vec2,
    /// Darstellungsradius (aus `EditorOptions::point_marker_radius`)
    pub radius: f32,
}

/// Vorschau-Wand vom letzten Kettenpunkt zum Cursor (nicht festgeschrieben).
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewWall {
    /// Vorschau-Segment
    pub segment: WallSegment,
    /// Längen-Label der Vorschau
    pub label: DistanceLabel,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Aktiver Ansichtsmodus
    pub mode: PlanMode,
    /// Phase der Raum-Konstruktion
    pub phase: PlanPhase,
    /// Festgeschriebene Wände in Store-Reihenfolge
    pub walls: Vec<WallSegment>,
    /// Wand-Rechtecke für die 2D-Ansicht (parallel zu `walls`)
    pub wall_outlines: Vec<[Vec2; 4]>,
    /// Ein Marker pro Kettenpunkt
    pub point_markers: Vec<PointMarker>,
    /// Distanz-Labels (parallel zu `walls`)
    pub labels: Vec<DistanceLabel>,
    /// Vorschau-Wand (nur offen, im 2D-Modus und mit Cursor)
    pub preview: Option<PreviewWall>,
    /// Raumfläche, sobald der Raum geschlossen ist
    pub room_fill: Option<Vec<Vec2>>,
    /// Extrudierte Wandkörper (leer im 2D-Modus)
    pub volumes: Vec<WallVolume>,
    /// Laufzeit-Optionen für Größen und Einheiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob Wände zum Rendern vorhanden sind.
    pub fn has_walls(&self) -> bool {
        !self.walls.is_empty()
    }
}
