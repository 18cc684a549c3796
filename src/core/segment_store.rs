//! Geordnete Liste aller gezeichneten Wände.
//!
//! Einzige Quelle für 2D-Zeichnung, Distanz-Labels und 3D-Extrusion.
//! Einträge werden nie verändert, nur angehängt, einzeln gelöscht
//! (Löschen-Werkzeug) oder komplett geleert (Reset).

use super::WallSegment;
use glam::Vec2;

/// Treffer einer Wand-Abfrage am Cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallHit {
    /// Position in der Store-Reihenfolge
    pub index: usize,
    /// Die getroffene Wand (Kopie)
    pub segment: WallSegment,
    /// Abstand Cursor → Wand
    pub distance: f32,
}

/// Store aller Wandsegmente in Einfüge-Reihenfolge.
#[derive(Debug, Clone, Default)]
pub struct SegmentStore {
    segments: Vec<WallSegment>,
}

impl SegmentStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt eine Wand an. Keine Geometrie-Prüfung: Duplikate und
    /// Null-Länge-Wände werden unverändert übernommen.
    pub fn append(&mut self, segment: WallSegment) {
        self.segments.push(segment);
    }

    /// Alle Wände in Einfüge-Reihenfolge.
    pub fn all(&self) -> &[WallSegment] {
        &self.segments
    }

    /// Entfernt den ersten strukturell gleichen Eintrag.
    ///
    /// Gibt `false` zurück (ohne Fehler), wenn keine passende Wand existiert.
    /// `(A, B)` und `(B, A)` gelten als verschiedene Wände.
    pub fn remove_by_identity(&mut self, segment: &WallSegment) -> bool {
        match self.segments.iter().position(|s| s == segment) {
            Some(index) => {
                self.segments.remove(index);
                true
            }
            None => false,
        }
    }

    /// Leert den Store vollständig.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Findet die nächstgelegene Wand innerhalb von `max_distance`.
    ///
    /// Bei Gleichstand gewinnt die zuerst eingefügte Wand.
    pub fn nearest_within(&self, pos: Vec2, max_distance: f32) -> Option<WallHit> {
        self.segments
            .iter()
            .enumerate()
            .map(|(index, segment)| WallHit {
                index,
                segment: *segment,
                distance: segment.distance_to_point(pos),
            })
            .filter(|hit| hit.distance <= max_distance)
            .fold(None, |best: Option<WallHit>, hit| match best {
                Some(b) if b.distance <= hit.distance => Some(b),
                _ => Some(hit),
            })
    }

    /// Gibt die Anzahl der Wände zurück.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Gibt zurück ob der Store leer ist.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
