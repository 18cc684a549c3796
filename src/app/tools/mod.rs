//! Zeichen-Werkzeuge für den Grundriss.
//!
//! Der `PlanBuilder` nimmt eingerastete Klicks entgegen und schreibt Wände
//! in den `SegmentStore`. Die Vorschau wird pro Frame rein aus dem aktuellen
//! Zustand abgeleitet und nie gespeichert.

/// Zustandsmaschine Leer → Offen → Geschlossen.
pub mod plan_builder;
/// Vorschau-Wand vom letzten Kettenpunkt zum Cursor.
pub mod preview;

pub use plan_builder::PlanBuilder;
pub use preview::current_preview;

/// Rückgabe von `PlanBuilder::add_point`: was der Klick bewirkt hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    /// Erster Punkt gesetzt, noch keine Wand
    Started,
    /// Punkt angehängt und eine Wand erzeugt
    WallAdded,
    /// Schließende Wand erzeugt, Raum ist fertig
    RoomClosed,
    /// Klick ignoriert (Raum bereits geschlossen)
    Ignored,
}
