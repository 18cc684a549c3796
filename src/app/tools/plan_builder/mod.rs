//! Grundriss-Werkzeug: setzt Punkte per Raster-Klick, erzeugt Wände
//! und schließt den Raum, sobald ein Klick nahe am ersten Punkt landet.

mod lifecycle;
mod state;

pub use state::PlanBuilder;
