//! Raster-Snapping für Grundriss-Klicks.

use glam::Vec2;

/// Rundet jede Koordinate auf das nächste Vielfache von `cell_size`.
///
/// Halbe Zellen runden von Null weg (`f32::round`), damit wiederholte Klicks
/// an derselben Stelle immer identisch einrasten. Ungültige Zellgrößen
/// (≤ 0, NaN, ∞) lassen die Position unverändert.
pub fn snap_to_grid(pos: Vec2, cell_size: f32) -> Vec2 {
    if !(cell_size > 0.0 && cell_size.is_finite()) {
        return pos;
    }
    (pos / cell_size).round() * cell_size
}
