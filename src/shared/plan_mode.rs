//! Ansichtsmodus des Editors (shared zwischen App und Renderer).

/// Aktive Ansicht: 2D-Zeichnen oder 3D-Massenmodell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanMode {
    /// Grundriss zeichnen (Klicks setzen Punkte)
    #[default]
    Draw2D,
    /// Extrudierte Wände betrachten (Zeichnen deaktiviert)
    View3D,
}

impl PlanMode {
    /// Der jeweils andere Modus.
    pub fn toggled(self) -> Self {
        match self {
            PlanMode::Draw2D => PlanMode::View3D,
            PlanMode::View3D => PlanMode::Draw2D,
        }
    }
}
