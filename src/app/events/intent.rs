use super::super::state::EditorTool;
use crate::core::WallSegment;
use crate::shared::{EditorOptions, PlanMode};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Positionen kommen bereits in Grundriss-Koordinaten an.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeiger-Klick im Viewport
    PointerClicked { world_pos: glam::Vec2 },
    /// Zeiger bewegt (aktualisiert die Vorschau)
    PointerMoved { world_pos: glam::Vec2 },
    /// Zeiger hat den Viewport verlassen
    PointerLeft,
    /// Grundriss komplett verwerfen
    ResetRequested,
    /// Ansichtsmodus explizit setzen
    SetPlanModeRequested { mode: PlanMode },
    /// Zwischen 2D und 3D umschalten
    TogglePlanModeRequested,
    /// Editor-Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },
    /// Eine bestimmte Wand entfernen (z.B. aus einer Wandliste)
    DeleteWallRequested { segment: WallSegment },
    /// Optionen wurden geändert (Options-Dialog / Config-Reload)
    OptionsChanged { options: EditorOptions },
    /// Anwendung beenden
    ExitRequested,
}
