use super::super::state::EditorTool;
use crate::core::WallSegment;
use crate::shared::{EditorOptions, PlanMode};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Punkt an den PlanBuilder übergeben (Snapping erfolgt dort)
    AddPlanPoint { world_pos: glam::Vec2 },
    /// Cursor-Position für die Vorschau setzen (`None` = außerhalb)
    UpdateCursor { world_pos: Option<glam::Vec2> },
    /// Nächstgelegene Wand innerhalb des Pick-Radius entfernen
    DeleteWallAt {
        world_pos: glam::Vec2,
        max_distance: f32,
    },
    /// Genau diese Wand entfernen (erster strukturell gleicher Eintrag)
    RemoveWall { segment: WallSegment },
    /// Punktkette, Wände, Cursor und 3D-Körper verwerfen
    ResetPlan,
    /// Ansichtsmodus wechseln (3D baut die Wandkörper neu auf)
    SetPlanMode { mode: PlanMode },
    /// Editor-Werkzeug wechseln
    SetEditorTool { tool: EditorTool },
    /// Neue Optionen übernehmen
    ApplyOptions { options: EditorOptions },
    /// Anwendung beenden
    RequestExit,
}
