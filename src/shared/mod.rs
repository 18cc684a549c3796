//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und den Renderern geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod plan_mode;
mod render_scene;

pub use options::EditorOptions;
pub use options::{CLOSURE_THRESHOLD, GRID_SIZE};
pub use plan_mode::PlanMode;
pub use render_scene::{DistanceLabel, PointMarker, PreviewWall, RenderScene};
