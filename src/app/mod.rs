//! Application-Layer: Controller, State, Events und Werkzeuge.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
pub mod script;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Grundriss, Ansicht, Werkzeuge).
pub mod state;
pub mod tools;

pub use crate::core::{PlanPhase, SegmentStore, WallSegment};
pub use crate::shared::PlanMode;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorTool, EditorToolState, ViewState};
pub use tools::{PlanAction, PlanBuilder};
