//! Grundriss-Editor Library.
//! Raum per Raster-Klick zeichnen, Wände ableiten und als 3D-Massenmodell extrudieren.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, PlanAction,
    PlanBuilder, ViewState,
};
pub use core::{
    closes_room, extrude, snap_to_grid, PlanPhase, PlanState, SegmentStore, WallSegment,
    WallVolume,
};
pub use shared::{
    DistanceLabel, EditorOptions, PlanMode, PointMarker, PreviewWall, RenderScene,
};
