//! Core-Domänentypen: Wände, Segment-Store, Raster, Punktkette, Extrusion.

pub mod extrude;
pub mod plan;
pub mod segment;
pub mod segment_store;
pub mod snap;

pub use extrude::{
    extrude, extrude_with_thickness, WallVolume, DEFAULT_WALL_HEIGHT, DEFAULT_WALL_THICKNESS,
};
pub use plan::{closes_room, PlanPhase, PlanState, MIN_POINTS_FOR_CLOSURE};
pub use segment::WallSegment;
pub use segment_store::{SegmentStore, WallHit};
pub use snap::snap_to_grid;
