pub mod axis;
pub mod lanes;
pub mod layout;
pub mod types;
pub mod zoom;

pub use axis::{default_unit, generate_lanes, TimeAxisModel};
pub use lanes::{allocate, Allocation, LaneAllocator};
pub use layout::{Band, Layout, LayoutEngine, LayoutMode, LayoutOptions, PackingBasis};
pub use types::{
    AxisLane, Item, ItemKind, PositionedItem, TimeUnit, TimeWindow, Timestamp, ZoomState,
    MAX_LANE_WIDTH, MIN_LANE_WIDTH, ZOOM_STEP,
};
pub use zoom::ZoomController;
