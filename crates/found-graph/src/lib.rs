pub mod bounds;
pub mod config;
#[cfg(feature = "egui")]
pub mod egui_surface;
pub mod mapper;
pub mod navigate;
pub mod raster;
pub mod render;
pub mod snapshot;
pub mod surface;
pub mod transform;
pub mod view;

pub use bounds::Bounds;
pub use config::{
    ConfigError, EDGE_OPACITY, MAX_CANVAS_SIZE, MINIMAP_HEIGHT, MINIMAP_PADDING, MINIMAP_WIDTH,
    MinimapConfig, NODE_RADIUS,
};
#[cfg(feature = "egui")]
pub use egui_surface::EguiSurface;
pub use mapper::CoordinateMapper;
pub use navigate::{CanvasGeometry, ClickNavigator, GraphView, NavigateOutcome, PointerEvent};
pub use raster::RasterSurface;
pub use render::{MinimapRenderer, RenderOutcome, RenderStats, SkipReason};
pub use snapshot::{GraphSnapshot, MinimapEdge, MinimapNode};
pub use surface::{DrawCommand, MinimapSurface, RecordingSurface, Stroke};
pub use transform::{Size, ViewTransform, Viewport};
pub use view::InMemoryGraphView;

pub use found_core::{Color, Point};
