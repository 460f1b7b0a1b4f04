mod cell_centroid;
mod local_axes;
mod polygon_area;
mod polygon_centroid;

pub use cell_centroid::{CellCentroid, CellKind};
pub use local_axes::{LocalAxes, LocalFrame};
pub use polygon_area::PolygonArea;
pub use polygon_centroid::PolygonCentroid;
