//! Pixelab Region - connected components and contours
//!
//! Union-find component labeling over binarized rasters, the
//! jet-colorized component view, and external contour drawing.

pub mod conncomp;
pub mod contour;
pub mod error;

pub use conncomp::{Connectivity, LabelMap, connected_components, label_components};
pub use contour::draw_contours;
pub use error::{RegionError, RegionResult};
