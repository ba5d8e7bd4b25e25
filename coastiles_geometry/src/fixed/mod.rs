mod geometry;
mod line_string;
mod macros;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod polygon;
mod ring;
mod traits;

pub use geometry::*;
pub use line_string::*;
pub use multi_line_string::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
