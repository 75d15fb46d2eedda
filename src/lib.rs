/*!
A small 2D rasterizer: path filling and hairline stroking.

This crate covers path filling and hairline stroking: building edges
from a `Path`, rasterizing them with two backends (aliased and
anti-aliased), resolving the fill rule, and blending the result onto a
`Pixmap`.
*/

#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![allow(clippy::approx_constant)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::float_cmp)]
#![allow(clippy::identity_op)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::too_many_arguments)]

// Must be first, because of macro scope rules.
#[macro_use] mod point;

mod alpha_runs;
mod blitter;
mod color;
mod edge;
mod edge_builder;
mod fixed_point;
mod floating_point;
mod geom;
mod geometry;
mod length;
mod line_clipper;
mod math;
mod painter;
mod path;
mod path_builder;
mod path_geometry;
mod pixmap;
mod scalar;
mod scan;
mod transform;
mod wide;

pub use color::{ALPHA_U8_TRANSPARENT, ALPHA_U8_OPAQUE, ALPHA_TRANSPARENT, ALPHA_OPAQUE};
pub use color::{Color, ColorU8, PremultipliedColor, PremultipliedColorU8, AlphaU8};
pub use floating_point::NormalizedF32;
pub use geom::{IntSize, IntRect, ScreenIntRect, Rect};
pub use length::LengthU32;
pub use painter::{Paint, FillRule, LineCap};
pub use path::{Path, PathSegment, PathSegmentsIter};
pub use path_builder::PathBuilder;
pub use pixmap::{Pixmap, PixmapRef, PixmapMut, BYTES_PER_PIXEL};
pub use point::Point;
pub use transform::Transform;

/// A rect's bounding box, expressed in the same float space as a `Path`.
pub type Bounds = Rect;
