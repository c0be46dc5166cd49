//! Animated "light trail" running around a rounded-rectangle border.
//!
//! The crate is the path-animation engine behind a decorative loading/streaming indicator:
//!
//! 1. **Flatten**: [`BoundarySpec`] → polyline within an absolute tolerance ([`flatten_boundary`])
//! 2. **Resample**: polyline → evenly spaced, closed loop ([`resample_closed`])
//! 3. **Index**: loop → cumulative arc-length table ([`ArcLengthIndex`])
//! 4. **Animate**: frame timestamps → head position ([`SnakeAnimator`]) and fade
//!    opacity ([`FadeController`])
//! 5. **Build**: trailing [`Window`] → tapered, filled [`StripPolygon`] ([`build_strip`])
//!
//! [`StreamBorder`] ties these together behind two host-facing calls,
//! [`StreamBorder::set_boundary`] and [`StreamBorder::on_frame`]. [`CpuPainter`] is a software
//! paint collaborator that rasterizes frames with `vello_cpu`.
//!
//! Degenerate input never errors: an empty or zero-sized boundary simply produces no polygon.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod control;
mod foundation;
mod geometry;
mod render;

pub use animation::edge_map::EdgeTimeMap;
pub use animation::fade::{FadeController, fade_opacity};
pub use animation::snake::{AnimatorState, SnakeAnimator, SpeedPolicy, Tick};
pub use control::config::StreamBorderConfig;
pub use control::stream_border::{FrameOutput, PathGeometry, StreamBorder};
pub use control::style::StreamBorderStyle;
pub use foundation::core::{BezPath, Point, Rect, Rgba8, RoundedRect, Vec2};
pub use foundation::error::{StreamBorderError, StreamBorderResult};
pub use geometry::arc_length::{ArcLengthIndex, Window};
pub use geometry::boundary::{BoundaryPiece, BoundarySpec};
pub use geometry::flatten::{DEFAULT_FLATTEN_TOLERANCE, MIN_FLATTEN_TOLERANCE, flatten_boundary};
pub use geometry::resample::{DEFAULT_RESAMPLE_STEP, resample_closed};
pub use geometry::strip::{StripPolygon, ThicknessProfile, build_strip};
pub use render::cpu::{CpuPainter, FrameRgba};
