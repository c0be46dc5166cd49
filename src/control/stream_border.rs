use std::sync::Arc;

use crate::animation::edge_map::EdgeTimeMap;
use crate::animation::fade::FadeController;
use crate::animation::snake::{SnakeAnimator, SpeedPolicy};
use crate::control::config::StreamBorderConfig;
use crate::foundation::core::Point;
use crate::foundation::error::StreamBorderResult;
use crate::geometry::arc_length::{ArcLengthIndex, Window};
use crate::geometry::boundary::BoundarySpec;
use crate::geometry::strip::{StripPolygon, ThicknessProfile, build_strip};

/// Geometry derived from one boundary: rebuilt as a unit and swapped in one assignment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathGeometry {
    boundary: Option<BoundarySpec>,
    index: ArcLengthIndex,
    edge_map: EdgeTimeMap,
}

impl PathGeometry {
    fn build(boundary: BoundarySpec, cfg: &StreamBorderConfig) -> Self {
        let index =
            ArcLengthIndex::from_boundary(&boundary, cfg.flatten_tolerance, cfg.resample_step);
        let edge_map = EdgeTimeMap::new(&boundary, index.total_length());
        Self {
            boundary: Some(boundary),
            index,
            edge_map,
        }
    }

    /// Boundary this geometry was built from.
    pub fn boundary(&self) -> Option<&BoundarySpec> {
        self.boundary.as_ref()
    }

    /// Arc-length table of the resampled outline.
    pub fn index(&self) -> &ArcLengthIndex {
        &self.index
    }

    /// Equal-time-per-edge distance mapping.
    pub fn edge_map(&self) -> &EdgeTimeMap {
        &self.edge_map
    }
}

/// Everything a painter needs for one frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct FrameOutput {
    /// Filled trail outline, `None` when nothing should be drawn.
    pub polygon: Option<StripPolygon>,
    /// Trail centerline the polygon was built from.
    pub centerline: Vec<Point>,
    /// Multiplier for the trail paint alpha, in `[0, 1]`.
    pub opacity: f64,
    /// Visible arc-length range.
    pub window: Option<Window>,
}

/// Animated light trail running around a rounded-rectangle border.
///
/// Hosts call [`StreamBorder::set_boundary`] on layout changes and [`StreamBorder::on_frame`]
/// from their render loop, then paint the returned polygon with the returned opacity.
#[derive(Clone, Debug)]
pub struct StreamBorder {
    config: StreamBorderConfig,
    size: Option<(f64, f64)>,
    geometry: Arc<PathGeometry>,
    animator: SnakeAnimator,
    fade: Option<FadeController>,
}

impl StreamBorder {
    /// New control without geometry. Fails when `config` is out of range.
    pub fn new(config: StreamBorderConfig) -> StreamBorderResult<Self> {
        config.validate()?;
        let fade = config.fade_cycle_seconds.map(FadeController::new);
        Ok(Self {
            config,
            size: None,
            geometry: Arc::new(PathGeometry::default()),
            animator: SnakeAnimator::new(),
            fade,
        })
    }

    /// Current configuration.
    pub fn config(&self) -> &StreamBorderConfig {
        &self.config
    }

    /// Boundary of the current geometry, if one has been set.
    pub fn boundary(&self) -> Option<&BoundarySpec> {
        self.geometry.boundary()
    }

    /// Shared handle to the current geometry. Stays valid across later rebuilds.
    pub fn geometry(&self) -> Arc<PathGeometry> {
        Arc::clone(&self.geometry)
    }

    /// Arc-length table of the current geometry.
    pub fn index(&self) -> &ArcLengthIndex {
        self.geometry.index()
    }

    /// `true` once a boundary with usable geometry is installed.
    pub fn is_ready(&self) -> bool {
        !self.geometry.index().is_empty()
    }

    /// Head position in `[0, total_length)`.
    pub fn head_position(&self) -> f64 {
        self.animator.head_position()
    }

    /// Animator state machine.
    pub fn animator(&self) -> &SnakeAnimator {
        &self.animator
    }

    /// Current fade phase, when fading is enabled.
    pub fn fade_phase(&self) -> Option<f64> {
        self.fade.as_ref().map(FadeController::phase)
    }

    /// Visible window for the current head position.
    pub fn window(&self) -> Option<Window> {
        Window::trailing(
            self.animator.head_position(),
            self.geometry.index().total_length(),
            self.config.snake_fraction,
        )
    }

    /// Install a new boundary and rebuild the path. Unchanged boundaries are a no-op.
    pub fn set_boundary(&mut self, width: f64, height: f64, corner_radius: f64) {
        self.config.corner_radius = if corner_radius.is_finite() {
            corner_radius.max(0.0)
        } else {
            0.0
        };
        let requested = BoundarySpec::new(width, height, self.config.corner_radius);
        if self.geometry.boundary() == Some(&requested) {
            return;
        }
        self.size = Some((width, height));
        self.rebuild();
    }

    /// Resize keeping the configured corner radius.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.set_boundary(width, height, self.config.corner_radius);
    }

    /// Advance the animation to `timestamp_seconds` and build this frame's geometry.
    ///
    /// Before a usable boundary exists nothing advances and the polygon is `None`. The first
    /// tick after a rebuild only records the clock.
    pub fn on_frame(&mut self, timestamp_seconds: f64) -> FrameOutput {
        let geometry = Arc::clone(&self.geometry);
        let index = geometry.index();
        let total = index.total_length();

        let Some(tick) = self.animator.tick(
            timestamp_seconds,
            total,
            self.config.period_seconds,
            self.config.speed_policy,
            geometry.edge_map(),
        ) else {
            return FrameOutput {
                opacity: self.current_opacity(),
                ..FrameOutput::default()
            };
        };

        let opacity = match self.fade.as_mut() {
            Some(fade) => fade.advance(tick.dt),
            None => 1.0,
        };

        let Some(window) = Window::trailing(tick.head_position, total, self.config.snake_fraction)
        else {
            return FrameOutput {
                opacity,
                ..FrameOutput::default()
            };
        };
        let centerline = index.window_points(&window);
        let polygon = build_strip(
            &centerline,
            self.config.min_thickness,
            self.config.max_thickness,
            self.config.profile,
        );

        tracing::trace!(
            head = window.head,
            tail = window.tail,
            wrapped = window.is_wrapped(),
            points = centerline.len(),
            opacity,
            "frame"
        );

        FrameOutput {
            polygon,
            centerline,
            opacity,
            window: Some(window),
        }
    }

    /// Change the lit fraction of the loop. Takes effect on the next frame.
    pub fn set_snake_fraction(&mut self, fraction: f64) -> StreamBorderResult<()> {
        self.update(|c| c.snake_fraction = fraction)
    }

    /// Change the loop period. Takes effect on the next frame.
    pub fn set_period_seconds(&mut self, period: f64) -> StreamBorderResult<()> {
        self.update(|c| c.period_seconds = period)
    }

    /// Change the end and middle stroke thickness.
    pub fn set_thickness(&mut self, min: f64, max: f64) -> StreamBorderResult<()> {
        self.update(|c| {
            c.min_thickness = min;
            c.max_thickness = max;
        })
    }

    /// Change the thickness profile.
    pub fn set_profile(&mut self, profile: ThicknessProfile) -> StreamBorderResult<()> {
        self.update(|c| c.profile = profile)
    }

    /// Change the speed policy. Takes effect on the next frame.
    pub fn set_speed_policy(&mut self, policy: SpeedPolicy) -> StreamBorderResult<()> {
        self.update(|c| c.speed_policy = policy)
    }

    /// Enable, retune or disable (`None`) the fade cycle. Resets the fade phase.
    pub fn set_fade_cycle_seconds(&mut self, cycle: Option<f64>) -> StreamBorderResult<()> {
        self.update(|c| c.fade_cycle_seconds = cycle)?;
        self.fade = cycle.map(FadeController::new);
        Ok(())
    }

    /// Change the resampling step and rebuild the path.
    pub fn set_resample_step(&mut self, step: f64) -> StreamBorderResult<()> {
        self.update(|c| c.resample_step = step)?;
        self.rebuild();
        Ok(())
    }

    /// Change the flattening tolerance and rebuild the path.
    pub fn set_flatten_tolerance(&mut self, tolerance: f64) -> StreamBorderResult<()> {
        self.update(|c| c.flatten_tolerance = tolerance)?;
        self.rebuild();
        Ok(())
    }

    /// Change the corner radius and rebuild the path.
    pub fn set_corner_radius(&mut self, radius: f64) -> StreamBorderResult<()> {
        self.update(|c| c.corner_radius = radius)?;
        self.rebuild();
        Ok(())
    }

    fn update(&mut self, f: impl FnOnce(&mut StreamBorderConfig)) -> StreamBorderResult<()> {
        let mut next = self.config.clone();
        f(&mut next);
        next.validate()?;
        self.config = next;
        Ok(())
    }

    fn current_opacity(&self) -> f64 {
        self.fade.as_ref().map_or(1.0, FadeController::opacity)
    }

    #[tracing::instrument(skip(self), fields(size = ?self.size))]
    fn rebuild(&mut self) {
        let Some((width, height)) = self.size else {
            return;
        };
        let boundary = BoundarySpec::new(width, height, self.config.corner_radius);
        let geometry = PathGeometry::build(boundary, &self.config);

        if geometry.index().is_empty() {
            tracing::warn!(width, height, "boundary yields no geometry; nothing will be drawn");
        } else {
            tracing::debug!(
                points = geometry.index().points().len(),
                total_length = geometry.index().total_length(),
                corner_radius = boundary.corner_radius(),
                "rebuilt path geometry"
            );
        }

        self.geometry = Arc::new(geometry);
        self.animator.reset();
        if let Some(fade) = self.fade.as_mut() {
            fade.reset();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/control/stream_border.rs"]
mod tests;
