use crate::animation::edge_map::EdgeTimeMap;
use crate::foundation::math::{wrap_length, wrap_unit};

/// Periods shorter than this are floored to avoid runaway speeds.
pub(crate) const MIN_PERIOD_SECONDS: f64 = 0.01;

/// How the head position advances over one loop period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedPolicy {
    /// Constant linear speed `total_length / period`.
    #[default]
    ConstantSpeed,
    /// Every edge and corner takes the same amount of time regardless of its length.
    EqualTimePerEdge,
}

/// Animator state: `Idle` until the first timestamp has been seen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AnimatorState {
    /// No previous frame timestamp; the next tick only primes the clock.
    #[default]
    Idle,
    /// Advancing; holds the previous frame timestamp in seconds.
    Running {
        /// Timestamp of the last processed tick.
        last_timestamp: f64,
    },
}

/// Result of one processed tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Seconds elapsed since the previous tick (zero on the priming tick).
    pub dt: f64,
    /// Head position after the tick.
    pub head_position: f64,
}

/// Per-frame state machine moving the trail head along the path.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SnakeAnimator {
    state: AnimatorState,
    head_position: f64,
    progress: f64,
}

impl SnakeAnimator {
    /// Idle animator with the head at distance zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> AnimatorState {
        self.state
    }

    /// Head position in `[0, total_length)`.
    pub fn head_position(&self) -> f64 {
        self.head_position
    }

    /// Loop progress in `[0, 1)`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Back to `Idle` with the head at the start of the path.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Process a frame at monotonic `timestamp` seconds.
    ///
    /// Returns `None` (and leaves the state untouched) when there is no geometry or the
    /// timestamp is not finite. The first tick after `Idle` records the clock and does not move.
    pub fn tick(
        &mut self,
        timestamp: f64,
        total_length: f64,
        period_seconds: f64,
        policy: SpeedPolicy,
        edge_map: &EdgeTimeMap,
    ) -> Option<Tick> {
        if !(total_length > 0.0) || !timestamp.is_finite() {
            return None;
        }

        let last = match self.state {
            AnimatorState::Idle => {
                self.state = AnimatorState::Running {
                    last_timestamp: timestamp,
                };
                return Some(Tick {
                    dt: 0.0,
                    head_position: self.head_position,
                });
            }
            AnimatorState::Running { last_timestamp } => last_timestamp,
        };

        let dt = (timestamp - last).max(0.0);
        self.state = AnimatorState::Running {
            last_timestamp: timestamp,
        };

        let period = if period_seconds.is_finite() {
            period_seconds.max(MIN_PERIOD_SECONDS)
        } else {
            MIN_PERIOD_SECONDS
        };

        match policy {
            SpeedPolicy::ConstantSpeed => {
                let speed = total_length / period;
                self.head_position = wrap_length(self.head_position + speed * dt, total_length);
                self.progress = self.head_position / total_length;
            }
            SpeedPolicy::EqualTimePerEdge => {
                // Progress follows the head, including right after a policy switch.
                let start = edge_map.progress_at(self.head_position);
                self.progress = wrap_unit(start + dt / period);
                self.head_position =
                    wrap_length(edge_map.distance_at(self.progress), total_length);
            }
        }

        Some(Tick {
            dt,
            head_position: self.head_position,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/snake.rs"]
mod tests;
