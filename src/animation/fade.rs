use crate::foundation::math::{lerp, wrap_unit};

/// Opacity for a fade phase in `[0, 1)`.
///
/// Fully visible for the first 30% of the cycle, fades out over 20%, stays hidden for 20%,
/// fades back in over 20% and holds visible for the final 10%.
pub fn fade_opacity(phase: f64) -> f64 {
    let p = wrap_unit(phase);
    if p < 0.3 {
        1.0
    } else if p < 0.5 {
        lerp(1.0, 0.0, (p - 0.3) / 0.2)
    } else if p < 0.7 {
        0.0
    } else if p < 0.9 {
        lerp(0.0, 1.0, (p - 0.7) / 0.2)
    } else {
        1.0
    }
}

/// Cyclic visibility schedule, independent of the trail position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeController {
    cycle_seconds: f64,
    phase: f64,
}

impl FadeController {
    /// New controller at phase zero. `cycle_seconds` is floored to a small positive value.
    pub fn new(cycle_seconds: f64) -> Self {
        Self {
            cycle_seconds: cycle_seconds.max(0.01),
            phase: 0.0,
        }
    }

    /// Seconds per fade cycle.
    pub fn cycle_seconds(&self) -> f64 {
        self.cycle_seconds
    }

    /// Current phase in `[0, 1)`.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Advance by `dt` seconds and return the new opacity.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if dt.is_finite() && dt > 0.0 {
            self.phase = wrap_unit(self.phase + dt / self.cycle_seconds);
        }
        self.opacity()
    }

    /// Opacity at the current phase.
    pub fn opacity(&self) -> f64 {
        fade_opacity(self.phase)
    }

    /// Back to phase zero.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/fade.rs"]
mod tests;
