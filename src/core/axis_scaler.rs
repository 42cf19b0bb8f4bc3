use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::ChartBounds;

/// Upper bound on the number of steps a value axis may be divided into.
pub const MAX_AXIS_STEPS: usize = 100;
/// Smallest manual step accepted before clamping.
pub const MIN_MANUAL_STEP: f64 = 0.001;
/// Candidate multipliers for nice steps, in lookup order.
pub const NICE_STEP_MULTIPLIERS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Y-axis tick placement strategy resolved for the current options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisStepMode {
    /// User-supplied step (possibly rescaled to respect [`MAX_AXIS_STEPS`]).
    Manual,
    /// Step derived from `division_count_hint` and snapped to 1/2/2.5/5/10.
    Nice,
    /// No step; the range is split into `division_count_hint` equal parts.
    Uniform,
}

/// Inputs of [`compute_nice_axis`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScalingOptions {
    pub division_count_hint: u32,
    pub use_nice_steps: bool,
    pub manual_range: Option<(f64, f64)>,
    pub manual_step: Option<f64>,
    /// Widen snapped nice ranges so that zero stays visible when the data straddles it.
    pub include_zero: bool,
}

impl Default for AxisScalingOptions {
    fn default() -> Self {
        Self {
            division_count_hint: 5,
            use_nice_steps: true,
            manual_range: None,
            manual_step: None,
            include_zero: true,
        }
    }
}

/// Resolved value axis: active range plus tick spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NiceAxis {
    pub min: f64,
    pub max: f64,
    pub step_size: Option<f64>,
    pub step_count: usize,
    pub mode: AxisStepMode,
}

impl NiceAxis {
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains_zero(self) -> bool {
        self.min <= 0.0 && self.max >= 0.0
    }

    /// Tick values in ascending order.
    ///
    /// Stepped axes walk `min + i * step` while the value stays within one
    /// percent of a step above `max`; uniform axes emit `step_count + 1`
    /// evenly spaced values. A non-finite range yields no ticks.
    #[must_use]
    pub fn tick_values(self) -> Vec<f64> {
        if !self.span().is_finite() {
            return Vec::new();
        }
        match self.step_size {
            Some(step) if step.is_finite() && step > 0.0 => {
                let limit = self.max + step * 0.01;
                (0..=MAX_AXIS_STEPS)
                    .map(|index| self.min + step * index as f64)
                    .take_while(|value| *value <= limit)
                    .collect()
            }
            _ => {
                let divisions = self.step_count.max(1);
                let span = self.span();
                (0..=divisions)
                    .map(|index| self.min + span * (index as f64 / divisions as f64))
                    .collect()
            }
        }
    }
}

/// Returns `(min, min + 1)` when a manual range is empty or inverted.
#[must_use]
pub fn corrected_manual_range(min: f64, max: f64) -> (f64, f64) {
    if min >= max {
        warn!(min, max, "manual y-axis range is empty or inverted; using min + 1");
        (min, min + 1.0)
    } else {
        (min, max)
    }
}

/// Rounds a rough step up to the next 1/2/2.5/5/10 multiple of its decade.
#[must_use]
pub fn nice_step(rough_step: f64) -> f64 {
    let rough_step = if rough_step.is_finite() && rough_step > 0.0 {
        rough_step
    } else {
        1.0
    };
    let magnitude = 10_f64.powf(rough_step.log10().floor());
    let normalized = rough_step / magnitude;
    let multiplier = NICE_STEP_MULTIPLIERS
        .iter()
        .copied()
        .find(|candidate| normalized <= *candidate)
        .unwrap_or(10.0);
    multiplier * magnitude
}

/// Derives the value axis for `bounds` under `options`.
///
/// Never fails. Empty manual ranges and too-small manual steps are corrected
/// in place, so the result is always usable for rendering.
#[must_use]
pub fn compute_nice_axis(bounds: ChartBounds, options: AxisScalingOptions) -> NiceAxis {
    let divisions = options.division_count_hint.max(2);
    let (min, max) = match options.manual_range {
        Some((min, max)) => corrected_manual_range(min, max),
        None => (bounds.min_value, bounds.max_value),
    };
    let snap = options.manual_range.is_none();

    if let Some(requested_step) = options.manual_step {
        let range = max - min;
        let mut step = requested_step.max(MIN_MANUAL_STEP);
        if !step.is_finite() {
            step = MIN_MANUAL_STEP;
        }
        let estimated_steps = (range / step).ceil();
        if estimated_steps > MAX_AXIS_STEPS as f64 {
            step = range / MAX_AXIS_STEPS as f64;
            warn!(
                requested_step,
                adjusted_step = step,
                "manual y-axis step too small; rescaled to cap division count"
            );
        }
        return stepped_axis(min, max, step, snap, false, AxisStepMode::Manual);
    }

    if options.use_nice_steps {
        let step = nice_step((max - min) / f64::from(divisions));
        let include_zero = options.include_zero && min <= 0.0 && max >= 0.0;
        return stepped_axis(min, max, step, snap, include_zero, AxisStepMode::Nice);
    }

    NiceAxis {
        min,
        max,
        step_size: None,
        step_count: divisions as usize,
        mode: AxisStepMode::Uniform,
    }
}

fn stepped_axis(
    min: f64,
    max: f64,
    step: f64,
    snap: bool,
    include_zero: bool,
    mode: AxisStepMode,
) -> NiceAxis {
    let mut step = step;
    let (mut nice_min, mut nice_max) = resolve_range(min, max, step, snap, include_zero);
    let mut step_count = count_steps(nice_min, nice_max, step);

    // Outward snapping can add up to one step at each end.
    if step_count > MAX_AXIS_STEPS {
        step = (max - min) / (MAX_AXIS_STEPS - 2) as f64;
        (nice_min, nice_max) = resolve_range(min, max, step, snap, include_zero);
        step_count = count_steps(nice_min, nice_max, step);
    }

    NiceAxis {
        min: nice_min,
        max: nice_max,
        step_size: Some(step),
        step_count,
        mode,
    }
}

fn resolve_range(min: f64, max: f64, step: f64, snap: bool, include_zero: bool) -> (f64, f64) {
    if !snap {
        return (min, max);
    }
    let mut nice_min = (min / step).floor() * step;
    let mut nice_max = (max / step).ceil() * step;
    if include_zero {
        nice_min = nice_min.min(0.0);
        nice_max = nice_max.max(0.0);
    }
    (nice_min, nice_max)
}

fn count_steps(min: f64, max: f64, step: f64) -> usize {
    let steps = ((max - min) / step).round();
    if steps.is_finite() && steps > 0.0 {
        steps as usize
    } else {
        0
    }
}
