pub mod axis_scaler;
pub mod bounds;
pub mod coordinate_mapper;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod types;

pub use axis_scaler::{
    AxisScalingOptions, AxisStepMode, MAX_AXIS_STEPS, MIN_MANUAL_STEP, NiceAxis,
    compute_nice_axis, corrected_manual_range, nice_step,
};
pub use bounds::{ChartBounds, VALUE_PADDING_RATIO};
pub use coordinate_mapper::{ActiveBounds, CoordinateMapper};
pub use scale::LinearScale;
pub use series::Series;
pub use types::{ChartRect, DataPoint, Viewport};
