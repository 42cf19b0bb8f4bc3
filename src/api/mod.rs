mod axis_label_builder;
mod axis_label_format;
mod chart_model;
mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod interaction_controller;
mod render_frame_builder;
mod render_style;

pub use chart_model::ChartModel;
pub use engine::ChartEngine;
pub use engine_config::{
    ChartEngineConfig, ChartOptions, MAX_AXIS_DIVISIONS, MAX_LINE_WIDTH, MAX_TEXT_SIZE,
    MIN_AXIS_DIVISIONS, MIN_LINE_WIDTH, MIN_TEXT_SIZE,
};
pub use render_style::RenderStyle;
