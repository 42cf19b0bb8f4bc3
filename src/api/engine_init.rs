use tracing::debug;

use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig, ChartModel};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with no series and sanitized options.
    ///
    /// Any viewport is accepted; a collapsed one simply yields empty frames
    /// until the host resizes it.
    #[must_use]
    pub fn new(renderer: R, config: ChartEngineConfig) -> Self {
        let options = config.options.sanitized();
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            "init chart engine"
        );
        Self {
            renderer,
            viewport: config.viewport,
            options,
            model: ChartModel::new(options.axis_scaling()),
            interaction: InteractionState::default(),
        }
    }

    /// Creates an engine from a JSON `ChartEngineConfig` document.
    pub fn from_json_config(renderer: R, input: &str) -> ChartResult<Self> {
        let config = ChartEngineConfig::from_json_str(input)?;
        Ok(Self::new(renderer, config))
    }
}
