//! Application state and composition.

use std::sync::Arc;

use homestead_domain::SizeTally;

use crate::infrastructure::{
    config::{EngineConfig, OutputFormat},
    demo_plan::DemoPlan,
    plan_file::JsonPlanFile,
    ports::PlanSource,
};
use crate::use_cases::neighborhood::{BuildError, BuildReport};
use crate::use_cases::BuildNeighborhoods;

/// Main application state.
///
/// Holds the configuration, the tally shared by every neighborhood this app
/// builds, and the use cases.
pub struct App {
    pub config: EngineConfig,
    pub tally: SizeTally,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub build_neighborhoods: BuildNeighborhoods,
}

impl App {
    /// Compose the app, picking the plan source from the config.
    pub fn new(config: EngineConfig) -> Self {
        let source: Arc<dyn PlanSource> = match &config.plan_path {
            Some(path) => Arc::new(JsonPlanFile::new(path.clone())),
            None => Arc::new(DemoPlan::new()),
        };
        Self::with_source(config, source)
    }

    /// Compose the app around an explicit plan source.
    pub fn with_source(config: EngineConfig, source: Arc<dyn PlanSource>) -> Self {
        Self {
            config,
            tally: SizeTally::new(),
            use_cases: UseCases {
                build_neighborhoods: BuildNeighborhoods::new(source),
            },
        }
    }

    pub fn build(&self) -> Result<BuildReport, BuildError> {
        self.use_cases
            .build_neighborhoods
            .execute(&self.tally, self.config.capacity_policy)
    }

    /// Render a report in the configured output format.
    pub fn render(&self, report: &BuildReport) -> Result<String, serde_json::Error> {
        match self.config.output {
            OutputFormat::Text => Ok(report.render_text()),
            OutputFormat::Json => serde_json::to_string_pretty(&report.summary()),
        }
    }
}
