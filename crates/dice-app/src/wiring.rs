//! Dependency Injection - Assemble the object graph once
//!
//! ```text
//! AppConfig ──► build_engine ──► RollCoordinator ◄── attach_presenter
//!                (adapter)         (use case)          (adapter)
//! ```

use std::io::Write;

use dice_adapter::{
    DieFacePresenter, JsonReportPresenter, RollReport, SeededRollEngine, ThreadRngRollEngine,
};
use dice_domain::{RollEngine, RollState};
use dice_usecase::{RollCoordinator, Subscription};
use tracing::info;

use crate::config::{AppConfig, OutputMode};
use crate::error::Result;

pub type AppCoordinator = RollCoordinator<Box<dyn RollEngine>>;

/// Exactly one engine per coordinator: seeded if asked, thread RNG otherwise
pub fn build_engine(seed: Option<u64>) -> Box<dyn RollEngine> {
    match seed {
        Some(seed) => {
            info!(seed, "Using seeded roll engine");
            Box::new(SeededRollEngine::from_seed(seed))
        }
        None => {
            info!("Using thread RNG roll engine");
            Box::new(ThreadRngRollEngine::new())
        }
    }
}

pub fn build_coordinator(config: &AppConfig) -> Result<AppCoordinator> {
    let initial = config.initial_result()?;
    Ok(RollCoordinator::with_initial(build_engine(config.seed), initial))
}

/// Subscribe the presenter for `mode`, writing to `sink`
pub fn attach_presenter<E, W>(
    coordinator: &mut RollCoordinator<E>,
    mode: OutputMode,
    sink: W,
) -> Subscription
where
    E: RollEngine,
    W: Write + Send + 'static,
{
    match mode {
        OutputMode::Face(style) => coordinator.subscribe(DieFacePresenter::new(sink, style)),
        OutputMode::Json => coordinator.subscribe(JsonReportPresenter::new(sink)),
    }
}

/// Render a state the same way the attached presenter would
pub fn render(mode: OutputMode, state: &RollState) -> Result<String> {
    match mode {
        OutputMode::Face(style) => Ok(style.render(state.result())),
        OutputMode::Json => Ok(RollReport::from_state(state).to_json_line()?),
    }
}
