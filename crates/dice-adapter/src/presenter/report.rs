//! RollReport - JSON view of a RollState

use std::io::Write;

use dice_domain::RollState;
use dice_usecase::RollObserver;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::die_face::glyph;

/// One line of `--json` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollReport {
    pub value: u8,
    pub generation: u64,
    pub face: String,
}

impl RollReport {
    pub fn from_state(state: &RollState) -> Self {
        Self {
            value: state.value(),
            generation: state.generation(),
            face: glyph(state.result()).to_string(),
        }
    }

    /// Serialize as a single JSON line
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&RollState> for RollReport {
    fn from(state: &RollState) -> Self {
        Self::from_state(state)
    }
}

/// Writes one `RollReport` JSON line per published state
#[derive(Debug)]
pub struct JsonReportPresenter<W> {
    sink: W,
}

impl<W: Write> JsonReportPresenter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn present(&mut self, state: &RollState) -> std::io::Result<()> {
        let line = RollReport::from_state(state).to_json_line()?;
        writeln!(self.sink, "{}", line)?;
        self.sink.flush()
    }
}

impl<W: Write + Send> RollObserver for JsonReportPresenter<W> {
    fn on_roll(&mut self, state: &RollState) {
        if let Err(e) = self.present(state) {
            warn!(
                error = %e,
                generation = state.generation(),
                "Failed to write roll report"
            );
        }
    }
}
