//! dice roll command

use clap::Args;
use dice_domain::{RollEngine, RollState};
use dice_usecase::RollCoordinator;

#[derive(Debug, Args)]
pub struct RollCommand {
    /// Number of rolls
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,
}

impl RollCommand {
    /// Roll `count` times. Output comes from whatever presenter is subscribed.
    pub fn run<E: RollEngine>(&self, coordinator: &mut RollCoordinator<E>) -> RollState {
        for _ in 1..self.count {
            coordinator.request_roll();
        }
        coordinator.request_roll()
    }
}
