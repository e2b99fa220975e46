//! Interactive mode - Enter rolls the die

use std::io::{BufRead, Write};

use dice_domain::RollEngine;
use dice_usecase::RollCoordinator;

use crate::config::OutputMode;
use crate::wiring::render;

/// Interactive presentation surface over a coordinator
///
/// Rolled faces are printed by the subscribed presenter; this loop
/// only reads gestures and prints prompts. In JSON mode prompts go to
/// `err` so `out` carries nothing but report lines.
pub struct InteractiveCli<'a, E> {
    coordinator: &'a mut RollCoordinator<E>,
    mode: OutputMode,
}

impl<'a, E: RollEngine> InteractiveCli<'a, E> {
    pub fn new(coordinator: &'a mut RollCoordinator<E>, mode: OutputMode) -> Self {
        Self { coordinator, mode }
    }

    /// Run until "quit" or end of input
    pub fn run<R: BufRead>(
        &mut self,
        input: R,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let notes = self.notes(out, err);
        writeln!(notes, "Dice Roller")?;
        writeln!(notes, "Press Enter to roll, type help for commands, q to exit")?;
        self.show_state(out)?;

        for line in input.lines() {
            let line = line?;
            if self.handle_command(line.trim(), out, err)? {
                return Ok(());
            }
        }

        Ok(())
    }

    fn handle_command(
        &mut self,
        input: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> anyhow::Result<bool> {
        match input {
            "" | "r" | "roll" => {
                self.coordinator.request_roll();
            }
            "s" | "state" => self.show_state(out)?,
            "h" | "help" => {
                let notes = self.notes(out, err);
                writeln!(notes, "Commands:")?;
                writeln!(notes, "  <Enter>, roll  - Roll the die")?;
                writeln!(notes, "  state          - Show the current face")?;
                writeln!(notes, "  quit           - Exit")?;
            }
            "q" | "quit" | "exit" => {
                writeln!(self.notes(out, err), "Goodbye!")?;
                return Ok(true);
            }
            other => writeln!(self.notes(out, err), "Unknown command: {}", other)?,
        }
        Ok(false)
    }

    /// Where prompts and help text go for the current mode
    fn notes<'w>(&self, out: &'w mut dyn Write, err: &'w mut dyn Write) -> &'w mut dyn Write {
        match self.mode {
            OutputMode::Json => err,
            OutputMode::Face(_) => out,
        }
    }

    fn show_state(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(out, "{}", render(self.mode, &self.coordinator.state())?)?;
        Ok(())
    }
}
