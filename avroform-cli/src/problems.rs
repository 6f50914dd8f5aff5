use std::fmt;

use color_eyre::eyre::{Result, eyre};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Input,
    Output,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Input => f.write_str("input"),
            Stage::Output => f.write_str("output"),
        }
    }
}

/// Everything wrong with the command line, reported together before the
/// editor opens.
#[derive(Debug, Default)]
pub struct Problems {
    found: Vec<(Stage, String)>,
}

impl Problems {
    pub fn report(&mut self, stage: Stage, message: impl Into<String>) {
        self.found.push((stage, message.into()));
    }

    pub fn count(&self, stage: Stage) -> usize {
        self.found.iter().filter(|(s, _)| *s == stage).count()
    }

    pub fn finish(self) -> Result<()> {
        if self.found.is_empty() {
            return Ok(());
        }
        let lines: Vec<String> = self
            .found
            .iter()
            .map(|(stage, message)| format!("  - {stage}: {message}"))
            .collect();
        Err(eyre!(
            "cannot continue ({} problem(s)):\n{}",
            self.found.len(),
            lines.join("\n")
        ))
    }
}
