//! Preflight detection and sequential execution of the reset steps.
//!
//! The sequencer wraps the `docker` CLI. It probes for the binary before
//! doing anything, then runs the three reset steps in table order, stopping
//! at the first failure. Step subprocesses inherit the terminal so compose
//! output streams through; only the preflight probe captures its output.

use std::process::{Command, Stdio};

use crate::error::{ResetError, Result};
use crate::step::{Step, RESET_STEPS};

const DEFAULT_PROGRAM: &str = "docker";

const RULE: &str = "============================================================";

/// The result of running one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Non-zero exit. `code` is `None` when the process was killed by a signal.
    Failed { code: Option<i32> },
    /// The subprocess could not be launched at all.
    LaunchFailed(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Runs the fixed reset sequence against the orchestration binary.
pub struct Sequencer {
    program: String,
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    /// Point the sequencer at a different binary.
    /// Used in tests to inject a stub executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Verify the orchestration tool is invocable: the binary must resolve
    /// on PATH and `compose version` must exit zero. The probe's output is
    /// captured, not echoed.
    pub fn preflight(&self) -> Result<()> {
        if let Err(e) = which::which(&self.program) {
            tracing::debug!(program = %self.program, error = %e, "binary not found");
            return Err(ResetError::ComposeUnavailable);
        }

        let probe = Command::new(&self.program)
            .args(["compose", "version"])
            .stdin(Stdio::null())
            .output();

        match probe {
            Ok(out) if out.status.success() => Ok(()),
            Ok(out) => {
                tracing::debug!(status = ?out.status, "compose version probe failed");
                Err(ResetError::ComposeUnavailable)
            }
            Err(e) => {
                tracing::debug!(error = %e, "compose version probe could not run");
                Err(ResetError::ComposeUnavailable)
            }
        }
    }

    /// Run one step to completion, printing its banner and outcome marker.
    ///
    /// A launch error is not propagated: it is printed, traced, and folded
    /// into a failed outcome so the caller aborts the same way.
    pub fn run_step(&self, step: &Step) -> Outcome {
        let command_line = step.command_line(&self.program);
        println!("\n{RULE}");
        println!("Running: {}", step.description);
        println!("Command: {command_line}");
        println!("{RULE}\n");

        tracing::debug!(command = %command_line, "spawning step");

        match Command::new(&self.program).args(step.args).status() {
            Ok(status) if status.success() => {
                println!("\n✓ {} completed successfully", step.description);
                Outcome::Success
            }
            Ok(status) => {
                match status.code() {
                    Some(code) => {
                        println!("\n✗ {} failed with exit code {code}", step.description)
                    }
                    None => println!("\n✗ {} terminated by signal", step.description),
                }
                Outcome::Failed {
                    code: status.code(),
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "step failed to launch");
                println!("\n✗ failed to launch command: {e}");
                Outcome::LaunchFailed(e.to_string())
            }
        }
    }

    /// Run the preflight check, then all three steps in declared order,
    /// stopping at the first failure. On full success prints the final
    /// banner and returns Ok.
    pub fn run_all(&self) -> Result<()> {
        println!("\n{RULE}");
        println!("Docker Compose Reset & Migration Script");
        println!("{RULE}");

        self.preflight()?;

        for step in &RESET_STEPS {
            if !self.run_step(step).is_success() {
                return Err(ResetError::StepFailed(step.description.to_string()));
            }
        }

        println!("\n{RULE}");
        println!("✓ All operations completed successfully!");
        println!("✓ Migrations have been applied automatically");
        println!("{RULE}\n");

        Ok(())
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}
