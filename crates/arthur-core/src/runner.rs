//! The process-invocation boundary.

#[cfg(any(test, feature = "test-util"))]
use std::cell::RefCell;
use std::path::Path;
#[cfg(any(test, feature = "test-util"))]
use std::path::PathBuf;
use std::process;

use crate::error::ArthurError;
use crate::plan::Step;

/// Exit status of a finished step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub code: Option<i32>,
}

impl Outcome {
    pub const SUCCESS: Outcome = Outcome { code: Some(0) };

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs one step to completion in `cwd`.
pub trait CommandRunner {
    fn run(&self, step: &Step, cwd: &Path) -> Result<Outcome, ArthurError>;
}

/// Spawns real processes with inherited stdio and waits for each to exit.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, step: &Step, cwd: &Path) -> Result<Outcome, ArthurError> {
        tracing::debug!(cwd = %cwd.display(), "running `{}`", step.command_line());

        // npm and yarn are .cmd shims on Windows and only resolve through the shell
        #[cfg(windows)]
        let status = process::Command::new("cmd")
            .arg("/C")
            .arg(&step.program)
            .args(&step.args)
            .current_dir(cwd)
            .status();
        #[cfg(not(windows))]
        let status = process::Command::new(&step.program)
            .args(&step.args)
            .current_dir(cwd)
            .status();

        let status = status.map_err(|source| ArthurError::Spawn {
            command: step.command_line(),
            source,
        })?;
        Ok(Outcome {
            code: status.code(),
        })
    }
}

/// An invocation captured by [`RecordingRunner`].
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Test double that records every step instead of spawning it.
///
/// Steps succeed unless their program was registered with
/// [`fail_program`](Self::fail_program).
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Default)]
pub struct RecordingRunner {
    invocations: RefCell<Vec<Invocation>>,
    failing: Vec<(String, Option<i32>)>,
    missing: Vec<String>,
}

#[cfg(any(test, feature = "test-util"))]
impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every step of `program` exit with `code`.
    pub fn fail_program(mut self, program: &str, code: Option<i32>) -> Self {
        self.failing.push((program.to_string(), code));
        self
    }

    /// Make every step of `program` fail to spawn, as if it were not installed.
    pub fn missing_program(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }
}

#[cfg(any(test, feature = "test-util"))]
impl CommandRunner for RecordingRunner {
    fn run(&self, step: &Step, cwd: &Path) -> Result<Outcome, ArthurError> {
        self.invocations.borrow_mut().push(Invocation {
            program: step.program.clone(),
            args: step.args.clone(),
            cwd: cwd.to_path_buf(),
        });

        if self.missing.contains(&step.program) {
            return Err(ArthurError::Spawn {
                command: step.command_line(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
            });
        }
        let outcome = self
            .failing
            .iter()
            .find(|(program, _)| *program == step.program)
            .map(|(_, code)| Outcome { code: *code })
            .unwrap_or(Outcome::SUCCESS);
        Ok(outcome)
    }
}
