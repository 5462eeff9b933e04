use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ArthurError;
use crate::framework::Framework;
use crate::package_manager::PackageManager;
use crate::plan::{Plan, Step, WorkingDir};
use crate::project::ProjectTarget;
use crate::runner::CommandRunner;
use crate::template::template;

/// What to do when a step exits non-zero or cannot be spawned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log the failure and keep going with the next step.
    #[default]
    Continue,
    /// Stop at the first failed step.
    Abort,
}

/// A `new` request after argument parsing.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub framework: Framework,
    pub name: String,
    pub package_manager: PackageManager,
    /// Accepted for forward compatibility; no Dockerfile is generated yet.
    pub dockerfile: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Succeeded,
    Failed { code: Option<i32> },
    /// The process could not be started at all.
    NotStarted { reason: String },
}

#[derive(Debug, Clone)]
pub struct StepReport {
    pub command: String,
    pub status: StepStatus,
}

/// Per-step results of one scaffolding run, in execution order.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    pub steps: Vec<StepReport>,
}

impl ScaffoldReport {
    pub fn failed(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.status != StepStatus::Succeeded)
            .count()
    }
}

/// Executes command plans through a [`CommandRunner`].
pub struct Scaffolder<'r, R: CommandRunner + ?Sized> {
    runner: &'r R,
    policy: FailurePolicy,
}

impl<'r, R: CommandRunner + ?Sized> Scaffolder<'r, R> {
    pub fn new(runner: &'r R, policy: FailurePolicy) -> Self {
        Self { runner, policy }
    }

    /// Run every stage of `plan` in order for `target`, announcing each
    /// stage on `out` before its steps start.
    pub fn execute(
        &self,
        plan: &Plan,
        target: &ProjectTarget,
        out: &mut dyn Write,
    ) -> Result<ScaffoldReport, ArthurError> {
        let mut report = ScaffoldReport::default();

        for stage in &plan.stages {
            writeln!(out, "{}", stage.message)?;
            out.flush()?;

            for step in &stage.steps {
                let command = step.command_line();
                let status = match self.run_step(step, target) {
                    Ok(status) => status,
                    Err(e) => {
                        tracing::warn!("{e}");
                        report.steps.push(StepReport {
                            command,
                            status: StepStatus::NotStarted {
                                reason: e.to_string(),
                            },
                        });
                        if self.policy == FailurePolicy::Abort {
                            return Err(e);
                        }
                        continue;
                    }
                };

                report.steps.push(StepReport {
                    command: command.clone(),
                    status: status.clone(),
                });
                if let StepStatus::Failed { code } = status {
                    tracing::warn!(?code, "`{command}` failed");
                    if self.policy == FailurePolicy::Abort {
                        return Err(ArthurError::StepFailed { command, code });
                    }
                }
            }
        }

        Ok(report)
    }

    fn run_step(&self, step: &Step, target: &ProjectTarget) -> Result<StepStatus, ArthurError> {
        let cwd = match step.cwd {
            WorkingDir::ProjectRoot => target.path.as_path(),
            WorkingDir::Inherit => target.origin.as_path(),
        };
        let outcome = self.runner.run(step, cwd)?;
        if outcome.success() {
            Ok(StepStatus::Succeeded)
        } else {
            Ok(StepStatus::Failed { code: outcome.code })
        }
    }
}

/// Announce the request and create its project directory under `parent`.
pub fn create_project_dir(
    request: &NewProject,
    parent: &Path,
    out: &mut dyn Write,
) -> Result<ProjectTarget, ArthurError> {
    let target = ProjectTarget::new(parent, &request.name)?;

    writeln!(out, "Creating a new project...")?;
    writeln!(out, "Framework: {}", request.framework)?;
    writeln!(out, "Project name: {}", request.name)?;
    writeln!(out, "Creating project folder...")?;

    if target.prepare()? {
        tracing::debug!(path = %target.path.display(), "created project directory");
    }
    Ok(target)
}

/// Run the framework template for `request` inside an already prepared target.
pub fn scaffold<R: CommandRunner + ?Sized>(
    request: &NewProject,
    target: &ProjectTarget,
    scaffolder: &Scaffolder<'_, R>,
    out: &mut dyn Write,
) -> Result<ScaffoldReport, ArthurError> {
    if request.dockerfile {
        tracing::warn!("--dockerfile is not implemented yet; no Dockerfile will be written");
    }
    let plan = template(request.framework).plan(request.package_manager);
    scaffolder.execute(&plan, target, out)
}

/// Create the project directory and scaffold it in one go.
pub fn new_project<R: CommandRunner + ?Sized>(
    request: &NewProject,
    parent: &Path,
    runner: &R,
    policy: FailurePolicy,
    out: &mut dyn Write,
) -> Result<(ProjectTarget, ScaffoldReport), ArthurError> {
    let target = create_project_dir(request, parent, out)?;
    let report = scaffold(request, &target, &Scaffolder::new(runner, policy), out)?;
    Ok((target, report))
}
