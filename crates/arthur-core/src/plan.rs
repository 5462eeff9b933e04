//! Data-described command lists executed by the scaffolder.

/// Where a step must run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkingDir {
    /// Inside the freshly created project directory.
    ProjectRoot,
    /// Wherever `arthur` itself was started. No shipped template uses this yet.
    Inherit,
}

/// A single external process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: WorkingDir,
}

impl Step {
    pub fn in_project(program: &str, args: Vec<String>) -> Self {
        Self {
            program: program.to_string(),
            args,
            cwd: WorkingDir::ProjectRoot,
        }
    }

    /// Render as a shell-style command line for messages and logs.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// A group of steps announced by one progress line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub message: String,
    pub steps: Vec<Step>,
}

/// The ordered stages that scaffold one framework.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub stages: Vec<Stage>,
}

impl Plan {
    pub fn stage(mut self, message: &str, steps: Vec<Step>) -> Self {
        self.stages.push(Stage {
            message: message.to_string(),
            steps,
        });
        self
    }

    /// All steps, in execution order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.stages.iter().flat_map(|s| s.steps.iter())
    }
}
