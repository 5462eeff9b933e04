pub mod args;

use std::io::{self, Write};

use colored::Colorize;

use arthur_core::config::Config;
use arthur_core::framework::Framework;
use arthur_core::package_manager::PackageManager;
use arthur_core::runner::SystemRunner;
use arthur_core::scaffold::{self, NewProject, Scaffolder};

use self::args::{Cli, Command};

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    match cli.command {
        Command::New {
            framework,
            name,
            dockerfile,
            yarn,
        } => cmd_new(framework, name, dockerfile, yarn)?,
    }

    Ok(())
}

fn cmd_new(
    framework: Framework,
    name: String,
    dockerfile: bool,
    yarn: bool,
) -> color_eyre::Result<()> {
    let config = Config::load()?;
    let request = NewProject {
        framework,
        name,
        package_manager: PackageManager::from_yarn_flag(yarn, config.package_manager),
        dockerfile,
    };
    tracing::debug!(
        config = ?Config::config_path(),
        package_manager = %request.package_manager,
        on_failure = ?config.on_failure,
        "resolved new-project settings"
    );

    let cwd = std::env::current_dir()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let target = scaffold::create_project_dir(&request, &cwd, &mut out)?;
    // Steps get their directory explicitly; this only keeps the process in
    // sync for anything that still reads the cwd.
    std::env::set_current_dir(&target.path)?;

    let scaffolder = Scaffolder::new(&SystemRunner, config.on_failure);
    let report = scaffold::scaffold(&request, &target, &scaffolder, &mut out)?;

    let failed = report.failed();
    if failed == 0 {
        writeln!(
            out,
            "{} {}",
            "Project created:".green().bold(),
            target.path.display()
        )?;
    } else {
        writeln!(
            out,
            "{} {} of {} steps failed; check the output above",
            "Project created with errors:".yellow().bold(),
            failed,
            report.steps.len()
        )?;
        for step in report.steps.iter().filter(|s| s.status != scaffold::StepStatus::Succeeded) {
            writeln!(out, "  {} {}", "x".red(), step.command)?;
        }
    }

    Ok(())
}
