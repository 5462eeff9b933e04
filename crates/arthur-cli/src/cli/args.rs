use clap::{ArgAction, Parser, Subcommand};

use arthur_core::framework::Framework;

#[derive(Parser)]
#[command(
    name = "arthur",
    about = "Scaffold new projects from framework templates",
    version = concat!("v", env!("CARGO_PKG_VERSION")),
    disable_version_flag = true
)]
pub struct Cli {
    /// Show the application's version and exit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new project folder with the files for the chosen framework
    New {
        /// Framework template for the project
        #[arg(long, value_enum)]
        framework: Framework,
        /// Name of the project folder to create
        #[arg(long)]
        name: String,
        /// Create a standard Dockerfile for the project (not implemented yet)
        #[arg(long)]
        dockerfile: bool,
        /// Use Yarn as the package manager
        #[arg(long)]
        yarn: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_new_with_flags() {
        let cli = Cli::try_parse_from([
            "arthur",
            "new",
            "--framework",
            "express-ts",
            "--name",
            "demo",
            "--yarn",
        ])
        .unwrap();

        let Command::New {
            framework,
            name,
            dockerfile,
            yarn,
        } = cli.command;
        assert_eq!(framework, Framework::ExpressTs);
        assert_eq!(name, "demo");
        assert!(!dockerfile);
        assert!(yarn);
    }

    #[test]
    fn unknown_framework_is_rejected() {
        let err = Cli::try_parse_from(["arthur", "new", "--framework", "rails", "--name", "demo"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn name_is_required() {
        let err = Cli::try_parse_from(["arthur", "new", "--framework", "express-ts"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn short_v_displays_version() {
        let err = Cli::try_parse_from(["arthur", "-v"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(err.to_string().contains(concat!("arthur v", env!("CARGO_PKG_VERSION"))));
    }

    #[test]
    fn version_wins_over_later_arguments() {
        let err = Cli::try_parse_from(["arthur", "--version", "new", "--framework", "nope"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }
}
