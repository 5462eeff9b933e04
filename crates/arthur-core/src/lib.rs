//! Core library for `arthur`, a project scaffolding tool.
//!
//! Maps each supported framework to a data-described list of package
//! manager and code-generator invocations, and runs that list inside a
//! freshly created project directory through a substitutable
//! [`runner::CommandRunner`].

pub mod config;
pub mod error;
pub mod framework;
pub mod package_manager;
pub mod plan;
pub mod project;
pub mod runner;
pub mod scaffold;
pub mod template;
