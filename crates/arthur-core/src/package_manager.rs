use serde::{Deserialize, Serialize};

/// Node package managers a template can drive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
}

impl PackageManager {
    /// Map the CLI's `--yarn` switch, falling back to `default` when it is off.
    pub fn from_yarn_flag(yarn: bool, default: PackageManager) -> Self {
        if yarn {
            PackageManager::Yarn
        } else {
            default
        }
    }

    pub fn program(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Arguments for a non-interactive `package.json` init.
    pub fn init_args(self) -> Vec<String> {
        vec!["init".to_string(), "-y".to_string()]
    }

    /// Verb that adds a package to the manifest.
    pub fn add_verb(self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            PackageManager::Yarn => "add",
        }
    }

    /// Flag that marks an added package as a dev dependency.
    pub fn dev_flag(self) -> &'static str {
        match self {
            PackageManager::Npm => "--save-dev",
            PackageManager::Yarn => "-D",
        }
    }

    pub fn add_args(self, package: &str) -> Vec<String> {
        vec![self.add_verb().to_string(), package.to_string()]
    }

    pub fn add_dev_args(self, package: &str) -> Vec<String> {
        vec![
            self.add_verb().to_string(),
            self.dev_flag().to_string(),
            package.to_string(),
        ]
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.program())
    }
}
