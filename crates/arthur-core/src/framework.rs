/// Framework templates `arthur` knows how to scaffold.
///
/// The set is closed: clap rejects anything else before a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Framework {
    /// Express on a TypeScript Node runtime, tested with Jest
    #[value(name = "express-ts")]
    ExpressTs,
}

impl Framework {
    pub const ALL: &'static [Framework] = &[Framework::ExpressTs];

    /// The spelling used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Framework::ExpressTs => "express-ts",
        }
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
