use crate::framework::Framework;
use crate::package_manager::PackageManager;
use crate::plan::{Plan, Step};

/// Static description of what a framework template installs and generates.
pub struct Template {
    pub framework: Framework,
    pub banner: &'static str,
    pub dependencies: &'static [&'static str],
    pub dev_dependencies: &'static [&'static str],
    /// Config generators, run through the runtime's own CLI.
    pub generators: &'static [(&'static str, &'static [&'static str])],
}

static EXPRESS_TS: Template = Template {
    framework: Framework::ExpressTs,
    banner: "Creating an Express TypeScript project...",
    dependencies: &["express", "cors"],
    dev_dependencies: &[
        "typescript",
        "@types/node",
        "jest",
        "@types/jest",
        "ts-node",
        "ts-jest",
        "nodemon",
    ],
    generators: &[
        ("npx", &["tsc", "--init"]),
        ("npx", &["ts-jest", "config:init"]),
    ],
};

/// Look up the template for a framework.
pub fn template(framework: Framework) -> &'static Template {
    match framework {
        Framework::ExpressTs => &EXPRESS_TS,
    }
}

impl Template {
    /// Build the ordered command plan for the chosen package manager.
    pub fn plan(&self, pm: PackageManager) -> Plan {
        let program = pm.program();

        let deps = self
            .dependencies
            .iter()
            .map(|pkg| Step::in_project(program, pm.add_args(pkg)))
            .collect();
        let dev_deps = self
            .dev_dependencies
            .iter()
            .map(|pkg| Step::in_project(program, pm.add_dev_args(pkg)))
            .collect();
        let generators = self
            .generators
            .iter()
            .map(|(prog, args)| {
                Step::in_project(prog, args.iter().map(|a| a.to_string()).collect())
            })
            .collect();

        Plan::default()
            .stage(self.banner, vec![Step::in_project(program, pm.init_args())])
            .stage("Installing dependencies...", deps)
            .stage("Installing dev dependencies...", dev_deps)
            .stage("Creating configuration files...", generators)
    }
}
