//! Argument assembly for Terraform, tfsec, infracost and go.

use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::environment::Environment;
use crate::shell::Invocation;

/// One external tool step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    /// `terraform init` in the target directory.
    Init,
    /// `terraform plan`, saving the change-set to `plan_file`.
    Plan { plan_file: &'a Path },
    /// `terraform apply` in the target directory.
    Apply,
    /// `terraform show -json` of a saved plan (stdout captured).
    ShowPlanAsJson { plan_file: &'a Path },
    /// `terraform fmt` over the target path.
    FormatCheck,
    /// `tfsec` over the target directory.
    SecurityScan,
    /// `infracost breakdown` of the target plan JSON.
    CostBreakdown,
    /// `go test` of every package under the target directory.
    UnitTest,
}

impl Action<'_> {
    /// Short label used in reports and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Plan { .. } => "plan",
            Self::Apply => "apply",
            Self::ShowPlanAsJson { .. } => "show",
            Self::FormatCheck => "fmt",
            Self::SecurityScan => "scan",
            Self::CostBreakdown => "cost",
            Self::UnitTest => "test",
        }
    }
}

/// Builds tool invocations for one project.
#[derive(Debug, Clone)]
pub struct CommandBuilder<'a> {
    config: &'a ProjectConfig,
    automated: bool,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(config: &'a ProjectConfig, automated: bool) -> Self {
        Self { config, automated }
    }

    pub fn is_automated(&self) -> bool {
        self.automated
    }

    /// Saved plan for `env`.
    pub fn plan_file(&self, env: &Environment) -> PathBuf {
        self.config
            .directories
            .build
            .join(format!("{}.tfplan", env.name()))
    }

    /// JSON rendering of the saved plan for `env`.
    pub fn plan_json_file(&self, env: &Environment) -> PathBuf {
        self.config
            .directories
            .build
            .join(format!("{}.tfplan.json", env.name()))
    }

    /// Assemble the invocation for `action` against `target`.
    ///
    /// `target` is the Terraform working directory for init/plan/apply/show,
    /// the path to format or scan, the plan JSON for cost breakdown and the
    /// test root for unit tests. It is not checked for existence.
    pub fn build(&self, action: Action<'_>, target: &Path) -> Invocation {
        let tools = &self.config.tools;
        let lock_timeout = format!("-lock-timeout={}s", self.config.lock_timeout);
        let chdir = format!("-chdir={}", target.display());

        match action {
            Action::Init => {
                let mut args = vec![chdir, "init".into(), "-reconfigure".into()];
                self.automate(&mut args, &["-input=false", "-no-color"]);
                Invocation::new(&tools.terraform, args)
            }
            Action::Plan { plan_file } => {
                let mut args = vec![
                    chdir,
                    "plan".into(),
                    lock_timeout,
                    format!("-out={}", plan_file.display()),
                ];
                self.automate(&mut args, &["-input=false", "-no-color"]);
                Invocation::new(&tools.terraform, args)
            }
            Action::Apply => {
                let mut args = vec![chdir, "apply".into(), lock_timeout];
                self.automate(&mut args, &["-auto-approve", "-input=false", "-no-color"]);
                Invocation::new(&tools.terraform, args)
            }
            Action::ShowPlanAsJson { plan_file } => {
                let mut args = vec![chdir, "show".into(), "-json".into()];
                self.automate(&mut args, &["-no-color"]);
                args.push(plan_file.display().to_string());
                Invocation::new(&tools.terraform, args).capture_stdout()
            }
            Action::FormatCheck => {
                let mut args = vec!["fmt".to_string(), "-recursive".into()];
                self.automate(&mut args, &["-check", "-write=false", "-no-color"]);
                args.push(target.display().to_string());
                Invocation::new(&tools.terraform, args)
            }
            Action::SecurityScan => Invocation::new(
                &tools.tfsec,
                vec![
                    target.display().to_string(),
                    "--verbose".into(),
                    "--no-color".into(),
                ],
            ),
            Action::CostBreakdown => {
                let mut args = vec![
                    "breakdown".to_string(),
                    "--path".into(),
                    target.display().to_string(),
                ];
                self.automate(&mut args, &["--no-color"]);
                Invocation::new(&tools.infracost, args)
            }
            Action::UnitTest => Invocation::new(
                &tools.go,
                vec![
                    "test".to_string(),
                    "-v".into(),
                    "-count=1".into(),
                    "./...".into(),
                ],
            )
            .current_dir(target),
        }
    }

    fn automate(&self, args: &mut Vec<String>, flags: &[&str]) {
        if self.automated {
            args.extend(flags.iter().map(|f| f.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::EnvironmentRegistry;

    fn config() -> ProjectConfig {
        ProjectConfig::default().resolve_paths(Path::new("/proj"))
    }

    fn env(name: &str) -> Environment {
        EnvironmentRegistry::new(["test", "live"])
            .select(name)
            .unwrap()
            .remove(0)
    }

    fn args(inv: &Invocation) -> Vec<&str> {
        inv.args.iter().map(String::as_str).collect()
    }

    #[test]
    fn init_interactive() {
        let config = config();
        let inv = CommandBuilder::new(&config, false).build(Action::Init, Path::new("/proj/infrastructure/test"));
        assert_eq!(inv.program, "terraform");
        assert_eq!(
            args(&inv),
            vec!["-chdir=/proj/infrastructure/test", "init", "-reconfigure"]
        );
    }

    #[test]
    fn init_automated_appends_flags() {
        let config = config();
        let inv = CommandBuilder::new(&config, true).build(Action::Init, Path::new("dir"));
        assert_eq!(
            args(&inv),
            vec!["-chdir=dir", "init", "-reconfigure", "-input=false", "-no-color"]
        );
    }

    #[test]
    fn plan_passes_lock_timeout_and_out_file() {
        let config = config();
        let builder = CommandBuilder::new(&config, false);
        let plan = builder.plan_file(&env("live"));
        let inv = builder.build(Action::Plan { plan_file: &plan }, Path::new("dir"));
        assert_eq!(
            args(&inv),
            vec![
                "-chdir=dir",
                "plan",
                "-lock-timeout=5s",
                "-out=/proj/build/live.tfplan"
            ]
        );
    }

    #[test]
    fn lock_timeout_comes_from_config() {
        let mut config = config();
        config.lock_timeout = 42;
        let inv = CommandBuilder::new(&config, false).build(Action::Apply, Path::new("dir"));
        assert!(args(&inv).contains(&"-lock-timeout=42s"));
    }

    #[test]
    fn apply_automated_auto_approves() {
        let config = config();
        let inv = CommandBuilder::new(&config, true).build(Action::Apply, Path::new("dir"));
        assert_eq!(
            args(&inv),
            vec![
                "-chdir=dir",
                "apply",
                "-lock-timeout=5s",
                "-auto-approve",
                "-input=false",
                "-no-color"
            ]
        );
    }

    #[test]
    fn apply_interactive_never_auto_approves() {
        let config = config();
        let inv = CommandBuilder::new(&config, false).build(Action::Apply, Path::new("dir"));
        assert!(!args(&inv).contains(&"-auto-approve"));
    }

    #[test]
    fn show_captures_stdout_and_ends_with_plan() {
        let config = config();
        let builder = CommandBuilder::new(&config, true);
        let plan = builder.plan_file(&env("test"));
        let inv = builder.build(Action::ShowPlanAsJson { plan_file: &plan }, Path::new("dir"));
        assert!(inv.capture_stdout);
        assert_eq!(
            args(&inv),
            vec!["-chdir=dir", "show", "-json", "-no-color", "/proj/build/test.tfplan"]
        );
    }

    #[test]
    fn fmt_interactive_rewrites_files() {
        let config = config();
        let inv = CommandBuilder::new(&config, false)
            .build(Action::FormatCheck, Path::new("infrastructure"));
        assert_eq!(args(&inv), vec!["fmt", "-recursive", "infrastructure"]);
    }

    #[test]
    fn fmt_automated_only_checks_and_path_is_last() {
        let config = config();
        let inv = CommandBuilder::new(&config, true)
            .build(Action::FormatCheck, Path::new("infrastructure"));
        assert_eq!(
            args(&inv),
            vec![
                "fmt",
                "-recursive",
                "-check",
                "-write=false",
                "-no-color",
                "infrastructure"
            ]
        );
    }

    #[test]
    fn scan_is_identical_in_both_modes() {
        let config = config();
        let a = CommandBuilder::new(&config, false).build(Action::SecurityScan, Path::new("infra"));
        let b = CommandBuilder::new(&config, true).build(Action::SecurityScan, Path::new("infra"));
        assert_eq!(a, b);
        assert_eq!(a.program, "tfsec");
        assert_eq!(args(&a), vec!["infra", "--verbose", "--no-color"]);
    }

    #[test]
    fn cost_breakdown_reads_plan_json() {
        let config = config();
        let inv = CommandBuilder::new(&config, true)
            .build(Action::CostBreakdown, Path::new("/proj/build/test.tfplan.json"));
        assert_eq!(inv.program, "infracost");
        assert_eq!(
            args(&inv),
            vec![
                "breakdown",
                "--path",
                "/proj/build/test.tfplan.json",
                "--no-color"
            ]
        );
    }

    #[test]
    fn unit_test_runs_inside_test_dir() {
        let config = config();
        let inv = CommandBuilder::new(&config, false).build(Action::UnitTest, Path::new("/proj/test"));
        assert_eq!(inv.program, "go");
        assert_eq!(args(&inv), vec!["test", "-v", "-count=1", "./..."]);
        assert_eq!(inv.cwd.as_deref(), Some(Path::new("/proj/test")));
    }

    #[test]
    fn tool_names_come_from_config() {
        let mut config = config();
        config.tools.terraform = "tofu".to_string();
        let inv = CommandBuilder::new(&config, false).build(Action::Init, Path::new("dir"));
        assert_eq!(inv.program, "tofu");
    }

    #[test]
    fn plan_artifacts_live_in_build_dir() {
        let config = config();
        let builder = CommandBuilder::new(&config, false);
        assert_eq!(
            builder.plan_json_file(&env("live")),
            PathBuf::from("/proj/build/live.tfplan.json")
        );
    }

    #[test]
    fn labels_are_short_names() {
        assert_eq!(Action::Init.label(), "init");
        assert_eq!(
            Action::Plan {
                plan_file: Path::new("p")
            }
            .label(),
            "plan"
        );
        assert_eq!(Action::CostBreakdown.label(), "cost");
    }
}
