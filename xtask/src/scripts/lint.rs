use crate::cli::LintArgs;
use color_eyre::eyre::{eyre, Result};
use duct::cmd;

// ---------------------------------------------------------------------------
// Functional Core
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Fmt,
    Clippy,
    Test,
}

const PIPELINE: &[Step] = &[Step::Fmt, Step::Clippy, Step::Test];

impl Step {
    fn skipped(self, args: &LintArgs) -> bool {
        match self {
            Step::Fmt => args.no_fmt,
            Step::Clippy => args.no_clippy,
            Step::Test => args.no_test,
        }
    }

    /// Cargo arguments for this step; `fix` applies changes instead of checking.
    fn cargo_args(self, fix: bool) -> Vec<&'static str> {
        match (self, fix) {
            (Step::Fmt, false) => vec!["fmt", "--all", "--check"],
            (Step::Fmt, true) => vec!["fmt", "--all"],
            (Step::Clippy, false) => vec![
                "clippy",
                "--workspace",
                "--all-targets",
                "--",
                "-D",
                "warnings",
            ],
            (Step::Clippy, true) => vec![
                "clippy",
                "--workspace",
                "--all-targets",
                "--fix",
                "--allow-dirty",
                "--",
                "-D",
                "warnings",
            ],
            (Step::Test, _) => vec!["test", "--workspace"],
        }
    }
}

fn display_name(args: &[&str]) -> String {
    format!("cargo {}", args.join(" "))
}

// ---------------------------------------------------------------------------
// Imperative Shell
// ---------------------------------------------------------------------------

pub fn run(args: &LintArgs) -> Result<()> {
    for step in PIPELINE.iter().copied().filter(|s| !s.skipped(args)) {
        let cargo_args = step.cargo_args(args.fix);
        let name = display_name(&cargo_args);

        let output = cmd("cargo", &cargo_args)
            .stderr_to_stdout()
            .stdout_capture()
            .unchecked()
            .run()?;
        let text = String::from_utf8_lossy(&output.stdout);

        if !output.status.success() {
            print!("{text}");
            return Err(eyre!("lint failed at: {name}"));
        }

        if args.verbose {
            print!("{text}");
        }
        println!("✓ {name}");
    }

    Ok(())
}
