//! Library integration tests.

use deploy_check::DeployCheckError;

#[test]
fn error_types_are_public() {
    let err = DeployCheckError::ToolNotFound { tool: "git".into() };
    assert!(err.to_string().contains("git"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> deploy_check::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use deploy_check::cli::{Cli, Commands};

    let cli = Cli::parse_from(["deploy-check", "check", "--json"]);
    assert!(cli.command.is_some());

    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn report_serializes_outcomes() {
    use deploy_check::checks::{CheckOutcome, CheckResult, Report};

    let report = Report::new(vec![
        CheckResult::new("DEPLOYMENT.md", CheckOutcome::pass("DEPLOYMENT.md found")),
        CheckResult::new(
            "Git sync",
            CheckOutcome::fail("Dirty working tree: uncommitted changes present")
                .with_hint("Commit and push your changes"),
        ),
    ]);

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["results"][0]["status"], "pass");
    assert_eq!(json["results"][1]["status"], "fail");
    assert_eq!(json["results"][1]["hint"], "Commit and push your changes");
    assert!(json["results"][0].get("hint").is_none());
}
