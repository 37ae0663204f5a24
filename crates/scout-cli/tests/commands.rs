//! Command execution against files on disk

use clap::Parser;
use scout_cli::cli::{ClassifyArgs, ConfigAction, ConfigArgs, DedupArgs, ItemSource, JudgeArg, RunArgs};
use scout_cli::commands::{execute_classify, execute_config, execute_dedup, execute_run};
use scout_cli::{Cli, CliError, Command, Config, Formatter, OutputFormat};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const ITEMS: &str = r#"[
    {"title": "Heat pump orders surge", "url": "https://a.example/1?utm_source=rss", "source": "Energy Weekly", "date": "2025-03-30"},
    {"title": "Heat pump orders surge", "url": "https://a.example/1", "source": "Energy Weekly", "date": "2025-03-30"},
    {"title": "Semaglutide shortage warning", "summary": "Pharmacies report gaps.", "url": "https://b.example/2", "source": "Health Desk", "tier": "policy", "date": "2025-03-29"}
]"#;

fn workspace() -> (TempDir, PathBuf, Config) {
    let dir = tempfile::tempdir().unwrap();
    let items = dir.path().join("items.json");
    fs::write(&items, ITEMS).unwrap();

    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[dedup]\nlanguage_filter = false\n").unwrap();
    let config = Config::load(Some(&config_path)).unwrap();

    (dir, items, config)
}

fn quiet() -> Formatter {
    Formatter::new(OutputFormat::Quiet, false)
}

#[test]
fn run_with_rules_only() {
    let (_dir, items, config) = workspace();
    let args = RunArgs {
        source: ItemSource { items: Some(items), stdin: false },
        now: Some("2025-03-31T12:00:00Z".to_string()),
        judge: JudgeArg::None,
        model: "llama3.1".to_string(),
        endpoint: None,
        top: Some(1),
    };
    execute_run(args, &config, &quiet()).unwrap();
}

#[test]
fn run_rejects_bad_now() {
    let (_dir, items, config) = workspace();
    let args = RunArgs {
        source: ItemSource { items: Some(items), stdin: false },
        now: Some("not a date".to_string()),
        judge: JudgeArg::None,
        model: "llama3.1".to_string(),
        endpoint: None,
        top: None,
    };
    assert!(matches!(
        execute_run(args, &config, &quiet()),
        Err(CliError::InvalidInput(_))
    ));
}

#[test]
fn dedup_reads_file() {
    let (_dir, items, config) = workspace();
    let args = DedupArgs {
        source: ItemSource { items: Some(items), stdin: false },
    };
    execute_dedup(args, &config, &quiet()).unwrap();
}

#[test]
fn missing_items_file_is_io_error() {
    let (dir, _items, config) = workspace();
    let args = DedupArgs {
        source: ItemSource { items: Some(dir.path().join("absent.json")), stdin: false },
    };
    assert!(matches!(
        execute_dedup(args, &config, &quiet()),
        Err(CliError::Io(_))
    ));
}

#[test]
fn classify_prints_verdict() {
    let (_dir, _items, config) = workspace();
    let args = ClassifyArgs {
        title: "Drug shortage".to_string(),
        summary: String::new(),
        source: String::new(),
    };
    execute_classify(args, &config, &quiet()).unwrap();
}

#[test]
fn config_init_and_show() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scout").join("config.toml");

    let init = ConfigArgs { action: ConfigAction::Init { force: false } };
    execute_config(init, Some(&path), &quiet()).unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("per_source_cap"));

    let again = ConfigArgs { action: ConfigAction::Init { force: false } };
    assert!(matches!(
        execute_config(again, Some(&path), &quiet()),
        Err(CliError::Config(_))
    ));

    let show = ConfigArgs { action: ConfigAction::Show };
    execute_config(show, Some(&path), &quiet()).unwrap();
}

#[test]
fn config_flag_parses_path() {
    let cli = Cli::parse_from(["scout", "--config", "/tmp/scout.toml", "config", "show"]);
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/scout.toml")));
    assert!(matches!(cli.command, Command::Config(_)));
}
