//! Integration tests for rowlog-config
//!
//! These tests verify the full config loading pipeline with real file system operations.

use std::path::PathBuf;

use rowlog_config::logging::LogLevel;
use rowlog_config::testing::TestEnvironment;
use rowlog_config::Config;

/// Test config loading from a real global config file
#[test]
fn test_load_global_config_from_file() {
    let env = TestEnvironment::new().unwrap();
    let global_dir = env.home.join(".rowlog");
    std::fs::create_dir_all(&global_dir).unwrap();

    let config_content = r#"
[data]
file = "/custom/people.csv"

[logging]
level = "trace"
"#;
    std::fs::write(global_dir.join("config.toml"), config_content).unwrap();

    let config = Config::load_from(
        Some(&global_dir.join("config.toml")),
        &env.project_config_path(),
        |_| None,
    )
    .unwrap()
    .config;

    assert_eq!(config.data.file, PathBuf::from("/custom/people.csv"));
    assert_eq!(config.logging.level, LogLevel::Trace);
}

/// Test config hierarchy: project overrides global, env overrides both
#[test]
fn test_config_hierarchy() {
    let env = TestEnvironment::new().unwrap();
    let global = env.home.join("config.toml");
    std::fs::write(&global, "[data]\nfile = \"global.csv\"\n").unwrap();
    env.write_project_config("[data]\nfile = \"project.csv\"\n")
        .unwrap();

    let from_files =
        Config::load_from(Some(&global), &env.project_config_path(), |_| None).unwrap();
    assert_eq!(from_files.sources.len(), 2);
    assert_eq!(from_files.config.data.file, PathBuf::from("project.csv"));

    let from_env = Config::load_from(Some(&global), &env.project_config_path(), |key| {
        (key == "ROWLOG_FILE").then(|| "env.csv".to_string())
    })
    .unwrap();
    assert_eq!(from_env.config.data.file, PathBuf::from("env.csv"));
}

/// Partial config files only touch the sections they name
#[test]
fn test_partial_config_keeps_defaults() {
    let env = TestEnvironment::new().unwrap();
    env.write_project_config("[logging]\nlevel = \"info\"\n")
        .unwrap();

    let config = Config::load_from(None, &env.project_config_path(), |_| None)
        .unwrap()
        .config;
    assert_eq!(config.data.file, PathBuf::from("data.csv"));
    assert_eq!(config.logging.level, LogLevel::Info);
}

/// Rendered config parses back into the same values
#[test]
fn test_rendered_config_reloads() {
    let env = TestEnvironment::new().unwrap();
    let mut config = Config::default();
    config.data.file = PathBuf::from("elsewhere.csv");
    config.logging.level = LogLevel::Debug;

    env.write_project_config(&config.to_toml().unwrap()).unwrap();
    let loaded = Config::load_from(None, &env.project_config_path(), |_| None).unwrap();
    assert_eq!(loaded.config, config);
    assert_eq!(loaded.sources, vec![env.project_config_path()]);
}
