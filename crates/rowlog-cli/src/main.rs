//! # rowlog CLI
//!
//! Appends the fixed rows to a CSV file, then prints every row in it.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rowlog_config::{log_cli_debug, log_cli_info, Config, PROJECT_CONFIG_PATH};
use rowlog_store::{append_rows, append_then_print, default_dataset, print_rows, Row};
use tracing::field::display;

/// rowlog - append rows to a CSV file and print it back
#[derive(Parser)]
#[command(name = "rowlog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// CSV file to use (overrides config and ROWLOG_FILE)
    #[arg(long, short, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Append the fixed rows without printing
    Append,

    /// Print every row in the file
    Show,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print config file locations
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load().context("Failed to load configuration")?;
    rowlog_config::logging::init_logging(loaded.config.logging.level);
    for source in &loaded.sources {
        log_cli_debug!("Loaded config file", path = display(source.display()));
    }

    let mut config = loaded.config;

    if let Some(file) = cli.file {
        config.data.file = file;
    }
    let data_file = config.data.file.clone();
    log_cli_debug!("Resolved data file", path = display(data_file.display()));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None => cmd_run(&data_file, &mut out),
        Some(Commands::Append) => cmd_append(&data_file),
        Some(Commands::Show) => cmd_show(&data_file, &mut out),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(&config, &mut out),
            ConfigCommands::Path => cmd_config_path(&mut out),
        },
    }
}

fn fixed_rows() -> impl Iterator<Item = Row> {
    default_dataset().into_iter().map(Row::from)
}

fn cmd_run(path: &Path, out: &mut impl Write) -> Result<()> {
    let summary = append_then_print(path, fixed_rows(), out)
        .with_context(|| format!("Failed to update {}", path.display()))?;
    log_cli_info!(
        "Run complete",
        appended = summary.appended,
        printed = summary.printed
    );
    Ok(())
}

fn cmd_append(path: &Path) -> Result<()> {
    let n = append_rows(path, fixed_rows())
        .with_context(|| format!("Failed to append to {}", path.display()))?;
    log_cli_info!("Append complete", appended = n);
    Ok(())
}

fn cmd_show(path: &Path, out: &mut impl Write) -> Result<()> {
    print_rows(path, out).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(())
}

fn cmd_config_show(config: &Config, out: &mut impl Write) -> Result<()> {
    let rendered = config.to_toml().context("Failed to render configuration")?;
    write!(out, "{}", rendered)?;
    Ok(())
}

fn cmd_config_path(out: &mut impl Write) -> Result<()> {
    match Config::global_config_path() {
        Some(p) => writeln!(out, "Global:  {}", p.display())?,
        None => writeln!(out, "Global:  (no home directory)")?,
    }
    writeln!(out, "Project: {}", PROJECT_CONFIG_PATH)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_runs_default() {
        let cli = Cli::try_parse_from(["rowlog"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_file_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["rowlog", "show", "--file", "x.csv"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Show)));
        assert_eq!(cli.file, Some(PathBuf::from("x.csv")));
    }

    #[test]
    fn test_config_show_renders_sections() {
        let mut out = Vec::new();
        cmd_config_show(&Config::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[data]"));
        assert!(text.contains("[logging]"));
    }

    #[test]
    fn test_config_path_lists_both() {
        let mut out = Vec::new();
        cmd_config_path(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Global:"));
        assert!(text.contains("Project: .rowlog/config.toml"));
    }
}
