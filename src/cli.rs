//! Command-line front end
//!
//! Reads text from a file or stdin, calls the api commands and renders the
//! answer as a labelled table or JSON.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::api::commands::{analysis, palette, settings};
use crate::config::get_all_stat_cards;
use crate::core::features;
use crate::core::features::text_analyser_logic::Analyzer;
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::{AppSettings, OutputFormat};
use crate::shared::types::{ActionType, CommandItem, TextAnalysisRequest, TextAnalysisResponse};

#[derive(Parser, Debug)]
#[command(name = "text-stats")]
#[command(about = "Character, word, sentence and paragraph statistics for any text")]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print all statistics for a text
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Also report grapheme, line and Unicode word counts
        #[arg(short, long)]
        details: bool,

        /// Reading speed in words per minute
        #[arg(long)]
        wpm: Option<u32>,
    },
    /// Run one command by id (see `commands`)
    Run {
        /// Command id, e.g. count_words or copy_text
        id: String,

        #[command(flatten)]
        input: InputArgs,
    },
    /// List commands, ranked for the given text
    Commands {
        /// Text file to rank commands for ("-" for stdin)
        file: Option<PathBuf>,
    },
    /// Show or change the stored settings
    Settings {
        #[arg(long)]
        wpm: Option<u32>,

        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        #[arg(long)]
        details: Option<bool>,
    },
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Text file to read ("-" or absent for stdin)
    pub file: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Read the whole input document; `None` or `-` means stdin
pub async fn read_input(file: Option<&Path>) -> AppResult<String> {
    match file {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Io(format!("Failed to read {}: {}", path.display(), e))),
        _ => {
            let text = tokio::task::spawn_blocking(|| {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text).map(|_| text)
            })
            .await??;
            Ok(text)
        }
    }
}

/// Labelled table, one row per stat card
pub fn render_text(response: &TextAnalysisResponse) -> String {
    let cards = get_all_stat_cards();
    let width = cards.iter().map(|card| card.label.len()).max().unwrap_or(0);

    let mut out = String::new();
    for card in cards {
        let value = response.statistics.field_value(card.field).unwrap_or_default();
        out.push_str(&format!("{:<width$}  {}\n", card.label, value, width = width));
    }

    if let Some(details) = &response.details {
        let rows = [
            ("Graphemes", details.grapheme_count),
            ("Lines", details.line_count),
            ("Unicode words", details.unicode_word_count),
        ];
        for (label, value) in rows {
            out.push_str(&format!("{:<width$}  {}\n", label, value, width = width));
        }
    }
    out
}

pub fn render_commands(items: &[CommandItem]) -> String {
    let width = items.iter().map(|item| item.id.len()).max().unwrap_or(0);

    let mut out = String::new();
    for item in items {
        let description = item.description.as_deref().unwrap_or(&item.label);
        match &item.shortcut {
            Some(shortcut) => out.push_str(&format!("{:<width$}  {} [{}]\n", item.id, description, shortcut, width = width)),
            None => out.push_str(&format!("{:<width$}  {}\n", item.id, description, width = width)),
        }
    }
    out
}

fn output_format(json_flag: bool, settings: &AppSettings) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        settings.preferences.output_format
    }
}

/// Execute a parsed command line, returning what to print on stdout
pub async fn execute(cli: Cli) -> AppResult<String> {
    let config_path = cli.config.as_deref();
    let mut app_settings = settings::get_settings(config_path).await?;

    match cli.command {
        Command::Analyze { input, details, wpm } => {
            let analyzer = match wpm {
                Some(wpm) => Analyzer::new(wpm)?,
                None => app_settings.analyzer()?,
            };
            let text = read_input(input.file.as_deref()).await?;
            let request = TextAnalysisRequest {
                text,
                include_details: details || app_settings.preferences.show_details,
            };
            let response = analysis::analyze_text(request, analyzer).await?;

            match output_format(input.json, &app_settings) {
                OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&response)?)),
                OutputFormat::Text => Ok(render_text(&response)),
            }
        }
        Command::Run { id, input } => {
            let command = features::find_command(&id)
                .ok_or_else(|| AppError::Validation(format!("Unknown command: {}", id)))?;
            // Sample and clear never look at the text, so don't wait on stdin
            let text = match command.action_type {
                Some(ActionType::SampleText | ActionType::ClearText) => String::new(),
                _ => read_input(input.file.as_deref()).await?,
            };
            let response = palette::execute_command(&id, &text, app_settings.preferences.words_per_minute).await?;

            match output_format(input.json, &app_settings) {
                OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&response)?)),
                OutputFormat::Text => Ok(format!("{}\n", response.result)),
            }
        }
        Command::Commands { file } => {
            let text = match file {
                Some(path) => Some(read_input(Some(path.as_path())).await?),
                None => None,
            };
            Ok(render_commands(&palette::get_command_items(text.as_deref())))
        }
        Command::Settings { wpm, format, details } => {
            let changed = wpm.is_some() || format.is_some() || details.is_some();
            if let Some(wpm) = wpm {
                app_settings.preferences.words_per_minute = wpm;
            }
            if let Some(format) = format {
                app_settings.preferences.output_format = format.into();
            }
            if let Some(details) = details {
                app_settings.preferences.show_details = details;
            }
            if changed {
                settings::save_settings(&app_settings, config_path).await?;
                tracing::info!("settings saved");
            }
            Ok(format!("{}\n", serde_json::to_string_pretty(&app_settings)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::text_analyser_logic::analyze;

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["text-stats", "analyze", "notes.txt", "--json", "--wpm", "300"]).unwrap();
        match cli.command {
            Command::Analyze { input, details, wpm } => {
                assert_eq!(input.file, Some(PathBuf::from("notes.txt")));
                assert!(input.json);
                assert!(!details);
                assert_eq!(wpm, Some(300));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::try_parse_from(["text-stats", "--config", "s.json", "run", "count_words"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("s.json")));
        assert!(matches!(cli.command, Command::Run { ref id, .. } if id == "count_words"));
    }

    #[test]
    fn test_render_text_rows() {
        let response = TextAnalysisResponse {
            statistics: analyze("Hello world"),
            details: None,
        };
        let rendered = render_text(&response);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Characters (with spaces)"));
        assert!(lines[0].ends_with(" 11"));
        assert!(lines[7].ends_with(" Hello"));
    }

    #[test]
    fn test_render_commands_shows_shortcuts() {
        let rendered = render_commands(&palette::get_command_items(None));
        assert!(rendered.lines().any(|l| l.starts_with("copy_text") && l.ends_with("[Ctrl+Enter]")));
        assert!(rendered.lines().any(|l| l.starts_with("clear_text") && l.ends_with("[Ctrl+K]")));
    }

    #[tokio::test]
    async fn test_execute_analyze_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("settings.json");
        let input = dir.path().join("input.txt");
        std::fs::write(&input, "One. Two! Three?").unwrap();

        let cli = Cli::try_parse_from([
            "text-stats",
            "--config",
            config.to_str().unwrap(),
            "analyze",
            input.to_str().unwrap(),
            "--json",
        ])
        .unwrap();
        let out = execute(cli).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["statistics"]["sentenceCount"], 3);
        assert_eq!(json["statistics"]["wordCount"], 3);
    }

    #[tokio::test]
    async fn test_execute_settings_update() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("settings.json");

        let cli = Cli::try_parse_from([
            "text-stats",
            "--config",
            config.to_str().unwrap(),
            "settings",
            "--wpm",
            "180",
            "--format",
            "json",
        ])
        .unwrap();
        execute(cli).await.unwrap();

        let saved = AppSettings::load_from(&config).await.unwrap();
        assert_eq!(saved.preferences.words_per_minute, 180);
        assert_eq!(saved.preferences.output_format, OutputFormat::Json);
    }

    #[tokio::test]
    async fn test_run_sample_without_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("settings.json");

        let cli = Cli::try_parse_from([
            "text-stats",
            "--config",
            config.to_str().unwrap(),
            "run",
            "sample_text",
            "--json",
        ])
        .unwrap();
        let out = execute(cli).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        let sample = json["result"].as_str().unwrap();
        assert!(features::samples::SAMPLE_TEXTS.contains(&sample));
    }

    #[tokio::test]
    async fn test_run_unknown_command_reads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("settings.json");

        let cli = Cli::try_parse_from(["text-stats", "--config", config.to_str().unwrap(), "run", "translate"]).unwrap();
        assert!(matches!(execute(cli).await, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_analyze_file_with_byte_order_mark() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("settings.json");
        let input = dir.path().join("bom.txt");
        std::fs::write(&input, "\u{FEFF}Hello world").unwrap();

        let cli = Cli::try_parse_from([
            "text-stats",
            "--config",
            config.to_str().unwrap(),
            "analyze",
            input.to_str().unwrap(),
            "--json",
        ])
        .unwrap();
        let out = execute(cli).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["statistics"]["wordCount"], 2);
        assert_eq!(json["statistics"]["avgWordLength"], 5.0);
        assert_eq!(json["statistics"]["longestWord"], "Hello");
    }

    #[tokio::test]
    async fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(Some(&dir.path().join("nope.txt"))).await.unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
