//! # textstat
//!
//! A CLI tool for counting words and letters in text.
//!
//! ## Overview
//!
//! textstat is built on top of textstatlib. For every input it prints the
//! three counters a live text field would show: word count and letter
//! counts with and without whitespace.
//!
//! ## Features
//!
//! - **Any input**: Files, directories, stdin, or an inline `--text`
//! - **Glob filtering**: Include/exclude files with glob patterns
//! - **Extended report**: Sentences, vocabulary and readability scores
//! - **Live mode**: Counters redrawn as lines arrive on stdin
//! - **Multiple output formats**: Text (default), JSON
//!
//! ## Usage
//!
//! ```bash
//! # Count stdin
//! echo "hello world" | textstat
//!
//! # Count an inline string
//! textstat --text "  multiple   spaces  "
//!
//! # Count a directory, one row per file, largest first
//! textstat docs --by-file --sort words --include "**/*.md"
//!
//! # Extended report as JSON
//! textstat report essay.txt --output json
//!
//! # Live counters while typing
//! textstat live
//! ```

mod config;
mod live;
mod render;

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{debug, info};
use textstatlib::{
    analyze_with, count_paths, count_reader, Aggregation, CountOptions, EmptyInput, FilterConfig,
    OrderBy, Ordering, StatsTable,
};

use crate::config::Config;
use crate::render::OutputFormat;

/// Name used for stdin in output and errors
const STDIN_NAME: &str = "<stdin>";
/// Name used for `--text` input
const TEXT_NAME: &str = "<text>";

fn text_arg() -> Arg {
    Arg::new("text")
        .short('t')
        .long("text")
        .help("Count this string instead of reading files or stdin")
}

fn empty_input_arg() -> Arg {
    Arg::new("empty-input")
        .long("empty-input")
        .value_parser(["zero", "single-token"])
        .help("Word count for empty or whitespace-only text")
}

/// Arguments shared by the root command and `count`
fn count_args() -> Vec<Arg> {
    vec![
        Arg::new("paths")
            .action(ArgAction::Append)
            .help("Files or directories to count (defaults to stdin, '-' for stdin)"),
        text_arg().conflicts_with("paths"),
        Arg::new("include")
            .short('i')
            .long("include")
            .action(ArgAction::Append)
            .help("Include files matching glob pattern"),
        Arg::new("exclude")
            .short('e')
            .long("exclude")
            .action(ArgAction::Append)
            .help("Exclude files matching glob pattern"),
        Arg::new("by-file")
            .short('f')
            .long("by-file")
            .action(ArgAction::SetTrue)
            .help("Show breakdown by file"),
        Arg::new("sort")
            .short('s')
            .long("sort")
            .value_parser(["path", "words", "letters", "chars"])
            .help("Order per-file rows (counts largest first)"),
        empty_input_arg(),
    ]
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("textstat")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Word and letter counter for files, stdin and live input")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .global(true)
                .value_parser(["text", "json"])
                .help("Output format (defaults to text)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log more to stderr (-v info, -vv debug)"),
        )
        .args(count_args())
        .subcommand(
            Command::new("count")
                .about("Count words and letters (default command)")
                .args(count_args()),
        )
        .subcommand(
            Command::new("report")
                .about("Show sentences, vocabulary and readability scores")
                .arg(Arg::new("path").help("File to analyze (defaults to stdin)"))
                .arg(text_arg().conflicts_with("path"))
                .arg(empty_input_arg()),
        )
        .subcommand(
            Command::new("live")
                .about("Redraw the counters as lines arrive on stdin")
                .arg(empty_input_arg()),
        )
}

/// Set up env_logger on stderr; RUST_LOG wins over -v
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn output_format(matches: &ArgMatches, config: &Config) -> OutputFormat {
    matches
        .get_one::<String>("output")
        .and_then(|s| OutputFormat::from_str(s).ok())
        .unwrap_or(config.output.format)
}

fn empty_input(matches: &ArgMatches, config: &Config) -> EmptyInput {
    matches
        .get_one::<String>("empty-input")
        .and_then(|s| EmptyInput::from_str(s).ok())
        .unwrap_or(config.counting.empty_input)
}

/// Build filter config from config file patterns and matches
fn build_filter(matches: &ArgMatches, config: &Config) -> anyhow::Result<FilterConfig> {
    let includes: Vec<String> = matches
        .get_many::<String>("include")
        .map(|v| v.cloned().collect())
        .unwrap_or_else(|| config.filter.include.clone());
    let excludes: Vec<String> = matches
        .get_many::<String>("exclude")
        .map(|v| v.cloned().collect())
        .unwrap_or_else(|| config.filter.exclude.clone());

    Ok(FilterConfig::new()
        .include_many(&includes)?
        .exclude_many(&excludes)?)
}

fn ordering(matches: &ArgMatches, config: &Config) -> anyhow::Result<Ordering> {
    let field = matches
        .get_one::<String>("sort")
        .or(config.output.sort.as_ref());
    match field {
        Some(name) => {
            let by = OrderBy::from_str(name).map_err(anyhow::Error::msg)?;
            Ok(Ordering::natural(by))
        }
        None => Ok(Ordering::by_path()),
    }
}

/// Handler for the count command
fn count_handler(matches: &ArgMatches, config: &Config) -> anyhow::Result<String> {
    let format = output_format(matches, config);
    let empty_input = empty_input(matches, config);

    if let Some(text) = matches.get_one::<String>("text") {
        let stats = textstatlib::compute_with(text, empty_input);
        return render::render_single(&stats, TEXT_NAME, false, format);
    }

    let paths: Vec<String> = matches
        .get_many::<String>("paths")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();

    let options_base = CountOptions::new().empty_input(empty_input);

    if paths.is_empty() || paths == ["-"] {
        debug!("reading from stdin");
        let stats = count_reader(io::stdin().lock(), STDIN_NAME, &options_base)?;
        return render::render_single(&stats, STDIN_NAME, false, format);
    }
    if paths.iter().any(|p| p == "-") {
        anyhow::bail!("'-' (stdin) cannot be combined with other paths");
    }

    let by_file = matches.get_flag("by-file") || config.output.by_file;
    let single_file = paths.len() == 1 && Path::new(&paths[0]).is_file();

    if single_file && !by_file {
        let path = Path::new(&paths[0]);
        let stats = textstatlib::count_file(path, &options_base)?;
        return render::render_single(&stats, &paths[0], false, format);
    }

    let filter = build_filter(matches, config)?;
    let aggregation = if by_file {
        Aggregation::ByFile
    } else {
        Aggregation::Total
    };
    let options = options_base
        .aggregation(aggregation)
        .ordering(ordering(matches, config)?);

    let result = count_paths(&paths, &filter, &options)?;
    info!("counted {} files", result.file_count);

    if !by_file {
        let source = format!("Total ({} files)", result.file_count);
        return render::render_single(&result.total, &source, true, format);
    }

    // Rows are labelled relative to a single directory argument
    let base = if paths.len() == 1 {
        Path::new(&paths[0])
    } else {
        Path::new("")
    };
    let table = StatsTable::from_result(&result, base);
    render::render_table(&table, format)
}

/// Handler for the report command
fn report_handler(matches: &ArgMatches, config: &Config) -> anyhow::Result<String> {
    let format = output_format(matches, config);
    let empty_input = empty_input(matches, config);

    let text = if let Some(text) = matches.get_one::<String>("text") {
        text.clone()
    } else {
        match matches.get_one::<String>("path").map(|s| s.as_str()) {
            None | Some("-") => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                buf
            }
            Some(path) => std::fs::read_to_string(path)
                .map_err(|source| textstatlib::TextstatError::FileRead {
                    path: path.into(),
                    source,
                })?,
        }
    };

    let report = analyze_with(&text, empty_input);
    render::render_report(&report, format)
}

/// Handler for the live command
fn live_handler(matches: &ArgMatches, config: &Config) -> anyhow::Result<String> {
    live::run(output_format(matches, config), empty_input(matches, config))
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {warning}");
    }
    let config = config_result.config;

    let result = match matches.subcommand() {
        Some(("count", sub)) => count_handler(sub, &config),
        Some(("report", sub)) => report_handler(sub, &config),
        Some(("live", sub)) => live_handler(sub, &config),
        // Root command without subcommand - treat as count
        _ => count_handler(&matches, &config),
    };

    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.counting.empty_input = EmptyInput::SingleToken;

        let matches =
            build_command().get_matches_from(["textstat", "-o", "text", "--empty-input", "zero"]);
        assert_eq!(output_format(&matches, &config), OutputFormat::Text);
        assert_eq!(empty_input(&matches, &config), EmptyInput::Zero);

        let matches = build_command().get_matches_from(["textstat"]);
        assert_eq!(output_format(&matches, &config), OutputFormat::Json);
        assert_eq!(empty_input(&matches, &config), EmptyInput::SingleToken);
    }

    #[test]
    fn test_global_output_reaches_subcommand() {
        let matches = build_command().get_matches_from(["textstat", "report", "-o", "json"]);
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(output_format(sub, &Config::default()), OutputFormat::Json);
    }

    #[test]
    fn test_ordering_from_config() {
        let mut config = Config::default();
        config.output.sort = Some("letters".to_string());
        let matches = build_command().get_matches_from(["textstat"]);
        assert_eq!(
            ordering(&matches, &config).unwrap(),
            Ordering::natural(OrderBy::Letters)
        );

        config.output.sort = Some("bogus".to_string());
        assert!(ordering(&matches, &config).is_err());
    }

    #[test]
    fn test_count_handler_inline_text() {
        let matches = build_command().get_matches_from(["textstat", "--text", "hello world"]);
        let out = count_handler(&matches, &Config::default()).unwrap();
        assert!(out.contains("Word count: 2"));
        assert!(out.contains("Letter count (excluding spaces): 10"));
        assert!(out.contains("Letter count (including spaces): 11"));
    }
}
