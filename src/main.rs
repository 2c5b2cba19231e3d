//! CLI entry point for lsr

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;
use std::time::SystemTime;

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, ValueEnum};
use lsr::{FilterPolicy, ListConfig, ListError, Lister, LongFormat};
use termcolor::{ColorChoice, StandardStream};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lsr")]
#[command(about = "List directory contents, optionally recursing into subdirectories")]
#[command(version)]
#[command(args_override_self = true)]
struct Args {
    /// Directory to list
    #[arg(default_value = "./")]
    path: PathBuf,

    /// Show all entries, including . and ..
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Show hidden entries except . and ..
    #[arg(short = 'A', long = "almost-all")]
    almost_all: bool,

    /// Colorize names by file type: auto, always, never
    #[arg(
        short = 'C',
        long = "color",
        value_name = "WHEN",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "auto"
    )]
    color: Option<ColorMode>,

    /// Append an indicator (one of */=@|) to entries
    #[arg(short = 'F', long = "classify")]
    classify: bool,

    /// Use the long listing format
    #[arg(short = 'l', long = "long-format")]
    long_format: bool,

    /// List subdirectories recursively
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,
}

/// Position of the last occurrence of a flag in argv, if it was given.
fn last_index_of(matches: &ArgMatches, id: &str) -> Option<usize> {
    if !matches.get_flag(id) {
        return None;
    }
    matches.indices_of(id).and_then(|i| i.max())
}

/// Determine the filter policy; each -a or -A overrides the ones before it.
fn get_filter_policy(matches: &ArgMatches) -> FilterPolicy {
    let all = last_index_of(matches, "all");
    let almost = last_index_of(matches, "almost_all");

    match (all, almost) {
        (Some(a), Some(b)) if b > a => FilterPolicy::Almost,
        (Some(_), _) => FilterPolicy::All,
        (None, Some(_)) => FilterPolicy::Almost,
        (None, None) => FilterPolicy::Default,
    }
}

fn main() {
    env_logger::init();

    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| {
        eprintln!("lsr: argument parsing error: {}", e);
        process::exit(1);
    });

    let use_color = args.color.is_some_and(should_use_color);

    let mut config = ListConfig::default()
        .with_filter(get_filter_policy(&matches))
        .with_color(use_color)
        .with_classify(args.classify)
        .with_recursive(args.recursive);
    if args.long_format {
        config = config.with_long_format(LongFormat::starting_at(SystemTime::now()));
    }

    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    let mut stderr = io::stderr().lock();

    let lister = Lister::new(config);
    match lister.run(args.path, &mut stdout, &mut stderr) {
        Ok(summary) => {
            log::debug!(
                "{} directories, {} entries, {} errors",
                summary.directories,
                summary.entries,
                summary.errors
            );
        }
        // Reader went away, as in `lsr -R / | head`
        Err(ListError::Output(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => {
            eprintln!("lsr: {}", e);
            process::exit(1);
        }
    }
}
