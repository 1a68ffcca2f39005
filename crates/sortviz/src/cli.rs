#![forbid(unsafe_code)]

//! Command-line argument parsing for the visualizer binary.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `SORTVIZ_*` prefix.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
sortviz — animated sorting algorithms in your terminal

USAGE:
    sortviz [OPTIONS]

OPTIONS:
    --size=N             Array size, 1..=30 (default: 10)
    --delay-ms=N         Pause between steps in milliseconds (default: 800)
    --explain-url=URL    Explanation service endpoint
                         (default: http://localhost:3000/get-explanation)
    --narrate            Start with narration enabled
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    1-5             Run bubble / selection / insertion / merge / quick sort
    g               Generate a fresh random array
    + / -           Grow / shrink the array (regenerates)
    [ / ]           Faster / slower playback
    n               Toggle narration
    q / Esc         Quit

ENVIRONMENT VARIABLES:
    SORTVIZ_SIZE          Override --size
    SORTVIZ_DELAY_MS      Override --delay-ms
    SORTVIZ_EXPLAIN_URL   Override --explain-url
    SORTVIZ_NARRATE       Override --narrate (1|true)
    SORTVIZ_LOG           Enable tracing output on stderr (filter directives)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Array size, validated downstream against the session range.
    pub size: usize,
    /// Pause between steps in milliseconds.
    pub delay_ms: u64,
    /// Explanation service endpoint.
    pub explain_url: String,
    /// Whether narration starts enabled.
    pub narrate: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            size: 10,
            delay_ms: 800,
            explain_url: "http://localhost:3000/get-explanation".into(),
            narrate: false,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();
        opts.apply_env(|name| env::var(name).ok());

        let args: Vec<String> = env::args().skip(1).collect();
        match opts.apply_args(&args) {
            Ok(ParseOutcome::Run) => opts,
            Ok(ParseOutcome::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(ParseOutcome::Version) => {
                println!("sortviz {VERSION}");
                process::exit(0);
            }
            Err(message) => {
                eprintln!("{message}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SORTVIZ_SIZE")
            && let Ok(n) = val.parse()
        {
            self.size = n;
        }
        if let Some(val) = var("SORTVIZ_DELAY_MS")
            && let Ok(n) = val.parse()
        {
            self.delay_ms = n;
        }
        if let Some(val) = var("SORTVIZ_EXPLAIN_URL") {
            self.explain_url = val;
        }
        if let Some(val) = var("SORTVIZ_NARRATE") {
            self.narrate = val == "1" || val.eq_ignore_ascii_case("true");
        }
    }

    fn apply_args(&mut self, args: &[String]) -> Result<ParseOutcome, String> {
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(ParseOutcome::Help),
                "--version" | "-V" => return Ok(ParseOutcome::Version),
                "--narrate" => self.narrate = true,
                other => {
                    if let Some(val) = other.strip_prefix("--size=") {
                        self.size = val
                            .parse()
                            .map_err(|_| format!("Invalid --size value: {val}"))?;
                    } else if let Some(val) = other.strip_prefix("--delay-ms=") {
                        self.delay_ms = val
                            .parse()
                            .map_err(|_| format!("Invalid --delay-ms value: {val}"))?;
                    } else if let Some(val) = other.strip_prefix("--explain-url=") {
                        self.explain_url = val.to_string();
                    } else {
                        return Err(format!("Unknown argument: {other}"));
                    }
                }
            }
        }
        Ok(ParseOutcome::Run)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseOutcome {
    Run,
    Help,
    Version,
}
