#![forbid(unsafe_code)]

//! sortviz binary entry point.

mod app;
mod cli;

use std::io;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use tracing_subscriber::EnvFilter;

use sortviz_core::array::{ArrayState, VALUE_CEILING};
use sortviz_core::session::SortSession;

use crate::app::App;

/// Raw-mode + alternate-screen session, restored on drop so the terminal
/// comes back even when the app errors out.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn init_tracing() {
    if let Ok(filter) = std::env::var("SORTVIZ_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(io::stderr)
            .init();
    }
}

fn main() {
    let opts = cli::Opts::parse();
    init_tracing();

    let array = match ArrayState::generate(opts.size, || fastrand::u32(..VALUE_CEILING)) {
        Ok(array) => array,
        Err(err) => {
            eprintln!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };
    let session = SortSession::new(array, Duration::from_millis(opts.delay_ms), opts.narrate);

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to initialize: {err}");
            std::process::exit(1);
        }
    };

    let result = (|| {
        let _guard = TerminalGuard::enter()?;
        let app = App::new(session, opts.explain_url.clone())?;
        runtime.block_on(app.run(&mut io::stdout()))
    })();

    if let Err(err) = result {
        eprintln!("Runtime error: {err}");
        std::process::exit(1);
    }
}
