mod app_state;
mod cli;

use std::path::Path;
use std::time::{Duration, Instant};

use chrono::Local;
use jarvis_config::schema::JarvisConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;
use tracing_subscriber::EnvFilter;

use app_state::{Command, ShellApp};

/// Host timer cadence. Session timers are checked at this resolution.
const TICK: Duration = Duration::from_millis(50);

fn init_logging(directive: &str, verbose: bool) {
    let directive = directive
        .parse()
        .unwrap_or_else(|_| "jarvis=info".parse().expect("static directive is valid"));
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Load config before logging so `[logging] level` can pick the filter
    let loaded = match args.config.as_deref() {
        Some(path) => jarvis_config::load_config_from(Path::new(path)),
        None => jarvis_config::load_config(),
    };
    let (mut config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (JarvisConfig::default(), Some(e)),
    };

    let directive = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.directive());
    init_logging(directive, config.logging.verbose);

    tracing::info!("Jarvis v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Err(e) = args.apply_overrides(&mut config) {
        tracing::warn!("Ignoring command-line override: {e}");
    }

    if let Err(e) = jarvis_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let mut app = ShellApp::new(config, Local::now());
    let logger = tokio::spawn(app_state::log_events(app.event_bus().subscribe()));
    if let Some(window) = app.active_window() {
        tracing::info!(%window, "Shell ready");
    }

    print_lines(app.execute(Command::Timeline));
    println!("(type /help for commands)");

    let started = Instant::now();
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut ticker = tokio::time::interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // After stdin closes, keep running until pending replies and captures finish
    while !app.should_exit() && (stdin_open || !app.is_settled()) {
        tokio::select! {
            _ = ticker.tick() => {}
            line = stdin.next_line(), if stdin_open => match line {
                Ok(Some(line)) => print_lines(app.execute(Command::parse(&line))),
                Ok(None) => {
                    tracing::debug!("stdin closed");
                    stdin_open = false;
                }
                Err(e) => {
                    tracing::error!("Failed to read stdin: {e}");
                    stdin_open = false;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }
        print_lines(app.poll(started.elapsed(), Local::now()));
    }

    app.shutdown();
    if let Err(e) = logger.await {
        tracing::warn!("Event logger failed: {e}");
    }
    tracing::info!("Shutdown complete");
}
