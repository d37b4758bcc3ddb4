//! Countdown - an interactive countdown timer for the terminal
//!
//! This is the main entry point for the countdown application.

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use countdown::{
    config::Config,
    display,
    notify::AlertNotifier,
    state::CountdownTimer,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown={}", config.log_level()))
        .init();

    info!("Starting countdown v0.1.0");
    info!("Configuration: duration={:?}, run={}", config.duration, config.run);

    // Create the timer with the terminal alert as its completion collaborator
    let timer = CountdownTimer::new(AlertNotifier);

    // Stage (and optionally start) a countdown from the CLI flags
    if let Some(duration) = config.duration {
        timer.set_duration(duration);
        if config.run {
            timer.start();
        }
    }

    // Render task: print the localized countdown line on every update
    let mut snapshots = timer.subscribe();
    let render = tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let snapshot = *snapshots.borrow_and_update();
            println!("{}", display::countdown_line(&snapshot));
        }
    });

    println!("{}", display::banner());
    info!("Commands:");
    info!("  set <seconds> - Stage a new duration");
    info!("  start         - Start or resume the countdown");
    info!("  pause         - Suspend the countdown");
    info!("  reset         - Return to idle");
    info!("  status        - Print the full status report");
    info!("  help          - Show the command list");
    info!("  quit          - Exit");

    // Run the command loop until EOF/quit or a shutdown signal
    tokio::select! {
        _ = command_loop(&timer) => {
            info!("Input closed");
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    render.abort();
    drop(timer);
    info!("Countdown shutdown complete");
    Ok(())
}

/// Read commands from stdin, one per line, until EOF or `quit`.
///
/// Bad input never errors out of the loop: unknown commands and unparsable
/// durations leave the timer untouched, with a debug line as the only trace.
async fn command_loop(timer: &CountdownTimer) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("set") => match parts.next().map(str::parse::<u64>) {
                Some(Ok(seconds)) => timer.set_duration(seconds),
                _ => debug!("Ignoring unparsable duration in {:?}", line),
            },
            Some("start") => timer.start(),
            Some("pause") => timer.pause(),
            Some("reset") => timer.reset(),
            Some("status") => match serde_json::to_string_pretty(&timer.status()) {
                Ok(report) => println!("{}", report),
                Err(e) => debug!("Failed to serialize status: {}", e),
            },
            Some("help") => print_help(),
            Some("quit") | Some("exit") => break,
            Some(other) => debug!("Unknown command: {}", other),
            None => {}
        }
    }
}

fn print_help() {
    println!("set <seconds>  stage a new duration");
    println!("start          start or resume the countdown");
    println!("pause          suspend the countdown");
    println!("reset          return to idle");
    println!("status         print the full status report");
    println!("quit           exit");
}
