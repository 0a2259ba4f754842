use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use countdown::app_state::AppState;
use countdown::commands;
use countdown::display::{labels, render_frame};
use countdown::logging;
use countdown::repl::readline;
use countdown_core::{Countdown, Clock, SystemClock, TargetInstant, TimeZoneMode};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Parser)]
#[command(version, about = "Live countdown to the invitation date")]
struct Args {
    /// Read settings from this file instead of the default location
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Print a frame on every tick until the target is reached
    Watch(TargetArgs),
    /// Print the time remaining right now
    Once(TargetArgs),
    /// Interactive shell
    Shell,
}

#[derive(clap::Args)]
struct TargetArgs {
    /// Override the configured target
    #[arg(short, long)]
    target: Option<String>,

    /// Interpret an offset-less target as UTC
    #[arg(long)]
    utc: bool,
}

impl TargetArgs {
    fn apply(&self, state: &mut AppState) {
        if let Some(target) = &self.target {
            state.config.target = target.clone();
        }
        if self.utc {
            state.config.time_zone = TimeZoneMode::Utc;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    logging::init();

    let args = Args::parse();
    let mut state = AppState::load(args.config.as_deref()).map_err(|e| e.to_string())?;

    match args.mode.unwrap_or(Mode::Shell) {
        Mode::Watch(target) => {
            target.apply(&mut state);
            watch(state).await
        }
        Mode::Once(target) => {
            target.apply(&mut state);
            once(&state)
        }
        Mode::Shell => shell(state).await,
    }
}

async fn watch(mut state: AppState) -> Result<(), String> {
    state.start_engine().map_err(|e| e.to_string())?;
    let language = state.config.language;
    let Some(engine) = &state.engine else {
        return Ok(());
    };

    let mut updates = engine.subscribe();
    println!("{}", labels(language).title);
    println!("{}", render_frame(&updates.current(), language));

    loop {
        tokio::select! {
            changed = updates.changed() => {
                let frame = changed.map_err(|e| e.to_string())?;
                println!("{}", render_frame(&frame, language));
                if frame.expired {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(())
}

fn once(state: &AppState) -> Result<(), String> {
    let target = TargetInstant::parse(&state.config.target, state.config.time_zone)
        .map_err(|e| e.to_string())?;
    let mut countdown = Countdown::new(target, state.config.terminal_frame);
    countdown.tick(SystemClock.now());

    let language = state.config.language;
    println!("{}", labels(language).title);
    println!("{}", render_frame(&countdown.state(), language));
    Ok(())
}

async fn shell(mut state: AppState) -> Result<(), String> {
    if let Err(err) = state.start_engine() {
        println!("countdown not started: {err}");
    }
    let state = Arc::new(RwLock::new(state));

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, Arc::clone(&state)).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(no_binary_name = true, about = "shell")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current frame
    Status,
    /// Count down to a new target
    Retarget {
        #[arg(short, long)]
        target: String,
        #[arg(long)]
        utc: bool,
    },
    /// Stop the countdown
    Stop,
    /// Switch between KG and RU
    Lang,
    /// Show the active settings
    Config,
    /// Persist the active settings
    Save,
    Exit,
}

async fn respond(line: &str, state: Arc<RwLock<AppState>>) -> Result<bool, String> {
    let args = shlex::split(line).ok_or("error: Invalid quoting")?;
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Status) => println!("{}", commands::status(state).await),
        Some(Commands::Retarget { target, utc }) => {
            println!("{}", commands::retarget(state, target, *utc).await?)
        }
        Some(Commands::Stop) => println!("{}", commands::stop(state).await),
        Some(Commands::Lang) => println!("{}", commands::toggle_language(state).await),
        Some(Commands::Config) => println!("{}", commands::show_config(state).await),
        Some(Commands::Save) => println!("{}", commands::save_config(state).await?),
        Some(Commands::Exit) => {
            writeln!(std::io::stdout(), "quitting...").map_err(|e| e.to_string())?;
            std::io::stdout().flush().map_err(|e| e.to_string())?;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
