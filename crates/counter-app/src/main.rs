use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use counter_config::AppConfig;

mod actions;
mod logger;
mod reducers;
mod runner;
mod script;
mod state;
mod store;

use actions::AppAction;
use script::{parse_script, BASICS_SCRIPT};
use state::AppSnapshot;

/// Replay counter and result-list actions through a reducer store
#[derive(Parser, Debug)]
#[command(name = "counter-app", version, about)]
struct Cli {
    /// JSON-lines action script; reads stdin when omitted or "-"
    script: Option<PathBuf>,

    /// Replay the built-in walkthrough instead of a script
    #[arg(long, conflicts_with = "script")]
    basics: bool,

    /// Config file (defaults to .counter-app.toml lookup)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Preload the counter slice with this value
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    initial_counter: Option<i64>,
}

fn main() -> Result<()> {
    logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };
    logger::apply_config_level(&config.log_level);

    log::info!("Starting counter-app");

    let actions = load_actions(&cli)?;

    let initial_counter = cli.initial_counter.or(config.initial_counter);
    let store = Rc::new(store::create_store(initial_counter).context("Failed to create store")?);

    let stdout = config
        .echo_state
        .then(|| Rc::new(RefCell::new(io::stdout())));
    let subscription = runner::subscribe_state_echo(&store, stdout);

    let dispatched = runner::replay(&store, actions).context("Dispatch failed")?;
    subscription.unsubscribe();
    log::info!("Dispatched {} actions", dispatched);

    let final_state = serde_json::to_string_pretty(&AppSnapshot::of(&store.state()))?;
    println!("{}", final_state);

    log::info!("Exiting counter-app");
    Ok(())
}

fn load_actions(cli: &Cli) -> Result<Vec<AppAction>> {
    if cli.basics {
        return Ok(parse_script(BASICS_SCRIPT.as_bytes())?);
    }

    match &cli.script {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            Ok(parse_script(BufReader::new(file))?)
        }
        _ => Ok(parse_script(io::stdin().lock())?),
    }
}
