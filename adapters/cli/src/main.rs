#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs Wordhex in a terminal.

mod line;
mod terminal;

use std::{
    cell::RefCell,
    io::{self, BufRead},
    rc::Rc,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordhex_core::WELCOME_BANNER;
use wordhex_rendering::{RenderingBackend, Scene};
use wordhex_session::Session;
use wordhex_world::config::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use wordhex_world::MapConfig;

use line::LineCommand;
use terminal::TerminalBackend;

#[derive(Parser, Debug)]
#[command(name = "wordhex", about = "Explore a hex map by typing words")]
struct Args {
    /// Number of hex columns.
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: u32,

    /// Number of hex rows.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u32,

    /// Seed for the first map; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter directive, overriding RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    fn map_config(&self, seed: u64) -> MapConfig {
        MapConfig::new(self.columns, self.rows, seed)
    }
}

fn init_tracing(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Starts a map, keeping the previous scene when generation fails.
fn start_map(session: &mut Session, scene: &RefCell<Scene>, config: &MapConfig) -> Result<()> {
    let previous = scene.replace(Scene::new(config.columns(), config.rows()));
    match session.start(config) {
        Ok(id) => {
            info!(session = id.get(), seed = config.seed(), "map started");
            Ok(())
        }
        Err(error) => {
            let _ = scene.replace(previous);
            Err(error).with_context(|| {
                format!("failed to generate a {}x{} map", config.columns(), config.rows())
            })
        }
    }
}

/// Entry point for the Wordhex command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log.as_deref());

    let mut rng = rand::thread_rng();
    let mut session = Session::new();
    let scene = Rc::new(RefCell::new(Scene::new(args.columns, args.rows)));
    let sink = Rc::clone(&scene);
    let _ = session.subscribe_all(move |event| sink.borrow_mut().apply(event));

    let mut backend = TerminalBackend::new(io::stdout().lock());
    backend.message(WELCOME_BANNER)?;
    backend.message("Type a word and press enter. `:new` starts over, `:quit` leaves.")?;

    let seed = args.seed.unwrap_or_else(|| rng.gen());
    start_map(&mut session, &scene, &args.map_config(seed))?;
    backend.present(&scene.borrow())?;

    let mut last = Instant::now();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read from standard input")?;
        let now = Instant::now();
        session.advance(now.duration_since(last));
        last = now;

        match LineCommand::parse(&line) {
            LineCommand::Quit => break,
            LineCommand::NewMap => {
                start_map(&mut session, &scene, &args.map_config(rng.gen()))?;
            }
            LineCommand::Redraw => {}
            LineCommand::Word(word) => {
                for ch in word.chars() {
                    session.append_char(ch);
                }
                session.accept_word();
            }
        }
        backend.present(&scene.borrow())?;
    }
    Ok(())
}
