//! Xiangqi CLI
//!
//! Play the heuristic opponent over a line protocol on stdin/stdout.

use anyhow::{bail, Context};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use xiangqi_service::{handle, Command, GameService, Response, ServiceConfig};

fn print_usage() {
    println!("Xiangqi game service");
    println!();
    println!("Usage:");
    println!("  xiangqi [--config FILE] [--snapshot FILE] [--seed N]");
    println!();
    println!("Commands (one per line on stdin, one JSON reply per line on stdout):");
    println!("  new                       - start a fresh game");
    println!("  state                     - current game snapshot");
    println!("  board                     - current board as text");
    println!("  moves                     - legal moves for the side to move");
    println!("  move <id> <x> <y>         - play a move, then the opponent replies");
    println!("  {{\"piece_id\":..,...}}       - same as move, as a JSON object");
    println!("  help | quit");
}

struct Args {
    config: Option<PathBuf>,
    snapshot: Option<PathBuf>,
    seed: Option<u64>,
    help: bool,
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let mut parsed = Args {
        config: None,
        snapshot: None,
        seed: None,
        help: false,
    };

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--help" | "-h" => parsed.help = true,
            "--config" | "-c" | "--snapshot" | "-s" | "--seed" => {
                let value = args
                    .get(i + 1)
                    .with_context(|| format!("{flag} needs a value"))?;
                match flag {
                    "--config" | "-c" => parsed.config = Some(PathBuf::from(value)),
                    "--snapshot" | "-s" => parsed.snapshot = Some(PathBuf::from(value)),
                    _ => {
                        parsed.seed =
                            Some(value.parse().with_context(|| format!("bad seed: {value}"))?)
                    }
                }
                i += 1;
            }
            other => bail!("unknown argument: {other}"),
        }
        i += 1;
    }
    Ok(parsed)
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let args = parse_args(&args)?;
    if args.help {
        print_usage();
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(path) = args.snapshot {
        config.snapshot_path = path;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    // stdout carries protocol replies only
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut service = GameService::open(&config)
        .with_context(|| format!("opening {}", config.snapshot_path.display()))?;
    tracing::info!(engine = service.engine_name(), "ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = Command::decode(&line);
        let quit = matches!(command, Ok(Command::Quit));
        let response = match command {
            Ok(command) => handle(&mut service, command),
            Err(e) => Response::error(e),
        };

        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;

        if quit {
            break;
        }
    }

    Ok(())
}
