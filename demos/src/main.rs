//! Generate a maze, solve it, and stream the server messages as JSON lines.
//!
//! Run: cargo run --bin mazer-demo -- --rows 10 --cols 20 --algorithm astar
//!
//! Messages go to stdout, one per line. The maze with its solution overlaid
//! goes to stderr. Set `RUST_LOG=info` for service logs.

use std::error::Error;
use std::fs;

use log::info;
use mazer_core::render_path;
use mazer_paths::Algorithm;
use mazer_service::{GenerateRequest, MazeService, ServerMsg, ServiceConfig, SolveRequest};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Command line arguments
#[derive(Default)]
struct Args {
    rows: Option<i32>,
    cols: Option<i32>,
    algorithm: Option<String>,
    speed: Option<String>,
    seed: Option<u64>,
    config_path: Option<String>,
    no_delay: bool,
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = std::env::args().collect();
    let mut result = Args::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i)
                .cloned()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match flag {
            "--rows" | "-r" => result.rows = Some(parse_num(flag, &value()?)?),
            "--cols" | "-c" => result.cols = Some(parse_num(flag, &value()?)?),
            "--algorithm" | "-a" => result.algorithm = Some(value()?),
            "--speed" | "-s" => result.speed = Some(value()?),
            "--seed" => result.seed = Some(parse_num(flag, &value()?)?),
            "--config" => result.config_path = Some(value()?),
            "--no-delay" => result.no_delay = true,
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => return Err(format!("unknown argument: {flag}")),
        }
        i += 1;
    }

    Ok(result)
}

fn parse_num<T: std::str::FromStr>(flag: &str, s: &str) -> Result<T, String> {
    s.parse().map_err(|_| format!("invalid value for {flag}: {s}"))
}

fn print_help() {
    println!("mazer-demo - generate and solve a maze");
    println!();
    println!("USAGE:");
    println!("    mazer-demo [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -r, --rows <N>          Maze rows (15)");
    println!("    -c, --cols <N>          Maze columns (15)");
    println!("    -a, --algorithm <NAME>  bfs, dfs or astar (bfs)");
    println!("    -s, --speed <NAME>      slow, medium or fast (medium)");
    println!("        --seed <N>          Seed for a reproducible maze");
    println!("        --config <FILE>     JSON service configuration");
    println!("        --no-delay          Disable pacing between steps");
    println!("    -h, --help              Print help information");
}

fn load_config(args: &Args) -> Result<ServiceConfig, Box<dyn Error>> {
    let config = match &args.config_path {
        Some(path) => {
            let cfg = ServiceConfig::from_json(&fs::read_to_string(path)?)?;
            info!("loaded config from {path}");
            cfg
        }
        None => ServiceConfig::default(),
    };
    Ok(if args.no_delay {
        config.without_delays()
    } else {
        config
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            print_help();
            std::process::exit(2);
        }
    };
    let service = MazeService::new(load_config(&args)?);
    let config = service.config();
    info!(
        "pacing {:?}, at most {} cells per maze",
        config.pacing, config.max_cells
    );

    let req = GenerateRequest {
        rows: args.rows,
        cols: args.cols,
    };
    let grid = match args.seed {
        Some(seed) => service.generate_maze_with(&req, StdRng::seed_from_u64(seed))?,
        None => service.generate_maze(&req)?,
    };
    println!(
        "{}",
        ServerMsg::MazeGenerated { maze: grid.clone() }.to_json()?
    );

    let algorithm = args
        .algorithm
        .unwrap_or_else(|| Algorithm::default().name().to_string());
    let speed = args.speed.unwrap_or_else(|| "medium".to_string());
    let (tx, rx) = std::sync::mpsc::channel();
    let handle = service.spawn_solve(&SolveRequest::new(&grid, &algorithm, &speed), tx)?;

    let mut solution = Vec::new();
    for msg in rx {
        println!("{}", msg.to_json()?);
        if let ServerMsg::MazeSolved { solution: path } = msg {
            solution = path;
        }
    }
    let outcome = handle.join()?;
    eprintln!("{}", render_path(&grid, &solution));
    match outcome.steps() {
        Some(steps) => eprintln!("{algorithm}: solved in {steps} steps"),
        None => eprintln!("{algorithm}: no solution"),
    }
    Ok(())
}
