use std::env;
use std::process;

use log::{error, info};
use pet_detective::utils::init_board::{init_board, load_raw_board};
use pet_detective::{finder_for, SolverConfig, SolverError};

fn run(board_path: &str, config_path: Option<&str>) -> Result<(), SolverError> {
    let config = match config_path {
        Some(path) => SolverConfig::from_json_file(path)?,
        None => SolverConfig::default(),
    };
    info!(
        "Solving {} with {:?} strategy, capacity {}",
        board_path, config.strategy, config.capacity
    );

    let raw = load_raw_board(board_path)?;
    let board = init_board(&raw)?;

    let start_time = std::time::Instant::now();
    let mut finder = finder_for(&board, &config);
    finder.solve();
    let solution = finder.solution();
    info!("Solved in {:.2?}", start_time.elapsed());

    for step in solution.detailed(&board) {
        info!(
            "  {} at ({}, {}) {} - distance {}",
            step.car_move.action,
            step.column,
            step.row,
            step.pet_name.as_deref().unwrap_or("-"),
            step.car_move.cumulative_distance
        );
    }

    println!("{}", serde_json::to_string_pretty(&solution)?);
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        let program = args.first().map(String::as_str).unwrap_or("pet-detective");
        eprintln!("Usage: {} <board.json> [config.json]", program);
        process::exit(2);
    }

    if let Err(e) = run(&args[1], args.get(2).map(String::as_str)) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
