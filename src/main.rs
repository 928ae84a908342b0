use clap::Parser;
use log::info;

use grid_search::algorithms::Algorithm;
use grid_search::config::Config;
use grid_search::grid::Grid;
use grid_search::protocol::{SolveRequest, SolveResponse};
use grid_search::simulation::{Scenario, Simulation};
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

fn main() {
    let config = Config::parse();

    let default_level = if config.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let request = match &config.input {
        Some(path) => {
            let mut request = read_request(path)?;
            info!("Loaded request from {}", path.display());
            config.apply_to(&mut request);
            request
        }
        None => Scenario::generate(config, config.seed)?.to_request(config.algorithm()),
    };

    if request.algorithm == "all" {
        let grid = Grid::build(&request.maze, request.start, &request.goals)?;
        let simulation = Simulation::new(grid, config.search_options());
        let results = simulation.run_all_algorithms();
        if config.json {
            let responses: Vec<serde_json::Value> = results
                .iter()
                .map(|entry| {
                    serde_json::json!({
                        "algorithm": entry.algorithm.tag(),
                        "response": SolveResponse::from_result(&entry.result),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&responses)?);
            return Ok(());
        }
        if !config.no_visualization {
            println!("{}", simulation.grid().render(&[]));
        }
        simulation.print_comparison_results(&results);
        return Ok(());
    }

    let (grid, algorithm) = request.prepare()?;
    let simulation = Simulation::new(grid, config.search_options());
    run_single(config, &simulation, algorithm)
}

fn run_single(
    config: &Config,
    simulation: &Simulation,
    algorithm: Algorithm,
) -> Result<(), Box<dyn Error>> {
    let outcome = simulation.run(algorithm);

    if config.json {
        let response = SolveResponse::from_result(&outcome.result);
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    if !config.no_visualization {
        println!("{}", simulation.grid().render(&outcome.result.visited_order));
    }

    println!("=== FINAL RESULTS ===");
    println!("{}", outcome.statistics);
    if !outcome.result.found() {
        println!("No path found!");
    }
    Ok(())
}

fn read_request(path: &Path) -> Result<SolveRequest, Box<dyn Error>> {
    let body = if path.as_os_str() == "-" {
        let mut body = String::new();
        io::stdin().read_to_string(&mut body)?;
        body
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&body)?)
}
