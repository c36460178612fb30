//! transport-planner CLI
//!
//! Build initial transportation plans from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Solve with the Northwest Corner rule
//! transport-planner solve --input problem.json --method northwest
//!
//! # Compare both heuristics, as JSON
//! transport-planner solve --input problem.json --method both --format json
//!
//! # Generate a random balanced problem
//! transport-planner generate --sources 4 --destinations 6
//! ```
//!
//! Set `RUST_LOG=debug` to trace every shipment the solvers make.

use serde::Serialize;
use std::fs;
use std::process;
use transport_planner::core::method::Method;
use transport_planner::core::problem::ProblemInstance;
use transport_planner::graph::basis::BasisGraph;
use transport_planner::optimization::comparison::MethodComparison;
use transport_planner::optimization::engine::TransportEngine;
use transport_planner::optimization::feasibility::Infeasible;
use transport_planner::simulation::generator::{generate_instance, GeneratorConfig};

const EXIT_USAGE: i32 = 1;
const EXIT_INFEASIBLE: i32 = 2;

fn print_usage() {
    eprintln!(
        r#"transport-planner — initial solutions for the transportation problem

USAGE:
    transport-planner <COMMAND> [OPTIONS]

COMMANDS:
    solve       Build a shipment plan for a problem file
    generate    Generate a random balanced problem (for testing)
    help        Show this message

OPTIONS (solve):
    --input <FILE>      Path to JSON problem file
    --method <METHOD>   northwest, least-cost or both (default: both)
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (generate):
    --sources <N>       Number of sources (default: 4)
    --destinations <N>  Number of destinations (default: 5)
    --max-quantity <N>  Largest supply at one source (default: 100)
    --max-cost <N>      Largest unit cost (default: 20)
    --output <FILE>     Write to file instead of stdout

PROBLEM FILE:
    {{ "supplies": [20, 30], "demands": [10, 40], "costs": [[2, 3], [4, 1]] }}

EXAMPLES:
    transport-planner solve --input problem.json
    transport-planner solve --input problem.json --method least-cost --format json
    transport-planner generate --sources 10 --destinations 8 --output big.json"#
    );
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    process::exit(EXIT_USAGE);
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| fail(format!("Error serializing output: {}", e)))
}

fn load_problem(path: &str) -> ProblemInstance {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("Error reading file '{}': {}", path, e)));

    serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing problem: {}", e);
        eprintln!("Expected format:");
        eprintln!(r#"{{ "supplies": [20, 30], "demands": [10, 40], "costs": [[2, 3], [4, 1]] }}"#);
        process::exit(EXIT_USAGE);
    })
}

/// Value following a flag, or exit with a usage message.
fn flag_value(args: &[String], i: usize, flag: &str, expected: &str) -> String {
    args.get(i)
        .cloned()
        .unwrap_or_else(|| fail(format!("{} requires {}", flag, expected)))
}

fn numeric_flag<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    flag_value(args, i, flag, "a number")
        .parse()
        .unwrap_or_else(|_| fail(format!("{} requires a number", flag)))
}

fn report_infeasible(err: &Infeasible, format: &str) -> ! {
    if format == "json" {
        #[derive(Serialize)]
        struct InfeasibleOutput<'a> {
            infeasible: &'a Infeasible,
            message: String,
        }
        println!(
            "{}",
            to_json(&InfeasibleOutput {
                infeasible: err,
                message: err.to_string(),
            })
        );
    } else {
        println!("{}", err.to_string().to_uppercase());
    }
    process::exit(EXIT_INFEASIBLE);
}

fn cmd_solve(args: &[String]) {
    let mut input_path = None;
    let mut method: Option<Method> = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(flag_value(args, i, "--input", "a file path"));
            }
            "--method" => {
                i += 1;
                let value = flag_value(args, i, "--method", "'northwest', 'least-cost' or 'both'");
                method = match value.as_str() {
                    "both" => None,
                    other => Some(other.parse().unwrap_or_else(|e| fail(e))),
                };
            }
            "--format" => {
                i += 1;
                format = flag_value(args, i, "--format", "'text' or 'json'");
            }
            _ => fail(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }
    if format != "text" && format != "json" {
        fail(format!("Unknown format '{}', expected 'text' or 'json'", format));
    }

    let path = input_path.unwrap_or_else(|| fail("Error: --input <FILE> is required"));
    let instance = load_problem(&path);
    log::info!(
        "loaded {}x{} problem from {}",
        instance.sources(),
        instance.destinations(),
        path
    );

    match method {
        Some(method) => {
            let solution = TransportEngine::solve(&instance, method)
                .unwrap_or_else(|e| report_infeasible(&e, &format));
            if format == "json" {
                println!("{}", to_json(&solution));
            } else {
                println!("{}", solution);
                let basis = BasisGraph::from_allocation(solution.allocation());
                println!(
                    "Basic cells:    {} of {} ({} component{})",
                    basis.edge_count(),
                    instance.basis_size(),
                    basis.component_count(),
                    if basis.component_count() == 1 { "" } else { "s" }
                );
            }
        }
        None => {
            let comparison = MethodComparison::run(&instance)
                .unwrap_or_else(|e| report_infeasible(&e, &format));
            if format == "json" {
                println!("{}", to_json(&comparison));
            } else {
                println!("{}", comparison);
            }
        }
    }
}

fn cmd_generate(args: &[String]) {
    let mut config = GeneratorConfig::default();
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--sources" => {
                i += 1;
                config.sources = numeric_flag(args, i, "--sources");
            }
            "--destinations" => {
                i += 1;
                config.destinations = numeric_flag(args, i, "--destinations");
            }
            "--max-quantity" => {
                i += 1;
                config.max_quantity = numeric_flag(args, i, "--max-quantity");
            }
            "--max-cost" => {
                i += 1;
                config.max_cost = numeric_flag(args, i, "--max-cost");
            }
            "--output" => {
                i += 1;
                output_path = Some(flag_value(args, i, "--output", "a file path"));
            }
            _ => fail(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }
    config.min_quantity = config.min_quantity.min(config.max_quantity);

    let instance =
        generate_instance(&config).unwrap_or_else(|e| fail(format!("Error generating problem: {}", e)));
    let json = to_json(&instance);

    if let Some(path) = output_path {
        fs::write(&path, &json)
            .unwrap_or_else(|e| fail(format!("Error writing to '{}': {}", path, e)));
        eprintln!(
            "Generated {}x{} problem (total quantity {}) → {}",
            instance.sources(),
            instance.destinations(),
            instance.total_supply(),
            path
        );
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(EXIT_USAGE);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "solve" => cmd_solve(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(EXIT_USAGE);
        }
    }
}
