//! Command line frequency allocator: reads an instance (named antenna JSON
//! or DIMACS graph), runs the largest-first greedy, checks the result, and
//! prints/exports the assignment and the number of frequencies used.

use std::error::Error;
use std::fs;
use std::process::exit;
use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;

use freq_alloc::antennas::AntennaInstance;
use freq_alloc::color::{checker, classes, nb_frequencies, CheckerResult};
use freq_alloc::dimacs;
use freq_alloc::search::largest_first::largest_first;
use freq_alloc::util::{export_stats, read_params};

/** solves a named antenna instance (JSON) */
fn solve_antennas(
    filename:&str,
    sol_file:Option<&str>,
    perf_file:Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let inst = AntennaInstance::from_file(filename)?;
    inst.display_statistics();
    println!("=======================");
    let mut allocator = inst.to_allocator()?;
    let t_start = Instant::now();
    let frequencies = allocator.greedy_coloring();
    let duration = t_start.elapsed().as_secs_f32();
    let nb = allocator.nb_frequencies();
    println!("largest-first took {:.3} seconds. Nb frequencies: {}", duration, nb);
    for antenna in allocator.antennas() {
        println!("\t{} \t-> {}", antenna, frequencies[antenna.as_str()]);
    }
    if let Some(assignment) = allocator.assignment() {
        match checker(allocator.instance(), assignment) {
            CheckerResult::Ok(_) => {},
            res => println!("invalid assignment (reason: {:?})", res),
        }
    }
    let stats = json!({
        "nb_frequencies": nb,
        "time_searched": duration,
        "inst_name": filename
    });
    export_stats(perf_file, &stats)?;
    if let Some(sol) = sol_file {
        fs::write(sol, serde_json::to_string_pretty(&frequencies)?)?;
    }
    Ok(())
}

/** solves a DIMACS graph instance */
fn solve_dimacs(
    filename:&str,
    sol_file:Option<&str>,
    perf_file:Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let inst = dimacs::read_from_file(filename)?;
    inst.display_statistics();
    println!("=======================");
    let t_start = Instant::now();
    let assignment = largest_first(&inst);
    let duration = t_start.elapsed().as_secs_f32();
    let nb = nb_frequencies(&assignment);
    println!("largest-first took {:.3} seconds. Nb frequencies: {}", duration, nb);
    match checker(&inst, &assignment) {
        CheckerResult::Ok(_) => {},
        res => println!("invalid assignment (reason: {:?})", res),
    }
    let stats = json!({
        "nb_frequencies": nb,
        "time_searched": duration,
        "inst_name": filename
    });
    export_stats(perf_file, &stats)?;
    if let Some(sol) = sol_file {
        dimacs::write_solution(sol, &classes(&assignment))?;
    }
    Ok(())
}

/** reads an instance given on the command line and allocates frequencies. */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let (inst_filename, inst_type, sol_file, perf_file) = read_params(&main_args);
    println!("=========================================================");
    println!("reading instance: {}...", inst_filename);
    let result = match inst_type.as_str() {
        "antennas" => solve_antennas(&inst_filename, sol_file.as_deref(), perf_file.as_deref()),
        "dimacs" => solve_dimacs(&inst_filename, sol_file.as_deref(), perf_file.as_deref()),
        _ => {
            eprintln!("instance type unknown {}", inst_type);
            exit(2);
        }
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        exit(1);
    }
}
