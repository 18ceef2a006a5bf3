use clap::ArgMatches;
use serde_json::Value;

/** reads command line input and returns the instance filename, the instance
type, and the optional solution/stats filenames */
pub fn read_params(main_args:&ArgMatches) -> (String, String, Option<String>, Option<String>) {
    let inst_filename = main_args.value_of("instance").unwrap().to_string();
    let inst_type = main_args.value_of("type").unwrap().to_string();
    // read value of the solution filename
    let sol_file:Option<String> = main_args.value_of("solution").map(|e| {
        println!("printing solutions in: {}", e);
        e.to_string()
    });
    // read value of the performance logs filename
    let perf_file:Option<String> = main_args.value_of("perf").map(|e| {
        println!("printing perfs in: {}\n", e);
        e.to_string()
    });
    (inst_filename, inst_type, sol_file, perf_file)
}

/// exports run statistics (JSON) if a filename was requested
pub fn export_stats(perf_file:Option<&str>, stats:&Value) -> std::io::Result<()> {
    match perf_file {
        None => Ok(()),
        Some(filename) => {
            let encoded = serde_json::to_string(stats)?;
            std::fs::write(filename, encoded)
        }
    }
}
