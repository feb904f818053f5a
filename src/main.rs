use std::sync::Arc;
use std::time::Instant;

use clap::Parser;

use logsweep::cli::{validate_cli_args, Cli};
use logsweep::platform::ExitCode;
use logsweep::{analyze_logs, export_report, read_configs};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = validate_cli_args(&cli) {
        eprintln!("logsweep: Error: {}", e);
        ExitCode::InvalidUsage.exit();
    }

    let configs = match read_configs(&cli.config) {
        Ok(configs) => configs,
        Err(e) => {
            eprintln!("logsweep: Error reading configuration: {}", e);
            ExitCode::GeneralError.exit();
        }
    };

    println!(
        "Successfully loaded {} log configurations from {}.",
        configs.len(),
        cli.config
    );
    println!("Starting concurrent analysis...");

    let sim = Arc::new(cli.simulation());
    let started = Instant::now();
    let results = analyze_logs(configs, sim);
    let total_time = started.elapsed();

    println!();
    println!(
        "Analysis completed in {}",
        humantime::format_duration(total_time)
    );
    println!("Processed {} log files", results.len());

    println!();
    println!("--- Analysis Results ---");
    let mut success_count = 0;
    let mut failure_count = 0;

    for result in &results {
        print!(
            "ID: {}, Status: {}, Time: {}",
            result.log_id,
            result.status,
            humantime::format_duration(result.process_time)
        );
        if result.is_success() {
            success_count += 1;
            println!(", Message: {}", result.message);
        } else {
            failure_count += 1;
            println!(", Error: {}", result.error_details);
        }
    }

    println!();
    println!("Summary: {} successful, {} failed", success_count, failure_count);

    if let Some(output) = &cli.output {
        println!();
        println!("Exporting results to {}...", output);
        if let Err(e) = export_report(output, &results) {
            eprintln!("logsweep: Error exporting results: {}", e);
            ExitCode::GeneralError.exit();
        }
        println!("Export complete.");
    } else {
        println!();
        println!("Output path not provided. Results will not be exported to a file.");
    }
}
