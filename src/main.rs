// Runs the built-in self-test of every loss function.
//   cargo run                 — text table
//   cargo run -- --json       — JSON report
// Set RUST_LOG=info to see each case as it is evaluated.
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let json = std::env::args().skip(1).any(|arg| arg == "--json");
    let report = ferrite_loss::selftest::run();

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("ferrite-loss self-test");
        print!("{}", report.to_table());
    }

    if report.all_passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
