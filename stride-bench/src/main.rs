mod cli;
mod config;
mod driver;
mod harness;
mod output;
mod stats;
mod verify;

use clap::error::ErrorKind;
use clap::Parser;
use cli::{OutputFormat, StrideArgs};
use output::progress::BenchProgress;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Invalid arguments are reported as one line on stdout and are not an
    // error exit, whether clap or the driver rejects them.
    let args = match StrideArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("{}", first_line(&e.to_string()));
                return;
            }
        },
    };

    let request = match driver::prepare(&args) {
        Ok(r) => r,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };

    let progress = BenchProgress::new(request.test_case.name(), request.trials.rounds());
    let cb = progress.callback();
    let result = driver::execute(&request, Some(&cb));
    progress.finish();

    match request.format {
        OutputFormat::Table => output::table::render(&result),
        OutputFormat::Json => {
            if let Err(e) = output::json::render(&result) {
                eprintln!("Error writing JSON: {}", e);
            }
        }
    }
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or_default().trim_end()
}
