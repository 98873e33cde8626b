// src/bin/cli.rs
use jonas_scrape::cli;

fn main() {
    let _ = color_eyre::install();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
