use clap::Parser;
use tourneystats::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
