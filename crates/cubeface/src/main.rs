//! 3x3x3 puzzle cube in the terminal.

mod cli;
mod controls;
mod render;
mod session;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder().init();

    color_eyre::install().expect("error initializing panic handler");

    cli::exec(args)
}
