//! Command-line driver for the touchcube engine.
//!
//! Feeds scripted frames of touch, button, and stick input through the same
//! state machine a handheld front end would use, then prints the cube.

mod cli;
mod net;
mod script;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    color_eyre::install()?;
    env_logger::builder().init();

    cli::exec(args)
}
