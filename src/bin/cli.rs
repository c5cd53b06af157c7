// src/bin/cli.rs
use xsmb_loto::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(true);
    cli::run()
}
