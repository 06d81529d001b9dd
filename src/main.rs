use clap::Parser;

use disastersafe::cli::{self, Cli};
use disastersafe::{init_logging, Config};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbosity());

    let config = Config::load_from(args.config.clone())?;
    cli::run(args, config)
}
