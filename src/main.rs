use std::io;

use anyhow::Context;
use clap::Parser;

use coolfetch::cli::Args;
use coolfetch::config::Config;

fn main() -> anyhow::Result<()> {
    coolfetch::logging::init_tracing();

    let args = Args::parse();
    let path = args.config_path();
    let mut config = Config::load_from(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    args.apply(&mut config).context("invalid command-line override")?;

    tracing::info!(
        resources = config.resources.len(),
        fault_probability = config.defaults.fault_probability,
        once = args.once,
        "Starting coolfetch"
    );

    if args.once {
        let all_ok = coolfetch::headless::run(&config, args.seed, &mut io::stdout().lock())?;
        if !all_ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    coolfetch::ui::runtime::run(&config, args.seed)?;
    Ok(())
}
