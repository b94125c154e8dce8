use clap::Parser;
use miette::Result;
use pixcode::cli::{load_config, Cli, Commands};
use pixcode::config::Config;
use pixcode::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    let config = match cli.command {
        Commands::Completions(_) => Config::default(),
        _ => load_config(cli.config.as_ref())?,
    };

    match cli.command {
        Commands::Check(args) => pixcode::cli::check::run(args, &config, &printer)?,
        Commands::Fmt(args) => pixcode::cli::fmt::run(args, &config, &printer)?,
        Commands::Raster(args) => pixcode::cli::raster::run(args, &config)?,
        Commands::Render(args) => pixcode::cli::render::run(args, &config, &printer)?,
        Commands::Import(args) => pixcode::cli::import::run(args, &config, &printer)?,
        Commands::Completions(args) => pixcode::cli::completions::run(args)?,
    }

    Ok(())
}
