use clap::Parser;
use miette::Result;
use fimage::cli::{Cli, Commands};
use fimage::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => fimage::cli::render::run(args, &printer)?,
        Commands::Build(args) => fimage::cli::build::run(args, &printer)?,
        Commands::Demo(args) => fimage::cli::demo::run(args, &printer)?,
        Commands::Init(args) => fimage::cli::init::run(args, &printer)?,
        Commands::Completions(args) => fimage::cli::completions::run(args)?,
    }

    Ok(())
}
