pub mod build;
pub mod completions;
pub mod demo;
pub mod init;
pub mod render;

use clap::{Parser, Subcommand};

/// fimage - Continuous functional images rendered to pixels
#[derive(Parser, Debug)]
#[command(name = "fimage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a single scene file to PNG
    Render(render::RenderArgs),

    /// Render every scene in a project
    Build(build::BuildArgs),

    /// Render or list the built-in demos
    Demo(demo::DemoArgs),

    /// Initialize a fimage project (generates fimage.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
