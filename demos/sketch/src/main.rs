use crate::cli::Args;
use crate::settings::SketchConfig;
use crate::sketch::SketchScene;
use anyhow::Result;
use clap::Parser;
use log::info;
use log::Level;

mod app;
mod cli;
mod dump;
mod labels;
mod pointer;
mod presentation;
mod scene;
mod settings;
mod sketch;

fn main() -> Result<()> {
    let args = Args::parse();

    if args.trace {
        simple_logger::init_with_level(Level::Trace)?;
    } else if args.verbose {
        simple_logger::init_with_level(Level::Debug)?;
    } else {
        simple_logger::init_with_level(Level::Info)?;
    }

    let config = SketchConfig::new(&args)?;
    info!("Starting sketch with {:?} collision", config.collision);

    let frames = config.frames;
    let scene = SketchScene::new(config)?;

    app::Application::new(Box::new(scene), frames).run()?;
    Ok(())
}
