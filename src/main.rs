use anyhow::Result;
use clap::{ArgAction, Parser};
use paintbox::Config;
use paintbox::Session;
use paintbox::config::MAX_CANVAS_EDGE;
use paintbox::script::Script;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "paintbox")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PAINTBOX_GIT_HASH"), ")"),
    about = "Simple drawing program with undo, redo and PNG/JPEG files"
)]
struct Cli {
    /// Replay a drawing script (TOML list of [[step]] actions)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the canvas width in pixels
    #[arg(long, value_name = "PX", value_parser = clap::value_parser!(u32).range(1..=MAX_CANVAS_EDGE as i64))]
    width: Option<u32>,

    /// Override the canvas height in pixels
    #[arg(long, value_name = "PX", value_parser = clap::value_parser!(u32).range(1..=MAX_CANVAS_EDGE as i64))]
    height: Option<u32>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "script")]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.script else {
        print_usage();
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            log::warn!("Failed to load config: {:#}, using defaults", err);
            Config::default()
        }),
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }

    let script = Script::from_file(&script_path)?;
    log::info!(
        "Replaying {} steps on a {}x{} canvas",
        script.steps.len(),
        config.canvas.width,
        config.canvas.height
    );

    let mut session = Session::from_config(&config);
    let report = script.run(&mut session);

    println!(
        "Ran {} steps; document has {} shapes",
        report.steps,
        session.shapes().len()
    );

    if report.failures > 0 {
        anyhow::bail!(
            "Script {} did not complete cleanly: {} step(s) failed",
            script_path.display(),
            report.failures
        );
    }

    Ok(())
}

fn print_usage() {
    println!("paintbox: Simple drawing program with undo, redo and PNG/JPEG files");
    println!();
    println!("Usage:");
    println!("  paintbox --script FILE    Replay a drawing script and save its output");
    println!("  paintbox --init-config    Write ~/.config/paintbox/config.toml");
    println!("  paintbox --help           Show help");
    println!();
    println!("Script steps:");
    println!("  tool, color, brush-size    Change the paint context");
    println!("  press, drag, release       Pointer gestures (release may carry text)");
    println!("  undo, redo, new            Edit the drawing");
    println!("  open, save                 Load or write PNG/JPEG files");
}
