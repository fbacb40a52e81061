use anyhow::Context;
use bmpedit::{Config, Session, command};
use clap::{ArgAction, Parser};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BMPEDIT_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "bmpedit")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Scriptable editor for 24-bit BMP images",
    after_help = "Commands are read from standard input (or --script) until `quit`:\n  \
        edit <path> | save <path> | set d <r> <g> <b> | set l <size>\n  \
        draw l <y1> <x1> <y2> <x2> | draw r <y> <x> <w> <h> | draw t <y1> <x1> <y2> <x2> <y3> <x3>\n  \
        fill <y> <x> | insert <path> <y> <x> | quit"
)]
struct Cli {
    /// Bitmap to load before reading commands
    #[arg(value_name = "IMAGE")]
    image: Option<PathBuf>,

    /// Read commands from FILE instead of standard input
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Use FILE instead of ~/.config/bmpedit/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_config_path()?,
        };
        Config::create_default_file(&path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let mut session = Session::from_config(&config);

    if let Some(image) = &cli.image {
        session
            .load(image)
            .with_context(|| format!("Failed to load {}", image.display()))?;
    }

    let reader: Box<dyn BufRead> = match &cli.script {
        Some(path) => {
            log::info!("Reading commands from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut stderr = io::stderr().lock();
    command::run(&mut session, reader, &mut stderr).context("Command input failed")?;

    Ok(())
}
