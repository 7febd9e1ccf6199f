// SPDX-License-Identifier: GPL-3.0-or-later

use std::process;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use get_color::{config, Background, PixelSampler, Res};

#[derive(Parser)]
#[command(name = "get-color")]
#[command(about = "Print the RGB value of a pixel in an image")]
struct Args {
    /// Sampler configuration file
    #[arg(short, long, value_name = "file")]
    config: Option<String>,

    /// Pixel column, counted from the left edge
    #[arg(short, value_name = "num", allow_negative_numbers = true)]
    x: Option<i64>,

    /// Pixel row, counted from the top edge
    #[arg(short, value_name = "num", allow_negative_numbers = true)]
    y: Option<i64>,

    /// Backing color for transparent pixels: black, white or none
    #[arg(short, long, value_name = "color")]
    background: Option<Background>,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[arg(value_name = "filename")]
    image: String,
}

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(_) => (),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

fn run(args: Args) -> Res<()> {
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    SimpleLogger::new().with_level(level).init()?;

    let config = match &args.config {
        Some(path) => config::load(path)?,
        None => config::Config::default(),
    };

    let x = args.x.or(config.x).unwrap_or(0);
    let y = args.y.or(config.y).unwrap_or(0);
    let background = args.background.or(config.background).unwrap_or_default();

    log::info!("sampling {} @{},{} over {}", args.image, x, y, background);

    let sampler = PixelSampler::new(background);
    let color = sampler.sample(&args.image, x, y)?;
    println!("{color}");

    Ok(())
}
