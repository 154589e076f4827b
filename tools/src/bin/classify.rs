// Classify the color of a raw RGBA dump (4 bytes per pixel, as written
// by most image decoders) against the beer color standards.
//
//     classify <pixels.rgba> [--size WIDTHxHEIGHT] [--tables dataset.json]

use std::{env, fs, path::PathBuf, error::Error};
use beer_color_meter::{average, average_region, config::ReferenceData,
                       BeerColorClassifier, ReferenceTables};
use beer_color_tools::logger;
use tracing::{error, info, info_span};

type Err = Box<dyn Error>;

struct Args {
    pixels: PathBuf,
    size: Option<(usize, usize)>,
    tables: Option<PathBuf>,
}

fn usage() -> Err {
    "usage: classify <pixels.rgba> [--size WIDTHxHEIGHT] \
     [--tables dataset.json]".into()
}

fn parse_size(s: &str) -> Option<(usize, usize)> {
    let (w, h) = s.split_once('x')?;
    Some((w.parse().ok()?, h.parse().ok()?))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, Err> {
    let mut pixels = None;
    let mut size = None;
    let mut tables = None;
    while let Some(a) = args.next() {
        match a.as_str() {
            "--size" => {
                let s = args.next().ok_or_else(usage)?;
                size = Some(parse_size(&s)
                            .ok_or_else(|| format!("invalid size “{s}”"))?);
            }
            "--tables" => tables = Some(args.next().ok_or_else(usage)?.into()),
            _ if pixels.is_none() && !a.starts_with("--") => {
                pixels = Some(PathBuf::from(&a))
            }
            _ => return Err(usage()),
        }
    }
    Ok(Args { pixels: pixels.ok_or_else(usage)?, size, tables })
}

fn run(args: Args) -> Result<(), Err> {
    let custom;
    let tables = match &args.tables {
        Some(path) => {
            custom = ReferenceData::from_json_file(path)?.into_tables()?;
            info!("Reference tables: {}", path.display());
            &custom
        }
        None => ReferenceTables::standard(),
    };
    let classifier = BeerColorClassifier::new(tables);

    let _span = info_span!("measure", file = %args.pixels.display())
        .entered();
    let pixels = fs::read(&args.pixels)?;
    let color = match args.size {
        Some((w, h)) => average_region(&pixels, w, h)?,
        None => average(&pixels)?,
    };
    let beer = classifier.classify(color);
    info!("{} pixels, average #{:02X}{:02X}{:02X}", pixels.len() / 4,
          color.r, color.g, color.b);
    println!("{beer}");
    println!("\nClosest standard: {} at distance {:.1}",
             beer.entry, beer.distance);
    Ok(())
}

fn main() {
    logger::init();
    let result = parse_args(env::args().skip(1)).and_then(run);
    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}
