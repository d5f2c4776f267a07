// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate num;
extern crate spirobrot;

mod common;

use clap::{App, Arg, ArgMatches};

use common::{parse_pair, validate, validate_pair, value};
use spirobrot::{CurveParams, Exposure, ExitFlag, PixelBuffer, PngSink, RenderError, SpiroRenderer};

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const OUTER: &str = "outer";
const INNER: &str = "inner";
const OFFSET: &str = "offset";
const STEPS: &str = "steps";
const PERIOD: &str = "period";
const LISSAJOUS: &str = "lissajous";
const BATCH: &str = "batch";

fn args<'a>() -> ArgMatches<'a> {
    App::new("spiro")
        .version("0.1.0")
        .about("Long-exposure spirograph renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("spiro.png")
                .help("Output PNG file, rewritten on every presented frame"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("512x512")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(OUTER)
                .long(OUTER)
                .takes_value(true)
                .default_value("100")
                .validator(|s| validate::<f64>(&s, "Could not parse outer radius"))
                .help("Radius of the fixed circle"),
        )
        .arg(
            Arg::with_name(INNER)
                .long(INNER)
                .takes_value(true)
                .default_value("49")
                .validator(|s| validate::<f64>(&s, "Could not parse inner radius"))
                .help("Radius of the rolling circle"),
        )
        .arg(
            Arg::with_name(OFFSET)
                .long(OFFSET)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1.5")
                .validator(|s| validate::<f64>(&s, "Could not parse pen offset"))
                .help("Pen distance from the rolling circle's center, in inner radii"),
        )
        .arg(
            Arg::with_name(STEPS)
                .long(STEPS)
                .takes_value(true)
                .default_value("20000")
                .validator(|s| validate::<usize>(&s, "Could not parse step count"))
                .help("Samples per turn"),
        )
        .arg(
            Arg::with_name(PERIOD)
                .long(PERIOD)
                .takes_value(true)
                .default_value("25")
                .validator(|s| validate::<usize>(&s, "Could not parse period"))
                .help("Number of turns"),
        )
        .arg(
            Arg::with_name(LISSAJOUS)
                .long(LISSAJOUS)
                .takes_value(true)
                .default_value("1,1")
                .validator(|s| validate_pair::<u32>(&s, ',', "Could not parse frequencies"))
                .help("Horizontal and vertical frequency multipliers"),
        )
        .arg(
            Arg::with_name(BATCH)
                .long(BATCH)
                .short("b")
                .takes_value(true)
                .default_value("0")
                .validator(|s| validate::<usize>(&s, "Could not parse batch size"))
                .help("Present the image every this many samples; 0 presents once at the end"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<(), RenderError> {
    let size: (usize, usize) =
        parse_pair(matches.value_of(SIZE).unwrap(), 'x').expect("Error parsing image dimensions");
    let (freq_x, freq_y) = parse_pair(matches.value_of(LISSAJOUS).unwrap(), ',')
        .expect("Error parsing frequencies");
    let params = CurveParams {
        outer_radius: value(matches, OUTER),
        inner_radius: value(matches, INNER),
        offset: value(matches, OFFSET),
        steps: value(matches, STEPS),
        period: value(matches, PERIOD),
        freq_x,
        freq_y,
    };
    let batch: usize = value(matches, BATCH);

    let mut buffer = PixelBuffer::new(size.0, size.1)?;
    let mut display = PngSink::new(matches.value_of(OUTPUT).unwrap());
    let mut exit = ExitFlag::new();
    let renderer = SpiroRenderer::new(params, Exposure::default());

    let plotted = renderer.render_with(&mut buffer, batch, &mut display, &mut exit)?;
    info!(
        "{} samples in {} frames written to {}",
        plotted,
        display.frames(),
        display.path().display()
    );
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        error!("{}", e);
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
