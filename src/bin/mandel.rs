// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;
extern crate rand;
extern crate spirobrot;

mod common;

use clap::{App, Arg, ArgMatches};

use common::{parse_complex, parse_pair, validate_pair, validate_range, value};
use spirobrot::{write_png, ComplexPlane, FractalRenderer, Palette, PixelBuffer, RenderError};

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const ORIGIN: &str = "origin";
const SPAN: &str = "span";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const PALETTE: &str = "palette";
const JITTER: &str = "jitter";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version("0.1.0")
        .about("Escape-time Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("mandel.png")
                .help("Output PNG file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("256x256")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(ORIGIN)
                .long(ORIGIN)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.0,-1.5")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse window origin"))
                .help("Point of the complex plane at the top left pixel"),
        )
        .arg(
            Arg::with_name(SPAN)
                .long(SPAN)
                .takes_value(true)
                .default_value("3.0,3.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse window span"))
                .help("Width and height of the window on the complex plane"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in solver"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("32")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000",
                    )
                })
                .help("Iterations before a point is considered inside the set"),
        )
        .arg(
            Arg::with_name(PALETTE)
                .long(PALETTE)
                .short("p")
                .takes_value(true)
                .possible_values(&["shifted", "linear"])
                .default_value("shifted")
                .help("Mapping from iteration count to color"),
        )
        .arg(
            Arg::with_name(JITTER)
                .long(JITTER)
                .help("Randomly nudge and stretch the window vertically"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<(), RenderError> {
    let size: (usize, usize) =
        parse_pair(matches.value_of(SIZE).unwrap(), 'x').expect("Error parsing image dimensions");
    let origin =
        parse_complex(matches.value_of(ORIGIN).unwrap()).expect("Error parsing window origin");
    let span = parse_complex(matches.value_of(SPAN).unwrap()).expect("Error parsing window span");
    let threads: usize = value(matches, THREADS);
    let iterations: usize = value(matches, ITERATIONS);
    let palette: Palette = value(matches, PALETTE);
    let output = matches.value_of(OUTPUT).unwrap();

    let mut window = ComplexPlane::new(origin, span)?;
    if matches.is_present(JITTER) {
        window = window.jittered(&mut rand::thread_rng());
    }

    let mut buffer = PixelBuffer::new(size.0, size.1)?;
    let renderer = FractalRenderer::new(window, iterations, palette);
    if threads > 1 {
        renderer.render_threaded(&mut buffer, threads)?;
    } else {
        renderer.render(&mut buffer);
    }

    info!("writing {}x{} image to {}", size.0, size.1, output);
    write_png(output, &buffer)
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
