extern crate assert_cmd;
extern crate image;
extern crate predicates;
extern crate spirobrot;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

use spirobrot::{FractalRenderer, PixelBuffer};

#[test]
fn mandel_defaults_write_the_reference_image() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("mandel")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success();

    let path = dir.path().join("mandel.png");
    assert!(predicate::path::exists().eval(&path));

    let mut expected = PixelBuffer::new(256, 256).unwrap();
    FractalRenderer::default().render(&mut expected);
    let written = image::open(&path).unwrap().to_rgb();
    assert_eq!(written.dimensions(), (256, 256));
    assert_eq!(written.into_raw(), expected.as_bytes());
}

#[test]
fn mandel_honours_size_and_palette() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("mandel")
        .unwrap()
        .current_dir(dir.path())
        .args(&["--size", "64x48", "--output", "small.png", "--palette", "linear"])
        .assert()
        .success();
    let small = image::open(dir.path().join("small.png")).unwrap().to_rgb();
    assert_eq!(small.dimensions(), (64, 48));
    // The top left corner escapes after one step: (2, 3, 5).
    assert_eq!(small.get_pixel(0, 0).0, [2, 3, 5]);
}

#[test]
fn mandel_rejects_an_empty_image() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("mandel")
        .unwrap()
        .current_dir(dir.path())
        .args(&["--size", "0x10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid buffer dimension"));
}

#[test]
fn mandel_rejects_an_empty_window() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("mandel")
        .unwrap()
        .current_dir(dir.path())
        .args(&["--span", "0.0,1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid plane window"));
}

#[test]
fn spiro_writes_its_trail() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("spiro")
        .unwrap()
        .current_dir(dir.path())
        .args(&["--steps", "500", "--period", "2", "--batch", "250"])
        .assert()
        .success();

    let trail = image::open(dir.path().join("spiro.png")).unwrap().to_rgb();
    assert_eq!(trail.dimensions(), (512, 512));
    assert!(trail.pixels().any(|p| p[0] > 0));
    assert_eq!(trail.get_pixel(0, 0)[0], 0);
}

#[test]
fn spiro_reports_an_uncountable_curve() {
    let dir = tempfile::tempdir().unwrap();
    let steps = usize::max_value().to_string();
    Command::cargo_bin("spiro")
        .unwrap()
        .current_dir(dir.path())
        .args(&["--steps", steps.as_str(), "--period", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many samples"));
    assert!(!dir.path().join("spiro.png").exists());
}
