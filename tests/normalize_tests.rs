// tests/normalize_tests.rs

use image::{DynamicImage, Rgba, RgbaImage};
use svg_spritesheet::normalize::{self, ICON_SIZE};

fn solid(w: u32, h: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, Rgba([10, 200, 30, 255])))
}

#[test]
fn resize_fits_large_images_within_icon_size() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("wide.png");

    // 64x32 shrinks to fit within 32x32 with the 2:1 ratio preserved.
    let written = normalize::optimize(&solid(64, 32), &path, true).unwrap();
    assert_eq!(written.dimensions(), (ICON_SIZE, ICON_SIZE / 2));

    let on_disk = image::open(&path).unwrap().to_rgba8();
    assert_eq!(on_disk.dimensions(), (ICON_SIZE, ICON_SIZE / 2));
}

#[test]
fn resize_never_upscales_small_images() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("small.png");

    let written = normalize::optimize(&solid(8, 8), &path, true).unwrap();
    assert_eq!(written.dimensions(), (8, 8));
    assert_eq!(written, solid(8, 8).to_rgba8());
}

#[test]
fn resize_off_leaves_dimensions_alone() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("big.png");

    let written = normalize::optimize(&solid(64, 64), &path, false).unwrap();
    assert_eq!(written.dimensions(), (64, 64));
}
