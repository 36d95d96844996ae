//! End-to-end conversion: image file in, valid binary STL out.

use image::{Rgb, RgbImage};
use litho_field::{HeightField, ReliefParams};
use litho_image::{load_luminance, SampleOptions};
use litho_mesh::{BorderParams, PlateBuilder, PlateParams};
use litho_stl::{StlFormat, StlWriter};

fn gradient_png(dir: &std::path::Path) -> std::path::PathBuf {
    let mut img = RgbImage::new(32, 24);
    for (x, y, p) in img.enumerate_pixels_mut() {
        let v = ((x * 8) % 256) as u8;
        let w = ((y * 11) % 256) as u8;
        *p = Rgb([v, w, v / 2]);
    }
    let path = dir.join("gradient.png");
    img.save(&path).unwrap();
    path
}

#[test]
fn image_file_converts_to_a_consistent_binary_stl() {
    let dir = tempfile::tempdir().unwrap();
    let input = gradient_png(dir.path());
    let output = dir.path().join("gradient.stl");

    let options = SampleOptions {
        desired_width_mm: 8.0,
        step_mm: 0.5,
        blur_sigma: 1.0,
        mirror_x: false,
        mirror_y: false,
    };
    let grid = load_luminance(&input, &options).unwrap();
    // 8.0 / 0.5 = 16 columns; 24 * 16 / 32 = 12 rows.
    assert_eq!((grid.width(), grid.height()), (16, 12));

    let field = HeightField::from_luminance(&grid, &ReliefParams::default()).unwrap();
    let params = PlateParams::with_step(0.5).bordered(BorderParams::default());
    let builder = PlateBuilder::new(&field, &params).unwrap();

    let mut writer = StlWriter::create(&output, StlFormat::Binary).unwrap();
    let triangles = builder.emit(&mut writer).unwrap();
    writer.finalize().unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(bytes.len() as u64, 84 + triangles * 50);

    let count = u32::from_le_bytes(bytes[80..84].try_into().unwrap());
    assert_eq!(u64::from(count), triangles);

    // Every coordinate must be finite, the relief inside the thickness
    // range, and the frame below the border plane.
    for record in bytes[84..].chunks(50) {
        for coord in record[12..48].chunks(4) {
            let v = f32::from_le_bytes(coord.try_into().unwrap());
            assert!(v.is_finite());
        }
        let z = f32::from_le_bytes(record[20..24].try_into().unwrap());
        assert!((0.0..=5.0).contains(&z));
    }
}
