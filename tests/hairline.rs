use tiny_raster::*;

fn opaque_paint() -> Paint {
    let mut paint = Paint::default();
    paint.set_color_rgba8(0, 0, 0, 255);
    paint
}

fn line_path(x0: f32, y0: f32, x1: f32, y1: f32) -> Path {
    let mut pb = PathBuilder::new();
    pb.move_to(x0, y0);
    pb.line_to(x1, y1);
    pb.finish().unwrap()
}

#[test]
fn horizontal_hairline_is_one_pixel_tall() {
    let mut pixmap = Pixmap::new(100, 100).unwrap();
    let paint = opaque_paint();

    pixmap.stroke_hairline(&line_path(10.0, 10.0, 90.0, 10.0), &paint, LineCap::Butt).unwrap();

    let covered_rows = (0..100).filter(|&y| pixmap.pixel(50, y).unwrap().alpha() > 0).count();
    assert_eq!(covered_rows, 1);
    assert!(pixmap.pixel(50, 9).unwrap().alpha() > 0 || pixmap.pixel(50, 10).unwrap().alpha() > 0);
}

#[test]
fn vertical_hairline_is_one_pixel_wide() {
    let mut pixmap = Pixmap::new(100, 100).unwrap();
    let paint = opaque_paint();

    pixmap.stroke_hairline(&line_path(10.0, 10.0, 10.0, 90.0), &paint, LineCap::Butt).unwrap();

    let covered_cols = (0..100).filter(|&x| pixmap.pixel(x, 50).unwrap().alpha() > 0).count();
    assert_eq!(covered_cols, 1);
}

// S4: a diagonal hairline splits coverage between the two pixel rows (or
// columns) it passes through, each pair summing to roughly full coverage.
#[test]
fn diagonal_hairline_splits_coverage_aa() {
    let mut pixmap = Pixmap::new(100, 100).unwrap();
    let mut paint = opaque_paint();
    paint.anti_alias = true;

    pixmap.stroke_hairline(&line_path(10.0, 10.0, 20.0, 20.0), &paint, LineCap::Butt).unwrap();

    let mut any_split = false;
    for x in 10..20 {
        let top = pixmap.pixel(x, x.saturating_sub(10) + 10).map(|p| p.alpha() as u32).unwrap_or(0);
        let bot = pixmap.pixel(x, x.saturating_sub(10) + 11).map(|p| p.alpha() as u32).unwrap_or(0);
        if top > 0 && bot > 0 {
            any_split = true;
            assert!(top + bot <= 255 + 2);
        }
    }
    assert!(any_split);
}

#[test]
fn diagonal_hairline_aliased_paints_something() {
    let mut pixmap = Pixmap::new(100, 100).unwrap();
    let paint = opaque_paint();

    pixmap.stroke_hairline(&line_path(10.0, 10.0, 90.0, 90.0), &paint, LineCap::Butt).unwrap();

    let painted = (0..100).any(|i| pixmap.pixel(i, i).unwrap().alpha() > 0);
    assert!(painted);
}

#[test]
fn zero_length_segment_paints_nothing() {
    let mut pixmap = Pixmap::new(100, 100).unwrap();
    let paint = opaque_paint();

    pixmap.stroke_hairline(&line_path(50.0, 50.0, 50.0, 50.0), &paint, LineCap::Butt).unwrap();

    for x in 0..100 {
        for y in 0..100 {
            assert_eq!(pixmap.pixel(x, y).unwrap().alpha(), 0);
        }
    }
}

#[test]
fn square_cap_extends_beyond_butt_cap() {
    let mut pixmap_butt = Pixmap::new(100, 100).unwrap();
    let mut pixmap_square = Pixmap::new(100, 100).unwrap();
    let paint = opaque_paint();

    let path = line_path(20.0, 50.0, 80.0, 50.0);
    pixmap_butt.stroke_hairline(&path, &paint, LineCap::Butt).unwrap();
    pixmap_square.stroke_hairline(&path, &paint, LineCap::Square).unwrap();

    // Square extends half a pixel past the endpoint; butt does not reach
    // a pixel further out along the line.
    let butt_beyond = pixmap_butt.pixel(19, 50).unwrap().alpha();
    let square_beyond = pixmap_square.pixel(19, 50).unwrap().alpha();
    assert_eq!(butt_beyond, 0);
    assert!(square_beyond >= butt_beyond);
}
