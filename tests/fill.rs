use tiny_raster::*;

fn opaque_paint() -> Paint {
    let mut paint = Paint::default();
    paint.set_color_rgba8(50, 127, 150, 255);
    paint
}

fn square_path() -> Path {
    let mut pb = PathBuilder::new();
    pb.move_to(20.0, 20.0);
    pb.line_to(80.0, 20.0);
    pb.line_to(80.0, 80.0);
    pb.line_to(20.0, 80.0);
    pb.close();
    pb.finish().unwrap()
}

// S1: axis-aligned square, non-AA fill. Every pixel whose center falls
// inside [20, 80) x [20, 80) is fully covered, everything else is empty.
#[test]
fn axis_aligned_square() {
    let mut pixmap = Pixmap::new(100, 100).unwrap();
    let paint = opaque_paint();

    pixmap.fill_path(&square_path(), &paint, FillRule::Winding).unwrap();

    let src = paint.color.premultiply().to_color_u8();
    assert_eq!(pixmap.pixel(25, 25).unwrap(), src);
    assert_eq!(pixmap.pixel(79, 79).unwrap(), src);
    assert_eq!(pixmap.pixel(20, 20).unwrap(), src);
    assert_eq!(pixmap.pixel(19, 19).unwrap().alpha(), 0);
    assert_eq!(pixmap.pixel(80, 80).unwrap().alpha(), 0);
    assert_eq!(pixmap.pixel(0, 0).unwrap().alpha(), 0);
}

#[test]
fn axis_aligned_square_aa_matches_inside_coverage() {
    let mut pixmap = Pixmap::new(100, 100).unwrap();
    let mut paint = opaque_paint();
    paint.anti_alias = true;

    pixmap.fill_path(&square_path(), &paint, FillRule::Winding).unwrap();

    // An integer-aligned rect should still be exactly opaque deep inside
    // and exactly empty well outside, even through the AA backend.
    let src = paint.color.premultiply().to_color_u8();
    assert_eq!(pixmap.pixel(50, 50).unwrap(), src);
    assert_eq!(pixmap.pixel(0, 0).unwrap().alpha(), 0);
}

// Horizontal and vertical lines enclose zero area and must not paint anything.
#[test]
fn horizontal_line_has_no_fill() {
    let mut pixmap = Pixmap::new(100, 100).unwrap();
    let paint = opaque_paint();

    let mut pb = PathBuilder::new();
    pb.move_to(10.0, 10.0);
    pb.line_to(90.0, 10.0);
    let path = pb.finish().unwrap();

    pixmap.fill_path(&path, &paint, FillRule::Winding).unwrap();

    for x in 0..100 {
        for y in 0..100 {
            assert_eq!(pixmap.pixel(x, y).unwrap().alpha(), 0);
        }
    }
}

#[test]
fn vertical_line_has_no_fill() {
    let mut pixmap = Pixmap::new(100, 100).unwrap();
    let paint = opaque_paint();

    let mut pb = PathBuilder::new();
    pb.move_to(10.0, 10.0);
    pb.line_to(10.0, 90.0);
    let path = pb.finish().unwrap();

    pixmap.fill_path(&path, &paint, FillRule::Winding).unwrap();

    for x in 0..100 {
        for y in 0..100 {
            assert_eq!(pixmap.pixel(x, y).unwrap().alpha(), 0);
        }
    }
}

// S2: a triangle apex should produce partial, not full, coverage at the
// scanline crossing the tip, and nowhere on that row should it exceed it.
#[test]
fn triangle_apex_is_partially_covered() {
    let mut pixmap = Pixmap::new(400, 300).unwrap();
    let mut paint = opaque_paint();
    paint.anti_alias = true;

    let mut pb = PathBuilder::new();
    pb.move_to(100.0, 220.0);
    pb.line_to(300.0, 220.0);
    pb.line_to(200.0, 100.0);
    pb.close();
    let path = pb.finish().unwrap();

    pixmap.fill_path(&path, &paint, FillRule::Winding).unwrap();

    let mut max_alpha = 0u8;
    for x in 190..210 {
        let a = pixmap.pixel(x, 100).unwrap().alpha();
        max_alpha = max_alpha.max(a);
    }
    assert!(max_alpha > 0);
    assert!(max_alpha < 220);
}

// S3: a path entirely off-canvas must not leave any trace on it.
#[test]
fn off_canvas_path_paints_nothing() {
    let mut pixmap = Pixmap::new(100, 200).unwrap();
    let paint = opaque_paint();

    let mut pb = PathBuilder::new();
    pb.move_to(-150.0, 50.0);
    pb.line_to(-50.0, 50.0);
    pb.line_to(-100.0, 150.0);
    pb.close();
    let path = pb.finish().unwrap();

    pixmap.fill_path(&path, &paint, FillRule::Winding).unwrap();

    for x in 0..100 {
        for y in 0..200 {
            assert_eq!(pixmap.pixel(x, y).unwrap().alpha(), 0);
        }
    }
}

// S5: an even-odd self-intersecting star has an unfilled hole at its
// center and a filled ring around it.
#[test]
fn even_odd_star_has_a_hole() {
    let mut pixmap = Pixmap::new(200, 200).unwrap();
    let paint = opaque_paint();

    let cx = 100.0f32;
    let cy = 100.0f32;
    let r_outer = 90.0f32;
    let r_inner = 35.0f32;

    let mut pb = PathBuilder::new();
    for i in 0..10 {
        let angle = std::f32::consts::PI * (i as f32) / 5.0 - std::f32::consts::FRAC_PI_2;
        let r = if i % 2 == 0 { r_outer } else { r_inner };
        let x = cx + r * angle.cos();
        let y = cy + r * angle.sin();
        if i == 0 {
            pb.move_to(x, y);
        } else {
            pb.line_to(x, y);
        }
    }
    pb.close();
    let path = pb.finish().unwrap();

    pixmap.fill_path(&path, &paint, FillRule::EvenOdd).unwrap();

    assert_eq!(pixmap.pixel(100, 100).unwrap().alpha(), 0);

    let ring_has_coverage = (0..200).any(|x| pixmap.pixel(x as u32, 100).unwrap().alpha() > 0);
    assert!(ring_has_coverage);
}

// Non-zero winding fills the same star without a hole at the center,
// since the star's two contours wind the same direction there.
#[test]
fn winding_star_has_no_hole() {
    let mut pixmap = Pixmap::new(200, 200).unwrap();
    let paint = opaque_paint();

    let cx = 100.0f32;
    let cy = 100.0f32;
    let r_outer = 90.0f32;
    let r_inner = 35.0f32;

    let mut pb = PathBuilder::new();
    for i in 0..10 {
        let angle = std::f32::consts::PI * (i as f32) / 5.0 - std::f32::consts::FRAC_PI_2;
        let r = if i % 2 == 0 { r_outer } else { r_inner };
        let x = cx + r * angle.cos();
        let y = cy + r * angle.sin();
        if i == 0 {
            pb.move_to(x, y);
        } else {
            pb.line_to(x, y);
        }
    }
    pb.close();
    let path = pb.finish().unwrap();

    pixmap.fill_path(&path, &paint, FillRule::Winding).unwrap();

    assert!(pixmap.pixel(100, 100).unwrap().alpha() > 0);
}

// S6: a quadratic arch split at its Y-extremum paints a coherent shape;
// flatten vs. native edges should agree up to rounding.
#[test]
fn quadratic_arch_fills() {
    let mut pixmap = Pixmap::new(120, 120).unwrap();
    let paint = opaque_paint();

    let mut pb = PathBuilder::new();
    pb.move_to(10.0, 100.0);
    pb.quad_to(60.0, 10.0, 110.0, 100.0);
    pb.close();
    let path = pb.finish().unwrap();

    pixmap.fill_path(&path, &paint, FillRule::Winding).unwrap();

    assert!(pixmap.pixel(60, 90).unwrap().alpha() > 0);
    assert_eq!(pixmap.pixel(60, 0).unwrap().alpha(), 0);
}

#[test]
fn cubic_fills() {
    let mut pixmap = Pixmap::new(120, 120).unwrap();
    let paint = opaque_paint();

    let mut pb = PathBuilder::new();
    pb.move_to(10.0, 100.0);
    pb.cubic_to(30.0, 10.0, 90.0, 10.0, 110.0, 100.0);
    pb.close();
    let path = pb.finish().unwrap();

    pixmap.fill_path(&path, &paint, FillRule::Winding).unwrap();

    assert!(pixmap.pixel(60, 90).unwrap().alpha() > 0);
    assert_eq!(pixmap.pixel(60, 0).unwrap().alpha(), 0);
}

// Filling the same path twice onto a cleared pixmap is idempotent.
#[test]
fn fill_is_idempotent() {
    let paint = opaque_paint();
    let path = square_path();

    let mut a = Pixmap::new(100, 100).unwrap();
    a.fill_path(&path, &paint, FillRule::Winding).unwrap();

    let mut b = Pixmap::new(100, 100).unwrap();
    b.fill_path(&path, &paint, FillRule::Winding).unwrap();
    b.fill_path(&path, &paint, FillRule::Winding).unwrap();

    assert_eq!(a, b);
}
