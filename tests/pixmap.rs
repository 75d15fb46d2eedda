use tiny_raster::*;

#[test]
fn fill() {
    let c = Color::from_rgba8(50, 100, 150, 200);
    let mut pixmap = Pixmap::new(10, 10).unwrap();
    pixmap.fill(c);
    assert_eq!(pixmap.pixel(1, 1).unwrap(), c.premultiply().to_color_u8());
}

#[test]
fn zero_size_is_none() {
    assert!(Pixmap::new(0, 5).is_none());
    assert!(Pixmap::new(5, 0).is_none());
}

#[test]
fn unowned_pixmap() {
    let c = Color::from_rgba8(50, 100, 150, 200);
    let mut data = vec![0; 10 * 10 * 4];
    {
        let mut pixmap = PixmapMut::from_bytes(data.as_mut_slice(), 10, 10).unwrap();
        pixmap.pixels_mut().iter_mut().for_each(|p| *p = c.premultiply().to_color_u8());
    }

    let pixmap = PixmapRef::from_bytes(data.as_slice(), 10, 10).unwrap();
    assert_eq!(pixmap.pixel(1, 1).unwrap(), c.premultiply().to_color_u8());
}

#[test]
fn clone_rect_in_bounds() {
    let mut pixmap = Pixmap::new(20, 20).unwrap();
    pixmap.fill(Color::from_rgba8(10, 20, 30, 255));

    let part = pixmap.clone_rect(IntRect::from_xywh(5, 5, 8, 8).unwrap()).unwrap();
    assert_eq!(part.width(), 8);
    assert_eq!(part.height(), 8);
    assert_eq!(part.pixel(0, 0).unwrap(), pixmap.pixel(5, 5).unwrap());
}

#[test]
fn clone_rect_out_of_bound() {
    let pixmap = Pixmap::new(20, 20).unwrap();

    assert!(pixmap.clone_rect(IntRect::from_xywh(250, 15, 80, 90).unwrap()).is_none());
    assert!(pixmap.clone_rect(IntRect::from_xywh(10, 250, 80, 90).unwrap()).is_none());
    assert!(pixmap.clone_rect(IntRect::from_xywh(10, -250, 80, 90).unwrap()).is_none());
}

#[test]
fn data_round_trips_through_pixels() {
    let mut pixmap = Pixmap::new(4, 4).unwrap();
    pixmap.fill(Color::from_rgba8(1, 2, 3, 255));
    let data = pixmap.take();

    let pixmap = PixmapRef::from_bytes(&data, 4, 4).unwrap();
    assert_eq!(pixmap.pixel(0, 0).unwrap(), Color::from_rgba8(1, 2, 3, 255).premultiply().to_color_u8());
}
