use text2png::prelude::*;

#[test]
fn test_new_image_is_filled() {
    let image = Image::new(4, 3, Rgba::transparent());

    assert_eq!(image.dimensions(), (4, 3));
    assert_eq!(image.len(), 12);
    assert!(!image.is_empty());
    assert!(image.data().iter().all(|p| *p == Rgba::transparent()));
}

#[test]
fn test_pixel_accessors() {
    let mut image = Image::new(4, 3, Rgba::transparent());
    let red = Rgba::new(255, 0, 0, 255);

    image.set_pixel(2, 1, red);
    assert_eq!(*image.pixel(2, 1), red);
    assert_eq!(image.get_pixel(2, 1), Some(&red));

    *image.pixel_mut(0, 0) = Rgba::white();
    assert_eq!(*image.pixel(0, 0), Rgba::white());
}

#[test]
fn test_get_pixel_out_of_bounds() {
    let image = Image::new(4, 3, Rgba::transparent());

    assert_eq!(image.get_pixel(4, 0), None);
    assert_eq!(image.get_pixel(0, 3), None);
    assert_eq!(image.get_pixel(100, 100), None);
}

#[test]
fn test_rows() {
    let image = Image::new(4, 3, Rgba::white());
    let rows = image.pixels();

    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.len() == 4));
}
