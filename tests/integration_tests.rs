use contour_bridge::geometry::signed_area;
use contour_bridge::{convert_shapes, Circle, ConversionConfig, Curve, Path, Shape};
use geo_types::{Coord, LineString};
use std::f64::consts::PI;

fn c(x: f64, y: f64) -> Coord<f64> {
    Coord { x, y }
}

fn config() -> ConversionConfig {
    ConversionConfig::new()
        .with_scale(1.0)
        .with_tolerance(Some(0.05))
        .with_subsampling(2.0)
        .with_trace_width(0.4)
}

#[test]
fn test_letter_o_becomes_one_ring() {
    // one path, two subpaths: the outline and the counter
    let letter = Path::builder()
        .circle(c(0.0, 0.0), 10.0)
        .circle(c(0.0, 0.0), 5.0)
        .build();

    let shapes = vec![Shape::filled(letter)];
    let converted = convert_shapes(&shapes, &config()).unwrap();
    assert_eq!(converted.len(), 1);
    assert_eq!(converted[0].rings.len(), 1);

    let ring = &converted[0].rings[0].0;
    assert_eq!(ring.first(), ring.last());

    let expected = PI * (10.0 * 10.0 - 5.0 * 5.0);
    let area = signed_area(ring).abs();
    assert!((area - expected).abs() / expected < 0.03, "area {} vs {}", area, expected);
}

#[test]
fn test_stroked_letter_o_keeps_both_outlines() {
    let letter = Path::builder()
        .circle(c(0.0, 0.0), 10.0)
        .circle(c(0.0, 0.0), 5.0)
        .build();

    let converted = convert_shapes(&[Shape::stroked(letter)], &config()).unwrap();
    assert_eq!(converted[0].rings.len(), 2);
    assert!(!converted[0].filled);
}

#[test]
fn test_zero_tolerance_keeps_every_sample() {
    let circle = Circle::new(c(0.0, 0.0), 20.0);
    let config = config().with_tolerance(Some(0.0)).with_subsampling(5.0);
    let divisions = (circle.length() * 5.0).round() as usize;

    let converted = convert_shapes(&[Shape::stroked(circle)], &config).unwrap();
    assert_eq!(converted[0].rings[0].0.len(), divisions + 1);
}

#[test]
fn test_many_shapes_keep_source_order() {
    let shapes: Vec<_> = (1..=40)
        .map(|r| Shape::filled(Circle::new(c(0.0, 0.0), r as f64)))
        .collect();

    let converted = convert_shapes(&shapes, &config()).unwrap();
    assert_eq!(converted.len(), 40);

    let areas: Vec<f64> = converted
        .iter()
        .map(|shape| signed_area(&shape.rings[0].0).abs())
        .collect();
    assert!(areas.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_mixed_curves_and_hidden_shapes() {
    fn boxed<C: Curve + Send + Sync + 'static>(curve: C) -> Box<dyn Curve + Send + Sync> {
        Box::new(curve)
    }

    let shapes = vec![
        Shape::filled(boxed(Circle::new(c(0.0, 0.0), 3.0))),
        Shape::new(boxed(Circle::new(c(0.0, 0.0), 3.0)), false, false),
        Shape::stroked(boxed(LineString::from(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]))),
    ];

    let converted = convert_shapes(&shapes, &config()).unwrap();
    assert_eq!(converted.len(), 2);
    assert!(converted[0].filled);
    assert!(!converted[1].filled);
    assert_eq!(converted[1].rings[0].0.len(), 3);
}

#[test]
fn test_invalid_config_is_reported() {
    let shapes = vec![Shape::filled(Circle::new(c(0.0, 0.0), 3.0))];
    let bad = config().with_subsampling(f64::NAN);
    assert!(convert_shapes(&shapes, &bad).is_err());
}

#[test]
fn test_empty_input() {
    let shapes: Vec<Shape<Circle>> = Vec::new();
    assert!(convert_shapes(&shapes, &config()).unwrap().is_empty());
}
