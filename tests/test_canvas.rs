use text2png::prelude::*;

fn sample_metrics() -> GlyphMetrics {
    GlyphMetrics {
        ink_width: 40.0,
        ink_height: 35.0,
        bearing_x: 1.0,
        bearing_y: -34.0,
        advance_width: 42.0,
    }
}

#[test]
fn test_plan_reference_values() {
    let plan = RenderRequest::new("hi", 48)
        .with_outline_width(2)
        .with_padding(20)
        .plan(&sample_metrics());

    assert_eq!(plan.width, 89);
    assert_eq!(plan.height, 117);
    assert_eq!(plan.origin_x, 23.0);
    assert_eq!(plan.origin_y, 106.0);
}

#[test]
fn test_plan_contains_padded_ink() {
    let metrics = sample_metrics();

    for padding in [0, 5, 20, 100] {
        for outline in [0, 1, 4] {
            let plan = RenderRequest::new("hi", 48)
                .with_outline_width(outline)
                .with_padding(padding)
                .plan(&metrics);

            assert!(plan.width as f32 >= metrics.ink_width + 2.0 * padding as f32);
            assert!(plan.height as f32 >= metrics.ink_height + 2.0 * padding as f32);
        }
    }
}

#[test]
fn test_plan_monotonic_in_padding_and_outline() {
    let metrics = sample_metrics();
    let mut last = (0, 0);

    for padding in 0..32 {
        let plan = RenderRequest::new("hi", 48)
            .with_padding(padding)
            .plan(&metrics);
        assert!(plan.width >= last.0 && plan.height >= last.1);
        last = (plan.width, plan.height);
    }

    last = (0, 0);
    for outline in 0..16 {
        let plan = RenderRequest::new("hi", 48)
            .with_outline_width(outline)
            .plan(&metrics);
        assert!(plan.width >= last.0 && plan.height >= last.1);
        last = (plan.width, plan.height);
    }
}

#[test]
fn test_plan_minimum_floors() {
    // Inkless metrics fall back to the size-derived floors: 1.5x48 wide, 1.2x48
    // (57.6, rounded up) tall.
    let plan = RenderRequest::new("", 48).plan(&GlyphMetrics::default());
    assert_eq!(plan.width, 72);
    assert_eq!(plan.height, 58);
}

#[test]
fn test_plan_custom_floor_factors() {
    let plan = RenderRequest::new("", 48)
        .with_min_width_factor(3.0)
        .with_min_height_factor(2.0)
        .plan(&GlyphMetrics::default());

    assert_eq!(plan.width, 144);
    assert_eq!(plan.height, 96);
}

#[test]
fn test_plan_negative_bearing_x() {
    // Ink starting left of the origin (italic overhang) widens the canvas and pushes
    // the origin right so nothing clips off the left edge.
    let metrics = GlyphMetrics {
        ink_width: 40.0,
        ink_height: 35.0,
        bearing_x: -3.0,
        bearing_y: -34.0,
        advance_width: 42.0,
    };
    let plan = RenderRequest::new("f", 24)
        .with_padding(10)
        .plan(&metrics);

    assert_eq!(plan.origin_x, 13.0);
    assert!(plan.width >= 63); // |bearing| + ink + margins
}

#[test]
fn test_plan_origin_containment() {
    let metrics = sample_metrics();
    let plan = RenderRequest::new("hi", 48)
        .with_outline_width(2)
        .with_padding(20)
        .plan(&metrics);

    // The top of the ascent box must not cross the padding boundary.
    assert!(plan.origin_y - 48.0 >= 20.0 + 4.0 - metrics.bearing_y.max(0.0));
}

#[test]
fn test_plan_is_pure() {
    let request = RenderRequest::new("hi", 48)
        .with_outline_width(2)
        .with_padding(20);
    let metrics = sample_metrics();

    assert_eq!(request.plan(&metrics), request.plan(&metrics));
}

#[test]
fn test_halo_ring_degenerate() {
    assert!(halo_offsets(0, 36).is_empty());
    assert!(halo_offsets(3, 0).is_empty());
}

#[test]
fn test_halo_ring_radius() {
    let ring = halo_offsets(4, 36);
    assert_eq!(ring.len(), 36);
    assert_eq!(ring[0], (4, 0));

    for (dx, dy) in ring {
        let r2 = dx * dx + dy * dy;
        // Rounded coordinates stay near the nominal radius of 4.
        assert!((9..=26).contains(&r2), "offset ({dx}, {dy}) off the ring");
    }
}
