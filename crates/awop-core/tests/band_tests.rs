// Host-side tests for ring classification and the drag clamp.

use awop_core::band::{classify_band, Band, RingRadii};
use awop_core::constants::RING_PADDING;
use awop_core::error::UnknownBand;

#[test]
fn midpoints_stay_in_the_lower_band() {
    let radii = RingRadii::default();
    assert_eq!(radii.inner_threshold(), 4.75);
    assert_eq!(radii.outer_threshold(), 6.25);

    assert_eq!(classify_band(4.75, &radii), Band::Inner);
    assert_eq!(classify_band(4.750001, &radii), Band::Middle);
    assert_eq!(classify_band(6.25, &radii), Band::Middle);
    assert_eq!(classify_band(6.250001, &radii), Band::Outer);
}

#[test]
fn ring_radii_classify_as_their_own_band() {
    let radii = RingRadii::default();
    for band in [Band::Inner, Band::Middle, Band::Outer] {
        assert_eq!(classify_band(radii.radius(band), &radii), band);
    }
}

#[test]
fn drag_extremes_classify_as_inner_and_outer() {
    let radii = RingRadii::default();
    let (lo, hi) = radii.drag_limits(RING_PADDING);
    assert_eq!((lo, hi), (3.0, 8.0));
    assert_eq!(classify_band(lo, &radii), Band::Inner);
    assert_eq!(classify_band(hi, &radii), Band::Outer);
    assert_eq!(classify_band(0.0, &radii), Band::Inner);
}

#[test]
fn points_decrease_outward() {
    assert_eq!(Band::Inner.points(), 3);
    assert_eq!(Band::Middle.points(), 2);
    assert_eq!(Band::Outer.points(), 1);
    assert_eq!(Band::default(), Band::Inner);
}

#[test]
fn unknown_band_names_are_reported() {
    let err = "sideways".parse::<Band>().unwrap_err();
    assert_eq!(err, UnknownBand("sideways".to_string()));
    assert_eq!(err.to_string(), "unknown band \"sideways\"");
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.source().is_none());
}
