// Host-side tests for scoring and score colors.

use awop_core::band::Band;
use awop_core::score::{compute_score, normalize, score_bounds, summarize, Rgb, ScorePalette};
use awop_core::token::Token;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn tokens_with(bands: &[Band]) -> Vec<Token> {
    bands
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            let mut t = Token::new(&format!("axis {i}"), "Body", i, bands.len());
            t.set_band(b);
            t
        })
        .collect()
}

fn band_strategy() -> impl Strategy<Value = Band> {
    prop_oneof![Just(Band::Inner), Just(Band::Middle), Just(Band::Outer)]
}

#[test]
fn twenty_tokens_span_twenty_to_sixty() {
    assert_eq!(score_bounds(20), (20, 60));
    let all_outer = tokens_with(&[Band::Outer; 20]);
    assert_eq!(compute_score(&all_outer), 20);
    assert_eq!(normalize(20, 20), 0.0);
    let all_inner = tokens_with(&[Band::Inner; 20]);
    assert_eq!(compute_score(&all_inner), 60);
    assert_eq!(normalize(60, 20), 1.0);
}

#[test]
fn no_tokens_normalizes_to_zero() {
    assert_eq!(normalize(0, 0), 0.0);
}

#[test]
fn hidden_categories_still_score() {
    let mut tokens = tokens_with(&[Band::Middle; 4]);
    tokens[0].set_category_visible(false);
    assert_eq!(compute_score(&tokens), 8);
}

#[test]
fn color_interpolates_in_two_segments() {
    let palette = ScorePalette::default();
    assert_eq!(palette.color_for(0.0), Rgb::new(239, 68, 68));
    assert_eq!(palette.color_for(0.5), Rgb::new(234, 179, 8));
    assert_eq!(palette.color_for(1.0), Rgb::new(34, 197, 94));
    // Halfway through the low segment, rounded per channel.
    assert_eq!(palette.color_for(0.25), Rgb::new(237, 124, 38));
}

#[test]
fn summary_for_one_outer_token() {
    let mut bands = [Band::Inner; 20];
    bands[0] = Band::Outer;
    let summary = summarize(&tokens_with(&bands), &ScorePalette::default());
    assert_eq!(summary.total, 58);
    assert!((summary.normalized - 0.95).abs() < 1e-6);
    assert!((summary.percent - 95.0).abs() < 1e-4);
}

#[test]
fn rings_use_the_palette_ends() {
    let palette = ScorePalette::default();
    assert_eq!(palette.ring_color(Band::Inner), palette.high);
    assert_eq!(palette.ring_color(Band::Middle), palette.mid);
    assert_eq!(palette.ring_color(Band::Outer), palette.low);
}

#[test]
fn hex_colors_parse_and_print() {
    let c = Rgb::from_hex("#22C55E").expect("valid hex");
    assert_eq!(c, Rgb::new(34, 197, 94));
    assert_eq!(c.to_hex(), "#22c55e");
    assert_eq!(Rgb::from_hex("#12345"), None);
    assert_eq!(Rgb::from_hex("zzzzzz"), None);
}

proptest! {
    #[test]
    fn any_assignment_stays_in_bounds(bands in proptest::collection::vec(band_strategy(), 20)) {
        let tokens = tokens_with(&bands);
        let total = compute_score(&tokens);
        prop_assert!((20..=60).contains(&total));
        let n = normalize(total, tokens.len());
        prop_assert!((0.0..=1.0).contains(&n));
    }
}
