use super::*;

fn visible(ratio: f64) -> Visibility {
    Visibility { is_intersecting: true, ratio }
}

const HIDDEN: Visibility = Visibility { is_intersecting: false, ratio: 0.0 };

fn tracker_with(cards: &[CardId]) -> RevealTracker {
    let mut tracker = RevealTracker::new(&UiConfig::default());
    for card in cards {
        tracker.observe(*card);
    }
    tracker
}

#[test]
fn card_reveals_on_first_intersection() {
    let mut tracker = tracker_with(&[0]);
    assert!(!tracker.on_intersection(0, HIDDEN));
    assert!(tracker.is_observed(0));
    assert!(tracker.on_intersection(0, visible(0.1)));
    assert!(tracker.is_revealed(0));
    assert!(!tracker.is_observed(0));
}

#[test]
fn rounded_ratio_just_below_threshold_still_reveals() {
    let mut tracker = tracker_with(&[0]);
    assert!(tracker.on_intersection(0, visible(0.0998)));
    assert!(tracker.is_revealed(0));
    assert!(!tracker.is_observed(0));
}

#[test]
fn tall_card_with_tiny_ratio_reveals() {
    let mut tracker = tracker_with(&[0]);
    assert!(tracker.on_intersection(0, visible(0.02)));
}

#[test]
fn revealed_card_stays_revealed_after_scrolling_away() {
    let mut tracker = tracker_with(&[0]);
    assert!(tracker.on_intersection(0, visible(0.5)));
    assert!(!tracker.on_intersection(0, HIDDEN));
    assert!(!tracker.on_intersection(0, visible(1.0)));
    assert!(tracker.is_revealed(0));
}

#[test]
fn not_intersecting_never_reveals() {
    let mut tracker = tracker_with(&[0]);
    assert!(!tracker.on_intersection(0, Visibility { is_intersecting: false, ratio: 0.9 }));
    assert!(!tracker.is_revealed(0));
}

#[test]
fn unobserved_card_is_ignored() {
    let mut tracker = tracker_with(&[0]);
    assert!(!tracker.on_intersection(7, visible(1.0)));
    assert!(!tracker.is_revealed(7));
}

#[test]
fn cards_reveal_independently() {
    let mut tracker = tracker_with(&[0, 1, 2]);
    assert!(tracker.on_intersection(1, visible(0.3)));
    assert!(tracker.is_observed(0));
    assert!(tracker.is_observed(2));
    assert!(!tracker.is_revealed(0));
}

#[test]
fn observing_revealed_card_again_is_noop() {
    let mut tracker = tracker_with(&[0]);
    assert!(tracker.on_intersection(0, visible(1.0)));
    tracker.observe(0);
    assert!(!tracker.is_observed(0));
}

#[test]
fn configured_threshold_is_exposed_for_the_observer() {
    let config = UiConfig { reveal_threshold: 0.5, ..UiConfig::default() };
    let mut tracker = RevealTracker::new(&config);
    assert!((tracker.threshold() - 0.5).abs() < f64::EPSILON);
    tracker.observe(0);
    assert!(tracker.on_intersection(0, visible(0.4)));
}

#[test]
fn revealed_style_is_resting_position() {
    assert_eq!(REVEALED_STYLE, [("opacity", "1"), ("transform", "translateY(0)")]);
}
