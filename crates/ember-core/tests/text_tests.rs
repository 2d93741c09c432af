// Host-side tests for the typewriter and glitch text effects.

use ember_core::text::{scramble, Glitch, Typewriter};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn typewriter_reveals_one_char_per_tick() {
    let mut tw = Typewriter::with_timing("abc", 50.0, 200.0);
    assert_eq!(tw.visible(), "");
    // First call only anchors the clock.
    assert!(!tw.advance(1000.0));
    assert_eq!(tw.revealed(), 0);
    assert!(!tw.advance(1049.0));
    assert!(tw.advance(1050.0));
    assert_eq!(tw.visible(), "a");
    assert!(tw.advance(1100.0));
    assert_eq!(tw.visible(), "ab");
    assert!(!tw.is_done());
    assert!(tw.advance(1150.0));
    assert!(tw.is_done());
    assert!(!tw.advance(5000.0));
}

#[test]
fn typewriter_catches_up_after_a_stall() {
    let mut tw = Typewriter::with_timing("hello", 10.0, 0.0);
    tw.advance(0.0);
    assert!(tw.advance(1000.0));
    assert_eq!(tw.visible(), "hello");
}

#[test]
fn typewriter_pauses_after_punctuation() {
    let mut tw = Typewriter::with_timing("a,b", 10.0, 100.0);
    tw.advance(0.0);
    tw.advance(10.0);
    assert_eq!(tw.visible(), "a");
    tw.advance(20.0);
    assert_eq!(tw.visible(), "a,");
    // The comma holds the next character back.
    tw.advance(60.0);
    assert_eq!(tw.visible(), "a,");
    tw.advance(130.0);
    assert_eq!(tw.visible(), "a,b");
}

#[test]
fn typewriter_finish_and_empty_text() {
    let mut tw = Typewriter::new("Into the ember.");
    tw.finish();
    assert!(tw.is_done());
    assert_eq!(tw.visible(), "Into the ember.");

    let empty = Typewriter::new("");
    assert!(empty.is_done());
    assert_eq!(empty.visible(), "");
}

#[test]
fn typewriter_handles_multibyte_text() {
    let mut tw = Typewriter::with_timing("né…", 1.0, 0.0);
    tw.advance(0.0);
    tw.advance(2.0);
    assert_eq!(tw.visible(), "né");
}

#[test]
fn scramble_keeps_shape_and_bound() {
    let mut rng = StdRng::seed_from_u64(3);
    let text = "burn bright, burn slow";
    let non_ws = text.chars().filter(|c| !c.is_whitespace()).count();
    for fraction in [0.0_f32, 0.1, 0.3, 1.0] {
        for _ in 0..50 {
            let out = scramble(text, fraction, &mut rng);
            assert_eq!(out.chars().count(), text.chars().count());
            let changed = out
                .chars()
                .zip(text.chars())
                .filter(|(a, b)| a != b)
                .count();
            let bound = (non_ws as f32 * fraction).ceil() as usize;
            assert!(changed <= bound, "{changed} > {bound} for {out}");
            for (a, b) in out.chars().zip(text.chars()) {
                if b.is_whitespace() {
                    assert_eq!(a, b);
                }
            }
        }
    }
    assert_eq!(scramble(text, 0.0, &mut rng), text);
}

#[test]
fn glitch_never_fires_at_zero_probability() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut g = Glitch::new("EMBER").with_probability(0.0);
    for i in 0..1000 {
        assert_eq!(g.frame(i as f64 * 16.0, &mut rng), None);
    }
    assert!(!g.in_burst());
}

#[test]
fn glitch_burst_ends_with_clean_text() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut g = Glitch::new("EMBER").with_probability(1.0);
    let scrambled = g.frame(0.0, &mut rng).expect("burst starts");
    assert_eq!(scrambled.chars().count(), 5);
    assert!(g.in_burst());
    assert!(g.frame(16.0, &mut rng).is_some());
    assert_eq!(g.frame(10_000.0, &mut rng).as_deref(), Some("EMBER"));
    assert!(!g.in_burst());
    assert_eq!(g.text(), "EMBER");
}
