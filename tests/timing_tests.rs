//! Integration tests for strip timing configs

use pixled::{Level, Pulse, StripTiming};

// ns * 8 / 8 / 100: one tick is 100 ns at 80 MHz / 8.
fn ticks(ns: u16) -> u16 {
    (u32::from(ns) * 8 / 8 / 100) as u16
}

#[test]
fn presets_convert_datasheet_ns_to_ticks() {
    let ws2812 = StripTiming::WS2812;
    assert_eq!(
        (ws2812.t0h, ws2812.t0l, ws2812.t1h, ws2812.t1l),
        (ticks(350), ticks(800), ticks(700), ticks(600))
    );

    let ws2815 = StripTiming::WS2815;
    assert_eq!(
        (ws2815.t0h, ws2815.t0l, ws2815.t1h, ws2815.t1l),
        (ticks(300), ticks(800), ticks(800), ticks(300))
    );

    let sk6812 = StripTiming::SK6812;
    assert_eq!(
        (sk6812.t0h, sk6812.t0l, sk6812.t1h, sk6812.t1l),
        (ticks(300), ticks(900), ticks(600), ticks(600))
    );

    // The RGBW variant shares the RGB variant's bit timing
    assert_eq!(StripTiming::SK6812W, StripTiming::SK6812);
}

#[test]
fn ws2812_tick_values_are_stable() {
    // Fixed values double-checked by hand: 350/800/700/600 ns at 100 ns/tick
    let timing = StripTiming::WS2812;
    assert_eq!((timing.t0h, timing.t0l, timing.t1h, timing.t1l), (3, 8, 7, 6));
}

#[test]
fn from_ticks_is_taken_verbatim() {
    let timing = StripTiming::from_ticks(10, 11, 12, 13);
    assert_eq!((timing.t0h, timing.t0l, timing.t1h, timing.t1l), (10, 11, 12, 13));
}

#[test]
fn bit_pulses_are_high_then_low() {
    let timing = StripTiming::from_ticks(3, 8, 7, 6);

    assert_eq!(timing.zero_pulse(), Pulse::new(Level::High, 3, Level::Low, 8));
    assert_eq!(timing.one_pulse(), Pulse::new(Level::High, 7, Level::Low, 6));
}

#[test]
fn terminator_is_all_zero_and_low() {
    let t = Pulse::TERMINATOR;
    assert_eq!(t, Pulse::new(Level::Low, 0, Level::Low, 0));
}
