use gameplay::{BoostMeter, BoostPhase, BoostTransition, ConfigError, MovementConfig, BOOST_MAX};

const DT: f32 = 0.25;

fn meter_with(boost_duration: f32, boost_cooldown: f32) -> BoostMeter {
    let cfg = MovementConfig {
        boost_duration,
        boost_cooldown,
        ..MovementConfig::default()
    };
    BoostMeter::new(&cfg).expect("valid movement config")
}

/// Hold boost until the meter reports `Depleted`; returns ticks taken.
fn drain_fully(meter: &mut BoostMeter) -> usize {
    for i in 1..=1000 {
        if meter.tick(true, DT) == Some(BoostTransition::Depleted) {
            return i;
        }
    }
    panic!("meter never depleted");
}

#[test]
fn amount_stays_within_bounds_for_any_tick_sequence() {
    let mut meter = meter_with(2.0, 3.0);
    let dts = [0.0, 0.016, 0.1, 0.5, 1.7, 0.033, 3.0, 0.001];
    for i in 0..2000 {
        let held = (i / 7) % 3 != 0;
        let dt = dts[i % dts.len()];
        meter.tick(held, dt);
        let a = meter.amount();
        assert!((0.0..=BOOST_MAX).contains(&a), "amount out of range: {a} at tick {i}");
    }
}

#[test]
fn boosting_uses_boost_speed_until_it_exits() {
    let cfg = MovementConfig::default();
    let mut meter = BoostMeter::new(&cfg).expect("valid movement config");
    assert_eq!(meter.effective_speed(), cfg.walk_speed);

    assert_eq!(meter.tick(true, DT), Some(BoostTransition::Started));
    for _ in 0..6 {
        assert!(meter.is_boosting());
        assert_eq!(meter.effective_speed(), cfg.boost_speed);
        meter.tick(true, DT);
    }
    // 2s at 50/s: the eighth tick empties the meter
    assert_eq!(meter.tick(true, DT), Some(BoostTransition::Depleted));
    assert!(!meter.is_boosting());
    assert_eq!(meter.effective_speed(), cfg.walk_speed);
}

#[test]
fn full_drain_enters_cooldown_that_clears_after_exactly_the_cooldown() {
    let mut meter = meter_with(2.0, 3.0);
    assert_eq!(drain_fully(&mut meter), 8);
    assert_eq!(meter.amount(), 0.0);
    assert!(meter.is_on_cooldown());

    // 3s / 0.25 = 12 ticks; button stays held the whole time
    for i in 0..11 {
        assert_eq!(meter.tick(true, DT), None, "tick {i}");
        assert!(meter.is_on_cooldown(), "cooldown cleared early at tick {i}");
        assert!(!meter.is_boosting());
        assert_eq!(meter.amount(), 0.0, "no refill during cooldown");
    }
    assert_eq!(meter.tick(true, DT), Some(BoostTransition::CooldownFinished));
    assert!(!meter.is_on_cooldown());
    // deadline landed exactly on the tick boundary: nothing left to refill with
    assert_eq!(meter.amount(), 0.0);
    meter.tick(false, DT);
    assert!(meter.amount() > 0.0, "refill resumes once cooldown is over");
}

#[test]
fn cannot_start_boost_while_cooling_down() {
    let mut meter = meter_with(2.0, 3.0);
    drain_fully(&mut meter);
    meter.tick(false, DT);
    assert!(matches!(meter.phase(), BoostPhase::Cooldown { .. }));
    assert_eq!(meter.tick(true, DT), None);
    assert!(!meter.is_boosting());
}

#[test]
fn cannot_start_boost_with_an_empty_meter() {
    let mut meter = meter_with(2.0, 3.0);
    drain_fully(&mut meter);
    // One tick spanning exactly the cooldown: it clears, but all of that time
    // belonged to the cooldown, so the meter is still empty.
    assert_eq!(meter.tick(true, 3.0), Some(BoostTransition::CooldownFinished));
    assert!(!meter.is_boosting(), "meter was empty when the button was checked");
    assert_eq!(meter.amount(), 0.0);

    assert_eq!(meter.tick(true, DT), None);
    assert!(!meter.is_boosting());
    assert!(meter.amount() > 0.0);
}

#[test]
fn cooldown_time_never_counts_towards_refill() {
    let mut meter = meter_with(2.0, 3.0);
    drain_fully(&mut meter);
    meter.tick(false, 2.75);
    assert!(meter.is_on_cooldown());
    assert_eq!(meter.amount(), 0.0);

    // 0.25 s of cooldown left, 0.75 s of refill at 100/3 per second
    assert_eq!(meter.tick(false, 1.0), Some(BoostTransition::CooldownFinished));
    assert!((meter.amount() - 25.0).abs() < 1e-4, "amount {}", meter.amount());
}

#[test]
fn early_release_returns_to_ready_without_cooldown() {
    let mut meter = meter_with(2.0, 4.0);
    for _ in 0..4 {
        meter.tick(true, DT);
    }
    assert!(meter.is_boosting());
    assert_eq!(meter.amount(), 50.0);

    assert_eq!(meter.tick(false, DT), Some(BoostTransition::Released));
    assert_eq!(meter.phase(), BoostPhase::Ready);
    assert!(!meter.is_on_cooldown());
    // 25/s refill starts on the release tick itself
    assert_eq!(meter.amount(), 56.25);

    // and boosting is available again right away
    assert_eq!(meter.tick(true, DT), Some(BoostTransition::Started));
}

#[test]
fn recharge_takes_exactly_the_cooldown_and_never_overshoots() {
    let mut meter = meter_with(2.0, 4.0);
    drain_fully(&mut meter);
    // 4s of cooldown: the 16th idle tick clears it without refilling
    for _ in 0..16 {
        meter.tick(false, DT);
    }
    assert!(!meter.is_on_cooldown());
    assert_eq!(meter.amount(), 0.0);

    // then 4s more of idle time to refill at 25/s

    for i in 0..15 {
        meter.tick(false, DT);
        assert!(meter.amount() < BOOST_MAX, "full too early at refill tick {i}");
    }
    meter.tick(false, DT);
    assert_eq!(meter.amount(), BOOST_MAX);

    for _ in 0..10 {
        meter.tick(false, 0.7);
        assert_eq!(meter.amount(), BOOST_MAX);
    }
}

#[test]
fn non_finite_or_negative_dt_is_a_no_op() {
    let mut meter = meter_with(2.0, 3.0);
    meter.tick(true, DT);
    let before = meter.amount();
    meter.tick(true, f32::NAN);
    meter.tick(true, -1.0);
    meter.tick(true, f32::INFINITY);
    assert_eq!(meter.amount(), before);
    assert!(meter.is_boosting());
}

#[test]
fn non_positive_durations_are_rejected() {
    for (duration, cooldown) in [(0.0, 3.0), (-1.0, 3.0), (2.0, 0.0), (2.0, f32::NAN)] {
        let cfg = MovementConfig {
            boost_duration: duration,
            boost_cooldown: cooldown,
            ..MovementConfig::default()
        };
        let err = BoostMeter::new(&cfg).expect_err("config must be rejected");
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }), "{err}");
    }
}
