use gameplay::{hud_visual, BoostSnapshot, HudStatus, HudTone};

fn snap(amount: f32, is_boosting: bool) -> BoostSnapshot {
    BoostSnapshot { amount, is_boosting, is_on_cooldown: false }
}

#[test]
fn status_text_follows_priority_order() {
    let cases = [
        (15.0, false, "LOW BOOST"),
        (15.0, true, "BOOSTING!"),
        (100.0, false, "BOOST READY"),
        (50.0, false, "RECHARGING"),
        (100.0, true, "BOOSTING!"),
        (20.0, false, "RECHARGING"),
        (0.0, false, "RECHARGING"),
    ];
    for (amount, boosting, expected) in cases {
        let v = hud_visual(snap(amount, boosting));
        assert_eq!(
            v.status.label(),
            expected,
            "amount={amount} boosting={boosting}"
        );
    }
}

#[test]
fn low_boost_keeps_the_recharging_tone() {
    let v = hud_visual(snap(15.0, false));
    assert_eq!(v.status, HudStatus::LowBoost);
    assert_eq!(v.tone, HudTone::Recharging);

    assert_eq!(hud_visual(snap(15.0, true)).tone, HudTone::Boosting);
    assert_eq!(hud_visual(snap(100.0, false)).tone, HudTone::Ready);
}

#[test]
fn fill_tracks_amount_as_percent() {
    assert_eq!(hud_visual(snap(100.0, false)).fill_percent, 100.0);
    assert_eq!(hud_visual(snap(37.5, false)).fill_percent, 37.5);
    assert_eq!(hud_visual(snap(0.0, false)).fill_percent, 0.0);
    // garbage never reaches the UI node
    assert_eq!(hud_visual(snap(f32::NAN, false)).fill_percent, 0.0);
    assert_eq!(hud_visual(snap(140.0, false)).fill_percent, 100.0);
}
