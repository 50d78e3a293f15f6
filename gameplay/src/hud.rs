use crate::boost::{BoostSnapshot, BOOST_MAX};

/// Below this (and above zero) the idle meter reads "LOW BOOST".
pub const LOW_BOOST_THRESHOLD: f32 = 20.0;

/// Which palette entry the fill uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudTone {
    Ready,
    Boosting,
    Recharging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudStatus {
    BoostReady,
    Boosting,
    Recharging,
    LowBoost,
}

impl HudStatus {
    pub fn label(self) -> &'static str {
        match self {
            HudStatus::BoostReady => "BOOST READY",
            HudStatus::Boosting => "BOOSTING!",
            HudStatus::Recharging => "RECHARGING",
            HudStatus::LowBoost => "LOW BOOST",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudVisual {
    /// Fill width in percent of the bar, 0..=100.
    pub fill_percent: f32,
    pub tone: HudTone,
    pub status: HudStatus,
}

pub fn hud_visual(snapshot: BoostSnapshot) -> HudVisual {
    let amount = if snapshot.amount.is_finite() {
        snapshot.amount.clamp(0.0, BOOST_MAX)
    } else {
        0.0
    };

    let (tone, mut status) = if snapshot.is_boosting {
        (HudTone::Boosting, HudStatus::Boosting)
    } else if amount < BOOST_MAX {
        (HudTone::Recharging, HudStatus::Recharging)
    } else {
        (HudTone::Ready, HudStatus::BoostReady)
    };

    if !snapshot.is_boosting && amount > 0.0 && amount < LOW_BOOST_THRESHOLD {
        status = HudStatus::LowBoost;
    }

    HudVisual { fill_percent: amount / BOOST_MAX * 100.0, tone, status }
}
