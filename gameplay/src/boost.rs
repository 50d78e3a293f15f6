//! Boost meter: a 0..100 resource that buys `boost_speed` while held.
//!
//! Phases:
//! - `Ready`: not boosting; refills at `100 / boost_cooldown` per second.
//! - `Boosting`: drains at `100 / boost_duration` per second.
//! - `Cooldown`: entered only on a full drain (or after `boost_duration` of
//!   continuous boosting). No boosting and no refill until the deadline passes.
//!
//! Releasing the button early goes straight back to `Ready` with no cooldown.

use tracing::{debug, info};

use crate::config::MovementConfig;
use crate::error::ConfigError;

pub const BOOST_MAX: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoostPhase {
    Ready,
    Boosting { elapsed: f32 },
    Cooldown { remaining: f32 },
}

/// What a single tick changed, if anything worth reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostTransition {
    Started,
    /// Button let go before the meter ran out.
    Released,
    /// Meter emptied (or max duration hit); cooldown begins.
    Depleted,
    CooldownFinished,
}

/// Read-only view handed to the HUD and anything else that just looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostSnapshot {
    pub amount: f32,
    pub is_boosting: bool,
    pub is_on_cooldown: bool,
}

impl Default for BoostSnapshot {
    fn default() -> Self {
        Self { amount: BOOST_MAX, is_boosting: false, is_on_cooldown: false }
    }
}

#[derive(Debug, Clone)]
pub struct BoostMeter {
    walk_speed: f32,
    boost_speed: f32,
    boost_duration: f32,
    boost_cooldown: f32,
    amount: f32,
    phase: BoostPhase,
}

impl BoostMeter {
    /// Full meter, ready to boost. Rejects non-positive durations up front so
    /// the drain/refill rates are always finite.
    pub fn new(cfg: &MovementConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            walk_speed: cfg.walk_speed,
            boost_speed: cfg.boost_speed,
            boost_duration: cfg.boost_duration,
            boost_cooldown: cfg.boost_cooldown,
            amount: BOOST_MAX,
            phase: BoostPhase::Ready,
        })
    }

    pub fn amount(&self) -> f32 {
        self.amount
    }

    pub fn phase(&self) -> BoostPhase {
        self.phase
    }

    pub fn is_boosting(&self) -> bool {
        matches!(self.phase, BoostPhase::Boosting { .. })
    }

    pub fn is_on_cooldown(&self) -> bool {
        matches!(self.phase, BoostPhase::Cooldown { .. })
    }

    pub fn effective_speed(&self) -> f32 {
        if self.is_boosting() {
            self.boost_speed
        } else {
            self.walk_speed
        }
    }

    pub fn snapshot(&self) -> BoostSnapshot {
        BoostSnapshot {
            amount: self.amount,
            is_boosting: self.is_boosting(),
            is_on_cooldown: self.is_on_cooldown(),
        }
    }

    fn drain_rate(&self) -> f32 {
        BOOST_MAX / self.boost_duration
    }

    fn recharge_rate(&self) -> f32 {
        BOOST_MAX / self.boost_cooldown
    }

    /// Advance one frame. Returns the most significant transition of the tick.
    pub fn tick(&mut self, boost_held: bool, dt: f32) -> Option<BoostTransition> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut transition = None;
        // Only time past the cooldown deadline may refill.
        let mut refill_dt = dt;

        if let BoostPhase::Cooldown { remaining } = &mut self.phase {
            *remaining -= dt;
            if *remaining <= 0.0 {
                refill_dt = (-*remaining).min(dt);
                self.phase = BoostPhase::Ready;
                info!("Boost cooldown finished");
                transition = Some(BoostTransition::CooldownFinished);
            }
        }

        if boost_held && self.amount > 0.0 && !self.is_on_cooldown() {
            let mut elapsed = match self.phase {
                BoostPhase::Boosting { elapsed } => elapsed,
                _ => {
                    info!(speed = self.boost_speed, was = self.walk_speed, "Boost activated");
                    transition = Some(BoostTransition::Started);
                    0.0
                }
            };

            self.amount -= self.drain_rate() * dt;
            elapsed += dt;

            if self.amount <= 0.0 || elapsed >= self.boost_duration {
                self.amount = self.amount.max(0.0);
                self.phase = BoostPhase::Cooldown { remaining: self.boost_cooldown };
                info!(cooldown = self.boost_cooldown, "Boost depleted, starting cooldown");
                transition = Some(BoostTransition::Depleted);
            } else {
                self.phase = BoostPhase::Boosting { elapsed };
            }
        } else if self.is_boosting() {
            self.phase = BoostPhase::Ready;
            debug!(amount = self.amount, speed = self.walk_speed, "Boost ended");
            transition = Some(BoostTransition::Released);
        }

        if self.phase == BoostPhase::Ready && self.amount < BOOST_MAX {
            self.amount = (self.amount + self.recharge_rate() * refill_dt).min(BOOST_MAX);
        }

        transition
    }
}
