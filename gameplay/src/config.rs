use bevy_math::Vec3;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{require_non_negative, require_positive, ConfigError};

/// Every tunable of a run. Loaded once at startup and static afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub movement: MovementConfig,
    pub hud: HudConfig,
    pub ending: EndingConfig,
    pub level: LevelLayout,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.movement.validate()?;
        self.hud.validate()?;
        self.ending.validate()?;
        self.level.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Base speed (m/s).
    pub walk_speed: f32,
    /// Speed while boosting (m/s). Expected to be higher than `walk_speed`.
    pub boost_speed: f32,
    /// Seconds a full meter lasts while boosting.
    pub boost_duration: f32,
    /// Lockout after a full drain, and the time an empty meter needs to refill.
    pub boost_cooldown: f32,
    /// Max facing change in degrees per second.
    pub turn_speed: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: 3.0,
            boost_speed: 6.0,
            boost_duration: 2.0,
            boost_cooldown: 3.0,
            // 20 rad/s
            turn_speed: 20.0_f32.to_degrees(),
        }
    }
}

impl MovementConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_negative("movement.walk_speed", self.walk_speed)?;
        require_non_negative("movement.boost_speed", self.boost_speed)?;
        require_positive("movement.boost_duration", self.boost_duration)?;
        require_positive("movement.boost_cooldown", self.boost_cooldown)?;
        require_non_negative("movement.turn_speed", self.turn_speed)?;
        if self.boost_speed <= self.walk_speed {
            warn!(
                walk_speed = self.walk_speed,
                boost_speed = self.boost_speed,
                "boost_speed is not above walk_speed; boosting will not speed the player up"
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub container_width: f32,
    pub bar_height: f32,
    pub font_size: f32,
    /// Distance from the top of the screen (px).
    pub top_position: f32,
    /// Distance from the right of the screen (px).
    pub right_position: f32,
    /// sRGB, 0..1 per channel.
    pub ready_color: [f32; 3],
    pub boosting_color: [f32; 3],
    pub recharging_color: [f32; 3],
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            container_width: 150.0,
            bar_height: 20.0,
            font_size: 12.0,
            top_position: 20.0,
            right_position: 20.0,
            ready_color: [0.0, 1.0, 0.0],
            boosting_color: [1.0, 0.5, 0.0],
            recharging_color: [0.0, 0.5, 1.0],
        }
    }
}

impl HudConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_negative("hud.container_width", self.container_width)?;
        require_non_negative("hud.bar_height", self.bar_height)?;
        require_positive("hud.font_size", self.font_size)?;
        for (field, color) in [
            ("hud.ready_color", self.ready_color),
            ("hud.boosting_color", self.boosting_color),
            ("hud.recharging_color", self.recharging_color),
        ] {
            if let Some(bad) = color.iter().copied().find(|c| !(0.0..=1.0).contains(c)) {
                return Err(ConfigError::invalid(field, bad, "color channels must be in [0, 1]"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndingConfig {
    /// Seconds for the overlay to go from transparent to opaque.
    pub fade_duration: f32,
    /// Seconds the opaque overlay stays up before the terminal action.
    pub display_image_duration: f32,
}

impl Default for EndingConfig {
    fn default() -> Self {
        Self { fade_duration: 1.0, display_image_duration: 1.0 }
    }
}

impl EndingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("ending.fade_duration", self.fade_duration)?;
        require_non_negative("ending.display_image_duration", self.display_image_duration)?;
        Ok(())
    }
}

/// Axis-aligned trigger volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneSpec {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl ZoneSpec {
    pub fn contains(&self, point: Vec3) -> bool {
        let d = (point - self.center).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y && d.z <= self.half_extents.z
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentrySpec {
    pub position: Vec3,
    /// Player inside this radius (horizontal distance) is caught.
    pub sight_radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelLayout {
    pub player_spawn: Vec3,
    pub exit_zone: ZoneSpec,
    pub sentries: Vec<SentrySpec>,
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self {
            player_spawn: Vec3::ZERO,
            exit_zone: ZoneSpec {
                center: Vec3::new(0.0, 1.0, -24.0),
                half_extents: Vec3::new(2.0, 2.0, 2.0),
            },
            sentries: vec![
                SentrySpec { position: Vec3::new(6.0, 0.0, -10.0), sight_radius: 2.5 },
                SentrySpec { position: Vec3::new(-6.0, 0.0, -16.0), sight_radius: 2.5 },
            ],
        }
    }
}

impl LevelLayout {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let he = self.exit_zone.half_extents;
        for (field, v) in [
            ("level.exit_zone.half_extents.x", he.x),
            ("level.exit_zone.half_extents.y", he.y),
            ("level.exit_zone.half_extents.z", he.z),
        ] {
            require_positive(field, v)?;
        }
        for sentry in &self.sentries {
            require_non_negative("level.sentries.sight_radius", sentry.sight_radius)?;
        }
        Ok(())
    }
}
