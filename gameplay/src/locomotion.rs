use bevy_math::{Quat, Vec2, Vec3};

/// Result of one physics step for the player body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionStep {
    pub position: Vec3,
    pub rotation: Quat,
    /// Planar unit direction (or zero) the step moved along.
    pub direction: Vec3,
    pub is_walking: bool,
}

/// Stick/keys -> planar direction. +Y on the stick is "forward" (-Z in world).
pub fn movement_direction(input: Vec2) -> Vec3 {
    let x = input.x.clamp(-1.0, 1.0);
    let y = input.y.clamp(-1.0, 1.0);
    Vec3::new(x, 0.0, -y).normalize_or_zero()
}

fn has_axis_input(v: f32) -> bool {
    v.is_finite() && v.abs() > f32::EPSILON
}

/// Heading around +Y for a rotation, measured so that yaw 0 faces -Z.
pub fn yaw_of(rotation: Quat) -> f32 {
    let fwd = rotation * Vec3::NEG_Z;
    (-fwd.x).atan2(-fwd.z)
}

fn wrap_angle(a: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let mut a = a % TAU;
    if a > PI {
        a -= TAU;
    }
    if a < -PI {
        a += TAU;
    }
    a
}

/// Turn `current` toward `direction` by at most `max_radians`, the short way.
/// A zero direction leaves the facing untouched.
pub fn rotate_towards(current: Quat, direction: Vec3, max_radians: f32) -> Quat {
    if direction.length_squared() <= f32::EPSILON {
        return current;
    }
    let from = yaw_of(current);
    let to = (-direction.x).atan2(-direction.z);
    let delta = wrap_angle(to - from);
    let max_radians = max_radians.max(0.0);
    if delta.abs() <= max_radians {
        Quat::from_rotation_y(to)
    } else {
        Quat::from_rotation_y(from + max_radians.copysign(delta))
    }
}

/// One fixed step: face toward the input direction (bounded by `turn_speed_deg`
/// per second) and translate along it at `speed`.
pub fn step_locomotion(
    input: Vec2,
    position: Vec3,
    rotation: Quat,
    speed: f32,
    turn_speed_deg: f32,
    dt: f32,
) -> LocomotionStep {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let direction = movement_direction(input);
    let is_walking = has_axis_input(input.x) || has_axis_input(input.y);
    let rotation = rotate_towards(rotation, direction, turn_speed_deg.to_radians() * dt);

    LocomotionStep {
        position: position + direction * speed * dt,
        rotation,
        direction,
        is_walking,
    }
}
