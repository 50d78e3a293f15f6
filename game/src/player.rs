use bevy::prelude::*;
use gameplay::{step_locomotion, BoostMeter};
use tracing::{debug, trace, warn};

use crate::config::Settings;
use crate::input::PlayerInput;

#[derive(Component)]
pub struct Player;

/// Boost resource owned by the player entity.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct Boost(pub BoostMeter);

/// Flag consumed by the animation side ("IsWalking").
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct WalkAnimation {
    pub is_walking: bool,
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MotionSet;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .add_systems(Update, advance_boost)
            .add_systems(FixedUpdate, drive_locomotion.in_set(MotionSet));
    }
}

/// Frame-rate boost bookkeeping. Locomotion reads the result on the fixed step.
pub fn advance_boost(
    time: Res<Time>,
    input: Res<PlayerInput>,
    mut q_player: Query<&mut Boost, With<Player>>,
) {
    let dt = time.delta_secs();
    for mut boost in &mut q_player {
        if let Some(transition) = boost.tick(input.boost_held, dt) {
            debug!(
                ?transition,
                amount = boost.amount(),
                speed = boost.effective_speed(),
                "boost transition"
            );
        }
    }
}

#[allow(clippy::type_complexity)]
pub fn drive_locomotion(
    time: Res<Time>,
    input: Res<PlayerInput>,
    settings: Res<Settings>,
    mut q_player: Query<(&mut Transform, Option<&Boost>, &mut WalkAnimation), With<Player>>,
    mut warned: Local<bool>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }
    let Ok((mut transform, boost, mut anim)) = q_player.single_mut() else {
        if !*warned {
            warn!("No single player to move; locomotion idle");
            *warned = true;
        }
        return;
    };
    *warned = false;

    let movement = &settings.0.movement;
    let speed = boost.map(|b| b.effective_speed()).unwrap_or(movement.walk_speed);
    let step = step_locomotion(
        input.move_axis,
        transform.translation,
        transform.rotation,
        speed,
        movement.turn_speed,
        dt,
    );

    transform.translation = step.position;
    transform.rotation = step.rotation;
    if anim.is_walking != step.is_walking {
        anim.is_walking = step.is_walking;
    }
    trace!(
        speed,
        boosting = boost.map(|b| b.is_boosting()).unwrap_or(false),
        amount = boost.map(|b| b.amount()).unwrap_or(0.0),
        "player step"
    );
}

/// Spawn the player at `spawn`. A meter that cannot be built leaves the
/// player walking without boost.
pub fn spawn_player(commands: &mut Commands, settings: &Settings, spawn: Vec3) -> Entity {
    let mut entity = commands.spawn((
        Player,
        WalkAnimation::default(),
        Transform::from_translation(spawn),
        GlobalTransform::default(),
        Name::new("Player"),
    ));
    match BoostMeter::new(&settings.0.movement) {
        Ok(meter) => {
            entity.insert(Boost(meter));
        }
        Err(err) => {
            tracing::error!(%err, "Boost disabled for this session");
        }
    }
    entity.id()
}
