use bevy::prelude::*;
use gameplay::ZoneSpec;
use tracing::info;

use crate::config::Settings;
use crate::player::spawn_player;

/// Everything that a level reload despawns and rebuilds.
#[derive(Component)]
pub struct LevelEntity;

/// Trigger volume that ends the level when the player walks in.
#[derive(Component, Debug, Clone, Copy)]
pub struct ExitZone {
    pub zone: ZoneSpec,
    /// Player was inside on the previous check; entry fires on false -> true.
    pub occupied: bool,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Sentry {
    pub sight_radius: f32,
}

/// Request to rebuild the level from the configured layout.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ReloadLevel;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LevelSet;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ReloadLevel>()
            .add_systems(Startup, spawn_initial_level.in_set(LevelSet))
            .add_systems(Update, reload_level.in_set(LevelSet));
    }
}

pub fn spawn_level(commands: &mut Commands, settings: &Settings) {
    let layout = &settings.0.level;

    let player = spawn_player(commands, settings, layout.player_spawn);
    commands.entity(player).insert(LevelEntity);

    commands.spawn((
        ExitZone { zone: layout.exit_zone, occupied: false },
        Transform::from_translation(layout.exit_zone.center),
        GlobalTransform::default(),
        LevelEntity,
        Name::new("Exit Zone"),
    ));

    for (i, sentry) in layout.sentries.iter().enumerate() {
        commands.spawn((
            Sentry { sight_radius: sentry.sight_radius },
            Transform::from_translation(sentry.position),
            GlobalTransform::default(),
            LevelEntity,
            Name::new(format!("Sentry {i}")),
        ));
    }
}

fn spawn_initial_level(mut commands: Commands, settings: Res<Settings>) {
    spawn_level(&mut commands, &settings);
    info!(
        sentries = settings.0.level.sentries.len(),
        "Level spawned"
    );
}

fn reload_level(
    mut commands: Commands,
    mut requests: EventReader<ReloadLevel>,
    q_level: Query<Entity, With<LevelEntity>>,
    settings: Res<Settings>,
) {
    if requests.read().count() == 0 {
        return;
    }
    for e in &q_level {
        commands.entity(e).despawn();
    }
    spawn_level(&mut commands, &settings);
    info!("Level reloaded");
}
