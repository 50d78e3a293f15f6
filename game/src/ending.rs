use bevy::color::Alpha;
use bevy::prelude::*;
use gameplay::{EndingKind, EndingOutcome, EndingSequencer};
use tracing::{debug, error, info, warn};

use crate::config::Settings;
use crate::level::{ExitZone, LevelSet, ReloadLevel, Sentry};
use crate::player::{MotionSet, Player};

/// External "caught" signal. Sentries send it; anything else may too.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PlayerCaught;

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ExitZoneEntered;

#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct Ending(pub EndingSequencer);

#[derive(Resource, Debug, Clone)]
pub struct EndingAudio {
    pub exit: Handle<AudioSource>,
    pub caught: Handle<AudioSource>,
}

/// Full-screen layer faded in by the ending; one per kind.
#[derive(Component, Debug, Clone, Copy)]
pub struct EndingOverlay(pub EndingKind);

/// Caption inside an [`EndingOverlay`], faded together with it.
#[derive(Component, Debug, Clone, Copy)]
pub struct EndingCaption(pub EndingKind);

pub struct EndingPlugin;

impl Plugin for EndingPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayerCaught>()
            .add_event::<ExitZoneEntered>()
            .add_systems(Startup, (init_ending, load_ending_audio))
            .add_systems(
                FixedUpdate,
                (detect_exit_zone, detect_sentries).after(MotionSet),
            )
            .add_systems(
                Update,
                (
                    collect_ending_triggers,
                    tick_ending,
                    reset_ending_on_reload,
                )
                    .chain()
                    .before(LevelSet),
            );
    }
}

fn build_sequencer(settings: &Settings) -> Option<EndingSequencer> {
    match EndingSequencer::new(&settings.0.ending) {
        Ok(seq) => Some(seq),
        Err(err) => {
            error!(%err, "Ending sequence disabled");
            None
        }
    }
}

fn init_ending(mut commands: Commands, settings: Res<Settings>) {
    if let Some(seq) = build_sequencer(&settings) {
        commands.insert_resource(Ending(seq));
    }
}

fn load_ending_audio(mut commands: Commands, assets: Option<Res<AssetServer>>) {
    let Some(assets) = assets else {
        debug!("No asset server; ending audio off");
        return;
    };
    commands.insert_resource(EndingAudio {
        exit: assets.load("audio/exit.ogg"),
        caught: assets.load("audio/caught.ogg"),
    });
}

/// Trigger-enter on the exit volumes.
pub fn detect_exit_zone(
    q_player: Query<&Transform, With<Player>>,
    mut q_zones: Query<&mut ExitZone>,
    mut entered: EventWriter<ExitZoneEntered>,
) {
    let Ok(player) = q_player.single() else {
        return;
    };
    for mut zone in &mut q_zones {
        let inside = zone.zone.contains(player.translation);
        if inside && !zone.occupied {
            entered.write(ExitZoneEntered);
        }
        zone.occupied = inside;
    }
}

/// Sentries see the player within their radius on the ground plane.
pub fn detect_sentries(
    q_player: Query<&Transform, With<Player>>,
    q_sentries: Query<(&Transform, &Sentry), Without<Player>>,
    mut caught: EventWriter<PlayerCaught>,
) {
    let Ok(player) = q_player.single() else {
        return;
    };
    let p = Vec2::new(player.translation.x, player.translation.z);
    if q_sentries.iter().any(|(t, s)| {
        Vec2::new(t.translation.x, t.translation.z).distance(p) <= s.sight_radius
    })
    {
        caught.write(PlayerCaught);
    }
}

fn collect_ending_triggers(
    ending: Option<ResMut<Ending>>,
    mut exits: EventReader<ExitZoneEntered>,
    mut caught: EventReader<PlayerCaught>,
) {
    let Some(mut ending) = ending else {
        exits.clear();
        caught.clear();
        return;
    };
    if exits.read().count() > 0 {
        ending.notify_exit_reached();
    }
    if caught.read().count() > 0 {
        ending.notify_caught();
    }
}

#[allow(clippy::too_many_arguments)]
fn tick_ending(
    mut commands: Commands,
    time: Res<Time>,
    ending: Option<ResMut<Ending>>,
    audio: Option<Res<EndingAudio>>,
    mut q_overlay: Query<(&EndingOverlay, &mut BackgroundColor)>,
    mut q_caption: Query<(&EndingCaption, &mut TextColor)>,
    mut reload: EventWriter<ReloadLevel>,
    mut exit: EventWriter<AppExit>,
    mut warned: Local<bool>,
) {
    let Some(mut ending) = ending else {
        return;
    };
    let frame = ending.tick(time.delta_secs());

    if let Some(kind) = frame.play_audio {
        match audio.as_ref() {
            Some(audio) => {
                let handle = match kind {
                    EndingKind::Exit => audio.exit.clone(),
                    EndingKind::Caught => audio.caught.clone(),
                };
                commands.spawn((
                    AudioPlayer::new(handle),
                    PlaybackSettings::DESPAWN,
                    Name::new("Ending Audio"),
                ));
            }
            None => debug!(?kind, "No ending audio loaded; skipping cue"),
        }
    }

    if let Some((kind, opacity)) = frame.overlay {
        let mut painted = false;
        for (overlay, mut bg) in &mut q_overlay {
            if overlay.0 == kind {
                bg.0.set_alpha(opacity);
                painted = true;
            }
        }
        for (caption, mut color) in &mut q_caption {
            if caption.0 == kind {
                color.0.set_alpha(opacity);
            }
        }
        if !painted && !*warned {
            warn!(?kind, "No overlay for this ending; fading without a screen");
            *warned = true;
        }
    }

    match frame.outcome {
        Some(EndingOutcome::ReloadLevel) => {
            info!("Restarting level");
            reload.write(ReloadLevel);
        }
        Some(EndingOutcome::Quit) => {
            info!("Quitting");
            exit.write(AppExit::Success);
        }
        None => {}
    }
}

/// A reload starts a fresh run: new sequencer, hidden overlays.
fn reset_ending_on_reload(
    mut commands: Commands,
    mut reloads: EventReader<ReloadLevel>,
    settings: Res<Settings>,
    mut q_overlay: Query<&mut BackgroundColor, With<EndingOverlay>>,
    mut q_caption: Query<&mut TextColor, With<EndingCaption>>,
) {
    if reloads.read().count() == 0 {
        return;
    }
    if let Some(seq) = build_sequencer(&settings) {
        commands.insert_resource(Ending(seq));
    }
    for mut bg in &mut q_overlay {
        bg.0.set_alpha(0.0);
    }
    for mut color in &mut q_caption {
        color.0.set_alpha(0.0);
    }
}

pub fn spawn_ending_overlays(mut commands: Commands) {
    for (kind, label, bg) in [
        (EndingKind::Exit, "YOU ESCAPED", Color::srgba(0.05, 0.1, 0.05, 0.0)),
        (EndingKind::Caught, "CAUGHT!", Color::srgba(0.2, 0.0, 0.0, 0.0)),
    ] {
        commands
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(0.0),
                    right: Val::Px(0.0),
                    top: Val::Px(0.0),
                    bottom: Val::Px(0.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..Default::default()
                },
                BackgroundColor(bg),
                GlobalZIndex(10),
                EndingOverlay(kind),
                Name::new(format!("Ending Overlay {kind:?}")),
            ))
            .with_children(|root| {
                root.spawn((
                    Text::new(label),
                    TextFont { font_size: 48.0, ..Default::default() },
                    TextColor(Color::srgba(1.0, 1.0, 1.0, 0.0)),
                    EndingCaption(kind),
                ));
            });
    }
}
