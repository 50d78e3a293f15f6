use bevy::prelude::*;
use gameplay::{hud_visual, HudConfig, HudTone};
use tracing::{error, info};

use crate::config::Settings;
use crate::level::LevelSet;
use crate::player::{Boost, Player};

#[derive(Component)]
pub struct BoostHudRoot;

#[derive(Component)]
pub struct BoostHudBackground;

#[derive(Component)]
pub struct BoostHudFill;

#[derive(Component)]
pub struct BoostHudStatus;

/// Placement of the meter in px. Edit through [`BoostHudLayout::reposition`]
/// and [`BoostHudLayout::resize`]; changes land on the nodes the same frame.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct BoostHudLayout {
    pub top: f32,
    pub right: f32,
    pub width: f32,
    pub bar_height: f32,
}

impl BoostHudLayout {
    pub fn from_config(cfg: &HudConfig) -> Self {
        Self {
            top: cfg.top_position,
            right: cfg.right_position,
            width: cfg.container_width,
            bar_height: cfg.bar_height,
        }
    }

    pub fn reposition(&mut self, top: f32, right: f32) {
        self.top = top;
        self.right = right;
    }

    pub fn resize(&mut self, width: f32, bar_height: f32) {
        self.width = width;
        self.bar_height = bar_height;
    }
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct BoostHudPalette {
    pub ready: Color,
    pub boosting: Color,
    pub recharging: Color,
}

impl BoostHudPalette {
    pub fn from_config(cfg: &HudConfig) -> Self {
        let c = |[r, g, b]: [f32; 3]| Color::srgb(r, g, b);
        Self {
            ready: c(cfg.ready_color),
            boosting: c(cfg.boosting_color),
            recharging: c(cfg.recharging_color),
        }
    }

    pub fn color(&self, tone: HudTone) -> Color {
        match tone {
            HudTone::Ready => self.ready,
            HudTone::Boosting => self.boosting,
            HudTone::Recharging => self.recharging,
        }
    }
}

pub struct BoostHudPlugin;

impl Plugin for BoostHudPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<BoostHudLayout>()
            .add_systems(Startup, spawn_boost_hud.after(LevelSet))
            .add_systems(
                Update,
                (
                    apply_boost_hud_layout.run_if(resource_exists_and_changed::<BoostHudLayout>),
                    update_boost_hud,
                )
                    .chain(),
            );
    }
}

/// Builds the meter in the top-right corner. Any meter already on screen is
/// replaced. Without a boosting player there is nothing to show, so the HUD
/// stays off for the session.
pub fn spawn_boost_hud(
    mut commands: Commands,
    settings: Res<Settings>,
    q_player: Query<(), (With<Player>, With<Boost>)>,
    q_existing: Query<Entity, With<BoostHudRoot>>,
) {
    if q_player.is_empty() {
        error!("Boost HUD: no player with a boost meter; HUD disabled");
        return;
    }

    for e in &q_existing {
        info!("Removing existing boost HUD");
        commands.entity(e).despawn();
    }

    let cfg = &settings.0.hud;
    let layout = BoostHudLayout::from_config(cfg);
    let palette = BoostHudPalette::from_config(cfg);

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(layout.top),
                right: Val::Px(layout.right),
                width: Val::Px(layout.width),
                flex_direction: FlexDirection::Column,
                ..Default::default()
            },
            BoostHudRoot,
            Name::new("BoostContainer"),
        ))
        .with_children(|root| {
            root.spawn((
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Px(layout.bar_height),
                    border: UiRect::all(Val::Px(1.0)),
                    ..Default::default()
                },
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
                BorderColor(Color::WHITE),
                BoostHudBackground,
                Name::new("BoostBackground"),
            ))
            .with_children(|bar| {
                bar.spawn((
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        ..Default::default()
                    },
                    BackgroundColor(palette.ready),
                    BoostHudFill,
                    Name::new("BoostFill"),
                ));
            });

            root.spawn((
                Node {
                    margin: UiRect::top(Val::Px(2.0)),
                    align_self: AlignSelf::Center,
                    ..Default::default()
                },
                Text::new("BOOST READY"),
                TextFont { font_size: cfg.font_size, ..Default::default() },
                TextColor(Color::WHITE),
                TextLayout::new_with_justify(JustifyText::Center),
                BoostHudStatus,
                Name::new("BoostStatus"),
            ));
        });

    commands.insert_resource(layout);
    commands.insert_resource(palette);
    info!(
        width = layout.width,
        height = layout.bar_height,
        "Boost HUD created in top-right corner"
    );
}

fn apply_boost_hud_layout(
    layout: Res<BoostHudLayout>,
    mut q_root: Query<&mut Node, (With<BoostHudRoot>, Without<BoostHudBackground>)>,
    mut q_bg: Query<&mut Node, (With<BoostHudBackground>, Without<BoostHudRoot>)>,
) {
    for mut node in &mut q_root {
        node.top = Val::Px(layout.top);
        node.right = Val::Px(layout.right);
        node.width = Val::Px(layout.width);
    }
    for mut node in &mut q_bg {
        node.height = Val::Px(layout.bar_height);
    }
}

/// Repaint from the player's current boost snapshot.
pub fn update_boost_hud(
    palette: Option<Res<BoostHudPalette>>,
    q_player: Query<&Boost, With<Player>>,
    mut q_fill: Query<(&mut Node, &mut BackgroundColor), With<BoostHudFill>>,
    mut q_status: Query<&mut Text, With<BoostHudStatus>>,
) {
    let Some(palette) = palette else {
        return;
    };
    let Ok(boost) = q_player.single() else {
        return;
    };
    let visual = hud_visual(boost.snapshot());

    for (mut node, mut bg) in &mut q_fill {
        node.width = Val::Percent(visual.fill_percent);
        bg.0 = palette.color(visual.tone);
    }
    for mut text in &mut q_status {
        let label = visual.status.label();
        if text.0 != label {
            text.0 = label.to_string();
        }
    }
}
