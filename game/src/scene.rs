use bevy::color::Srgba;
use bevy::math::primitives::{Capsule3d, Cuboid, Cylinder};
use bevy::pbr::{MeshMaterial3d, StandardMaterial};
use bevy::prelude::*;

use crate::level::{ExitZone, Sentry};
use crate::player::Player;

#[derive(Component)]
pub struct FollowCam {
    pub offset: Vec3,
    pub stiffness: f32, // larger = snappier follow
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene)
            .add_systems(Update, (dress_player, dress_exit_zone, dress_sentries, follow_player));
    }
}

fn material(materials: &mut Assets<StandardMaterial>, color: Color) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: color,
        perceptual_roughness: 0.9,
        metallic: 0.0,
        ..Default::default()
    })
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(ClearColor(Color::srgb(0.03, 0.03, 0.05)));
    // Dim ambient; it's a stealth game.
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
        affects_lightmapped_meshes: true,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 6_000.0,
            shadows_enabled: true,
            ..Default::default()
        },
        Transform::from_xyz(8.0, 12.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
        GlobalTransform::default(),
        Name::new("Sun Light"),
    ));

    let floor_color: Color = Color::from(Srgba::new(0.20, 0.22, 0.25, 1.0));
    commands.spawn((
        Mesh3d(meshes.add(Mesh::from(Cuboid::new(40.0, 0.5, 60.0)))),
        MeshMaterial3d(material(&mut materials, floor_color)),
        Transform::from_xyz(0.0, -0.25, -10.0),
        GlobalTransform::default(),
        Name::new("Floor"),
    ));

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 12.0, 9.0).looking_at(Vec3::ZERO, Vec3::Y),
        GlobalTransform::default(),
        FollowCam {
            offset: Vec3::new(0.0, 12.0, 9.0),
            stiffness: 6.0,
        },
        Name::new("Follow Camera"),
    ));
}

// Level entities are spawned bare (tests run without assets); meshes are
// attached here whenever a new one shows up, including after a reload.
fn dress_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    q: Query<Entity, Added<Player>>,
) {
    for e in &q {
        commands.entity(e).with_children(|p| {
            p.spawn((
                Mesh3d(meshes.add(Mesh::from(Capsule3d::new(0.4, 1.0)))),
                MeshMaterial3d(material(&mut materials, Color::srgb(0.85, 0.85, 0.9))),
                Transform::from_xyz(0.0, 0.9, 0.0),
            ));
            // nose, so the facing is visible
            p.spawn((
                Mesh3d(meshes.add(Mesh::from(Cuboid::new(0.2, 0.2, 0.4)))),
                MeshMaterial3d(material(&mut materials, Color::srgb(0.2, 0.2, 0.25))),
                Transform::from_xyz(0.0, 1.3, -0.45),
            ));
        });
    }
}

fn dress_exit_zone(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    q: Query<(Entity, &ExitZone), Added<ExitZone>>,
) {
    for (e, zone) in &q {
        let size = zone.zone.half_extents * 2.0;
        let mat = materials.add(StandardMaterial {
            base_color: Color::srgba(0.1, 0.9, 0.3, 0.25),
            emissive: LinearRgba::from(Srgba::new(0.0, 0.6, 0.2, 1.0)),
            alpha_mode: AlphaMode::Blend,
            ..Default::default()
        });
        commands.entity(e).insert((
            Mesh3d(meshes.add(Mesh::from(Cuboid::new(size.x, size.y, size.z)))),
            MeshMaterial3d(mat),
        ));
    }
}

fn dress_sentries(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    q: Query<(Entity, &Sentry), Added<Sentry>>,
) {
    for (e, sentry) in &q {
        commands.entity(e).with_children(|s| {
            s.spawn((
                Mesh3d(meshes.add(Mesh::from(Cuboid::new(0.8, 1.8, 0.8)))),
                MeshMaterial3d(material(&mut materials, Color::srgb(0.6, 0.1, 0.1))),
                Transform::from_xyz(0.0, 0.9, 0.0),
            ));
            // sight disc on the floor
            let disc = materials.add(StandardMaterial {
                base_color: Color::srgba(1.0, 0.2, 0.1, 0.2),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..Default::default()
            });
            s.spawn((
                Mesh3d(meshes.add(Mesh::from(Cylinder::new(sentry.sight_radius, 0.02)))),
                MeshMaterial3d(disc),
                Transform::from_xyz(0.0, 0.01, 0.0),
            ));
        });
    }
}

fn follow_player(
    time: Res<Time>,
    q_player: Query<&Transform, With<Player>>,
    mut q_cam: Query<(&mut Transform, &FollowCam), Without<Player>>,
) {
    let Ok(player) = q_player.single() else {
        return;
    };
    let target = player.translation;
    for (mut cam_t, cam) in &mut q_cam {
        let desired = target + cam.offset;
        let lerp = 1.0 - (-cam.stiffness.max(0.0) * time.delta_secs()).exp();
        cam_t.translation = cam_t.translation.lerp(desired, lerp);
        cam_t.look_at(target, Vec3::Y);
    }
}
