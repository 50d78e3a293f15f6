use bevy::prelude::*;

/// Shared resource for the player's per-tick intent.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    /// Each axis in [-1,1]. +Y = forward, +X = right.
    pub move_axis: Vec2,
    pub boost_held: bool,
}

pub struct KeyboardInputPlugin;

impl Plugin for KeyboardInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .add_systems(PreUpdate, read_keyboard);
    }
}

fn axis(keys: &ButtonInput<KeyCode>, neg: [KeyCode; 2], pos: [KeyCode; 2]) -> f32 {
    let mut v = 0.0;
    if keys.any_pressed(neg) {
        v -= 1.0;
    }
    if keys.any_pressed(pos) {
        v += 1.0;
    }
    v
}

fn read_keyboard(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else {
        return;
    };
    input.move_axis = Vec2::new(
        axis(&keys, [KeyCode::KeyA, KeyCode::ArrowLeft], [KeyCode::KeyD, KeyCode::ArrowRight]),
        axis(&keys, [KeyCode::KeyS, KeyCode::ArrowDown], [KeyCode::KeyW, KeyCode::ArrowUp]),
    );
    input.boost_held = keys.pressed(KeyCode::Space);
}
