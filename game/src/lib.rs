use bevy::asset::AssetPlugin;
use bevy::prelude::*;

pub mod args;
pub mod config;
pub mod ending;
pub mod hud_boost;
pub mod input;
pub mod level;
pub mod player;
pub mod scene;

pub use args::Args;
pub use config::{load_config, Settings};
use ending::EndingPlugin;
use gameplay::GameConfig;
use hud_boost::BoostHudPlugin;
pub use input::PlayerInput;
use input::KeyboardInputPlugin;
use level::LevelPlugin;
use player::PlayerPlugin;
use scene::ScenePlugin;

#[cfg(feature = "windowing")]
use bevy_egui::EguiPlugin;
#[cfg(feature = "windowing")]
use bevy_inspector_egui::quick::{ResourceInspectorPlugin, WorldInspectorPlugin};

#[derive(Clone, Copy)]
struct GameAppConfig {
    include_rendering: bool,
    include_ui: bool,
}

impl GameAppConfig {
    fn full(args: &Args) -> Self {
        Self {
            include_rendering: !args.headless,
            include_ui: !args.headless,
        }
    }

    const MINIMAL: Self = Self {
        include_rendering: false,
        include_ui: false,
    };
}

pub fn build_game_app(args: Args, cfg: GameConfig) -> App {
    let config = GameAppConfig::full(&args);
    build_game_app_with_config(args, cfg, config)
}

/// Headless app with only the gameplay plugins: no window, no assets, no UI.
/// Input comes from whoever writes [`PlayerInput`].
pub fn build_minimal_game_app(cfg: GameConfig) -> App {
    build_game_app_with_config(Args::default(), cfg, GameAppConfig::MINIMAL)
}

fn build_game_app_with_config(args: Args, cfg: GameConfig, config: GameAppConfig) -> App {
    let mut app = App::new();

    if config.include_rendering {
        app.add_plugins(DefaultPlugins.set(AssetPlugin {
            file_path: "assets".into(),
            ..Default::default()
        }));
        app.add_plugins(KeyboardInputPlugin);
        app.add_plugins(ScenePlugin);
    } else {
        app.add_plugins(MinimalPlugins);
    }

    app.insert_resource(args)
        .insert_resource(Settings(cfg))
        .init_resource::<PlayerInput>();

    app.add_plugins((LevelPlugin, PlayerPlugin, EndingPlugin));

    if config.include_ui {
        app.add_plugins(BoostHudPlugin)
            .add_systems(Startup, ending::spawn_ending_overlays);
        #[cfg(feature = "windowing")]
        {
            app.add_plugins(EguiPlugin::default());
            app.add_plugins(WorldInspectorPlugin::default());
            app.add_plugins(ResourceInspectorPlugin::<hud_boost::BoostHudLayout>::default());
        }
    }

    app
}
