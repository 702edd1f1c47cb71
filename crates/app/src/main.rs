use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use estate::rng::TourRng;
use estate::zones::ZoneCatalog;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Isinya Gardens - 3D Virtual Tour".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((
        estate::EstatePlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // ISINYA_SEED pins the plot-status shuffle for reproducible runs.
    if let Ok(seed) = std::env::var("ISINYA_SEED") {
        match seed.parse::<u64>() {
            Ok(seed) => {
                app.insert_resource(TourRng::from_seed_u64(seed));
            }
            Err(e) => warn!("ignoring unparseable ISINYA_SEED {seed:?}: {e}"),
        }
    }

    // ISINYA_ZONES points at a JSON file overriding the built-in catalog.
    if let Ok(path) = std::env::var("ISINYA_ZONES") {
        match load_catalog(&path) {
            Ok(catalog) => {
                info!("loaded zone catalog from {path}");
                app.insert_resource(catalog);
            }
            Err(e) => warn!("ignoring zone catalog at {path}: {e}"),
        }
    }

    app.run();
}

fn load_catalog(path: &str) -> Result<ZoneCatalog, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(ZoneCatalog::from_json(&json)?)
}
