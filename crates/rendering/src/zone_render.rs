//! Zone footprints: one translucent colored plane per zone. The active
//! zone renders more opaque; on-offer zones pulse their glow slowly.

use bevy::prelude::*;

use estate::selection::ActiveZone;
use estate::zones::ZoneCatalog;

const FOOTPRINT_Y: f32 = 0.02;

#[derive(Component)]
pub struct ZoneFootprint {
    pub zone_id: String,
    pub on_offer: bool,
    pub base_color: Color,
}

pub fn footprint_alpha(active: Option<&str>, zone_id: &str) -> f32 {
    if active == Some(zone_id) {
        0.6
    } else {
        0.3
    }
}

/// Emissive intensity for on-offer zones at time `t`.
pub fn offer_pulse(t: f32) -> f32 {
    0.1 + (t * 3.0).sin() * 0.05
}

pub fn spawn_zone_footprints(
    catalog: Res<ZoneCatalog>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for zone in catalog.zones() {
        let color = zone.color();
        commands.spawn((
            ZoneFootprint {
                zone_id: zone.id.clone(),
                on_offer: zone.on_offer,
                base_color: color,
            },
            Mesh3d(meshes.add(
                Plane3d::default()
                    .mesh()
                    .size(zone.bounds.width(), zone.bounds.depth()),
            )),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color.with_alpha(0.3),
                alpha_mode: AlphaMode::Blend,
                ..default()
            })),
            Transform::from_xyz(zone.position[0], FOOTPRINT_Y, zone.position[2]),
        ));
    }
}

pub fn update_zone_footprints(
    time: Res<Time>,
    active: Res<ActiveZone>,
    footprints: Query<(&ZoneFootprint, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (footprint, material) in &footprints {
        let Some(material) = materials.get_mut(&material.0) else {
            continue;
        };
        let alpha = footprint_alpha(active.0.as_deref(), &footprint.zone_id);
        material.base_color = footprint.base_color.with_alpha(alpha);
        if footprint.on_offer {
            material.emissive =
                footprint.base_color.to_linear() * offer_pulse(time.elapsed_secs());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_zone_is_more_opaque() {
        assert_eq!(footprint_alpha(Some("zone-b"), "zone-b"), 0.6);
        assert_eq!(footprint_alpha(Some("zone-b"), "zone-c"), 0.3);
        assert_eq!(footprint_alpha(None, "zone-b"), 0.3);
    }

    #[test]
    fn test_offer_pulse_stays_in_band() {
        for i in 0..200 {
            let pulse = offer_pulse(i as f32 * 0.11);
            assert!((0.05..=0.15).contains(&pulse));
        }
    }
}
