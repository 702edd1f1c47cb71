//! Top-level view state: which zone is active, which plot is selected or
//! hovered, and whether the camera auto-rotates.

use bevy::prelude::*;

/// Zone currently highlighted/filtered. `None` is the overview.
#[derive(Resource, Default)]
pub struct ActiveZone(pub Option<String>);

impl ActiveZone {
    pub fn is(&self, zone_id: &str) -> bool {
        self.0.as_deref() == Some(zone_id)
    }
}

/// Plot whose detail panel is open, by plot number.
#[derive(Resource, Default)]
pub struct SelectedPlot(pub Option<u32>);

impl SelectedPlot {
    /// Clicking a plot selects it; clicking the selected plot deselects.
    pub fn toggle(&mut self, number: u32) {
        if self.0 == Some(number) {
            self.0 = None;
        } else {
            self.0 = Some(number);
        }
    }
}

/// Plot under the cursor, by plot number. Transient; at most one.
#[derive(Resource, Default)]
pub struct HoveredPlot(pub Option<u32>);

/// Whether the camera orbits on its own. On by default; turning it off
/// hands the pose to manual orbit control.
#[derive(Resource)]
pub struct AutoRotate(pub bool);

impl Default for AutoRotate {
    fn default() -> Self {
        Self(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_toggle_law() {
        let mut sel = SelectedPlot::default();
        sel.toggle(29301);
        assert_eq!(sel.0, Some(29301));
        // Selecting the already-selected plot clears the selection.
        sel.toggle(29301);
        assert_eq!(sel.0, None);
    }

    #[test]
    fn test_select_switches_between_plots() {
        let mut sel = SelectedPlot::default();
        sel.toggle(29301);
        sel.toggle(29302);
        assert_eq!(sel.0, Some(29302));
    }

    #[test]
    fn test_active_zone_match() {
        let mut active = ActiveZone::default();
        assert!(!active.is("zone-b"));
        active.0 = Some("zone-b".into());
        assert!(active.is("zone-b"));
        assert!(!active.is("zone-c"));
    }
}
