//! The zone catalog: the fixed regions of the development, their pricing
//! and their plot-grid parameters.
//!
//! The catalog is immutable for the session. The built-in table mirrors the
//! current sales sheet; `ZoneCatalog::from_json` lets the whole table be
//! swapped out from a sidecar file without a rebuild.

use bevy::prelude::*;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Axis-aligned rectangle on the ground plane (X, Z).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Bounds2 {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Bounds2 {
    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn depth(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    /// Both axes strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.depth() > 0.0
    }
}

/// Plot-grid parameters for zones that are subdivided into sellable plots.
#[derive(Debug, Clone, Deserialize)]
pub struct PlotGrid {
    pub rows: u32,
    pub cols: u32,
    /// Plot numbers are `number_offset + row-major index + 1`.
    pub number_offset: u32,
    /// Probability a generated plot is shown as reserved rather than
    /// available. Presentation placeholder only; see `plots::generate_plots`.
    pub reserved_probability: f64,
    pub plot_size_acres: f32,
    /// Resting elevation of a plot block above the zone surface.
    pub resting_elevation: f32,
}

impl PlotGrid {
    pub fn plot_count(&self) -> u32 {
        self.rows * self.cols
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub description: String,
    pub plots_available: u32,
    pub plots_total: u32,
    /// Current price per plot, KES.
    pub price_per_plot: u64,
    /// Price per plot after the July 2026 deadline, KES.
    pub price_after_deadline: u64,
    /// Display color, `"#rrggbb"` in the sidecar file.
    #[serde(deserialize_with = "hex_color")]
    pub color: [u8; 3],
    /// Placement of the zone label/footprint center.
    pub position: [f32; 3],
    pub bounds: Bounds2,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub on_offer: bool,
    /// Present only for zones subdivided into a plot grid.
    #[serde(default)]
    pub grid: Option<PlotGrid>,
}

impl Zone {
    pub fn color(&self) -> Color {
        Color::srgb_u8(self.color[0], self.color[1], self.color[2])
    }

    /// Minimum to reserve: 10% of the current plot price.
    pub fn deposit(&self) -> u64 {
        self.price_per_plot / 10
    }

    /// What a buyer saves by reserving before the deadline.
    pub fn deadline_savings(&self) -> u64 {
        self.price_after_deadline.saturating_sub(self.price_per_plot)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse zone catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("zone catalog is empty")]
    Empty,
    #[error("zone `{0}` appears more than once in the catalog")]
    DuplicateId(String),
    #[error("zone `{zone}` has reserved probability {value} outside 0..=1")]
    InvalidProbability { zone: String, value: f64 },
}

/// The fixed set of zones for the session.
#[derive(Resource)]
pub struct ZoneCatalog {
    zones: Vec<Zone>,
}

impl Default for ZoneCatalog {
    fn default() -> Self {
        Self {
            zones: default_zones(),
        }
    }
}

impl ZoneCatalog {
    /// Load a replacement catalog from a JSON array of zones.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let zones: Vec<Zone> = serde_json::from_str(json)?;
        if zones.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, zone) in zones.iter().enumerate() {
            if zones[..i].iter().any(|z| z.id == zone.id) {
                return Err(CatalogError::DuplicateId(zone.id.clone()));
            }
            if let Some(grid) = &zone.grid {
                if !(0.0..=1.0).contains(&grid.reserved_probability) {
                    return Err(CatalogError::InvalidProbability {
                        zone: zone.id.clone(),
                        value: grid.reserved_probability,
                    });
                }
            }
        }
        Ok(Self { zones })
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn get(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// Zones currently being sold, in catalog order.
    pub fn on_offer(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter().filter(|z| z.on_offer)
    }
}

fn hex_color<'de, D>(deserializer: D) -> Result<[u8; 3], D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_hex_color(&s).ok_or_else(|| {
        serde::de::Error::custom(format!("expected color like \"#rrggbb\", got {s:?}"))
    })
}

fn parse_hex_color(s: &str) -> Option<[u8; 3]> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

fn default_zones() -> Vec<Zone> {
    vec![
        Zone {
            id: "zone-a".into(),
            name: "Zone A".into(),
            description: "Premium larger irregular parcels with scenic views".into(),
            plots_available: 0,
            plots_total: 15,
            price_per_plot: 0,
            price_after_deadline: 0,
            color: [0x6b, 0x72, 0x80],
            position: [-8.0, 0.1, 6.0],
            bounds: Bounds2 {
                min: [-12.0, 2.0],
                max: [-4.0, 10.0],
            },
            features: vec![
                "Larger plots".into(),
                "Scenic views".into(),
                "Coming soon".into(),
            ],
            on_offer: false,
            grid: None,
        },
        Zone {
            id: "zone-b".into(),
            name: "Zone B".into(),
            description: "Premium medium parcels with excellent investment potential".into(),
            plots_available: 30,
            plots_total: 30,
            price_per_plot: 1_000_000,
            price_after_deadline: 1_200_000,
            color: [0xf9, 0x73, 0x16],
            position: [0.0, 0.1, 6.0],
            bounds: Bounds2 {
                min: [-4.0, 2.0],
                max: [4.0, 10.0],
            },
            features: vec![
                "30 plots available".into(),
                "KES 1,000,000 per plot".into(),
                "Prime location".into(),
                "Investment ready".into(),
            ],
            on_offer: true,
            grid: Some(PlotGrid {
                rows: 5,
                cols: 6,
                number_offset: 29300,
                reserved_probability: 0.3,
                plot_size_acres: 0.25,
                resting_elevation: 0.1,
            }),
        },
        Zone {
            id: "zone-c".into(),
            name: "Zone C".into(),
            description: "Large-scale development with 70 plots for immediate purchase".into(),
            plots_available: 70,
            plots_total: 70,
            price_per_plot: 750_000,
            price_after_deadline: 850_000,
            color: [0x14, 0xb8, 0xa6],
            position: [0.0, 0.1, -4.0],
            bounds: Bounds2 {
                min: [-6.0, -10.0],
                max: [6.0, 2.0],
            },
            features: vec![
                "70 plots available".into(),
                "KES 750,000 + tax & conveyance".into(),
                "Best value".into(),
                "Family-friendly".into(),
            ],
            on_offer: true,
            grid: Some(PlotGrid {
                rows: 7,
                cols: 10,
                number_offset: 29000,
                reserved_probability: 0.2,
                plot_size_acres: 0.2,
                resting_elevation: 0.05,
            }),
        },
        Zone {
            id: "school".into(),
            name: "School Zone".into(),
            description: "Dedicated educational facility for the community".into(),
            plots_available: 0,
            plots_total: 1,
            price_per_plot: 0,
            price_after_deadline: 0,
            color: [0x8b, 0x5c, 0xf6],
            position: [10.0, 0.1, 0.0],
            bounds: Bounds2 {
                min: [6.0, -4.0],
                max: [14.0, 4.0],
            },
            features: vec![
                "Modern school".into(),
                "Sports facilities".into(),
                "Community hub".into(),
            ],
            on_offer: false,
            grid: None,
        },
        Zone {
            id: "nursery".into(),
            name: "Nursery Zone".into(),
            description: "Green nursery and landscaping area".into(),
            plots_available: 0,
            plots_total: 1,
            price_per_plot: 0,
            price_after_deadline: 0,
            color: [0x22, 0xc5, 0x5e],
            position: [10.0, 0.1, -8.0],
            bounds: Bounds2 {
                min: [6.0, -12.0],
                max: [14.0, -4.0],
            },
            features: vec![
                "Plant nursery".into(),
                "Landscaping".into(),
                "Green spaces".into(),
            ],
            on_offer: false,
            grid: None,
        },
        Zone {
            id: "extension".into(),
            name: "Extension Area".into(),
            description: "Future development with riverfront views".into(),
            plots_available: 0,
            plots_total: 14,
            price_per_plot: 0,
            price_after_deadline: 0,
            color: [0x64, 0x74, 0x8b],
            position: [-10.0, 0.1, -8.0],
            bounds: Bounds2 {
                min: [-16.0, -14.0],
                max: [-4.0, -2.0],
            },
            features: vec![
                "River access".into(),
                "Natural terrain".into(),
                "Future development".into(),
            ],
            on_offer: false,
            grid: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = ZoneCatalog::default();
        assert_eq!(catalog.zones().len(), 6);

        let on_offer: Vec<&str> = catalog.on_offer().map(|z| z.id.as_str()).collect();
        assert_eq!(on_offer, vec!["zone-b", "zone-c"]);

        // Only the on-offer zones carry plot grids.
        for zone in catalog.zones() {
            assert_eq!(zone.grid.is_some(), zone.on_offer, "zone {}", zone.id);
        }
    }

    #[test]
    fn test_deposit_is_ten_percent() {
        let catalog = ZoneCatalog::default();
        let zone_b = catalog.get("zone-b").unwrap();
        let zone_c = catalog.get("zone-c").unwrap();
        assert_eq!(zone_b.deposit(), 100_000);
        assert_eq!(zone_c.deposit(), 75_000);
        assert_eq!(zone_b.deadline_savings(), 200_000);
        assert_eq!(zone_c.deadline_savings(), 100_000);
    }

    #[test]
    fn test_grid_counts() {
        let catalog = ZoneCatalog::default();
        let grid_b = catalog.get("zone-b").unwrap().grid.as_ref().unwrap();
        let grid_c = catalog.get("zone-c").unwrap().grid.as_ref().unwrap();
        assert_eq!(grid_b.plot_count(), 30);
        assert_eq!(grid_c.plot_count(), 70);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#f97316"), Some([0xf9, 0x73, 0x16]));
        assert_eq!(parse_hex_color("#FFFFFF"), Some([255, 255, 255]));
        assert_eq!(parse_hex_color("f97316"), None);
        assert_eq!(parse_hex_color("#f9731"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r##"[
            {
                "id": "zone-x",
                "name": "Zone X",
                "description": "Test zone",
                "plots_available": 4,
                "plots_total": 4,
                "price_per_plot": 500000,
                "price_after_deadline": 600000,
                "color": "#14b8a6",
                "position": [0.0, 0.1, 0.0],
                "bounds": { "min": [-2.0, -2.0], "max": [2.0, 2.0] },
                "features": ["Test"],
                "on_offer": true,
                "grid": {
                    "rows": 2,
                    "cols": 2,
                    "number_offset": 100,
                    "reserved_probability": 0.5,
                    "plot_size_acres": 0.1,
                    "resting_elevation": 0.05
                }
            }
        ]"##;
        let catalog = ZoneCatalog::from_json(json).unwrap();
        let zone = catalog.get("zone-x").unwrap();
        assert_eq!(zone.color, [0x14, 0xb8, 0xa6]);
        assert_eq!(zone.deposit(), 50_000);
        assert_eq!(zone.grid.as_ref().unwrap().plot_count(), 4);
    }

    #[test]
    fn test_catalog_rejects_empty_and_duplicates() {
        assert!(matches!(
            ZoneCatalog::from_json("[]"),
            Err(CatalogError::Empty)
        ));

        let json = r##"[
            {"id": "a", "name": "A", "description": "", "plots_available": 0,
             "plots_total": 0, "price_per_plot": 0, "price_after_deadline": 0,
             "color": "#000000", "position": [0,0,0],
             "bounds": {"min": [0,0], "max": [1,1]}},
            {"id": "a", "name": "A again", "description": "", "plots_available": 0,
             "plots_total": 0, "price_per_plot": 0, "price_after_deadline": 0,
             "color": "#000000", "position": [0,0,0],
             "bounds": {"min": [0,0], "max": [1,1]}}
        ]"##;
        assert!(matches!(
            ZoneCatalog::from_json(json),
            Err(CatalogError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_catalog_rejects_out_of_range_probability() {
        let json = r##"[
            {"id": "a", "name": "A", "description": "", "plots_available": 4,
             "plots_total": 4, "price_per_plot": 0, "price_after_deadline": 0,
             "color": "#000000", "position": [0,0,0],
             "bounds": {"min": [0,0], "max": [4,4]},
             "on_offer": true,
             "grid": {"rows": 2, "cols": 2, "number_offset": 0,
                      "reserved_probability": 1.5,
                      "plot_size_acres": 0.1, "resting_elevation": 0.05}}
        ]"##;
        assert!(matches!(
            ZoneCatalog::from_json(json),
            Err(CatalogError::InvalidProbability { zone, .. }) if zone == "a"
        ));
    }
}
