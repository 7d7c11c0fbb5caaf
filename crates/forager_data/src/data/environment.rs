use serde::{Deserialize, Serialize};

/// The four zone kinds, one per world quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaKind {
    /// North-west quadrant: open grassland.
    Meadow,
    /// North-east quadrant: dense shrubs.
    Thicket,
    /// South-west quadrant: orchard woodland.
    Grove,
    /// South-east quadrant: arid scrub.
    Badlands,
}

impl AreaKind {
    pub const COUNT: usize = 4;
    pub const ALL: [AreaKind; AreaKind::COUNT] = [
        AreaKind::Meadow,
        AreaKind::Thicket,
        AreaKind::Grove,
        AreaKind::Badlands,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A zone of the world with its modifiers and live source counter.
///
/// Everything except `current_food_sources` is fixed at construction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Area {
    /// Which quadrant this record describes.
    pub kind: AreaKind,
    /// Stable numeric identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Multiplier applied to agent movement speed inside the zone.
    pub speed_modifier: f64,
    /// Multiplier applied to producer regeneration inside the zone.
    pub food_regen_modifier: f64,
    /// Per-tick probability that a producer in this zone tries to spread.
    pub expansion_chance: f64,
    /// Render-only RGB color.
    pub color: (u8, u8, u8),
    /// Upper bound on concurrently live producers.
    pub max_food_sources: usize,
    /// Producers currently alive in the zone.
    pub current_food_sources: usize,
}
