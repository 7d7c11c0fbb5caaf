//! Zones: quadrant lookup and the live area table.

use crate::config::AreaConfig;
pub use forager_data::{Area, AreaKind};

pub trait AreaLogic {
    fn from_config(config: &AreaConfig) -> Self;
    /// Whether another producer may be registered in this zone.
    fn has_capacity(&self) -> bool;
    fn register_source(&mut self);
    fn release_source(&mut self);
}

impl AreaLogic for Area {
    fn from_config(config: &AreaConfig) -> Self {
        Self {
            kind: config.kind,
            id: config.id,
            name: config.name.clone(),
            speed_modifier: config.speed_modifier,
            food_regen_modifier: config.food_regen_modifier,
            expansion_chance: config.expansion_chance,
            color: config.color,
            max_food_sources: config.max_food_sources,
            current_food_sources: 0,
        }
    }

    fn has_capacity(&self) -> bool {
        self.current_food_sources < self.max_food_sources
    }

    fn register_source(&mut self) {
        self.current_food_sources += 1;
    }

    fn release_source(&mut self) {
        self.current_food_sources = self.current_food_sources.saturating_sub(1);
    }
}

/// Zone kind of a cell, by quadrant relative to the grid midpoint.
#[must_use]
pub fn zone_at(x: u16, y: u16, width: u16, height: u16) -> AreaKind {
    let west = x < width / 2;
    let north = y < height / 2;
    match (west, north) {
        (true, true) => AreaKind::Meadow,
        (false, true) => AreaKind::Thicket,
        (true, false) => AreaKind::Grove,
        (false, false) => AreaKind::Badlands,
    }
}

/// Zone kind under a continuous position.
#[must_use]
pub fn zone_at_position(x: f64, y: f64, width: u16, height: u16) -> AreaKind {
    let cx = x.max(0.0).min(f64::from(width) - 1.0) as u16;
    let cy = y.max(0.0).min(f64::from(height) - 1.0) as u16;
    zone_at(cx, cy, width, height)
}

/// Inclusive-exclusive cell ranges covered by a zone.
#[must_use]
pub fn zone_bounds(kind: AreaKind, width: u16, height: u16) -> ((u16, u16), (u16, u16)) {
    let mid_x = width / 2;
    let mid_y = height / 2;
    match kind {
        AreaKind::Meadow => ((0, mid_x), (0, mid_y)),
        AreaKind::Thicket => ((mid_x, width), (0, mid_y)),
        AreaKind::Grove => ((0, mid_x), (mid_y, height)),
        AreaKind::Badlands => ((mid_x, width), (mid_y, height)),
    }
}

/// One live [`Area`] per zone kind, indexed by kind.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AreaTable {
    areas: Vec<Area>,
}

impl AreaTable {
    /// Builds the table from configuration rows; expects one row per kind.
    pub fn from_config(rows: &[AreaConfig]) -> anyhow::Result<Self> {
        let mut areas = Vec::with_capacity(AreaKind::COUNT);
        for kind in AreaKind::ALL {
            let row = rows
                .iter()
                .find(|r| r.kind == kind)
                .ok_or_else(|| anyhow::anyhow!("no area configured for {kind:?}"))?;
            areas.push(Area::from_config(row));
        }
        Ok(Self { areas })
    }

    #[must_use]
    pub fn get(&self, kind: AreaKind) -> &Area {
        &self.areas[kind.index()]
    }

    pub fn get_mut(&mut self, kind: AreaKind) -> &mut Area {
        &mut self.areas[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Area> {
        self.areas.iter()
    }
}
