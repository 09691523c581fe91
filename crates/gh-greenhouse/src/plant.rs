use gh_core::Location;

/// One plant of the grid and what it consumes per irrigation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plant {
    pub row:              u32,
    pub position:         u32,
    pub water_liters:     f64,
    pub fertilizer_grams: f64,
    pub plant_type:       String,
}

impl Plant {
    pub fn new(
        location:         Location,
        water_liters:     f64,
        fertilizer_grams: f64,
        plant_type:       impl Into<String>,
    ) -> Self {
        Self {
            row: location.row,
            position: location.position,
            water_liters,
            fertilizer_grams,
            plant_type: plant_type.into(),
        }
    }

    /// Grid cell of this plant; `Display`s as `H<row>-P<position>`.
    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.row, self.position)
    }
}
