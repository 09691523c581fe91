//! Plain data row types written by output backends.

/// One drone action at one second of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRow {
    pub greenhouse:  String,
    pub plan:        String,
    pub second:      u64,
    pub drone:       String,
    /// `ActionKind` in snake_case, e.g. `move_forward`.
    pub action:      &'static str,
    /// Human-readable description, e.g. `Adelante (H1P2)`.
    pub description: String,
}

/// Totals for one finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummaryRow {
    pub greenhouse:             String,
    pub plan:                   String,
    pub total_time_secs:        u64,
    pub total_water_liters:     f64,
    pub total_fertilizer_grams: f64,
    pub tasks_completed:        usize,
}

/// Resource usage of one drone over one run.
#[derive(Debug, Clone, PartialEq)]
pub struct DroneStatsRow {
    pub greenhouse:       String,
    pub plan:             String,
    pub drone:            String,
    pub water_liters:     f64,
    pub fertilizer_grams: f64,
    pub plants_irrigated: u32,
}
