//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `timeline.csv`
//! - `plan_summaries.csv`
//! - `drone_statistics.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ActionRow, DroneStatsRow, OutputResult, PlanSummaryRow};

pub const TIMELINE_FILE: &str = "timeline.csv";
pub const PLAN_SUMMARIES_FILE: &str = "plan_summaries.csv";
pub const DRONE_STATISTICS_FILE: &str = "drone_statistics.csv";

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    timeline:   Writer<File>,
    summaries:  Writer<File>,
    statistics: Writer<File>,
    dirty:      bool,
}

impl CsvWriter {
    /// Create `dir` if needed, (re)create the three CSV files in it and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut timeline = Writer::from_path(dir.join(TIMELINE_FILE))?;
        timeline.write_record(["greenhouse", "plan", "second", "drone", "action", "description"])?;

        let mut summaries = Writer::from_path(dir.join(PLAN_SUMMARIES_FILE))?;
        summaries.write_record([
            "greenhouse",
            "plan",
            "total_time_secs",
            "total_water_liters",
            "total_fertilizer_grams",
            "tasks_completed",
        ])?;

        let mut statistics = Writer::from_path(dir.join(DRONE_STATISTICS_FILE))?;
        statistics.write_record([
            "greenhouse",
            "plan",
            "drone",
            "water_liters",
            "fertilizer_grams",
            "plants_irrigated",
        ])?;

        Ok(Self {
            timeline,
            summaries,
            statistics,
            dirty: true,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_actions(&mut self, rows: &[ActionRow]) -> OutputResult<()> {
        self.dirty = true;
        for row in rows {
            let second = row.second.to_string();
            self.timeline.write_record([
                row.greenhouse.as_str(),
                row.plan.as_str(),
                second.as_str(),
                row.drone.as_str(),
                row.action,
                row.description.as_str(),
            ])?;
        }
        Ok(())
    }

    fn write_plan_summary(&mut self, row: &PlanSummaryRow) -> OutputResult<()> {
        self.dirty = true;
        let total_time = row.total_time_secs.to_string();
        let water = row.total_water_liters.to_string();
        let fertilizer = row.total_fertilizer_grams.to_string();
        let tasks = row.tasks_completed.to_string();
        self.summaries.write_record([
            row.greenhouse.as_str(),
            row.plan.as_str(),
            total_time.as_str(),
            water.as_str(),
            fertilizer.as_str(),
            tasks.as_str(),
        ])?;
        Ok(())
    }

    fn write_drone_stats(&mut self, rows: &[DroneStatsRow]) -> OutputResult<()> {
        self.dirty = true;
        for row in rows {
            let water = row.water_liters.to_string();
            let fertilizer = row.fertilizer_grams.to_string();
            let plants = row.plants_irrigated.to_string();
            self.statistics.write_record([
                row.greenhouse.as_str(),
                row.plan.as_str(),
                row.drone.as_str(),
                water.as_str(),
                fertilizer.as_str(),
                plants.as_str(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if !self.dirty {
            return Ok(());
        }
        self.dirty = false;
        self.timeline.flush()?;
        self.summaries.flush()?;
        self.statistics.flush()?;
        Ok(())
    }
}
