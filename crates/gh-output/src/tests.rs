//! Integration tests for gh-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, DRONE_STATISTICS_FILE, PLAN_SUMMARIES_FILE, TIMELINE_FILE};
    use crate::row::{ActionRow, DroneStatsRow, PlanSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    fn action_row(second: u64, drone: &str, description: &str) -> ActionRow {
        ActionRow {
            greenhouse:  "Norte".into(),
            plan:        "Dia 1".into(),
            second,
            drone:       drone.into(),
            action:      "wait",
            description: description.into(),
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(TIMELINE_FILE).exists());
        assert!(dir.path().join(PLAN_SUMMARIES_FILE).exists());
        assert!(dir.path().join(DRONE_STATISTICS_FILE).exists());
    }

    #[test]
    fn missing_directory_is_created() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let mut w = CsvWriter::new(&nested).unwrap();
        w.finish().unwrap();
        assert!(nested.join(TIMELINE_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir, TIMELINE_FILE),
            ["greenhouse", "plan", "second", "drone", "action", "description"]
        );
        assert_eq!(
            headers(&dir, PLAN_SUMMARIES_FILE),
            [
                "greenhouse",
                "plan",
                "total_time_secs",
                "total_water_liters",
                "total_fertilizer_grams",
                "tasks_completed"
            ]
        );
        assert_eq!(
            headers(&dir, DRONE_STATISTICS_FILE),
            ["greenhouse", "plan", "drone", "water_liters", "fertilizer_grams", "plants_irrigated"]
        );
    }

    #[test]
    fn csv_actions_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_actions(&[action_row(1, "D1", "Adelante (H1P1)"), action_row(1, "D2", "Esperar")])
            .unwrap();
        w.write_actions(&[action_row(2, "D1", "Regar")]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, TIMELINE_FILE);
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][2], "1");
        assert_eq!(&rows[0][3], "D1");
        assert_eq!(&rows[0][5], "Adelante (H1P1)");
        assert_eq!(&rows[1][3], "D2");
        assert_eq!(&rows[2][2], "2");
        assert_eq!(&rows[2][5], "Regar");
    }

    #[test]
    fn csv_summary_and_stats_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_plan_summary(&PlanSummaryRow {
            greenhouse:             "Norte".into(),
            plan:                   "Dia 1".into(),
            total_time_secs:        5,
            total_water_liters:     3.5,
            total_fertilizer_grams: 150.0,
            tasks_completed:        2,
        })
        .unwrap();
        w.write_drone_stats(&[DroneStatsRow {
            greenhouse:       "Norte".into(),
            plan:             "Dia 1".into(),
            drone:            "DR01".into(),
            water_liters:     2.0,
            fertilizer_grams: 100.0,
            plants_irrigated: 1,
        }])
        .unwrap();
        w.finish().unwrap();

        let summary = records(&dir, PLAN_SUMMARIES_FILE);
        assert_eq!(summary.len(), 1);
        assert_eq!(&summary[0][2], "5");
        assert_eq!(&summary[0][3], "3.5");
        assert_eq!(&summary[0][5], "2");

        let stats = records(&dir, DRONE_STATISTICS_FILE);
        assert_eq!(stats.len(), 1);
        assert_eq!(&stats[0][2], "DR01");
        assert_eq!(&stats[0][5], "1");
    }

    #[test]
    fn description_with_comma_is_quoted() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_actions(&[action_row(1, "D1", "a, b")]).unwrap();
        w.finish().unwrap();
        assert_eq!(&records(&dir, TIMELINE_FILE)[0][5], "a, b");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        w.write_actions(&[action_row(1, "D1", "Regar")]).unwrap();
        w.finish().unwrap();
        assert_eq!(records(&dir, TIMELINE_FILE).len(), 1);
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use gh_core::{DroneId, Location};
    use gh_greenhouse::{DroneSpec, Greenhouse, GreenhouseBuilder, Plant};
    use gh_plan::IrrigationPlan;
    use gh_sim::SimBuilder;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, DRONE_STATISTICS_FILE, PLAN_SUMMARIES_FILE, TIMELINE_FILE};
    use crate::row::{ActionRow, DroneStatsRow, PlanSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult, SimOutputObserver};

    /// Keeps every row in memory.
    #[derive(Default)]
    struct MemoryWriter {
        actions:   Vec<ActionRow>,
        summaries: Vec<PlanSummaryRow>,
        stats:     Vec<DroneStatsRow>,
        finishes:  usize,
    }

    impl OutputWriter for MemoryWriter {
        fn write_actions(&mut self, rows: &[ActionRow]) -> OutputResult<()> {
            self.actions.extend_from_slice(rows);
            Ok(())
        }
        fn write_plan_summary(&mut self, row: &PlanSummaryRow) -> OutputResult<()> {
            self.summaries.push(row.clone());
            Ok(())
        }
        fn write_drone_stats(&mut self, rows: &[DroneStatsRow]) -> OutputResult<()> {
            self.stats.extend_from_slice(rows);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    /// Fails every write with a distinct message.
    struct FailingWriter;

    impl OutputWriter for FailingWriter {
        fn write_actions(&mut self, _rows: &[ActionRow]) -> OutputResult<()> {
            Err(io::Error::other("first").into())
        }
        fn write_plan_summary(&mut self, _row: &PlanSummaryRow) -> OutputResult<()> {
            Err(io::Error::other("second").into())
        }
        fn write_drone_stats(&mut self, _rows: &[DroneStatsRow]) -> OutputResult<()> {
            Err(io::Error::other("third").into())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    fn greenhouse() -> Greenhouse {
        GreenhouseBuilder::new("Norte", 2, 2)
            .plant(Plant::new(Location::new(1, 2), 2.0, 100.0, "tomate"))
            .plant(Plant::new(Location::new(2, 1), 1.0, 50.0, "lechuga"))
            .assign_drone(&DroneSpec::new(DroneId(1), "DR01"), 1)
            .assign_drone(&DroneSpec::new(DroneId(2), "DR02"), 2)
            .build()
            .unwrap()
    }

    fn plan(name: &str, s: &str) -> IrrigationPlan {
        IrrigationPlan::new(name, s).unwrap()
    }

    #[test]
    fn observer_collects_rows() {
        let mut gh = greenhouse();
        let mut obs = SimOutputObserver::new(MemoryWriter::default());
        SimBuilder::new(&mut gh)
            .build()
            .unwrap()
            .run(&plan("Dia 1", "H1-P2, H2-P1"), &mut obs)
            .unwrap();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        // 5 ticks × 2 drones.
        assert_eq!(w.actions.len(), 10);
        assert_eq!(w.actions[4].second, 3);
        assert_eq!(w.actions[4].action, "irrigate");
        assert_eq!(w.actions[4].description, "Regar");
        assert_eq!(w.actions[5].description, "Esperar");
        assert!(w.actions.iter().all(|r| r.greenhouse == "Norte" && r.plan == "Dia 1"));

        assert_eq!(w.summaries.len(), 1);
        assert_eq!(w.summaries[0].total_time_secs, 5);
        assert_eq!(w.summaries[0].total_water_liters, 3.0);
        assert_eq!(w.summaries[0].tasks_completed, 2);

        let drones: Vec<_> = w.stats.iter().map(|s| (s.drone.as_str(), s.plants_irrigated)).collect();
        assert_eq!(drones, [("DR01", 1), ("DR02", 1)]);
        assert_eq!(w.finishes, 1);
    }

    #[test]
    fn rows_are_tagged_per_run() {
        let mut gh = greenhouse();
        let mut obs = SimOutputObserver::new(MemoryWriter::default());
        let mut sim = SimBuilder::new(&mut gh).build().unwrap();
        sim.run(&plan("A", "H1-P2"), &mut obs).unwrap();
        sim.run(&plan("B", "H2-P1"), &mut obs).unwrap();

        let w = obs.into_writer();
        let plans: Vec<_> = w.summaries.iter().map(|s| s.plan.as_str()).collect();
        assert_eq!(plans, ["A", "B"]);
        assert_eq!(w.actions.last().unwrap().plan, "B");
        assert_eq!(w.stats.len(), 4);
    }

    #[test]
    fn first_error_is_kept() {
        let mut gh = greenhouse();
        let mut obs = SimOutputObserver::new(FailingWriter);
        let result = SimBuilder::new(&mut gh)
            .build()
            .unwrap()
            .run(&plan("Dia 1", "H2-P1"), &mut obs);
        assert!(result.is_ok());

        match obs.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.to_string(), "first"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn empty_run_writes_summary_only() {
        let mut gh = greenhouse();
        let mut obs = SimOutputObserver::new(MemoryWriter::default());
        SimBuilder::new(&mut gh)
            .build()
            .unwrap()
            .run(&plan("Vacio", ""), &mut obs)
            .unwrap();

        let w = obs.into_writer();
        assert!(w.actions.is_empty());
        assert_eq!(w.summaries[0].total_time_secs, 0);
        assert_eq!(w.stats.len(), 2);
    }

    #[test]
    fn aborted_run_leaves_no_rows() {
        let mut gh = GreenhouseBuilder::new("Sur", 1, 3)
            .plant(Plant::new(Location::new(1, 3), 1.0, 10.0, "pimiento"))
            .assign_drone(&DroneSpec::new(DroneId(1), "DR01"), 1)
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(MemoryWriter::default());
        let mut sim = SimBuilder::new(&mut gh).max_ticks(2).build().unwrap();
        assert!(sim.run(&plan("Corto", "H1-P3"), &mut obs).is_err());
        assert_eq!(obs.aborted_runs(), 1);
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert!(w.actions.is_empty());
        assert!(w.summaries.is_empty());
        assert!(w.stats.is_empty());
        assert_eq!(w.finishes, 0);
    }

    #[test]
    fn run_after_abort_writes_only_its_own_rows() {
        let mut gh = greenhouse();
        let mut obs = SimOutputObserver::new(MemoryWriter::default());
        let mut sim = SimBuilder::new(&mut gh).max_ticks(3).build().unwrap();
        // D1 needs 2 moves plus the irrigation, D2 then needs 2 more ticks.
        assert!(sim.run(&plan("Largo", "H1-P2, H2-P1"), &mut obs).is_err());
        sim.run(&plan("Corto", "H2-P1"), &mut obs).unwrap();
        assert_eq!(obs.aborted_runs(), 1);

        let w = obs.into_writer();
        assert!(w.actions.iter().all(|r| r.plan == "Corto"));
        // 2 ticks × 2 drones.
        assert_eq!(w.actions.len(), 4);
        let plans: Vec<_> = w.summaries.iter().map(|s| s.plan.as_str()).collect();
        assert_eq!(plans, ["Corto"]);
    }

    #[test]
    fn aborted_run_leaves_timeline_csv_empty() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let mut gh = greenhouse();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let mut sim = SimBuilder::new(&mut gh).max_ticks(1).build().unwrap();
        assert!(sim.run(&plan("Dia 1", "H1-P2"), &mut obs).is_err());
        drop(sim);
        drop(obs);

        let count = |file: &str| {
            csv::Reader::from_path(dir.path().join(file)).unwrap().records().count()
        };
        assert_eq!(count(TIMELINE_FILE), 0);
        assert_eq!(count(PLAN_SUMMARIES_FILE), 0);
    }

    #[test]
    fn end_to_end_csv() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let mut gh = greenhouse();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        SimBuilder::new(&mut gh)
            .build()
            .unwrap()
            .run(&plan("Dia 1", "H1-P2, H2-P1"), &mut obs)
            .unwrap();
        assert!(obs.take_error().is_none());
        drop(obs);

        let count = |file: &str| {
            csv::Reader::from_path(dir.path().join(file)).unwrap().records().count()
        };
        assert_eq!(count(TIMELINE_FILE), 10);
        assert_eq!(count(PLAN_SUMMARIES_FILE), 1);
        assert_eq!(count(DRONE_STATISTICS_FILE), 2);
    }
}
