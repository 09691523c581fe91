//! Unit tests for gh-plan.

use gh_core::Location;

use crate::{IrrigationPlan, PlanError, TaskQueue};

fn loc(row: u32, position: u32) -> Location {
    Location::new(row, position)
}

// ── TaskQueue ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod task_queue {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut q = TaskQueue::new();
        q.enqueue(1);
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue(), Ok(1));
        assert_eq!(q.dequeue(), Ok(2));
        assert_eq!(q.dequeue(), Ok(3));
        assert!(q.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut q = TaskQueue::new();
        q.enqueue("a");
        assert_eq!(q.peek(), Some(&"a"));
        assert_eq!(q.peek(), Some(&"a"));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn peek_empty_is_none() {
        let q: TaskQueue<u32> = TaskQueue::new();
        assert_eq!(q.peek(), None);
    }

    #[test]
    fn dequeue_empty_errors() {
        let mut q: TaskQueue<u32> = TaskQueue::new();
        assert_eq!(q.dequeue(), Err(PlanError::EmptyQueue));
    }

    #[test]
    fn interleaved_enqueue_dequeue() {
        let mut q = TaskQueue::new();
        q.enqueue(1);
        q.enqueue(2);
        assert_eq!(q.dequeue(), Ok(1));
        q.enqueue(3);
        let rest: Vec<_> = q.iter().copied().collect();
        assert_eq!(rest, vec![2, 3]);
    }
}

// ── IrrigationPlan parsing ────────────────────────────────────────────────────

#[cfg(test)]
mod plan_parsing {
    use super::*;

    #[test]
    fn parses_in_order() {
        let plan = IrrigationPlan::new("Dia 1", "H1-P2, H2-P1, H2-P2, H3-P3, H1-P4").unwrap();
        assert_eq!(plan.name(), "Dia 1");
        assert_eq!(
            plan.tasks(),
            &[loc(1, 2), loc(2, 1), loc(2, 2), loc(3, 3), loc(1, 4)]
        );
    }

    #[test]
    fn keeps_raw_string() {
        let raw = "  H1-P1 ,H1-P2 ";
        let plan = IrrigationPlan::new("p", raw).unwrap();
        assert_eq!(plan.plan_string(), raw);
    }

    #[test]
    fn ignores_whitespace_and_empty_tokens() {
        let plan = IrrigationPlan::new("p", " ,H1-P1,, \n H 2 - P 3 ,\t,").unwrap();
        assert_eq!(plan.tasks(), &[loc(1, 1), loc(2, 3)]);
    }

    #[test]
    fn empty_string_is_empty_plan() {
        let plan = IrrigationPlan::new("p", "").unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
        assert!(plan.start().is_completed());
    }

    #[test]
    fn duplicates_are_kept() {
        let plan = IrrigationPlan::new("p", "H1-P1,H1-P1").unwrap();
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn malformed_token_reports_index() {
        let err = IrrigationPlan::new("p", "H1-P1, , H1P2, H3-P3").unwrap_err();
        match err {
            PlanError::MalformedTask { index, token, .. } => {
                assert_eq!(index, 1);
                assert_eq!(token, "H1P2");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_number_rejected() {
        assert!(IrrigationPlan::new("p", "H1-Px").is_err());
        assert!(IrrigationPlan::new("p", "H-1-P2").is_err());
    }
}

// ── PlanRun ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod plan_run {
    use super::*;

    #[test]
    fn run_walks_tasks_in_order() {
        let plan = IrrigationPlan::new("p", "H1-P2, H2-P1").unwrap();
        let mut run = plan.start();
        assert_eq!(run.next_task(), Some(loc(1, 2)));
        assert_eq!(run.complete_current_task(), Ok(loc(1, 2)));
        assert_eq!(run.next_task(), Some(loc(2, 1)));
        assert_eq!(run.remaining(), 1);
        assert_eq!(run.complete_current_task(), Ok(loc(2, 1)));
        assert!(run.is_completed());
        assert_eq!(run.next_task(), None);
        assert_eq!(run.completed(), 2);
    }

    #[test]
    fn completing_drained_run_errors() {
        let plan = IrrigationPlan::new("p", "H1-P1").unwrap();
        let mut run = plan.start();
        run.complete_current_task().unwrap();
        assert_eq!(run.complete_current_task(), Err(PlanError::EmptyQueue));
        assert_eq!(run.completed(), 1);
    }

    #[test]
    fn runs_do_not_mutate_plan() {
        let plan = IrrigationPlan::new("p", "H1-P1, H1-P2").unwrap();
        let mut first = plan.start();
        first.complete_current_task().unwrap();
        first.complete_current_task().unwrap();

        let second = plan.start();
        assert_eq!(second.remaining(), 2);
        assert_eq!(plan.len(), 2);
    }
}
