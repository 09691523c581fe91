//! `IrrigationPlan` and its per-run cursor `PlanRun`.
//!
//! The plan itself is immutable after construction.  A simulation run calls
//! [`IrrigationPlan::start`] to get a fresh [`PlanRun`] that owns its own
//! queue, so running the same plan twice always starts from the full task
//! list.

use gh_core::Location;

use crate::{PlanError, PlanResult, TaskQueue};

// ── IrrigationPlan ────────────────────────────────────────────────────────────

/// A named, ordered list of irrigation tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IrrigationPlan {
    name:        String,
    plan_string: String,
    tasks:       Vec<Location>,
}

impl IrrigationPlan {
    /// Parse `plan_string` into an ordered task list.
    ///
    /// Fails on the first token that is not `H<row>-P<position>`; `index` in
    /// the error is the zero-based position among the non-empty tokens.
    pub fn new(name: impl Into<String>, plan_string: impl Into<String>) -> PlanResult<Self> {
        let plan_string = plan_string.into();
        let tasks = parse_tasks(&plan_string)?;
        Ok(Self {
            name: name.into(),
            plan_string,
            tasks,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw string the plan was built from.
    pub fn plan_string(&self) -> &str {
        &self.plan_string
    }

    /// Parsed tasks in service order.
    pub fn tasks(&self) -> &[Location] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// A fresh queue holding every task, front = first task.
    pub fn working_queue(&self) -> TaskQueue<Location> {
        self.tasks.iter().copied().collect()
    }

    /// Begin a run over a private copy of the task queue.
    pub fn start(&self) -> PlanRun {
        PlanRun {
            queue:     self.working_queue(),
            completed: 0,
        }
    }
}

// ── PlanRun ───────────────────────────────────────────────────────────────────

/// Disposable cursor over one run of a plan.
#[derive(Debug, Clone)]
pub struct PlanRun {
    queue:     TaskQueue<Location>,
    completed: usize,
}

impl PlanRun {
    /// The head task, or `None` once every task has been completed.
    #[inline]
    pub fn next_task(&self) -> Option<Location> {
        self.queue.peek().copied()
    }

    /// Dequeue the head task and return it.
    pub fn complete_current_task(&mut self) -> PlanResult<Location> {
        let task = self.queue.dequeue()?;
        self.completed += 1;
        Ok(task)
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.queue.is_empty()
    }

    /// Tasks still waiting, including the head.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Tasks dequeued so far in this run.
    pub fn completed(&self) -> usize {
        self.completed
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

fn parse_tasks(plan_string: &str) -> PlanResult<Vec<Location>> {
    plan_string
        .split(',')
        .map(|raw| raw.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<Location>()
                .map_err(|source| PlanError::MalformedTask { index, token, source })
        })
        .collect()
}
