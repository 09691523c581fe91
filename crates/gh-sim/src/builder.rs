//! Fluent builder for constructing a [`Simulator`].

use gh_core::{SimClock, SimConfig};
use gh_greenhouse::Greenhouse;

use crate::{SimError, SimResult, Simulator};

/// Fluent builder for [`Simulator`].
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                     |
/// |----------------------------|-----------------------------|
/// | `.config(c)`               | `SimConfig::default()`      |
/// | `.max_ticks(n)`            | unbounded                   |
/// | `.emit_finish_tick(b)`     | `false`                     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(&mut greenhouse)
///     .max_ticks(10_000)
///     .build()?;
/// let result = sim.run(&plan, &mut NoopObserver)?;
/// ```
pub struct SimBuilder<'g> {
    greenhouse: &'g mut Greenhouse,
    config:     SimConfig,
}

impl<'g> SimBuilder<'g> {
    pub fn new(greenhouse: &'g mut Greenhouse) -> Self {
        Self {
            greenhouse,
            config: SimConfig::default(),
        }
    }

    /// Replace the whole run configuration.
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Fail a run with `TickLimitExceeded` once it executes more than `n`
    /// ticks.
    pub fn max_ticks(mut self, n: u64) -> Self {
        self.config.max_ticks = Some(n);
        self
    }

    /// Record one all-`finish` tick after the plan drains.
    pub fn emit_finish_tick(mut self, enabled: bool) -> Self {
        self.config.emit_finish_tick = enabled;
        self
    }

    /// Validate the configuration and return a ready-to-run [`Simulator`].
    pub fn build(self) -> SimResult<Simulator<'g>> {
        if self.config.max_ticks == Some(0) {
            return Err(SimError::Config("max_ticks must be at least 1".into()));
        }

        Ok(Simulator {
            config:     self.config,
            clock:      SimClock::new(),
            greenhouse: self.greenhouse,
        })
    }
}
