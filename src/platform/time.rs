//! Tick sources
//!
//! A tick source owns the cadence of the simulation. It is started when a
//! session begins and stopped the moment the session ends.

use crate::consts::{MAX_SUBSTEPS, TICK_PERIOD_MS};

/// Something that decides how many fixed steps are due
pub trait TickSource {
    /// Fixed period between ticks in milliseconds
    fn period_ms(&self) -> f64;

    /// Report `elapsed_ms` of host time and return how many ticks to run now
    ///
    /// A stopped source always returns 0.
    fn due_ticks(&mut self, elapsed_ms: f64) -> u32;

    fn start(&mut self);

    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// Accumulator-driven fixed timestep, for hosts that report frame deltas
#[derive(Debug, Clone)]
pub struct FixedTicker {
    period_ms: f64,
    max_substeps: u32,
    accumulator: f64,
    running: bool,
}

impl FixedTicker {
    /// The period is fixed for the ticker's lifetime
    ///
    /// A period that is not finite and positive falls back to `TICK_PERIOD_MS`.
    pub fn new(period_ms: f64, max_substeps: u32) -> Self {
        let period_ms = if period_ms.is_finite() && period_ms > 0.0 {
            period_ms
        } else {
            log::warn!("Invalid tick period {} ms, using {}", period_ms, TICK_PERIOD_MS);
            TICK_PERIOD_MS
        };

        Self {
            period_ms,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
            running: false,
        }
    }
}

impl Default for FixedTicker {
    fn default() -> Self {
        Self::new(TICK_PERIOD_MS, MAX_SUBSTEPS)
    }
}

impl TickSource for FixedTicker {
    fn period_ms(&self) -> f64 {
        self.period_ms
    }

    fn due_ticks(&mut self, elapsed_ms: f64) -> u32 {
        if !self.running || !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return 0;
        }

        // Clamp long stalls (tab switch, debugger) to one catch-up window
        let cap = self.period_ms * self.max_substeps as f64;
        self.accumulator += elapsed_ms.min(cap);

        let mut due = 0;
        while self.accumulator >= self.period_ms && due < self.max_substeps {
            self.accumulator -= self.period_ms;
            due += 1;
        }
        due
    }

    fn start(&mut self) {
        self.accumulator = 0.0;
        self.running = true;
    }

    fn stop(&mut self) {
        self.accumulator = 0.0;
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

/// Test-harness ticker: ticks happen only when queued
#[derive(Debug, Clone, Default)]
pub struct ManualTicker {
    pending: u32,
    running: bool,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `n` ticks for the next `due_ticks` call
    pub fn queue(&mut self, n: u32) {
        self.pending = self.pending.saturating_add(n);
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }
}

impl TickSource for ManualTicker {
    fn period_ms(&self) -> f64 {
        TICK_PERIOD_MS
    }

    fn due_ticks(&mut self, _elapsed_ms: f64) -> u32 {
        if !self.running {
            return 0;
        }
        std::mem::take(&mut self.pending)
    }

    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.pending = 0;
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
