//! Per-tick hooks for renderers, progress output and interruption
//!
//! An observer gets read access to every live body after each completed
//! tick. Returning `ControlFlow::Break(())` stops the run cleanly before the
//! next tick starts.

use std::ops::ControlFlow;

use tracing::{debug, trace};

use super::scenario::TickReport;
use super::states::System;

pub trait TickObserver {
    fn observe(&mut self, report: &TickReport, sys: &System) -> ControlFlow<()>;
}

/// Observer that watches nothing and never interrupts
#[derive(Debug, Default, Clone, Copy)]
pub struct Unobserved;

impl TickObserver for Unobserved {
    fn observe(&mut self, _report: &TickReport, _sys: &System) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

impl<F> TickObserver for F
where
    F: FnMut(&TickReport, &System) -> ControlFlow<()>,
{
    fn observe(&mut self, report: &TickReport, sys: &System) -> ControlFlow<()> {
        self(report, sys)
    }
}

/// Logs tick progress at DEBUG and each merge at TRACE
#[derive(Debug, Default, Clone, Copy)]
pub struct ProgressLog;

impl TickObserver for ProgressLog {
    fn observe(&mut self, report: &TickReport, _sys: &System) -> ControlFlow<()> {
        for event in &report.merges {
            trace!(
                tick = report.tick,
                survivor = event.survivor.0,
                absorbed = event.absorbed.0,
                separation = event.separation,
                "merge"
            );
        }
        debug!(tick = report.tick, bodies = report.body_count, "tick complete");
        ControlFlow::Continue(())
    }
}
