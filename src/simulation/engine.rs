//! Run loop driving a `Scenario` for a fixed number of ticks
//!
//! Single-threaded and synchronous. The loop ends after `iterations` ticks
//! or as soon as an observer asks to stop.

use std::ops::ControlFlow;

use crate::simulation::observer::TickObserver;
use crate::simulation::scenario::Scenario;

#[derive(Debug, Clone)]
pub struct Engine {
    pub iterations: usize, // ticks to run
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub ticks: usize,       // ticks completed
    pub merges: usize,      // merges across all ticks (pre-tick pass excluded)
    pub interrupted: bool,  // stopped early by an observer
}

impl Engine {
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }

    pub fn run(&self, scenario: &mut Scenario, observer: &mut dyn TickObserver) -> RunOutcome {
        let mut outcome = RunOutcome {
            ticks: 0,
            merges: 0,
            interrupted: false,
        };

        for _ in 0..self.iterations {
            let report = scenario.step();
            outcome.ticks += 1;
            outcome.merges += report.merges.len();

            if let ControlFlow::Break(()) = observer.observe(&report, &scenario.system) {
                outcome.interrupted = true;
                break;
            }
        }

        outcome
    }
}
