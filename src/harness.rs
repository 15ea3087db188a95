//! Batch harness
//!
//! A `MicroBench` runs `num_loops` iterations of its operation and brackets the
//! part worth measuring with `start_timer` / `pause_timer`. Everything outside
//! those brackets (data generation, bookkeeping, diagnostics) is excluded.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::error::BenchError;
use crate::timer::Stopwatch;

/// Trait for benchmarks driven by [`Harness::run`]
pub trait MicroBench {
    fn name(&self) -> &'static str;

    /// Elementary operations performed by one loop iteration.
    fn max_iterations_per_loop(&self) -> u64 {
        1
    }

    /// Run `num_loops` iterations and return the number of elementary
    /// operations performed.
    fn do_batch(&mut self, harness: &mut Harness, num_loops: u64) -> Result<u64, BenchError>;
}

/// Cloneable handle used to abort a batch from outside the loop.
#[derive(Clone, Debug, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Clears the flag, returning whether it was set.
    fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub name: &'static str,
    pub loops: u64,
    pub operations: u64,
    pub elapsed_ns: u64,
}

/// Timer controls and interrupt state handed to [`MicroBench::do_batch`].
#[derive(Debug, Default)]
pub struct Harness {
    stopwatch: Stopwatch,
    interrupt: Interrupt,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interrupt(interrupt: Interrupt) -> Self {
        Self {
            stopwatch: Stopwatch::new(),
            interrupt,
        }
    }

    pub fn interrupt_handle(&self) -> Interrupt {
        self.interrupt.clone()
    }

    #[inline]
    pub fn start_timer(&mut self) {
        self.stopwatch.start();
    }

    #[inline]
    pub fn pause_timer(&mut self) {
        self.stopwatch.pause();
    }

    /// Total time accrued in timed windows across every batch run so far.
    pub fn elapsed(&self) -> Duration {
        self.stopwatch.elapsed()
    }

    /// Fails with [`BenchError::Interrupted`] if the interrupt flag was raised,
    /// consuming the flag.
    #[inline]
    pub fn check_interrupt(&self) -> Result<(), BenchError> {
        if self.interrupt.take() {
            return Err(BenchError::Interrupted);
        }
        Ok(())
    }

    /// Run one batch and report the operations performed and the time spent
    /// inside timed windows during this batch.
    pub fn run<B: MicroBench + ?Sized>(
        &mut self,
        bench: &mut B,
        num_loops: u64,
    ) -> Result<BatchReport, BenchError> {
        let before = self.stopwatch.elapsed();
        let outcome = bench.do_batch(self, num_loops);
        self.stopwatch.pause();

        let operations = match outcome {
            Ok(operations) => operations,
            Err(err) => {
                tracing::debug!(bench = bench.name(), error = %err, "batch aborted");
                return Err(err);
            }
        };

        let elapsed = self.stopwatch.elapsed().saturating_sub(before);
        Ok(BatchReport {
            name: bench.name(),
            loops: num_loops,
            operations,
            elapsed_ns: elapsed.as_nanos() as u64,
        })
    }
}
