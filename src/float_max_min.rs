//! f32 max/min benchmark
//!
//! Each loop draws two values in `[0, 100)` and times one `max` and one `min`
//! over sums with the running max. Both use the previous max, so `min` never
//! tracks a minimum across loops.

use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::BenchError;
use crate::harness::{Harness, MicroBench};

pub const MIN_RANGE: f32 = 0.0;
pub const MAX_RANGE: f32 = 100.0;

/// Zero draws reported on the diagnostic sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZeroDraw {
    Both,
    A,
    B,
}

impl ZeroDraw {
    pub fn classify(a: f32, b: f32) -> Option<Self> {
        match (a == 0.0, b == 0.0) {
            (true, true) => Some(Self::Both),
            (true, false) => Some(Self::A),
            (false, true) => Some(Self::B),
            (false, false) => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Both => "both are zero",
            Self::A => "a is zero",
            Self::B => "b is zero",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extremes {
    pub max: f32,
    pub min: f32,
}

impl Extremes {
    /// One timed step: both results are offset by the previous max.
    #[inline]
    pub fn step(self, a: f32, b: f32) -> Self {
        let prev_max = self.max;
        Self {
            max: (a + prev_max).max(b + prev_max),
            min: (a + prev_max).min(b + prev_max),
        }
    }
}

pub struct FloatMaxMinBench<R = StdRng, W = io::Stdout> {
    rng: R,
    diagnostics: W,
    last: Extremes,
}

impl FloatMaxMinBench {
    /// Entropy-seeded generator, diagnostics on stdout.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy(), io::stdout())
    }
}

impl Default for FloatMaxMinBench {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng, W: Write> FloatMaxMinBench<R, W> {
    pub fn with_rng(rng: R, diagnostics: W) -> Self {
        Self {
            rng,
            diagnostics,
            last: Extremes::default(),
        }
    }

    /// Result of the final loop of the most recent batch.
    pub fn last(&self) -> Extremes {
        self.last
    }

    pub fn diagnostics(&self) -> &W {
        &self.diagnostics
    }

    fn draw(&mut self) -> f32 {
        self.rng.gen_range(MIN_RANGE..MAX_RANGE)
    }

    fn report_zero(&mut self, zero: ZeroDraw) {
        if let Err(err) = writeln!(self.diagnostics, "{}", zero.message()) {
            tracing::warn!(error = %err, "failed to write zero-draw diagnostic");
        }
    }
}

impl<R: Rng, W: Write> MicroBench for FloatMaxMinBench<R, W> {
    fn name(&self) -> &'static str {
        "float_max_min"
    }

    fn do_batch(&mut self, harness: &mut Harness, num_loops: u64) -> Result<u64, BenchError> {
        harness.pause_timer();
        tracing::debug!(num_loops, "float max/min batch");

        let mut current = Extremes::default();
        for _ in 0..num_loops {
            harness.check_interrupt()?;
            let a = self.draw();
            let b = self.draw();
            if let Some(zero) = ZeroDraw::classify(a, b) {
                self.report_zero(zero);
            }

            harness.start_timer();
            current = std::hint::black_box(current.step(a, b));
            harness.pause_timer();
        }

        self.last = current;
        Ok(num_loops)
    }
}
