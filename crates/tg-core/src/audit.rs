// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of TensorGuard — Licensed under AGPL-3.0-or-later.

//! The reduction engine: full survey and short-circuit failure probe.

use rayon::prelude::*;
use tracing::debug;

use crate::element::Element;
use crate::report::TensorReport;

/// Buffers shorter than this stay on the calling thread; the fork-join
/// overhead outweighs the scan below roughly this size.
const PAR_MIN_LEN: usize = 4096;

/// Default partition size for the parallel phase. Overridable per process via
/// `TG_CHUNK_SIZE` for reproduction runs that need pinned partitions.
const DEFAULT_CHUNK: usize = 64 * 1024;

/// Per-partition state of an in-flight survey.
///
/// Counts use integer addition, moment sums use `f64` addition, and the
/// extrema use `min`/`max`, so [`merge`](Accumulator::merge) is commutative
/// and (up to floating-point summation order) associative: the finished
/// report does not depend on how many partitions the runtime chose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Accumulator {
    nan_count: usize,
    inf_count: usize,
    valid_count: usize,
    sum: f64,
    sum_sq: f64,
    min: f64,
    max: f64,
}

impl Accumulator {
    /// The merge identity: zero counts, zero sums, extrema parked at the
    /// ±infinity sentinels that any real observation displaces.
    pub const fn new() -> Self {
        Self {
            nan_count: 0,
            inf_count: 0,
            valid_count: 0,
            sum: 0.0,
            sum_sq: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Classifies one widened element and folds it in. NaN is tested before
    /// Inf; everything else is finite and feeds the moment sums and extrema.
    #[inline]
    pub fn push(&mut self, value: f64) {
        if value.is_nan() {
            self.nan_count += 1;
        } else if value.is_infinite() {
            self.inf_count += 1;
        } else {
            self.valid_count += 1;
            self.sum += value;
            self.sum_sq += value * value;
            if value < self.min {
                self.min = value;
            }
            if value > self.max {
                self.max = value;
            }
        }
    }

    /// Scans one contiguous partition sequentially.
    pub fn scan<T: Element>(values: &[T]) -> Self {
        let mut acc = Self::new();
        for &value in values {
            acc.push(value.widen());
        }
        acc
    }

    /// Combines two partial states.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            nan_count: self.nan_count + other.nan_count,
            inf_count: self.inf_count + other.inf_count,
            valid_count: self.valid_count + other.valid_count,
            sum: self.sum + other.sum,
            sum_sq: self.sum_sq + other.sum_sq,
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Derives the final report. Extrema still sitting at their sentinels
    /// (no valid element was ever observed) are reported as `0.0`, matching
    /// the mean; variance is clamped against cancellation and defined as
    /// zero for fewer than two valid elements.
    pub fn finish(self) -> TensorReport {
        let mean = if self.valid_count > 0 {
            self.sum / self.valid_count as f64
        } else {
            0.0
        };
        let variance = if self.valid_count > 1 {
            (self.sum_sq / self.valid_count as f64 - mean * mean).max(0.0)
        } else {
            0.0
        };
        TensorReport {
            nan_count: self.nan_count,
            inf_count: self.inf_count,
            valid_count: self.valid_count,
            mean,
            variance,
            l2_norm: self.sum_sq.sqrt(),
            min_val: if self.min == f64::INFINITY {
                0.0
            } else {
                self.min
            },
            max_val: if self.max == f64::NEG_INFINITY {
                0.0
            } else {
                self.max
            },
        }
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

fn chunk_size() -> usize {
    tg_config::determinism::config()
        .chunk_size
        .unwrap_or(DEFAULT_CHUNK)
}

fn run_sequential(len: usize) -> bool {
    len <= PAR_MIN_LEN || tg_config::determinism::config().fix_reduction
}

/// Surveys the whole buffer in one pass.
///
/// Classifies every element as NaN, Inf, or valid and summarises the valid
/// subset. Large buffers are partitioned into contiguous chunks on the global
/// rayon pool and the per-chunk accumulators merged afterwards; counts and
/// extrema are bit-exact regardless of partitioning, while the moment sums
/// may differ in the last bits with the summation order. Never fails: empty,
/// all-NaN, and all-Inf buffers all produce well-defined reports.
pub fn analyze<T: Element>(values: &[T]) -> TensorReport {
    if values.is_empty() {
        return TensorReport::empty();
    }

    let acc = if run_sequential(values.len()) {
        Accumulator::scan(values)
    } else {
        values
            .par_chunks(chunk_size())
            .map(Accumulator::scan)
            .reduce(Accumulator::new, |a, b| a.merge(b))
    };

    let report = acc.finish();
    if !report.is_healthy() {
        debug!(
            nan = report.nan_count,
            inf = report.inf_count,
            len = values.len(),
            "audit observed invalid values"
        );
    }
    report
}

/// Cheap probe: true iff any element is NaN or Inf.
///
/// Short-circuits on the first invalid element instead of building a report,
/// so callers can run it far more often than [`analyze`] and only pay for the
/// full survey once something is wrong. Empty buffers are vacuously healthy.
pub fn has_failures<T: Element>(values: &[T]) -> bool {
    if run_sequential(values.len()) {
        values.iter().any(|value| !value.widen().is_finite())
    } else {
        values.par_iter().any(|value| !value.widen().is_finite())
    }
}
