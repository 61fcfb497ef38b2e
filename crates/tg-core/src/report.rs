// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of TensorGuard — Licensed under AGPL-3.0-or-later.

use serde::{Deserialize, Serialize};

/// Summary statistics for one audited buffer.
///
/// Every element of the input contributes to exactly one of the three counts,
/// so `nan_count + inf_count + valid_count` always equals the buffer length.
/// The derived fields (`mean`, `variance`, `l2_norm`, extrema) cover the valid
/// subset only; NaN and Inf elements are counted but never accumulated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TensorReport {
    pub nan_count: usize,
    pub inf_count: usize,
    pub valid_count: usize,
    /// Arithmetic mean of the valid elements, `0.0` when none exist.
    pub mean: f64,
    /// Population variance `E[x²] − E[x]²` of the valid elements, clamped to
    /// zero when floating-point cancellation would drive it negative. `0.0`
    /// when fewer than two valid elements exist.
    pub variance: f64,
    /// Euclidean magnitude `sqrt(Σ x²)` over the valid elements.
    pub l2_norm: f64,
    /// Smallest valid element, `0.0` when no valid element was observed.
    pub min_val: f64,
    /// Largest valid element, `0.0` when no valid element was observed.
    pub max_val: f64,
}

impl TensorReport {
    /// The all-zero report returned for empty buffers. Also the value an
    /// [`Accumulator`](crate::Accumulator) finishes to when it never absorbed
    /// an element, so the degenerate paths share one definition.
    pub const fn empty() -> Self {
        Self {
            nan_count: 0,
            inf_count: 0,
            valid_count: 0,
            mean: 0.0,
            variance: 0.0,
            l2_norm: 0.0,
            min_val: 0.0,
            max_val: 0.0,
        }
    }

    /// True when the audited buffer contained no NaN or Inf element.
    #[inline]
    pub fn is_healthy(&self) -> bool {
        self.nan_count == 0 && self.inf_count == 0
    }

    /// Number of elements the report covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.nan_count + self.inf_count + self.valid_count
    }

    /// True when the report was produced from an empty buffer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TensorReport {
    fn default() -> Self {
        Self::empty()
    }
}
