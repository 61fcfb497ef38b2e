// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of TensorGuard — Licensed under AGPL-3.0-or-later.

//! Single-pass statistical auditing of flattened tensor buffers.
//!
//! The crate answers two questions about a contiguous run of floating-point
//! values — usually activations or gradients a host runtime has already
//! flattened to one dimension:
//!
//! * [`analyze`] walks the buffer once and produces a [`TensorReport`]
//!   classifying every element as NaN, Inf, or valid, together with the mean,
//!   population variance, L2 norm, and extrema of the valid subset.
//! * [`has_failures`] is the cheap hot-path probe: it only decides whether any
//!   NaN or Inf is present and short-circuits as soon as one is found.
//!
//! Both run on the global rayon pool for large buffers and are pure functions
//! of their input: no allocation is retained, no state survives the call, and
//! no input — empty, all-NaN, all-Inf — is an error.

pub mod audit;
pub mod element;
pub mod report;

pub use audit::{analyze, has_failures, Accumulator};
pub use element::Element;
pub use report::TensorReport;
