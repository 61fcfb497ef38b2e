// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of TensorGuard — Licensed under AGPL-3.0-or-later.

//! Environment-driven runtime configuration shared across TensorGuard crates.

pub mod determinism;
pub mod tracing;
