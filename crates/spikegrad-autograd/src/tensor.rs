// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Tensor aliases shared across the workspace.
//!
//! All spike numerics run on dynamic-dimension `f32` arrays so the same
//! primitive handles `[batch, neurons]` and `[batch, time, neurons]` layouts
//! without monomorphizing per rank.

use ndarray::ArrayD;

/// Membrane potential tensor, arbitrary shape.
pub type PotentialTensor = ArrayD<f32>;

/// Spike tensor: shape-matched to the potential it was derived from,
/// holding only the values 0.0 and 1.0.
///
/// Kept floating (not boolean) so spikes compose arithmetically with
/// downstream layers. The binary alphabet is exact in any float width, so
/// hosts targeting memory-bound accelerators may down-cast to a
/// reduced-precision dtype at the layer boundary without loss.
pub type SpikeTensor = ArrayD<f32>;

/// Gradient tensor flowing backward through a primitive.
pub type GradTensor = ArrayD<f32>;
