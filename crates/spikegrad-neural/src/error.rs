// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for spike-activation construction.

use crate::surrogate::SurrogateKind;

/// Result type for spikegrad-neural operations
pub type Result<T> = core::result::Result<T, NeuralError>;

/// Errors surfaced at construction/configuration time.
///
/// Hot-path contracts (shape and dtype agreement between potentials,
/// spikes, gradients, and accumulator state) are caller obligations checked
/// by debug assertions, never by this enum. Non-finite gradients from
/// extreme scale factors propagate as ordinary NaN/Inf values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NeuralError {
    #[error("invalid scale factor {value} for {kind} surrogate: must be finite and > 0")]
    InvalidScaleFactor { kind: SurrogateKind, value: f32 },
}
