// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Spikegrad Autograd Protocol
//!
//! The seam between spike primitives and the reverse-mode differentiation
//! engine that consumes them:
//! - **Tensor**: shared tensor aliases (`ndarray` dynamic-dim arrays)
//! - **Vjp**: the custom forward/backward registration contract
//!
//! The derivative a differentiation engine would derive for a binary firing
//! rule is zero almost everywhere and undefined at the threshold, so spike
//! primitives register an explicit forward/backward pair through
//! [`CustomVjp`] instead of relying on automatic rules.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod tensor;
pub mod vjp;

pub use tensor::{GradTensor, PotentialTensor, SpikeTensor};
pub use vjp::{vjp, CustomVjp, GradContext};
