// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Spikegrad — Surrogate-Gradient Spike Activations
//!
//! Differentiable approximations to the binary firing rule of a spiking
//! neuron, for networks trained by reverse-mode gradient descent. The
//! forward pass emits the exact step (`U > 0`); the backward pass
//! substitutes a smooth, hand-derived surrogate registered through an
//! explicit forward/backward (VJP) pair.
//!
//! ## Components
//!
//! - **[`SurrogateActivation`]**: seven interchangeable nonlinearity kinds
//!   (Tanh, Boxcar, Triangular, Arctan, Heaviside, Sigmoid, SuperSpike)
//! - **[`ActivityRegularization`]**: explicit-state spike-count accounting
//!   for firing-rate penalties
//! - **[`CustomVjp`]**: the registration contract a differentiation engine
//!   consumes
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::array;
//! use spikegrad::{vjp, SurrogateActivation, SurrogateKind};
//!
//! let act = SurrogateActivation::new(SurrogateKind::Sigmoid);
//!
//! let membrane = array![-0.5_f32, 0.0, 1.0].into_dyn();
//! let spikes = act.apply(&membrane);
//! assert_eq!(spikes, array![0.0_f32, 0.0, 1.0].into_dyn());
//!
//! // One forward/backward cycle with an upstream gradient of ones
//! let upstream = membrane.mapv(|_| 1.0);
//! let (_, grad) = vjp(&act, &membrane, &upstream);
//! assert_eq!(grad.shape(), membrane.shape());
//! ```
//!
//! Selecting which kind and scale to instantiate per layer, wiring the
//! primitives into a network, and owning/resetting accumulator state are
//! the enclosing assembly layer's responsibilities.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use spikegrad_autograd as autograd;
pub use spikegrad_neural as neural;

// Re-export the working surface
pub use spikegrad_autograd::{
    vjp, CustomVjp, GradContext, GradTensor, PotentialTensor, SpikeTensor,
};
pub use spikegrad_neural::{
    ActivityRegularization, NeuralError, SurrogateActivation, SurrogateConfig, SurrogateKind,
};
