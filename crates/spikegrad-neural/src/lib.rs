// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Spikegrad Neural — Surrogate-Gradient Spike Nonlinearities
//!
//! ALL spike-activation numerics in one place:
//! - **Surrogate**: the seven-member activation family (exact binary step
//!   forward, smooth hand-derived surrogate backward)
//! - **Reference**: the smooth reference functions the surrogates take
//!   their derivatives from
//! - **Activity**: explicit-state spike-count accounting for firing-rate
//!   regularization
//! - **Config**: serde surface for per-layer kind/scale selection
//!
//! A network layer computes a membrane-potential tensor, pushes it through
//! one [`SurrogateActivation`] to obtain spikes, and may route those spikes
//! through [`ActivityRegularization`] before they propagate downstream. The
//! two components never call each other; the enclosing network-assembly
//! layer composes them.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod activity;
pub mod config;
pub mod error;
pub mod reference;
pub mod surrogate;

pub use activity::ActivityRegularization;
pub use config::SurrogateConfig;
pub use error::{NeuralError, Result};
pub use surrogate::{SurrogateActivation, SurrogateKind};
