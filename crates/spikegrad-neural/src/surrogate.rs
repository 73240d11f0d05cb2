// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Surrogate-Gradient Spike Activations
//!
//! The true activation of a spiking neuron is the binary firing rule
//! `U > 0`, whose derivative is useless to gradient descent. Each member of
//! this family keeps that rule exact in the forward pass and substitutes a
//! smooth, hand-derived derivative in the backward pass:
//!
//! ```text
//! Forward (all kinds):
//!     S = 1.0 where U > 0, else 0.0     (strict inequality)
//!
//! Backward (kind-specific, x = k·U):
//!     dU = G · dApprox(x)               (elementwise, shapes must match)
//! ```
//!
//! | Kind       | Default scale | dApprox(x)            |
//! |------------|---------------|-----------------------|
//! | Tanh       | 1.0           | 1 − tanh²(x)          |
//! | Boxcar     | 0.5           | k · hard_tanh'(x)     |
//! | Triangular | 0.5           | max(0, 1 − \|x\|)     |
//! | Arctan     | 2.0 (k = 1.0) | arctan'(π·x) / π      |
//! | Heaviside  | 25.0          | 1 (straight-through)  |
//! | Sigmoid    | 4.0           | σ(x)·(1 − σ(x))       |
//! | SuperSpike | 25.0          | 1 / (1 + \|x\|)²      |

use std::f32::consts::PI;
use std::fmt;

use ndarray::Zip;
use serde::{Deserialize, Serialize};
use tracing::debug;

use spikegrad_autograd::{CustomVjp, GradContext, GradTensor, PotentialTensor, SpikeTensor};

use crate::error::{NeuralError, Result};
use crate::reference;

/// The seven interchangeable surrogate-gradient kinds.
///
/// The set is closed: callers select one kind per layer and treat them as
/// drop-in replacements for each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurrogateKind {
    Tanh,
    Boxcar,
    Triangular,
    Arctan,
    Heaviside,
    Sigmoid,
    SuperSpike,
}

impl SurrogateKind {
    /// Every kind, in declaration order.
    pub const ALL: [SurrogateKind; 7] = [
        SurrogateKind::Tanh,
        SurrogateKind::Boxcar,
        SurrogateKind::Triangular,
        SurrogateKind::Arctan,
        SurrogateKind::Heaviside,
        SurrogateKind::Sigmoid,
        SurrogateKind::SuperSpike,
    ];

    /// Default steepness for this kind.
    pub fn default_scale(&self) -> f32 {
        match self {
            SurrogateKind::Tanh => 1.0,
            SurrogateKind::Boxcar => 0.5,
            SurrogateKind::Triangular => 0.5,
            SurrogateKind::Arctan => 2.0,
            SurrogateKind::Heaviside => 25.0,
            SurrogateKind::Sigmoid => 4.0,
            SurrogateKind::SuperSpike => 25.0,
        }
    }

    /// Lowercase tag, matching the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            SurrogateKind::Tanh => "tanh",
            SurrogateKind::Boxcar => "boxcar",
            SurrogateKind::Triangular => "triangular",
            SurrogateKind::Arctan => "arctan",
            SurrogateKind::Heaviside => "heaviside",
            SurrogateKind::Sigmoid => "sigmoid",
            SurrogateKind::SuperSpike => "superspike",
        }
    }
}

impl fmt::Display for SurrogateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One surrogate-gradient activation, fixed at construction.
///
/// Constructed once per network layer at model-definition time and reused
/// read-only for every pass. The scale is a constant, never a trainable
/// parameter. `apply` is a pure function of the input and the fixed scale;
/// repeated calls with identical inputs are bit-identical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurrogateActivation {
    kind: SurrogateKind,
    /// Stored steepness. For Arctan this is half the supplied scale factor.
    k: f32,
}

impl SurrogateActivation {
    /// Build with the kind's default scale.
    pub fn new(kind: SurrogateKind) -> Self {
        let k = effective_scale(kind, kind.default_scale());
        debug!(kind = kind.name(), k, "constructed surrogate activation");
        Self { kind, k }
    }

    /// Build with an explicit scale factor.
    ///
    /// The scale must be finite and strictly positive. Arctan stores half
    /// the supplied value; its gradient is evaluated at a π-rescaled,
    /// halved argument.
    pub fn with_scale(kind: SurrogateKind, scale_factor: f32) -> Result<Self> {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return Err(NeuralError::InvalidScaleFactor {
                kind,
                value: scale_factor,
            });
        }
        let k = effective_scale(kind, scale_factor);
        debug!(kind = kind.name(), k, "constructed surrogate activation");
        Ok(Self { kind, k })
    }

    pub fn kind(&self) -> SurrogateKind {
        self.kind
    }

    /// The stored steepness (post-halving for Arctan).
    pub fn scale(&self) -> f32 {
        self.k
    }

    /// Exact firing rule: 1.0 where `U > 0`, else 0.0.
    ///
    /// Identical for every kind; only the backward pass differs. The
    /// inequality is strict, so `U == 0` never spikes.
    pub fn apply(&self, potential: &PotentialTensor) -> SpikeTensor {
        potential.mapv(spike_step)
    }

    /// Surrogate derivative dApprox(k·u) for one element, without the
    /// upstream gradient folded in.
    #[inline(always)]
    fn surrogate_grad(&self, u: f32) -> f32 {
        let x = self.k * u;
        match self.kind {
            SurrogateKind::Tanh => reference::tanh_deriv(x),
            // Boxcar scales its own gradient magnitude by k a second time,
            // unlike every other kind. The asymmetry is kept for parity and
            // pinned by test_boxcar_applies_extra_outer_scale.
            SurrogateKind::Boxcar => self.k * reference::hard_tanh_deriv(x),
            SurrogateKind::Triangular => reference::triangular(x),
            SurrogateKind::Arctan => reference::arctan_deriv(PI * x) / PI,
            // Straight-through; backward short-circuits before reaching
            // here, so this value only matters if a caller hands a saved
            // potential to a Heaviside backward anyway.
            SurrogateKind::Heaviside => 1.0,
            SurrogateKind::Sigmoid => reference::sigmoid_deriv(x),
            SurrogateKind::SuperSpike => reference::soft_sign_deriv(x),
        }
    }
}

#[inline(always)]
fn spike_step(u: f32) -> f32 {
    if u > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Arctan halves the scale it is handed; all other kinds store it as-is.
fn effective_scale(kind: SurrogateKind, scale_factor: f32) -> f32 {
    match kind {
        SurrogateKind::Arctan => scale_factor / 2.0,
        _ => scale_factor,
    }
}

impl CustomVjp for SurrogateActivation {
    fn forward(&self, potential: &PotentialTensor) -> (SpikeTensor, GradContext) {
        let spikes = self.apply(potential);
        let context = match self.kind {
            // Straight-through estimator: backward never reads the input
            SurrogateKind::Heaviside => GradContext::Empty,
            _ => GradContext::Potential(potential.clone()),
        };
        (spikes, context)
    }

    fn backward(&self, context: &GradContext, upstream: &GradTensor) -> GradTensor {
        match context {
            GradContext::Empty => {
                debug_assert_eq!(
                    self.kind,
                    SurrogateKind::Heaviside,
                    "empty context is only produced by the Heaviside kind"
                );
                upstream.clone()
            }
            GradContext::Potential(u) => {
                debug_assert_eq!(
                    u.shape(),
                    upstream.shape(),
                    "upstream gradient shape must match the saved potential"
                );
                Zip::from(upstream)
                    .and(u)
                    .par_map_collect(|&g, &u| g * self.surrogate_grad(u))
            }
        }
    }
}
