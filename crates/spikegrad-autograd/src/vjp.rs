// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Custom-gradient (VJP) registration contract.
//!
//! A primitive exposes two independent implementations: one for evaluation
//! and one for its vector-Jacobian product. The forward pass additionally
//! captures a context value that is handed back, opaque to the caller, when
//! the engine later runs the backward pass.

use crate::tensor::{GradTensor, PotentialTensor, SpikeTensor};

/// Context saved by a forward pass for its matching backward pass.
#[derive(Debug, Clone)]
pub enum GradContext {
    /// Raw membrane potential captured at forward time.
    Potential(PotentialTensor),
    /// Nothing saved; the backward rule does not inspect the input.
    Empty,
}

impl GradContext {
    /// Shape of the saved potential, if any.
    pub fn shape(&self) -> Option<&[usize]> {
        match self {
            GradContext::Potential(u) => Some(u.shape()),
            GradContext::Empty => None,
        }
    }
}

/// A primitive with hand-registered forward and backward implementations.
///
/// Object-safe so a differentiation engine can hold registered primitives
/// as `Box<dyn CustomVjp>` in its rule table. Both passes are pure: a
/// primitive must produce bit-identical outputs for identical inputs.
pub trait CustomVjp {
    /// Evaluate the primitive and capture whatever the backward pass needs.
    ///
    /// The output tensor is shaped exactly like the input.
    fn forward(&self, potential: &PotentialTensor) -> (SpikeTensor, GradContext);

    /// Map the upstream gradient to a gradient w.r.t. the forward input.
    ///
    /// `upstream` must be shaped exactly like the forward output; no
    /// broadcasting is performed. Shape agreement is the caller's contract,
    /// checked by debug assertions only.
    fn backward(&self, context: &GradContext, upstream: &GradTensor) -> GradTensor;
}

/// Run one forward/backward cycle in a single call.
///
/// Convenience for engines that do not retain context between passes, and
/// for tests.
pub fn vjp<P: CustomVjp + ?Sized>(
    primitive: &P,
    potential: &PotentialTensor,
    upstream: &GradTensor,
) -> (SpikeTensor, GradTensor) {
    let (spikes, context) = primitive.forward(potential);
    let grad = primitive.backward(&context, upstream);
    (spikes, grad)
}
