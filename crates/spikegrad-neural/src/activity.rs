// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Spike-count accounting for activity regularization.
//!
//! Training objectives that penalize excess firing need a per-neuron
//! running sum of emitted spikes. The accumulator here is threaded
//! explicitly through each call instead of being owned by the component, so
//! the activation path stays pure and batches/rollouts can run in parallel
//! without shared mutable storage.

use ndarray::{ArrayD, IxDyn};
use tracing::debug;

use spikegrad_autograd::SpikeTensor;

/// Identity passthrough that adds every spike tensor it sees into a
/// caller-held accumulator.
///
/// The caller allocates the zero state (see
/// [`zero_state`](ActivityRegularization::zero_state)), feeds each returned
/// state into the next `track` call of the same rollout, and resets at
/// rollout boundaries by starting from a fresh zero state. Skipping a call
/// or rethreading a stale state breaks the running-sum semantics.
///
/// Polymorphic over any binary-valued spike tensor; it never knows which
/// surrogate kind produced its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRegularization {
    name: String,
}

impl ActivityRegularization {
    pub const DEFAULT_NAME: &'static str = "act_reg";

    pub fn new() -> Self {
        Self::with_name(Self::DEFAULT_NAME)
    }

    /// Build with an explicit identifier, for hosts tracking several
    /// accumulators.
    pub fn with_name(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!(name = %name, "constructed activity regularizer");
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Zero-valued accumulator for the given spike-tensor shape.
    ///
    /// Shape and dtype must match every spike tensor later passed through
    /// this instance.
    pub fn zero_state(&self, shape: &[usize]) -> SpikeTensor {
        ArrayD::zeros(IxDyn(shape))
    }

    /// Pass spikes through unchanged and fold them into the running count.
    ///
    /// Returns `(spikes, state + spikes)`. `state` must be shaped exactly
    /// like `spikes`; the caller owns initialization and sequencing, and a
    /// mismatch is a caller bug rather than a runtime error.
    pub fn track(
        &self,
        spikes: &SpikeTensor,
        state: &SpikeTensor,
    ) -> (SpikeTensor, SpikeTensor) {
        debug_assert_eq!(
            spikes.shape(),
            state.shape(),
            "spike_count state shape must match the spike tensor"
        );
        (spikes.clone(), state + spikes)
    }
}

impl Default for ActivityRegularization {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_track_is_identity_on_spikes() {
        let reg = ActivityRegularization::new();
        let spikes = array![1.0_f32, 0.0, 1.0].into_dyn();
        let state = reg.zero_state(spikes.shape());

        let (out, _) = reg.track(&spikes, &state);
        assert_eq!(out, spikes);
    }

    #[test]
    fn test_running_sum_over_rollout() {
        let reg = ActivityRegularization::with_name("hidden_1");
        let steps = [
            array![1.0_f32, 0.0, 1.0].into_dyn(),
            array![0.0_f32, 0.0, 1.0].into_dyn(),
            array![1.0_f32, 1.0, 1.0].into_dyn(),
        ];

        let mut state = reg.zero_state(&[3]);
        for spikes in &steps {
            let prev = state.clone();
            let (_, next) = reg.track(spikes, &state);
            // Monotonic per element between resets
            for (p, n) in prev.iter().zip(next.iter()) {
                assert!(n >= p);
            }
            state = next;
        }
        assert_eq!(state, array![2.0_f32, 1.0, 3.0].into_dyn());
    }

    #[test]
    fn test_reset_starts_a_fresh_sum() {
        let reg = ActivityRegularization::new();
        let spikes = array![1.0_f32, 1.0].into_dyn();

        let (_, state) = reg.track(&spikes, &reg.zero_state(&[2]));
        assert_eq!(state, array![1.0_f32, 1.0].into_dyn());

        // New rollout: caller rethreads a fresh zero state
        let (_, state) = reg.track(&spikes, &reg.zero_state(&[2]));
        assert_eq!(state, array![1.0_f32, 1.0].into_dyn());
    }

    #[test]
    fn test_zero_state_shape_and_dtype() {
        let reg = ActivityRegularization::new();
        let state = reg.zero_state(&[2, 4]);
        assert_eq!(state.shape(), &[2, 4]);
        assert!(state.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_names() {
        assert_eq!(ActivityRegularization::new().name(), "act_reg");
        assert_eq!(ActivityRegularization::with_name("l2").name(), "l2");
    }
}
