// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! End-to-end scenarios across the umbrella surface: a layer pass through a
//! surrogate activation, spike accounting over a rollout, and config-driven
//! construction.

use ndarray::{array, ArrayD, IxDyn};
use spikegrad::{
    vjp, ActivityRegularization, SurrogateActivation, SurrogateConfig, SurrogateKind,
};

#[test]
fn test_sigmoid_layer_forward_and_backward() {
    // σ(4·1.0) = 0.98201..., so the surrogate gradient is ≈ 0.017663
    let act = SurrogateActivation::new(SurrogateKind::Sigmoid);
    let membrane = array![1.0_f32].into_dyn();
    let upstream = array![1.0_f32].into_dyn();

    let (spikes, grad) = vjp(&act, &membrane, &upstream);
    assert_eq!(spikes, array![1.0_f32].into_dyn());
    assert!((grad[[0]] - 0.0176627).abs() < 1e-5, "grad = {}", grad[[0]]);
}

#[test]
fn test_rollout_with_activity_accounting() {
    // Three timesteps through one SuperSpike layer of four neurons, with
    // the spike accumulator threaded across steps the way a sequential
    // unroll would.
    let act = SurrogateActivation::new(SurrogateKind::SuperSpike);
    let reg = ActivityRegularization::with_name("hidden");

    let timesteps = [
        array![0.4_f32, -0.2, 0.0, 1.1].into_dyn(),
        array![-0.4_f32, 0.6, 0.3, 0.9].into_dyn(),
        array![0.1_f32, -0.8, -0.1, 2.0].into_dyn(),
    ];

    let mut state = reg.zero_state(&[4]);
    let mut downstream = Vec::new();
    for membrane in &timesteps {
        let spikes = act.apply(membrane);
        let (passed, next) = reg.track(&spikes, &state);
        assert_eq!(passed, spikes, "track must not alter the spikes");
        state = next;
        downstream.push(passed);
    }

    // Per-neuron spike totals over the rollout
    assert_eq!(state, array![2.0_f32, 1.0, 1.0, 3.0].into_dyn());
    // Intermediate tensors kept the binary alphabet
    for spikes in &downstream {
        assert!(spikes.iter().all(|&s| s == 0.0 || s == 1.0));
    }
}

#[test]
fn test_batched_two_level_shape() {
    // [batch, neurons] layout: gradients come back per element with no
    // broadcasting or reduction.
    let act = SurrogateActivation::new(SurrogateKind::Tanh);
    let membrane = array![[0.5_f32, -0.5, 2.0], [0.0, 1.5, -2.0]].into_dyn();
    let upstream = ArrayD::from_elem(IxDyn(&[2, 3]), 1.0_f32);

    let (spikes, grad) = vjp(&act, &membrane, &upstream);
    assert_eq!(spikes, array![[1.0_f32, 0.0, 1.0], [0.0, 1.0, 0.0]].into_dyn());
    assert_eq!(grad.shape(), &[2, 3]);
    // tanh'(0) = 1 is the peak; every other entry is strictly below it
    assert!((grad[[1, 0]] - 1.0).abs() < 1e-7);
    for (idx, &v) in grad.indexed_iter() {
        if idx[0] == 1 && idx[1] == 0 {
            continue;
        }
        assert!(v < 1.0);
    }
}

#[test]
fn test_layers_built_from_config() {
    let genome = r#"[
        { "kind": "heaviside" },
        { "kind": "sigmoid", "scale_factor": 2.0 },
        { "kind": "triangular" }
    ]"#;
    let configs: Vec<SurrogateConfig> = serde_json::from_str(genome).unwrap();
    let layers: Vec<SurrogateActivation> =
        configs.iter().map(|c| c.build().unwrap()).collect();

    assert_eq!(layers[0].kind(), SurrogateKind::Heaviside);
    assert_eq!(layers[1].scale(), 2.0);
    assert_eq!(layers[2].scale(), 0.5);

    // Heaviside layer passes the upstream gradient through untouched
    let membrane = array![0.2_f32, -0.2].into_dyn();
    let upstream = array![3.0_f32, -4.0].into_dyn();
    let (_, grad) = vjp(&layers[0], &membrane, &upstream);
    assert_eq!(grad, upstream);
}

#[test]
fn test_repeated_rollouts_are_independent() {
    let act = SurrogateActivation::new(SurrogateKind::Boxcar);
    let reg = ActivityRegularization::new();
    let membrane = array![0.5_f32, -0.5].into_dyn();

    let run = || {
        let spikes = act.apply(&membrane);
        let (_, state) = reg.track(&spikes, &reg.zero_state(&[2]));
        state
    };
    // Separate rollouts start from separate zero states and do not bleed
    // into each other.
    assert_eq!(run(), run());
    assert_eq!(run(), array![1.0_f32, 0.0].into_dyn());
}
