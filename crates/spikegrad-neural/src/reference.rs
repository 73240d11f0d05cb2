// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Smooth reference nonlinearities and their exact derivatives.
//!
//! Every surrogate backward rule is the true derivative of one of these
//! references evaluated at a scaled argument, not a loose "smoothed step".
//! The precise derivative shape determines training dynamics, so each
//! derivative is expressed through its reference's own value wherever the
//! math allows (e.g. sigmoid' from the sigmoid value) and finite-difference
//! checked in tests.

/// Logistic sigmoid: σ(x) = 1 / (1 + e^(-x)).
#[inline(always)]
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// σ'(x) = σ(x)·(1 − σ(x)); bounded in (0, 0.25], maximum at 0.
#[inline(always)]
pub fn sigmoid_deriv(x: f32) -> f32 {
    let s = sigmoid(x);
    s * (1.0 - s)
}

/// tanh'(x) = 1 − tanh²(x).
#[inline(always)]
pub fn tanh_deriv(x: f32) -> f32 {
    let t = x.tanh();
    1.0 - t * t
}

/// Hard-clamped linear: x clamped to [−1, 1].
#[inline(always)]
pub fn hard_tanh(x: f32) -> f32 {
    x.clamp(-1.0, 1.0)
}

/// hard_tanh'(x): 1 on the linear segment [−1, 1], 0 on the clamped tails.
///
/// The closed endpoints follow branch selection on the clamped-linear
/// reference: at |x| = 1 the linear branch is the one evaluated.
#[inline(always)]
pub fn hard_tanh_deriv(x: f32) -> f32 {
    if (-1.0..=1.0).contains(&x) {
        1.0
    } else {
        0.0
    }
}

/// arctan'(x) = 1 / (1 + x²).
#[inline(always)]
pub fn arctan_deriv(x: f32) -> f32 {
    1.0 / (1.0 + x * x)
}

/// Soft-sign: x / (1 + |x|). Fast rational approximation to the sigmoid's
/// shape (SuperSpike, Zenke & Ganguli 2018).
#[inline(always)]
pub fn soft_sign(x: f32) -> f32 {
    x / (1.0 + x.abs())
}

/// soft_sign'(x) = 1 / (1 + |x|)².
#[inline(always)]
pub fn soft_sign_deriv(x: f32) -> f32 {
    let d = 1.0 + x.abs();
    1.0 / (d * d)
}

/// Triangular pulse: max(0, 1 − |x|). Compact support on [−1, 1]
/// (Esser et al. 2016).
#[inline(always)]
pub fn triangular(x: f32) -> f32 {
    (1.0 - x.abs()).max(0.0)
}
