// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-layer activation configuration.
//!
//! Hosts select a surrogate kind and optional steepness per layer from
//! genome/config files; this module is the serde surface for that
//! selection. Validation happens in `build`, so a config deserialized from
//! untrusted input cannot construct an activation with a bad scale.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::surrogate::{SurrogateActivation, SurrogateKind};

/// Declarative description of one surrogate activation.
///
/// ```
/// use spikegrad_neural::{SurrogateConfig, SurrogateKind};
///
/// let config: SurrogateConfig =
///     serde_json::from_str(r#"{ "kind": "superspike" }"#).unwrap();
/// let act = config.build().unwrap();
/// assert_eq!(act.kind(), SurrogateKind::SuperSpike);
/// assert_eq!(act.scale(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurrogateConfig {
    /// Which family member to instantiate.
    pub kind: SurrogateKind,
    /// Steepness override; the kind's default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_factor: Option<f32>,
}

impl SurrogateConfig {
    pub fn new(kind: SurrogateKind) -> Self {
        Self {
            kind,
            scale_factor: None,
        }
    }

    pub fn with_scale(kind: SurrogateKind, scale_factor: f32) -> Self {
        Self {
            kind,
            scale_factor: Some(scale_factor),
        }
    }

    /// Validate and build the activation this config describes.
    pub fn build(&self) -> Result<SurrogateActivation> {
        match self.scale_factor {
            Some(scale) => SurrogateActivation::with_scale(self.kind, scale),
            None => Ok(SurrogateActivation::new(self.kind)),
        }
    }
}
