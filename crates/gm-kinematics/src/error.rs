// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use gm_math::MathError;
use thiserror::Error;

use crate::BoneId;

/// Errors from the checked skeleton operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkeletonError {
    /// The id does not address a bone in this skeleton.
    #[error("unknown bone {0}")]
    UnknownBone(BoneId),
    /// The appended bone already links to a child.
    #[error("bone already links to child {0}")]
    AlreadyLinked(BoneId),
    /// `SkeletonConfig::max_bones` would be exceeded.
    #[error("skeleton is full ({max} bones)")]
    CapacityExceeded {
        /// Configured maximum.
        max: usize,
    },
    /// Walking the chain revisited a bone.
    #[error("chain revisits {at}")]
    Cycle {
        /// First bone seen twice.
        at: BoneId,
    },
    /// The chain from the root does not cover every bone or does not stop at
    /// the end bone.
    #[error("chain is broken: expected {expected} linked bones, found {found}")]
    Broken {
        /// Number of bones in the arena.
        expected: usize,
        /// Number of bones reached from the root.
        found: usize,
    },
    /// A length-dependent vector operation was rejected.
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Errors from loading or validating a [`crate::SkeletonConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The config parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    Invalid(String),
}
