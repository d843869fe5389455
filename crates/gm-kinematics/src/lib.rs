// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bone chains for the gm kinematics toolkit.
//!
//! A [`Skeleton`] owns an append-only arena of [`Bone`]s linked into a single
//! linear chain: every bone has at most one child, so the structure is a
//! sequence from the root to the most recently appended bone (the *end*),
//! not a branching tree. Bones are addressed by [`BoneId`] arena indices.
//!
//! Each bone carries a [`gm_math::Vec3`] describing its extension from the
//! parent joint. [`Skeleton::orbit_bone`] applies [`gm_math::Vec3::orbit_shift`]
//! to a bone under the configured [`gm_math::LengthPolicy`].
//!
//! The crate does not skin, blend, or solve inverse kinematics; it provides the
//! ordered chain those layers build on.

mod bone;
mod config;
mod error;
mod skeleton;

pub use bone::{Bone, BoneId};
pub use config::SkeletonConfig;
pub use error::{ConfigError, SkeletonError};
pub use skeleton::{Skeleton, SkeletonState};
