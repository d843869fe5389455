// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use gm_math::LengthPolicy;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Tunables for a [`crate::Skeleton`].
///
/// Missing JSON fields fall back to [`SkeletonConfig::default`]:
/// ```
/// use gm_kinematics::SkeletonConfig;
/// use gm_math::LengthPolicy;
/// let cfg = SkeletonConfig::from_json(r#"{ "length_policy": "reject" }"#)?;
/// assert_eq!(cfg.length_policy, LengthPolicy::Reject);
/// assert_eq!(cfg.max_bones, None);
/// # Ok::<(), gm_kinematics::ConfigError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkeletonConfig {
    /// Policy for [`crate::Skeleton::orbit_bone`] on zero-length bones.
    pub length_policy: LengthPolicy,
    /// Upper bound enforced by [`crate::Skeleton::try_add_bone`]; `None` is
    /// unbounded.
    pub max_bones: Option<usize>,
}

impl SkeletonConfig {
    /// Returns a copy using `policy`.
    pub fn with_length_policy(mut self, policy: LengthPolicy) -> Self {
        self.length_policy = policy;
        self
    }

    /// Returns a copy bounded to `max` bones.
    pub fn with_max_bones(mut self, max: usize) -> Self {
        self.max_bones = Some(max);
        self
    }

    /// Rejects configs that can never accept a bone.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_bones == Some(0) {
            return Err(ConfigError::Invalid(
                "max_bones must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
