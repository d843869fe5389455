// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use gm_math::{Point, Vec3};
use tracing::{debug, instrument, trace, warn};

use crate::{Bone, BoneId, SkeletonConfig, SkeletonError};

/// Lifecycle of a [`Skeleton`]. There is no way back to `Empty`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SkeletonState {
    /// No bone has been appended yet.
    Empty,
    /// At least one bone; `root` and `end` are set.
    NonEmpty,
}

/// Append-only linear chain of bones.
///
/// The skeleton owns its bones in an arena; `root` is the first appended bone
/// and `end` the most recent one. Appending links the new bone as the child
/// of the current end, so walking `child()` links from the root visits every
/// bone in append order.
///
/// A `Skeleton` is not synchronized. Mutation takes `&mut self`; callers
/// sharing one across threads must serialize access themselves.
///
/// # Examples
/// ```
/// use gm_kinematics::{Bone, Skeleton};
/// use gm_math::Vec3;
/// let mut skeleton = Skeleton::new();
/// let a = skeleton.add_bone(Bone::new(Vec3::UNIT_Z));
/// let b = skeleton.add_bone(Bone::new(Vec3::UNIT_X));
/// assert_eq!(skeleton.all_bones(), vec![a, b]);
/// assert_eq!(skeleton.end(), Some(b));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    bones: Vec<Bone>,
    root: Option<BoneId>,
    end: Option<BoneId>,
    config: SkeletonConfig,
}

impl Skeleton {
    /// Creates an empty skeleton with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty skeleton using `config`.
    pub fn with_config(config: SkeletonConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &SkeletonConfig {
        &self.config
    }

    /// First appended bone.
    pub fn root(&self) -> Option<BoneId> {
        self.root
    }

    /// Most recently appended bone (the chain tail).
    pub fn end(&self) -> Option<BoneId> {
        self.end
    }

    /// Number of bones appended so far.
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    /// Returns `true` before the first append.
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SkeletonState {
        if self.root.is_some() {
            SkeletonState::NonEmpty
        } else {
            SkeletonState::Empty
        }
    }

    /// Looks up a bone.
    pub fn bone(&self, id: BoneId) -> Option<&Bone> {
        self.bones.get(id.index())
    }

    /// Looks up a bone for mutation.
    ///
    /// Changing the bone's child link through this handle can break the
    /// chain; [`Skeleton::validate`] reports the damage.
    pub fn bone_mut(&mut self, id: BoneId) -> Option<&mut Bone> {
        self.bones.get_mut(id.index())
    }

    /// Appends `bone` to the chain and returns its id.
    ///
    /// The first bone becomes both root and end. Later bones are linked as
    /// the child of the current end and then become the end. The bone's own
    /// child link is kept as-is, so appending a bone that already links
    /// somewhere makes the chain ill-formed; use [`Skeleton::try_add_bone`]
    /// to reject that.
    #[instrument(level = "debug", skip(self, bone))]
    pub fn add_bone(&mut self, bone: Bone) -> BoneId {
        let id = BoneId::new(self.bones.len());
        self.bones.push(bone);
        match self.end.and_then(|end| self.bones.get_mut(end.index())) {
            Some(tail) => tail.add_child(id),
            None => self.root = Some(id),
        }
        self.end = Some(id);
        debug!(bone = %id, "bone appended");
        id
    }

    /// Checked form of [`Skeleton::add_bone`].
    ///
    /// Fails with [`SkeletonError::CapacityExceeded`] when the configured
    /// `max_bones` is reached and with [`SkeletonError::AlreadyLinked`] when
    /// `bone` already has a child link.
    pub fn try_add_bone(&mut self, bone: Bone) -> Result<BoneId, SkeletonError> {
        if let Some(max) = self.config.max_bones {
            if self.bones.len() >= max {
                warn!(max, "bone rejected: skeleton is full");
                return Err(SkeletonError::CapacityExceeded { max });
            }
        }
        if let Some(child) = bone.child() {
            warn!(child = %child, "bone rejected: already linked");
            return Err(SkeletonError::AlreadyLinked(child));
        }
        Ok(self.add_bone(bone))
    }

    /// Snapshot of the chain from root to end, root first.
    ///
    /// The returned list is detached from the skeleton: later appends do not
    /// show up in it. Traversal visits at most [`Skeleton::len`] bones, so a
    /// cycle introduced by misuse ends the walk (with a warning) instead of
    /// looping forever.
    pub fn all_bones(&self) -> Vec<BoneId> {
        let mut result = Vec::with_capacity(self.bones.len());
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let Some(bone) = self.bones.get(id.index()) else {
                warn!(at = %id, "chain links to a missing bone; traversal truncated");
                break;
            };
            if result.len() == self.bones.len() {
                warn!(at = %id, "chain cycle detected; traversal truncated");
                break;
            }
            result.push(id);
            cursor = bone.child();
        }
        trace!(count = result.len(), "chain snapshot");
        result
    }

    /// Checks the chain invariant: the walk from the root reaches every bone
    /// exactly once and stops at the end bone.
    pub fn validate(&self) -> Result<(), SkeletonError> {
        let mut found = 0;
        let mut last = None;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let bone = self.bone(id).ok_or(SkeletonError::UnknownBone(id))?;
            if found == self.bones.len() {
                return Err(SkeletonError::Cycle { at: id });
            }
            found += 1;
            last = Some(id);
            cursor = bone.child();
        }
        if found != self.bones.len() || last != self.end {
            return Err(SkeletonError::Broken {
                expected: self.bones.len(),
                found,
            });
        }
        Ok(())
    }

    /// Applies [`Vec3::orbit_shift`] to the bone's vector under the
    /// configured length policy and returns the new vector.
    ///
    /// On error the bone is left unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn orbit_bone(&mut self, id: BoneId, shift: Point) -> Result<Vec3, SkeletonError> {
        let policy = self.config.length_policy;
        let bone = self
            .bones
            .get_mut(id.index())
            .ok_or(SkeletonError::UnknownBone(id))?;
        let shifted = bone.vector().try_orbit_shifted(shift, policy)?;
        bone.set_vector(shifted);
        Ok(shifted)
    }
}
