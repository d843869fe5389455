// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use gm_math::Vec3;

/// Index of a bone inside a [`crate::Skeleton`] arena.
///
/// Ids are handed out by [`crate::Skeleton::add_bone`] and stay valid for the
/// lifetime of that skeleton; they carry no meaning for other skeletons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoneId(usize);

impl BoneId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the bone in append order (root is `0`).
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bone#{}", self.0)
    }
}

/// A joint in a linear chain: its extension vector plus at most one child.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Bone {
    vector: Vec3,
    child: Option<BoneId>,
}

impl Bone {
    /// Creates an unlinked bone extending along `vector`.
    pub const fn new(vector: Vec3) -> Self {
        Self {
            vector,
            child: None,
        }
    }

    /// Extension from the parent joint.
    pub const fn vector(&self) -> Vec3 {
        self.vector
    }

    /// Replaces the extension vector.
    pub fn set_vector(&mut self, vector: Vec3) {
        self.vector = vector;
    }

    /// Mutable access to the extension vector, for the in-place `Vec3`
    /// operations.
    pub fn vector_mut(&mut self) -> &mut Vec3 {
        &mut self.vector
    }

    /// Links `child` as the single successor, overwriting any previous link.
    pub fn add_child(&mut self, child: BoneId) {
        self.child = Some(child);
    }

    /// The single successor, or `None` at the end of the chain.
    pub const fn child(&self) -> Option<BoneId> {
        self.child
    }
}
