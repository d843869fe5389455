// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// How checked vector operations treat degenerate lengths.
///
/// `Propagate` keeps the behaviour of the unchecked operations: a zero-length
/// receiver silently produces infinities/NaNs that flow through later
/// arithmetic. `Reject` reports [`crate::MathError`] instead.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LengthPolicy {
    /// Never fail; non-finite results propagate.
    #[default]
    Propagate,
    /// Fail with `ZeroLength`/`NonFinite` before dividing.
    Reject,
}

impl LengthPolicy {
    /// Returns `true` when degenerate inputs are reported as errors.
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Reject)
    }
}
