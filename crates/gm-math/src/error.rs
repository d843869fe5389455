// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Failure reported by the checked (`try_*`) vector operations.
///
/// Only produced under [`crate::LengthPolicy::Reject`]; the unchecked
/// operations never report and instead yield non-finite components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// The operation divides by the vector length and the length is zero.
    #[error("length-dependent operation on a zero-length vector")]
    ZeroLength,
    /// A component or the computed length is infinite or NaN.
    #[error("vector has a non-finite component or length")]
    NonFinite,
}
