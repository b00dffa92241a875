//! Various types related to walk counting.

/// The adjacency matrix entry type.
///
/// Walk counts are accumulated in this type with wrapping arithmetic.
pub type Weight = i64;

/// The hash type of serialized walk counts.
pub type HashValue = u64;
