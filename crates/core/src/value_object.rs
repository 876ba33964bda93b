//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects (`Money`, for instance) are immutable and compared by their
/// attribute values. To "change" one, build a new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
