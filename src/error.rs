use thiserror::Error;

/// Errors returned when a [`Member`](crate::members::Member) handle can't be resolved.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
	/// The handle was issued by a different registry.
	#[error("member belongs to registry {registry}, not registry {expected}")]
	ForeignMember { registry: u64, expected: u64 },

	/// The handle points past the end of the registry.
	#[error("member index {index} is out of bounds for a registry of {len} members")]
	UnknownMember { index: u32, len: usize },
}
