use crate::members::{MemberRecord, MemberRegistry};
use std::sync::atomic::{AtomicU64, Ordering};
use std::hash::{Hash, Hasher};
use std::fmt;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// The identity of a [Container].
///
/// Identifiers are unique for the lifetime of the process,
/// so two containers sharing a name are still distinct relationship targets.
#[derive(Debug, Hash, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct ContainerId(u64);

impl ContainerId {
	fn next() -> Self {
		Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
	}

	pub fn get(self) -> u64 {
		self.0
	}
}

impl nohash_hasher::IsEnabled for ContainerId {}

impl fmt::Display for ContainerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// A named entity that logically owns zero or more [members](crate::members::Member).
///
/// Cloning a [Container] yields another handle to the same container:
/// equality and hashing only look at its [ContainerId].
#[derive(Clone, Debug)]
pub struct Container {
	id: ContainerId,
	name: String,
}

impl Container {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			id: ContainerId::next(),
			name: name.into(),
		}
	}

	#[inline(always)]
	pub fn id(&self) -> ContainerId {
		self.id
	}

	#[inline(always)]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Collects the members of this [Container] from the provided [registry](MemberRegistry),
	/// in the order they were created.
	pub fn members<'r>(&self, registry: &'r MemberRegistry) -> Vec<&'r MemberRecord> {
		registry.members_of(self)
	}
}

impl PartialEq for Container {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for Container {}

impl Hash for Container {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}
