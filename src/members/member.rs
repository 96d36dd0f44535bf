use crate::containers::{Container, ContainerId};

/// A handle to a [MemberRecord] stored in a [MemberRegistry](crate::members::MemberRegistry).
///
/// A default handle doesn't belong to any registry.
#[derive(Default, Debug, Hash, Copy, Clone, Eq, PartialEq)]
pub struct Member {
	pub(crate) index: u32,
	pub(crate) registry_id: u64,
}

/// The data associated with a [Member].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberRecord {
	pub(crate) handle: Member,
	pub(crate) name: String,
	pub(crate) container: Option<ContainerId>,
}

impl MemberRecord {
	#[inline(always)]
	pub fn handle(&self) -> Member {
		self.handle
	}

	#[inline(always)]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The [Container] this member is assigned to, if any.
	#[inline(always)]
	pub fn container(&self) -> Option<ContainerId> {
		self.container
	}

	#[inline(always)]
	pub fn belongs_to(&self, container: &Container) -> bool {
		self.container == Some(container.id())
	}
}
