use crate::containers::{Container, ContainerId};
use crate::members::{Member, MemberRecord, MemberRegistry};
use crate::config::RegistryConfig;
use crate::error::RegistryError;
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

/// A [MemberRegistry] that can be shared between threads.
///
/// Reads return owned copies, since a borrowed view can't outlive the lock.
/// Use [read](Self::read) to borrow the registry directly instead.
#[derive(Clone, Default)]
pub struct SharedRegistry {
	inner: Arc<RwLock<MemberRegistry>>,
}

impl SharedRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(config: RegistryConfig) -> Self {
		Self::from(MemberRegistry::with_config(config))
	}

	pub fn create_member(&self, name: impl Into<String>) -> Member {
		self.inner.write().create_member(name)
	}

	pub fn create_member_in(&self, name: impl Into<String>, container: &Container) -> Member {
		self.inner.write().create_member_in(name, container)
	}

	pub fn assign(&self, member: Member, container: Option<&Container>) -> Result<Option<ContainerId>, RegistryError> {
		self.inner.write().assign(member, container)
	}

	pub fn get(&self, member: Member) -> Result<MemberRecord, RegistryError> {
		self.inner.read().get(member).cloned()
	}

	pub fn all(&self) -> Vec<MemberRecord> {
		self.inner.read().all().to_vec()
	}

	pub fn members_of(&self, container: &Container) -> Vec<MemberRecord> {
		let registry = self.inner.read();
		registry.members_of(container).into_iter().cloned().collect()
	}

	pub fn len(&self) -> usize {
		self.inner.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.read().is_empty()
	}

	/// Locks the registry for reading.
	/// Writers are blocked until the guard is dropped.
	pub fn read(&self) -> RwLockReadGuard<'_, MemberRegistry> {
		self.inner.read()
	}
}

impl From<MemberRegistry> for SharedRegistry {
	fn from(registry: MemberRegistry) -> Self {
		Self {
			inner: Arc::new(RwLock::new(registry)),
		}
	}
}
