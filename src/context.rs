use crate::members::MemberRegistry;
use crate::containers::Container;
use crate::config::RegistryConfig;
use std::ops::{Deref, DerefMut};

/// Owns the [MemberRegistry] for a program and hands out [Containers](Container).
///
/// Create one at start-up and pass it by reference to whatever creates members.
/// It dereferences to its [MemberRegistry], so every registry operation is available on it.
pub struct RelationContext {
	registry: MemberRegistry,
}

impl RelationContext {
	pub fn new() -> Self {
		Self::with_config(RegistryConfig::default())
	}

	pub fn with_config(config: RegistryConfig) -> Self {
		Self {
			registry: MemberRegistry::with_config(config),
		}
	}

	/// Creates a [Container] with a fresh identity.
	pub fn create_container(&self, name: impl Into<String>) -> Container {
		let container = Container::new(name);
		tracing::trace!(container = %container.id(), name = container.name(), "created container");
		container
	}

	pub fn registry(&self) -> &MemberRegistry {
		&self.registry
	}

	pub fn into_registry(self) -> MemberRegistry {
		self.registry
	}
}

impl Default for RelationContext {
	fn default() -> Self {
		Self::new()
	}
}

impl Deref for RelationContext {
	type Target = MemberRegistry;

	#[inline(always)]
	fn deref(&self) -> &Self::Target {
		&self.registry
	}
}

impl DerefMut for RelationContext {
	#[inline(always)]
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.registry
	}
}
