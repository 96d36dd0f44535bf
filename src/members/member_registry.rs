use crate::containers::{Container, ContainerId};
use crate::members::{Member, MemberRecord};
use crate::config::RegistryConfig;
use crate::error::RegistryError;
use nohash_hasher::BuildNoHashHasher;
use std::sync::atomic::{AtomicU64, Ordering};
use std::collections::HashMap;
use rayon::prelude::*;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// [Members](Member) grouped by the [Container] they are assigned to.
pub type ContainerMap<'r> = HashMap<ContainerId, Vec<&'r MemberRecord>, BuildNoHashHasher<ContainerId>>;

/// An append-only record of every [Member] created through it, in creation order.
///
/// [Containers](Container) don't store their members;
/// every relationship query is a fresh scan over this registry.
#[derive(Debug)]
pub struct MemberRegistry {
	id: u64,
	config: RegistryConfig,
	records: Vec<MemberRecord>,
}

impl MemberRegistry {
	pub fn new() -> Self {
		Self::with_config(RegistryConfig::default())
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self::with_config(RegistryConfig::default().with_capacity(capacity))
	}

	pub fn with_config(config: RegistryConfig) -> Self {
		Self {
			id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
			config,
			records: Vec::with_capacity(config.initial_capacity),
		}
	}

	#[inline(always)]
	pub fn id(&self) -> u64 {
		self.id
	}

	#[inline(always)]
	pub fn config(&self) -> &RegistryConfig {
		&self.config
	}

	/// Creates a new [Member] with no [Container] and records it.
	///
	/// # Panics
	/// Panics if the registry already holds `u32::MAX` members.
	pub fn create_member(&mut self, name: impl Into<String>) -> Member {
		self.register(name.into(), None)
	}

	/// Creates a new [Member] already assigned to the specified [Container].
	pub fn create_member_in(&mut self, name: impl Into<String>, container: &Container) -> Member {
		self.register(name.into(), Some(container.id()))
	}

	/// Assigns a [Member] to a [Container], or clears the assignment when `container` is `None`.
	/// Returns the previous assignment.
	pub fn assign(
		&mut self, member: Member, container: Option<&Container>,
	) -> Result<Option<ContainerId>, RegistryError> {
		let index = self.resolve(member)?;
		let record = &mut self.records[index];
		let target = container.map(Container::id);
		let previous = std::mem::replace(&mut record.container, target);

		tracing::debug!(
			registry = self.id,
			member = %record.name,
			from = ?previous,
			to = ?target,
			"assigned member"
		);

		Ok(previous)
	}

	/// Gets the [MemberRecord] behind a [Member] handle.
	pub fn get(&self, member: Member) -> Result<&MemberRecord, RegistryError> {
		let index = self.resolve(member)?;
		Ok(&self.records[index])
	}

	/// Every [Member] recorded so far, in creation order.
	#[inline(always)]
	pub fn all(&self) -> &[MemberRecord] {
		&self.records
	}

	#[inline(always)]
	pub fn iter(&self) -> std::slice::Iter<'_, MemberRecord> {
		self.records.iter()
	}

	#[inline(always)]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[inline(always)]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Number of members the registry can hold without reallocating.
	#[inline(always)]
	pub fn capacity(&self) -> usize {
		self.records.capacity()
	}

	/// The [members](Member) assigned to `container`, in creation order.
	///
	/// Membership is decided by [ContainerId], never by name.
	/// This is a linear scan; nothing is indexed or cached.
	pub fn members_of(&self, container: &Container) -> Vec<&MemberRecord> {
		self.records.iter().filter(|r| r.belongs_to(container)).collect()
	}

	/// Same as [members_of](Self::members_of), but scans the registry in parallel.
	pub fn par_members_of(&self, container: &Container) -> Vec<&MemberRecord> {
		self.records.par_iter().filter(|r| r.belongs_to(container)).collect()
	}

	/// The [members](Member) with no [Container], in creation order.
	pub fn unassigned(&self) -> Vec<&MemberRecord> {
		self.records.iter().filter(|r| r.container.is_none()).collect()
	}

	/// Groups every assigned [Member] by its [Container].
	/// Each group preserves creation order.
	pub fn members_by_container(&self) -> ContainerMap<'_> {
		let mut map = ContainerMap::default();
		for record in &self.records {
			if let Some(container) = record.container {
				map.entry(container).or_default().push(record);
			}
		}
		map
	}

	fn register(&mut self, name: String, container: Option<ContainerId>) -> Member {
		let handle = Member {
			index: next_index(self.records.len()),
			registry_id: self.id,
		};

		tracing::trace!(registry = self.id, index = handle.index, member = %name, "registered member");

		self.records.push(MemberRecord {
			handle,
			name,
			container,
		});

		if self.config.growth_warning == Some(self.records.len()) {
			tracing::warn!(
				registry = self.id,
				members = self.records.len(),
				"member registry reached its growth warning threshold; members are never released"
			);
		}

		handle
	}

	fn resolve(&self, member: Member) -> Result<usize, RegistryError> {
		if member.registry_id != self.id {
			return Err(RegistryError::ForeignMember {
				registry: member.registry_id,
				expected: self.id,
			});
		}

		let index = member.index as usize;
		if index >= self.records.len() {
			return Err(RegistryError::UnknownMember {
				index: member.index,
				len: self.records.len(),
			});
		}

		Ok(index)
	}
}

/// Converts a registry length into the index of the next [Member].
///
/// # Panics
/// Panics once the registry holds `u32::MAX` members,
/// since a wrapped index would alias an existing record.
#[inline(always)]
pub(crate) fn next_index(len: usize) -> u32 {
	match u32::try_from(len) {
		Ok(index) if index < u32::MAX => index,
		_ => panic!("Member registry cannot hold more than {} members", u32::MAX),
	}
}

impl Default for MemberRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl<'r> IntoIterator for &'r MemberRegistry {
	type Item = &'r MemberRecord;
	type IntoIter = std::slice::Iter<'r, MemberRecord>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
