use crate::containers::Container;
use crate::members::{next_index, Member, MemberRegistry};
use crate::config::RegistryConfig;
use crate::error::RegistryError;
use parking_lot::Mutex;
use tracing::Level;
use std::io::Write;
use std::sync::Arc;

#[test]
pub fn sequential_registration() {
	let mut registry = MemberRegistry::new();

	for i in 0..64 {
		let member = registry.create_member(format!("plant {}", i));

		assert_eq!(i + 1, registry.len(), "Registry length does not match member count");
		assert_eq!(
			member,
			registry.all()[i].handle(),
			"Newest member is not at the end of the registry"
		);
	}

	let names = registry.iter().map(|r| r.name().to_owned()).collect::<Vec<_>>();
	let expected = (0..64).map(|i| format!("plant {}", i)).collect::<Vec<_>>();
	assert_eq!(expected, names, "Registry order does not match creation order");
}

#[test]
pub fn members_start_unassigned() {
	let mut registry = MemberRegistry::new();
	let member = registry.create_member("Basil");

	assert_eq!(None, registry.get(member).unwrap().container());
	assert_eq!(1, registry.unassigned().len());
}

#[test]
pub fn assign_returns_previous_container() {
	let mut registry = MemberRegistry::new();
	let a = Container::new("A");
	let b = Container::new("B");
	let member = registry.create_member_in("Basil", &a);

	assert_eq!(Ok(Some(a.id())), registry.assign(member, Some(&b)));
	assert_eq!(Ok(Some(b.id())), registry.assign(member, None));
	assert_eq!(Ok(None), registry.assign(member, None));
	assert!(registry.get(member).unwrap().container().is_none());
}

#[test]
pub fn foreign_members_are_rejected() {
	let mut first = MemberRegistry::new();
	let second = MemberRegistry::new();
	let member = first.create_member("Basil");

	assert_eq!(
		Err(RegistryError::ForeignMember {
			registry: first.id(),
			expected: second.id(),
		}),
		second.get(member)
	);

	let container = Container::new("A");
	assert!(matches!(
		first.assign(Member::default(), Some(&container)),
		Err(RegistryError::ForeignMember { registry: 0, .. })
	));
}

#[test]
pub fn out_of_bounds_members_are_rejected() {
	let mut registry = MemberRegistry::new();
	registry.create_member("Basil");

	let forged = Member {
		index: 5,
		registry_id: registry.id(),
	};

	assert_eq!(Err(RegistryError::UnknownMember { index: 5, len: 1 }), registry.get(forged));
}

#[test]
pub fn queries_do_not_mutate() {
	let mut registry = MemberRegistry::new();
	let container = Container::new("Front Lawn");
	registry.create_member_in("Basil", &container);
	registry.create_member("Weed");

	let all = registry.all().to_vec();
	let members = registry.members_of(&container).into_iter().cloned().collect::<Vec<_>>();

	for _ in 0..4 {
		assert_eq!(all, registry.all());
		assert_eq!(members, registry.members_of(&container).into_iter().cloned().collect::<Vec<_>>());
		assert_eq!(2, registry.len());
	}
}

#[test]
pub fn config_reserves_capacity() {
	let config = RegistryConfig::default().with_capacity(32).with_growth_warning(None);
	let mut registry = MemberRegistry::with_config(config);

	assert_eq!(&config, registry.config());
	assert!(registry.is_empty());
	assert!(registry.capacity() >= 32, "Initial capacity was not reserved");

	let capacity = registry.capacity();
	for i in 0..32 {
		registry.create_member(format!("plant {}", i));
	}
	assert_eq!(32, registry.len());
	assert_eq!(capacity, registry.capacity(), "Registry reallocated within its reserved capacity");
}

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
	fn warnings(&self) -> usize {
		let bytes = self.0.lock();
		String::from_utf8_lossy(&bytes).lines().filter(|l| l.contains("WARN")).count()
	}
}

impl Write for CapturedLog {
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
		self.0.lock().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> std::io::Result<()> {
		Ok(())
	}
}

#[test]
pub fn growth_warning_fires_once() {
	let log = CapturedLog::default();
	let writer = log.clone();
	let subscriber = tracing_subscriber::fmt()
		.with_max_level(Level::WARN)
		.with_ansi(false)
		.with_writer(move || writer.clone())
		.finish();

	let config = RegistryConfig::default().with_growth_warning(Some(2));
	let mut registry = MemberRegistry::with_config(config);

	tracing::subscriber::with_default(subscriber, || {
		registry.create_member("Basil");
		assert_eq!(0, log.warnings(), "Warned before reaching the threshold");

		registry.create_member("Cucumber");
		assert_eq!(1, log.warnings(), "No warning at the threshold");

		for i in 0..8 {
			registry.create_member(format!("plant {}", i));
		}
		assert_eq!(1, log.warnings(), "Warned again past the threshold");
	});
}

#[test]
pub fn disabled_growth_warning_stays_silent() {
	let log = CapturedLog::default();
	let writer = log.clone();
	let subscriber = tracing_subscriber::fmt()
		.with_max_level(Level::WARN)
		.with_ansi(false)
		.with_writer(move || writer.clone())
		.finish();

	let mut registry = MemberRegistry::with_config(RegistryConfig::default().with_growth_warning(None));

	tracing::subscriber::with_default(subscriber, || {
		for i in 0..16 {
			registry.create_member(format!("plant {}", i));
		}
	});
	assert_eq!(0, log.warnings());
}

#[test]
pub fn index_allocation_is_checked() {
	assert_eq!(0, next_index(0));
	assert_eq!(u32::MAX - 1, next_index(u32::MAX as usize - 1));
}

#[test]
#[should_panic(expected = "Member registry cannot hold more than")]
pub fn index_allocation_does_not_wrap() {
	next_index(u32::MAX as usize);
}

#[test]
pub fn registry_ids_are_unique() {
	let registries = (0..16).map(|_| MemberRegistry::new()).collect::<Vec<_>>();
	let mut ids = registries.iter().map(MemberRegistry::id).collect::<Vec<_>>();

	assert!(!ids.contains(&Member::default().registry_id), "A registry shares the default handle's id");

	ids.sort_unstable();
	ids.dedup();
	assert_eq!(registries.len(), ids.len(), "Registry ids were reused");
}
