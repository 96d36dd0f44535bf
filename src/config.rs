/// Settings for a [MemberRegistry](crate::members::MemberRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
	/// Number of members to reserve space for up front.
	pub initial_capacity: usize,

	/// Member count at which the registry logs a warning.
	/// Members are never removed, so a long-lived registry only grows.
	pub growth_warning: Option<usize>,
}

impl RegistryConfig {
	pub const DEFAULT_GROWTH_WARNING: usize = 1 << 20;

	pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
		self.initial_capacity = initial_capacity;
		self
	}

	pub fn with_growth_warning(mut self, threshold: Option<usize>) -> Self {
		self.growth_warning = threshold;
		self
	}
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			initial_capacity: 0,
			growth_warning: Some(Self::DEFAULT_GROWTH_WARNING),
		}
	}
}
