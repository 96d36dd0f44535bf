pub mod containers;
pub mod members;
mod config;
mod context;
mod error;

pub use config::RegistryConfig;
pub use context::RelationContext;
pub use error::RegistryError;

pub mod prelude {
	pub use crate::config::RegistryConfig;
	pub use crate::context::RelationContext;
	pub use crate::error::RegistryError;
	pub use crate::containers::{Container, ContainerId};
	pub use crate::members::{ContainerMap, Member, MemberRecord, MemberRegistry, SharedRegistry};
}

#[cfg(test)]
mod tests;
