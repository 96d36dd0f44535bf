//! [Members](Member) are the "many" side of a one-to-many relationship.
//!
//! A [Member] is created by a [MemberRegistry], which records it in construction order
//! and never forgets it. Each member optionally points at a single
//! [Container](crate::containers::Container).

mod member;
mod member_registry;
mod shared_registry;

pub use member::*;
pub use member_registry::*;
pub use shared_registry::*;
