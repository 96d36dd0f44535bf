//! [Containers](Container) are the "one" side of a one-to-many relationship.
//!
//! A [Container] never stores its members. Each [Member](crate::members::Member)
//! points at a [Container] instead, and the member set is recovered on demand
//! by filtering a [MemberRegistry](crate::members::MemberRegistry).

mod container;

pub use container::*;
