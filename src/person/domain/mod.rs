//! Domain model for person records.
//!
//! People are identified by an opaque validated identifier that the task
//! module reuses for assignments. All infrastructure concerns stay outside
//! of the domain boundary.

mod error;
mod ids;
mod person;

pub use error::PersonDomainError;
pub use ids::PersonId;
pub use person::{EmailAddress, Person, PersonName, PersonPatch, PersonRole};
