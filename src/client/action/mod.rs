//! Mutations invoked by the dashboard forms.
//!
//! Each action validates its payload locally and only then calls the entity
//! service. The caller revalidates the affected collection afterwards.

pub mod affiliate;
pub mod member;
pub mod plan;

#[cfg(test)]
mod test;
