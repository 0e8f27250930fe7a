//! Team member and index registries.

mod actions;
mod entities;
mod page;

pub use entities::{IndexesPage, TeamMembersPage};
