//! Decoded catalog record types.
//!
//! These are the shapes the remote directory service returns: servers,
//! countries, and the two enumerable dimensions (groups and technologies).
//! All of them are plain data; fetching and ranking live elsewhere.

pub mod country;
pub mod group;
pub mod server;
pub mod technology;

pub use country::{City, Country};
pub use group::Group;
pub use server::{Coordinates, Location, Server, ServerGroup, ServerTechnology};
pub use technology::Technology;
