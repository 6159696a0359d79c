//! Maps free-text business categories to canned niche profiles.
//!
//! Each niche carries the typical problems a business of that kind faces
//! online, the solutions the agency offers for them, and example hooks used
//! to open a conversation. Lookup is keyword based and always succeeds,
//! falling back to the `generico` profile.

pub mod matcher;
pub mod normalize;
pub mod profiles;
pub mod table;

pub use matcher::{get_solutions, niche_keys, niche_profile, resolve_niche};
pub use normalize::normalize_category;
pub use profiles::NicheProfile;
pub use table::GENERIC_NICHE;
