//! Domain layer - Core business objects with no infrastructure dependencies
//!
//! This layer contains:
//! - Entities: Setting records with generated identity
//! - Value Objects: Setting categories, seed defaults, typed ids

pub mod entities;
pub mod value_objects;
