//! Person and household inputs for benefit projections

mod data;
pub mod loader;

pub use data::{ClaimAge, CoupleMode, FiledStatus, Gender, Household, Person};
pub use loader::{load_default_households, load_households, load_households_from_reader};
