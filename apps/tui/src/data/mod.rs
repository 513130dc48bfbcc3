// Data module for worldcup-tui
// The hard-coded finals table and the lookups over it

pub mod queries;
pub mod records;

pub use records::{Country, DataError, Tournament, COUNTRIES, TOURNAMENTS};
