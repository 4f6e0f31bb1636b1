//! Protein-level outcomes of biased nucleotide substitution accumulated over
//! replication cycles.
//!
//! A coding sequence is framed from its first AUG, a per-cycle substitution
//! matrix is raised to the number of rounds, and per-codon synonymous and stop
//! probabilities are aggregated into whole-protein statistics.

pub mod config;
pub mod error;
pub mod io;
pub mod mutation;
pub mod report;
pub mod seq;
pub mod simulate;
pub mod stats;
pub mod summary;
pub mod utils;

mod constants;

pub use crate::error::{Error, Result, ValidationError};
pub use crate::mutation::{EffectiveMatrix, SubstitutionMatrix};
pub use crate::seq::coding::CodingSequence;
pub use crate::summary::{summarize, RegionOfInterest, Summary};
