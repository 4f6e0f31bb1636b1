pub mod fasta;
pub mod matrix;
