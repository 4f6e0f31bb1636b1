/// RNA nucleotides in canonical matrix order.
pub const NUCLEOTIDES: [u8; 4] = [b'A', b'C', b'G', b'U'];
pub const N_NUCLEOTIDES: usize = 4;

pub const N_CODONS: usize = N_NUCLEOTIDES * N_NUCLEOTIDES * N_NUCLEOTIDES;

pub const START_CODON: [u8; 3] = [b'A', b'U', b'G'];
pub const STOP_CODONS: [[u8; 3]; 3] = [[b'U', b'A', b'A'], [b'U', b'A', b'G'], [b'U', b'G', b'A']];

/// Allowed deviation of a substitution matrix row sum from 1.
pub const ROW_SUM_TOLERANCE: f64 = 1.0e-6;

/// Residue symbol used by the codon table for stop codons.
pub const STOP_RESIDUE: u8 = b'*';
