use std::convert::AsRef;
use std::fs;
use std::io;
use std::path::Path;

use bio::io::fasta;
use tracing::debug;

use crate::error::{Error, Result};
use crate::seq::{normalize, RnaSeq};

/// Read all records of a FASTA stream as one normalized RNA sequence.
///
/// Sequence lines of every record are concatenated in file order; headers are
/// skipped. DNA input is accepted and converted to RNA. Input without any
/// FASTA header is taken as bare sequence text.
pub fn read_sequence<R: io::Read>(mut reader: R) -> Result<RnaSeq> {
    let mut buf: Vec<u8> = Vec::new();
    reader.read_to_end(&mut buf)?;

    // blank lines and indentation before the first header are not part of any record
    let start = buf.iter().position(|x| !x.is_ascii_whitespace()).unwrap_or(buf.len());
    if buf.get(start) != Some(&b'>') {
        debug!("input has no FASTA header; reading as bare sequence");
        return Ok(normalize(&buf));
    }

    let reader = fasta::Reader::new(&buf[start..]);
    let mut raw: Vec<u8> = Vec::new();
    let mut n_records = 0;
    for r in reader.records() {
        let record = r.map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        raw.extend_from_slice(record.seq());
        n_records += 1;
    }

    let seq = normalize(&raw);
    debug!("read {} FASTA records ({} nt after normalization)", n_records, seq.len());

    Ok(seq)
}

/// Read a FASTA file as one normalized RNA sequence.
pub fn read_sequence_file<P: AsRef<Path>>(path: P) -> Result<RnaSeq> {
    let file = fs::File::open(path)?;
    read_sequence(io::BufReader::new(file))
}
