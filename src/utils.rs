use crate::error::{Error, Result};

/// Parse a nucleotide region such as `300-600`.
///
/// Assume region is specified in 1-based, closed format; both bounds must be
/// positive. Reversed bounds are swapped.
pub fn parse_region(x: &str) -> Result<(u64, u64)> {
    let invalid = || Error::InvalidArgument(String::from("region must look like 300-600 (positive integers)"));

    match x.find('-') {
        Some(i) => {
            let start: u64 = x[..i].trim().parse().map_err(|_| invalid())?;
            let end: u64 = x[i + 1..].trim().parse().map_err(|_| invalid())?;
            if start == 0 || end == 0 {
                Err(invalid())
            } else if end < start {
                Ok((end, start))
            } else {
                Ok((start, end))
            }
        }
        None => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_region() {
        assert_eq!(parse_region("300-600").unwrap(), (300, 600));
        assert_eq!(parse_region(" 4 - 15 ").unwrap(), (4, 15));
        assert_eq!(parse_region("7-7").unwrap(), (7, 7));
    }

    #[test]
    fn test_parse_region_swapped() {
        assert_eq!(parse_region("600-300").unwrap(), (300, 600));
    }

    #[test]
    fn test_parse_region_invalid() {
        for x in ["", "300", "300-", "-600", "0-10", "10-0", "a-b", "-5-10", "3-6-9", "1.5-3"].iter() {
            assert!(
                matches!(parse_region(x), Err(Error::InvalidArgument(_))),
                "accepted {:?}",
                x
            );
        }
    }
}
