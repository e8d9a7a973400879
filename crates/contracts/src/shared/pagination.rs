use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
    pub count: u64,
}

/// `{ data, pagination }` wrapper returned by every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("pagination.count = {count}, but data holds {len} rows")]
    CountMismatch { count: u64, len: usize },
    #[error("pagination.count = {count} exceeds limit {limit}")]
    CountOverLimit { count: u64, limit: u64 },
    #[error("pagination.total = {total} is below count {count}")]
    TotalBelowCount { total: u64, count: u64 },
}

impl<T> PageEnvelope<T> {
    pub fn empty(limit: u64, offset: u64) -> Self {
        Self {
            data: Vec::new(),
            pagination: Pagination {
                total: 0,
                limit,
                offset,
                count: 0,
            },
        }
    }

    /// Checks the envelope invariants: `count == data.len()`,
    /// `count <= limit` and `total >= count`.
    pub fn validate(&self) -> Result<(), EnvelopeError> {
        let p = &self.pagination;
        if p.count != self.data.len() as u64 {
            return Err(EnvelopeError::CountMismatch {
                count: p.count,
                len: self.data.len(),
            });
        }
        if p.count > p.limit {
            return Err(EnvelopeError::CountOverLimit {
                count: p.count,
                limit: p.limit,
            });
        }
        if p.total < p.count {
            return Err(EnvelopeError::TotalBelowCount {
                total: p.total,
                count: p.count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(len: usize, total: u64, limit: u64, count: u64) -> PageEnvelope<u32> {
        PageEnvelope {
            data: (0..len as u32).collect(),
            pagination: Pagination {
                total,
                limit,
                offset: 0,
                count,
            },
        }
    }

    #[test]
    fn test_valid_envelope() {
        assert_eq!(envelope(2, 3, 2, 2).validate(), Ok(()));
        assert_eq!(PageEnvelope::<u32>::empty(50, 0).validate(), Ok(()));
    }

    #[test]
    fn test_invariant_violations() {
        assert!(matches!(
            envelope(2, 3, 2, 1).validate(),
            Err(EnvelopeError::CountMismatch { .. })
        ));
        assert!(matches!(
            envelope(3, 3, 2, 3).validate(),
            Err(EnvelopeError::CountOverLimit { .. })
        ));
        assert!(matches!(
            envelope(2, 1, 5, 2).validate(),
            Err(EnvelopeError::TotalBelowCount { .. })
        ));
    }

    #[test]
    fn test_parses_wire_format() {
        let raw = r#"{"data":[1,2],"pagination":{"total":7,"limit":2,"offset":4,"count":2}}"#;
        let parsed: PageEnvelope<u32> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.data, vec![1, 2]);
        assert_eq!(parsed.pagination.offset, 4);
        assert!(parsed.validate().is_ok());
    }
}
