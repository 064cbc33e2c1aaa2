//! Skip/take pagination for list operations.

use crate::{ProductifyError, ProductifyResult};
use serde::{Deserialize, Serialize};

/// A window over a store-ordered sequence: skip `skip` records, then take
/// at most `take`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    /// Number of leading records to skip.
    pub skip: u64,
    /// Maximum number of records to return. Always positive.
    pub take: u32,
}

impl PageRange {
    /// The default number of records per request.
    pub const DEFAULT_TAKE: u32 = 10;

    /// Creates a range from raw caller input.
    ///
    /// Rejects a negative `skip` or a non-positive `take`. A `skip` past
    /// the end of the store is valid and yields an empty page.
    pub fn new(skip: i64, take: i64) -> ProductifyResult<Self> {
        if skip < 0 || take <= 0 {
            return Err(ProductifyError::bad_request("Invalid pagination parameters."));
        }
        Ok(Self {
            skip: skip.unsigned_abs(),
            take: u32::try_from(take).unwrap_or(u32::MAX),
        })
    }

    /// Creates the first range with the default size.
    #[must_use]
    pub const fn first() -> Self {
        Self {
            skip: 0,
            take: Self::DEFAULT_TAKE,
        }
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub fn offset(&self) -> i64 {
        i64::try_from(self.skip).unwrap_or(i64::MAX)
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.take as i64
    }
}

impl Default for PageRange {
    fn default() -> Self {
        Self::first()
    }
}
