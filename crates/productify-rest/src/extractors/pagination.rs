//! Pagination extractor.

use productify_core::{PageRange, ProductifyError};
use serde::Deserialize;

/// Query parameters for list endpoints: `?skip=0&take=10`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkipTakeQuery {
    #[serde(default)]
    pub skip: Option<i64>,
    #[serde(default)]
    pub take: Option<i64>,
}

impl TryFrom<SkipTakeQuery> for PageRange {
    type Error = ProductifyError;

    fn try_from(query: SkipTakeQuery) -> Result<Self, Self::Error> {
        PageRange::new(
            query.skip.unwrap_or(0),
            query.take.unwrap_or(i64::from(PageRange::DEFAULT_TAKE)),
        )
    }
}
