//! Offset/limit pagination over the catalog iteration order

use tracing::debug;

use crate::error::{ErrorMessage, Result, TemplateMgtError};

/// Page size used when the caller does not specify one
pub const DEFAULT_SEARCH_LIMIT: u32 = 100;

/// Reject negative `limit` or `offset`
///
/// Zero is legal for both: a zero limit selects the default page size.
pub fn validate_pagination_parameters(limit: i32, offset: i32) -> Result<()> {
    if limit < 0 || offset < 0 {
        return Err(TemplateMgtError::client(
            ErrorMessage::InvalidArgumentsForLimitOffset,
            None,
        ));
    }
    Ok(())
}

/// Page request with an explicit "unspecified" limit
///
/// `limit: None` selects the default page size, `Some(0)` is an empty page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: Option<u32>,
    pub offset: u32,
}

impl PageRequest {
    pub fn new(limit: Option<u32>, offset: u32) -> Self {
        Self { limit, offset }
    }
}

/// Validated skip/take window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: usize,
    offset: usize,
}

impl Pagination {
    /// Validate raw arguments and substitute the default for a zero limit
    pub fn from_args(limit: i32, offset: i32, default_limit: u32) -> Result<Self> {
        validate_pagination_parameters(limit, offset)?;

        let limit = if limit == 0 {
            debug!(
                "Limit is not defined in the request, default to: {}",
                default_limit
            );
            default_limit as usize
        } else {
            limit as usize
        };

        Ok(Self {
            limit,
            offset: offset as usize,
        })
    }

    pub fn from_request(request: PageRequest, default_limit: u32) -> Self {
        let limit = match request.limit {
            Some(limit) => limit,
            None => {
                debug!(
                    "Limit is not defined in the request, default to: {}",
                    default_limit
                );
                default_limit
            }
        };

        Self {
            limit: limit as usize,
            offset: request.offset as usize,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Skip `offset` items, then take at most `limit`
    pub fn apply<I: Iterator>(self, iter: I) -> std::iter::Take<std::iter::Skip<I>> {
        iter.skip(self.offset).take(self.limit)
    }
}
