/// Errors reported by strict query parsing and page lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Percent-decoded bytes are not valid UTF-8
    InvalidPercentEncoding,
    /// Page number is neither an integer nor `last`
    PageNotAnInteger,
    /// Page number is below 1
    PageLessThanOne,
    /// Page number is past the last page
    EmptyPage,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidPercentEncoding => "Invalid percent encoding",
            Self::PageNotAnInteger => "That page number is not an integer",
            Self::PageLessThanOne => "That page number is less than 1",
            Self::EmptyPage => "That page contains no results",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for query and pagination operations
pub type Result<T> = core::result::Result<T, Error>;
