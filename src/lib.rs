#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod encoding;
mod error;
mod helpers;
mod pagination;
mod query_params;
mod request_target;
mod transform;

// Public API
pub use error::{Error, Result};
pub use pagination::{LAST_PAGE, PAGE_PARAM, Page, Paginator, page_link};
pub use query_params::QueryParams;
pub use request_target::{REDIRECT_FIELD_NAME, RequestTarget, redirect_to_login};
pub use transform::{Override, Overrides, query_transform};
