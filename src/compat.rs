/// Compatibility layer for `std`/`no_std`
#[cfg(feature = "std")]
pub use std::{
    borrow::Cow,
    string::{String, ToString},
    vec::{IntoIter as VecIntoIter, Vec},
};

#[cfg(not(feature = "std"))]
pub use alloc::{
    borrow::Cow,
    string::{String, ToString},
    vec::{IntoIter as VecIntoIter, Vec},
};
