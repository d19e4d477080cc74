use crate::compat::{Cow, String, Vec};
use crate::error::{Error, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode, percent_decode_str, utf8_percent_encode};

// Encode sets for application/x-www-form-urlencoded query strings.
// Space is handled separately and written as `+`.

/// Form percent-encode set
/// Everything except ASCII alphanumerics and `-`, `.`, `_`, `~`
pub const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Form set that leaves `/` unescaped, used for redirect targets
pub const FORM_PATH_SAFE_SET: &AsciiSet = &FORM_SET.remove(b'/');

/// Write a form-encoded component directly to buffer.
/// Spaces become `+`, everything else in `encode_set` becomes `%XX`.
pub fn form_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());

    // Encoded bytes are yielded one `%XX` chunk at a time
    for chunk in utf8_percent_encode(input, encode_set) {
        if chunk == "%20" {
            buffer.push('+');
        } else {
            buffer.push_str(chunk);
        }
    }
}

/// Decode a form-encoded component.
/// Malformed escapes are kept literally, invalid UTF-8 becomes U+FFFD.
pub fn decode_component(input: &str) -> Cow<'_, str> {
    if !has_plus(input) {
        return percent_decode_str(input).decode_utf8_lossy();
    }

    let bytes = plus_to_space(input);
    Cow::Owned(percent_decode(&bytes).decode_utf8_lossy().into_owned())
}

/// Decode a form-encoded component, rejecting invalid UTF-8
pub fn decode_component_strict(input: &str) -> Result<Cow<'_, str>> {
    if !has_plus(input) {
        return percent_decode_str(input)
            .decode_utf8()
            .map_err(|_| Error::InvalidPercentEncoding);
    }

    let bytes = plus_to_space(input);
    percent_decode(&bytes)
        .decode_utf8()
        .map(|decoded| Cow::Owned(decoded.into_owned()))
        .map_err(|_| Error::InvalidPercentEncoding)
}

fn has_plus(input: &str) -> bool {
    memchr::memchr(b'+', input.as_bytes()).is_some()
}

fn plus_to_space(input: &str) -> Vec<u8> {
    input
        .bytes()
        .map(|b| if b == b'+' { b' ' } else { b })
        .collect()
}
