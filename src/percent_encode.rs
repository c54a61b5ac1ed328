use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, utf8_percent_encode};

// Encode sets follow RFC 3986 section 2/3.
// Based on https://www.rfc-editor.org/rfc/rfc3986#appendix-A

/// Everything except ALPHA / DIGIT / "-" / "." / "_" / "~"
pub const UNRESERVED_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Userinfo percent-encode set
/// Unreserved and sub-delims pass; ":" is encoded since it separates user from password
pub const USERINFO_SET: &AsciiSet = &UNRESERVED_SET
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Path segment percent-encode set (complement of `pchar`)
/// `USERINFO_SET` minus ":" and "@"; "/" stays encoded so a segment never splits
pub const PATH_SEGMENT_SET: &AsciiSet = &USERINFO_SET.remove(b':').remove(b'@');

/// Fragment percent-encode set
/// C0 control + space, ", <, >, \`
pub const FRAGMENT_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Form-urlencoded component set
/// Same as `UNRESERVED_SET` but lets space through so it can become "+"
const FORM_SET: &AsciiSet = &UNRESERVED_SET.remove(b' ');

/// Write percent-encoded string directly to buffer
/// Manually iterates to avoid write! macro overhead
pub fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    // Reserve space to reduce reallocations
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode a single path segment into buffer ("/" becomes %2F, space %20)
pub fn percent_encode_segment_into(buffer: &mut String, input: &str) {
    percent_encode_into(buffer, input, PATH_SEGMENT_SET);
}

/// Percent-encode for userinfo directly into buffer
pub fn percent_encode_userinfo_into(buffer: &mut String, input: &str) {
    percent_encode_into(buffer, input, USERINFO_SET);
}

/// Percent-encode fragment directly into buffer
pub fn percent_encode_fragment_into(buffer: &mut String, input: &str) {
    percent_encode_into(buffer, input, FRAGMENT_SET);
}

/// Encode a query key or value as application/x-www-form-urlencoded
pub fn form_encode_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, FORM_SET) {
        // Encoded chunks never contain a raw space, so only passthrough runs need mapping
        if memchr::memchr(b' ', chunk.as_bytes()).is_some() {
            buffer.extend(chunk.chars().map(|c| if c == ' ' { '+' } else { c }));
        } else {
            buffer.push_str(chunk);
        }
    }
}
