/// Strip every leading and trailing ':' or '/' from a scheme ("https://" -> "https")
pub fn trim_scheme(input: &str) -> &str {
    input.trim_matches([':', '/'])
}

/// Strip a single trailing '/' from a domain or IPv4 literal
pub fn trim_host(input: &str) -> &str {
    input.strip_suffix('/').unwrap_or(input)
}

/// Normalize an IPv6 literal to its bracketed form.
/// Brackets supplied by the caller are removed and reapplied.
pub fn bracket_ipv6(input: &str) -> String {
    let address = trim_host(input).trim_matches(['[', ']']);

    let mut result = String::with_capacity(address.len() + 2);
    result.push('[');
    result.push_str(address);
    result.push(']');
    result
}

/// Strip leading '#' and '/' from a fragment
pub fn trim_anchor(input: &str) -> &str {
    input.trim_start_matches(['#', '/'])
}
