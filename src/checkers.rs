use crate::error::{BuildError, Result};

/// Check whether a host string smuggles a scheme, path or port.
///
/// This is a shape heuristic, not host grammar validation:
/// - any '/' means a scheme ("http://...") or a path slipped in
/// - exactly one ':' means a "host:port" pair; bare names and IPv4 have none,
///   IPv6 literals have at least two
///
/// An IPv6 literal followed by a port ("[::1]:80") has several colons and
/// passes. The resulting URL may be broken; that case is left as is.
pub fn has_forbidden_host_symbols(host: &str) -> bool {
    let bytes = host.as_bytes();
    if memchr::memchr(b'/', bytes).is_some() {
        return true;
    }

    let mut colons = memchr::memchr_iter(b':', bytes);
    colons.next().is_some() && colons.next().is_none()
}

/// Validate host presence and shape
pub fn check_host(host: &str) -> Result<()> {
    if host.is_empty() {
        return Err(BuildError::MissingHost);
    }
    if has_forbidden_host_symbols(host) {
        return Err(BuildError::ForbiddenHostSymbols);
    }
    Ok(())
}

/// Validate a port. `0` is "unset" and yields `None`.
pub fn check_port(port: u32) -> Result<Option<u16>> {
    if port == 0 {
        return Ok(None);
    }
    u16::try_from(port)
        .map(Some)
        .map_err(|_| BuildError::InvalidPort(port))
}

/// Validate that both credential parts are present
pub fn check_credentials(user: &str, password: &str) -> Result<()> {
    if user.is_empty() {
        return Err(BuildError::MissingUser);
    }
    if password.is_empty() {
        return Err(BuildError::MissingPassword);
    }
    Ok(())
}
