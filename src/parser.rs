use crate::error::{BuildError, Result};
use crate::url_components::BaseComponents;

/// Assemble "scheme://host[:port]" and run it through the URL grammar parser.
///
/// The parser only validates. The returned parts are the caller's scheme and
/// host as given, not the parser's rewritten forms, so "Example.COM" or
/// "127.1" come out unchanged. Anything the host managed to smuggle past the
/// shape check (userinfo, a query, a fragment, a non-root path) rejects the
/// base.
pub fn parse_base(scheme: &str, host: &str, port: Option<u16>) -> Result<BaseComponents> {
    let mut raw = String::with_capacity(scheme.len() + 3 + host.len() + 6);
    raw.push_str(scheme);
    raw.push_str("://");
    raw.push_str(host);
    if let Some(port) = port {
        raw.push(':');
        raw.push_str(&port.to_string());
    }

    let parsed = url::Url::parse(&raw)?;

    if !parsed.username().is_empty()
        || parsed.password().is_some()
        || parsed.query().is_some()
        || parsed.fragment().is_some()
        || !matches!(parsed.path(), "" | "/")
    {
        return Err(BuildError::MalformedUrl(None));
    }

    Ok(BaseComponents {
        scheme: scheme.to_string(),
        host: host.to_string(),
        port,
    })
}
