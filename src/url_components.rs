/// Authority parts of a base that passed the parser
///
/// Base layout: "<https://example.com:8080>"
/// - `scheme`: "https", as the caller spelled it
/// - `host`: "example.com", as the caller spelled it (IPv6 keeps its brackets: "[::1]")
/// - `port`: Some(8080), the builder's explicit port, kept even when it is
///   the scheme default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseComponents {
    pub scheme: String,
    pub host: String,
    pub port: Option<u16>,
}

impl BaseComponents {
    /// Length of "scheme://host:port" once serialized
    pub fn serialized_len(&self) -> usize {
        // "://" plus ":" and at most five port digits
        let port_len = if self.port.is_some() { 6 } else { 0 };
        self.scheme.len() + 3 + self.host.len() + port_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_len() {
        let components = BaseComponents {
            scheme: "http".to_string(),
            host: "example.com".to_string(),
            port: None,
        };
        assert_eq!(components.serialized_len(), "http://example.com".len());

        let with_port = BaseComponents {
            port: Some(8080),
            ..components
        };
        assert!(with_port.serialized_len() >= "http://example.com:8080".len());
    }
}
