use crate::error::Result;
use crate::percent_encode::{
    percent_encode_fragment_into, percent_encode_segment_into, percent_encode_userinfo_into,
};
use crate::query_params::QueryParams;
use crate::types::{QueryOrder, QueryPolicy};
use crate::url_components::BaseComponents;

/// Writes URL components into a single buffer, in serialization order:
/// "scheme://[user:pass@]host[:port][/path][?query][#fragment]"
#[derive(Debug)]
pub struct UrlSerializer {
    buffer: String,
}

impl UrlSerializer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Write "scheme://", then userinfo if any, then "host[:port]"
    pub fn write_authority(&mut self, base: &BaseComponents, userinfo: Option<(&str, &str)>) {
        self.buffer.push_str(&base.scheme);
        self.buffer.push_str("://");

        if let Some((user, password)) = userinfo {
            percent_encode_userinfo_into(&mut self.buffer, user);
            self.buffer.push(':');
            percent_encode_userinfo_into(&mut self.buffer, password);
            self.buffer.push('@');
        }

        self.buffer.push_str(&base.host);
        if let Some(port) = base.port {
            self.buffer.push(':');
            self.buffer.push_str(&port.to_string());
        }
    }

    /// Write each non-empty segment as "/segment", encoded on its own
    pub fn write_path<'a, I>(&mut self, segments: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for segment in segments.into_iter().filter(|s| !s.is_empty()) {
            self.buffer.push('/');
            percent_encode_segment_into(&mut self.buffer, segment);
        }
    }

    /// Write "?query" unless no pair survives the policy
    pub fn write_query(
        &mut self,
        query: &QueryParams,
        policy: QueryPolicy,
        order: QueryOrder,
    ) -> Result<()> {
        let search_start = self.buffer.len();
        self.buffer.push('?');
        query.encode_into(&mut self.buffer, policy, order)?;

        if self.buffer.len() == search_start + 1 {
            self.buffer.truncate(search_start);
        }
        Ok(())
    }

    /// Write "#fragment" when the fragment is non-empty
    pub fn write_fragment(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        self.buffer.push('#');
        percent_encode_fragment_into(&mut self.buffer, fragment);
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}
