use crate::error::{BuildError, Result};
use crate::percent_encode::form_encode_into;
use crate::types::{QueryOrder, QueryPolicy};

/// Query parameters as an ordered mapping from key to values.
/// Adding to an existing key appends; keys keep first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append values under `key`, creating the key if absent.
    /// Calling with no values still registers the key.
    pub fn append<K, I, V>(&mut self, key: K, values: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let key = key.into();
        let values = values.into_iter().map(Into::into);

        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            existing.extend(values);
        } else {
            self.entries.push((key, values.collect()));
        }
    }

    /// Get all values for a key, in insertion order.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
            .unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reject empty keys and values. Only consulted under `QueryPolicy::Strict`.
    fn validate(&self) -> Result<()> {
        for (key, values) in &self.entries {
            if key.is_empty() {
                return Err(BuildError::EmptyQueryKey);
            }
            if values.iter().any(String::is_empty) {
                return Err(BuildError::EmptyQueryValue { key: key.clone() });
            }
        }
        Ok(())
    }

    /// Encode as `application/x-www-form-urlencoded` without leading `?`.
    /// Returns an empty string when nothing survives the policy.
    ///
    /// # Errors
    ///
    /// Under [`QueryPolicy::Strict`], [`BuildError::EmptyQueryKey`] or
    /// [`BuildError::EmptyQueryValue`] for the first empty entry.
    pub fn encode(&self, policy: QueryPolicy, order: QueryOrder) -> Result<String> {
        let mut result = String::new();
        self.encode_into(&mut result, policy, order)?;
        Ok(result)
    }

    /// Write encoded pairs into buffer. Nothing is written on error.
    ///
    /// # Errors
    ///
    /// Same as [`encode`](Self::encode).
    pub fn encode_into(
        &self,
        buffer: &mut String,
        policy: QueryPolicy,
        order: QueryOrder,
    ) -> Result<()> {
        if policy.is_strict() {
            self.validate()?;
        }

        let mut entries: Vec<&(String, Vec<String>)> = self.entries.iter().collect();
        if order == QueryOrder::Sorted {
            entries.sort_by(|a, b| a.0.cmp(&b.0));
        }

        let mut first = true;
        for (key, values) in entries {
            if key.is_empty() {
                continue;
            }
            for value in values.iter().filter(|v| !v.is_empty()) {
                if !first {
                    buffer.push('&');
                }
                first = false;
                form_encode_into(buffer, key);
                buffer.push('=');
                form_encode_into(buffer, value);
            }
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.append(key, [value]);
        }
        params
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::QueryParams;
    use core::fmt;
    use serde::de::{MapAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialized as a map of key -> list of values, in key order of insertion
    impl Serialize for QueryParams {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
        }
    }

    struct QueryParamsVisitor;

    impl<'de> Visitor<'de> for QueryParamsVisitor {
        type Value = QueryParams;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of query keys to lists of values")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut params = QueryParams::new();
            while let Some((key, values)) = map.next_entry::<String, Vec<String>>()? {
                params.append(key, values);
            }
            Ok(params)
        }
    }

    impl<'de> Deserialize<'de> for QueryParams {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(QueryParamsVisitor)
        }
    }
}
