/// How empty query keys and values are treated at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum QueryPolicy {
    /// Drop empty keys and empty values; a key left without values is omitted
    #[default]
    Skip,
    /// Fail the build on the first empty key or value
    Strict,
}

/// Order in which distinct query keys are serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum QueryOrder {
    /// Keys appear in the order they were first added
    #[default]
    Insertion,
    /// Keys are sorted by byte order; values keep their insertion order
    Sorted,
}

impl QueryPolicy {
    /// Check if empty entries abort the build
    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }
}
