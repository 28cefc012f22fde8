use std::fmt;

#[derive(Debug)]
pub enum StatsError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (bad bucket table, empty keyword list, etc.).
    ConfigValidation(String),
    /// Taxonomy document is not valid JSON.
    TaxonomyParse(String),
    /// Record document is not a valid JSON array of profiles.
    RecordParse(String),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::TaxonomyParse(msg) => write!(f, "taxonomy parse error: {msg}"),
            Self::RecordParse(msg) => write!(f, "record parse error: {msg}"),
        }
    }
}

impl std::error::Error for StatsError {}
