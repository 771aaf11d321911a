//! Connection configuration for a [`crate::KeywordIndex`] backed by Redis.

/// Connection parameters for a single named instance.
///
/// Mirrors the keyword arguments of the reference implementation's
/// constructor (`host`, `port`, `db`, `name`, `encoding`). There is no
/// file-based or environment-variable configuration loading in scope;
/// callers construct this value directly, as the source does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub db: i64,
    pub name: String,
    pub encoding: Encoding,
    /// Socket connect timeout, in milliseconds. `None` defers to the
    /// store client's own default.
    pub connect_timeout_ms: Option<u64>,
}

/// The text encoding used to interpret store values.
///
/// Rust strings are Unicode code-point sequences (UTF-8) by construction,
/// so this crate only ever operates in that encoding; the field exists to
/// keep the constructor's signature in line with the source implementation
/// and to document that intent rather than to select real behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
}

impl Default for StoreConfig {
    /// `db: 7 + 5`, because 1975 — preserved from the reference
    /// implementation's default.
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
            db: 12,
            name: "RedisACKeywords".to_string(),
            encoding: Encoding::Utf8,
            connect_timeout_ms: None,
        }
    }
}

impl StoreConfig {
    /// Builds a configuration from explicit values, matching the public
    /// API surface's `new(host, port, db, name, encoding)` constructor.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        db: i64,
        name: impl Into<String>,
        encoding: Encoding,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            db,
            name: name.into(),
            encoding,
            connect_timeout_ms: None,
        }
    }

    /// Convenience constructor that keeps every default except the
    /// instance name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Overrides the socket connect timeout.
    pub fn with_connect_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.connect_timeout_ms = Some(timeout_ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_implementation() {
        let config = StoreConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 6379);
        assert_eq!(config.db, 12);
        assert_eq!(config.name, "RedisACKeywords");
        assert_eq!(config.encoding, Encoding::Utf8);
    }

    #[test]
    fn with_name_overrides_only_name() {
        let config = StoreConfig::with_name("shop");
        assert_eq!(config.name, "shop");
        assert_eq!(config.host, StoreConfig::default().host);
    }

    #[test]
    fn connect_timeout_defaults_to_none() {
        assert_eq!(StoreConfig::default().connect_timeout_ms, None);
        let config = StoreConfig::with_name("shop").with_connect_timeout_ms(250);
        assert_eq!(config.connect_timeout_ms, Some(250));
    }
}
