use crate::error::{GtfError, Result};
use std::collections::{HashMap, HashSet};
use std::env::{self, VarError};

pub const ENSEMBL_RELEASE: &str = "ENSEMBL_RELEASE";
pub const ENSEMBL_RELEASE_URL: &str = "ENSEMBL_RELEASE_URL";
pub const FLYBASE_RELEASE_DATE: &str = "FLYBASE_RELEASE_DATE";
pub const FLYBASE_RELEASE_VERSION: &str = "FLYBASE_RELEASE_VERSION";
pub const FLYBASE_RELEASE_URL: &str = "FLYBASE_RELEASE_URL";

/// Every key any organism entry may consume.
pub const RELEASE_KEYS: &[&str] = &[
    ENSEMBL_RELEASE,
    ENSEMBL_RELEASE_URL,
    FLYBASE_RELEASE_DATE,
    FLYBASE_RELEASE_VERSION,
    FLYBASE_RELEASE_URL,
];

/// Provider release settings, read once at start and never mutated.
///
/// Absent keys are only an error when an organism entry asks for them, so an
/// unsupported organism name needs no release value at all.
#[derive(Debug, Clone, Default)]
pub struct ReleaseConfig {
    inner: HashMap<&'static str, String>,
    // set in the environment, but not UTF-8
    not_unicode: HashSet<&'static str>,
}

impl ReleaseConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key))
    }

    pub fn from_pairs<I, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, V)>,
        V: Into<String>,
    {
        let given: HashMap<&'static str, String> =
            pairs.into_iter().map(|(k, v)| (k, v.into())).collect();
        Self::from_lookup(|key| given.get(key).cloned().ok_or(VarError::NotPresent))
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let mut cfg = Self::default();
        for key in RELEASE_KEYS {
            match lookup(*key) {
                Ok(value) => {
                    cfg.inner.insert(*key, value);
                }
                Err(VarError::NotUnicode(_)) => {
                    cfg.not_unicode.insert(*key);
                }
                Err(VarError::NotPresent) => {}
            }
        }
        cfg
    }

    pub fn get(&self, key: &'static str) -> Result<&str> {
        match self.inner.get(key) {
            Some(value) => Ok(value.as_str()),
            None if self.not_unicode.contains(key) => Err(GtfError::NotUnicode(key)),
            None => Err(GtfError::MissingConfig(key)),
        }
    }

    /// Fails on the first key in `keys` that has no value.
    pub fn require(&self, keys: &[&'static str]) -> Result<()> {
        for key in keys {
            self.get(*key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_present_and_missing() {
        let cfg = ReleaseConfig::from_pairs([(ENSEMBL_RELEASE, "110")]);
        assert_eq!(cfg.get(ENSEMBL_RELEASE).unwrap(), "110");
        match cfg.get(ENSEMBL_RELEASE_URL) {
            Err(GtfError::MissingConfig(key)) => assert_eq!(key, ENSEMBL_RELEASE_URL),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_require_reports_first_missing_key() {
        let cfg = ReleaseConfig::from_pairs([(FLYBASE_RELEASE_URL, "http://fly.example")]);
        let err = cfg
            .require(&[FLYBASE_RELEASE_URL, FLYBASE_RELEASE_DATE, FLYBASE_RELEASE_VERSION])
            .unwrap_err();
        assert!(matches!(err, GtfError::MissingConfig(FLYBASE_RELEASE_DATE)));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let cfg = ReleaseConfig::from_pairs([("HOME", "/root"), (ENSEMBL_RELEASE, "110")]);
        assert!(cfg.require(&[ENSEMBL_RELEASE]).is_ok());
        assert_eq!(cfg.inner.len(), 1);
    }

    #[test]
    fn test_non_utf8_value_is_not_reported_as_missing() {
        let cfg = ReleaseConfig::from_lookup(|key| match key {
            ENSEMBL_RELEASE_URL => Err(VarError::NotUnicode("http://ex\u{fffd}".into())),
            ENSEMBL_RELEASE => Ok("110".to_string()),
            _ => Err(VarError::NotPresent),
        });
        assert_eq!(cfg.get(ENSEMBL_RELEASE).unwrap(), "110");
        assert!(matches!(
            cfg.get(ENSEMBL_RELEASE_URL),
            Err(GtfError::NotUnicode(ENSEMBL_RELEASE_URL))
        ));
        assert!(matches!(
            cfg.get(FLYBASE_RELEASE_URL),
            Err(GtfError::MissingConfig(FLYBASE_RELEASE_URL))
        ));
    }
}
