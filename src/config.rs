use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Settings used to set up a [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Number of rows (and columns) of the board.
    pub size: usize,
    /// Word file with one word per line.
    pub wordfile: String,
    /// Cube file with one cube per line. The classic cubes are used if not set.
    pub cubefile: Option<String>,
    /// Seed for rolling the board. A random seed is used if not set.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: 4,
            wordfile: String::from("words.txt"),
            cubefile: None,
            seed: None,
        }
    }
}

fn parse<T: FromStr>(key: &str, value: String) -> Result<T, Error> {
    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(Error::InvalidConfigValue {
            key: String::from(key),
            value,
        }),
    }
}

impl Config {
    /// Read the default configuration, overridden by the environment variables
    /// `BOGGLE_SIZE`, `BOGGLE_WORDFILE`, `BOGGLE_CUBEFILE` and `BOGGLE_SEED`.
    /// ## Errors
    /// If `BOGGLE_SIZE` or `BOGGLE_SEED` is not a number.
    pub fn from_env() -> Result<Config, Error> {
        Config::default().with_overrides(|key| env::var(key).ok())
    }

    /// Override settings with the values returned by `lookup` for the `BOGGLE_*` keys.
    /// Keys for which `lookup` returns `None` keep their current value.
    /// ## Errors
    /// If the value for `BOGGLE_SIZE` or `BOGGLE_SEED` is not a number.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Config, Error};
    /// let config = Config::default().with_overrides(|key| match key {
    ///     "BOGGLE_SIZE" => Some(String::from("5")),
    ///     _ => None,
    /// })?;
    /// assert_eq!(config.size, 5);
    /// assert_eq!(config.wordfile, "words.txt");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Config, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("BOGGLE_SIZE") {
            self.size = parse("BOGGLE_SIZE", value)?;
        }
        if let Some(value) = lookup("BOGGLE_WORDFILE") {
            self.wordfile = value;
        }
        if let Some(value) = lookup("BOGGLE_CUBEFILE") {
            self.cubefile = Some(value);
        }
        if let Some(value) = lookup("BOGGLE_SEED") {
            self.seed = Some(parse("BOGGLE_SEED", value)?);
        }
        Ok(self)
    }

    #[must_use]
    pub fn with_size(mut self, size: usize) -> Config {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_wordfile(mut self, wordfile: &str) -> Config {
        self.wordfile = String::from(wordfile);
        self
    }

    #[must_use]
    pub fn with_cubefile(mut self, cubefile: &str) -> Config {
        self.cubefile = Some(String::from(cubefile));
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Config {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|&(k, v)| (String::from(k), String::from(v)))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default().with_overrides(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.size, 4);
        assert_eq!(config.cubefile, None);
    }

    #[test]
    fn test_overrides() -> Result<(), Error> {
        let config = Config::default().with_overrides(lookup(&[
            ("BOGGLE_SIZE", " 6 "),
            ("BOGGLE_WORDFILE", "en.txt"),
            ("BOGGLE_CUBEFILE", "big.txt"),
            ("BOGGLE_SEED", "42"),
        ]))?;
        let expect = Config::default()
            .with_size(6)
            .with_wordfile("en.txt")
            .with_cubefile("big.txt")
            .with_seed(42);
        assert_eq!(config, expect);
        Ok(())
    }

    #[test]
    fn test_invalid_number() {
        let err = Config::default()
            .with_overrides(lookup(&[("BOGGLE_SEED", "lots")]))
            .unwrap_err();
        match err {
            Error::InvalidConfigValue { key, value } => {
                assert_eq!(key, "BOGGLE_SEED");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
