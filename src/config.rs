use std::env;

use crate::buffer::CircularBuffer;
use crate::error::{Error, Result};

pub const DEFAULT_CAPACITY: usize = 16;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub capacity: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Read `CIRCBUF_CAPACITY` and `CIRCBUF_LOG_LEVEL`.
    ///
    /// A missing capacity falls back to the default; a present but invalid
    /// one is an error.
    pub fn from_env() -> Result<Self> {
        let capacity = match env::var("CIRCBUF_CAPACITY") {
            Ok(v) => Self::parse_capacity(&v)?,
            Err(env::VarError::NotPresent) => DEFAULT_CAPACITY,
            Err(env::VarError::NotUnicode(raw)) => {
                return Err(Error::InvalidCapacity(raw.to_string_lossy().into_owned()));
            }
        };

        let log_level =
            env::var("CIRCBUF_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            capacity,
            log_level,
        })
    }

    pub fn parse_capacity(value: &str) -> Result<usize> {
        let capacity: usize = value
            .trim()
            .parse()
            .map_err(|_| Error::InvalidCapacity(value.to_string()))?;
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(capacity)
    }

    pub fn build_buffer<T>(&self) -> Result<CircularBuffer<T>> {
        CircularBuffer::new(self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // env mutation is process-wide; tests touching it run #[serial]
    fn clear_env() {
        env::remove_var("CIRCBUF_CAPACITY");
        env::remove_var("CIRCBUF_LOG_LEVEL");
    }

    #[test]
    #[serial]
    fn defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.capacity, 16);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn custom_values() {
        clear_env();
        env::set_var("CIRCBUF_CAPACITY", "3");
        env::set_var("CIRCBUF_LOG_LEVEL", "trace");
        let config = Config::from_env().unwrap();
        assert_eq!(config.capacity, 3);
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.build_buffer::<u8>().unwrap().capacity(), 3);
        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_capacity_env() {
        clear_env();
        env::set_var("CIRCBUF_CAPACITY", "lots");
        assert_eq!(
            Config::from_env(),
            Err(Error::InvalidCapacity("lots".to_string()))
        );
        clear_env();
    }

    #[test]
    #[serial]
    #[cfg(unix)]
    fn non_unicode_capacity_env() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        clear_env();
        env::set_var("CIRCBUF_CAPACITY", OsString::from_vec(vec![0x33, 0xff]));
        assert!(matches!(
            Config::from_env(),
            Err(Error::InvalidCapacity(_))
        ));
        clear_env();
    }

    #[test]
    fn parse_capacity_rejects_bad_input() {
        assert_eq!(Config::parse_capacity(" 8 "), Ok(8));
        assert_eq!(Config::parse_capacity("0"), Err(Error::ZeroCapacity));
        assert!(matches!(
            Config::parse_capacity("-1"),
            Err(Error::InvalidCapacity(_))
        ));
        assert!(matches!(
            Config::parse_capacity(""),
            Err(Error::InvalidCapacity(_))
        ));
    }
}
