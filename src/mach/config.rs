use super::{Address, Cell};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Machine dimensions
///
/// Images are only portable between machines with the same `memory_size`.
/// The defaults match the standard `ngaImage`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub memory_size: Address,
    pub data_depth: usize,
    pub address_depth: usize,
    pub image_prefix: Address,
    pub tib: Address,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            memory_size: 524_288 * 16,
            data_depth: 512,
            address_depth: 2048,
            image_prefix: 1_000_000,
            tib: 1025,
        }
    }
}

impl Config {
    pub fn with_memory_size(self, memory_size: Address) -> Config {
        Config {
            memory_size,
            ..self
        }
    }
    pub fn with_stack_depths(self, data_depth: usize, address_depth: usize) -> Config {
        Config {
            data_depth,
            address_depth,
            ..self
        }
    }
    pub fn with_image_prefix(self, image_prefix: Address) -> Config {
        Config {
            image_prefix,
            ..self
        }
    }
    pub fn with_tib(self, tib: Address) -> Config {
        Config { tib, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        if self.memory_size == 0 || self.memory_size > Cell::max_value() as Address {
            return Err(error!(BadConfig; "MEMORY SIZE"));
        }
        if self.data_depth == 0 || self.address_depth == 0 {
            return Err(error!(BadConfig; "STACK DEPTH"));
        }
        if self.tib >= self.memory_size {
            return Err(error!(BadConfig; "TIB OUTSIDE MEMORY"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_tib_outside_memory() {
        let config = Config::default().with_memory_size(1024);
        assert!(config.validate().is_err());
        assert!(config.with_tib(100).validate().is_ok());
    }
}
