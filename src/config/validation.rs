//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::units::MICROS_PER_SEC;
use super::{PlayerConfig, MAX_GPIO};

/// Validate a player configuration.
///
/// Checks:
/// - Travel bound is at least one step
/// - Every pin number is addressable and used for one role only
/// - Overhead calibration is below one second
pub fn validate_config(config: &PlayerConfig) -> Result<()> {
    if config.max_position == 0 {
        return Err(Error::Config(ConfigError::InvalidMaxPosition(
            config.max_position,
        )));
    }

    validate_pins(config)?;

    if config.overhead.value() >= MICROS_PER_SEC {
        return Err(Error::Config(ConfigError::InvalidOverhead(
            config.overhead.value(),
        )));
    }

    Ok(())
}

fn validate_pins(config: &PlayerConfig) -> Result<()> {
    let pins = config.pins.all();

    for (i, &pin) in pins.iter().enumerate() {
        if pin > MAX_GPIO {
            return Err(Error::Config(ConfigError::InvalidPin(pin)));
        }
        if pins[..i].contains(&pin) {
            return Err(Error::Config(ConfigError::DuplicatePin(pin)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Micros, PinMap};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&PlayerConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_max_position() {
        let config = PlayerConfig {
            max_position: 0,
            ..PlayerConfig::default()
        };

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidMaxPosition(0)))
        ));
    }

    #[test]
    fn test_duplicate_pin() {
        let config = PlayerConfig {
            pins: PinMap {
                enable: 17, // same line as winding B
                ..PinMap::default()
            },
            ..PlayerConfig::default()
        };

        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::DuplicatePin(17)))
        );
    }

    #[test]
    fn test_pin_out_of_range() {
        let config = PlayerConfig {
            pins: PinMap {
                c: 54,
                ..PinMap::default()
            },
            ..PlayerConfig::default()
        };

        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidPin(54)))
        );
    }

    #[test]
    fn test_overhead_too_large() {
        let config = PlayerConfig {
            overhead: Micros(1_000_000),
            ..PlayerConfig::default()
        };

        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidOverhead(1_000_000)))
        ));
    }
}
