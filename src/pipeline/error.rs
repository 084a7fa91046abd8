//! Session start failures and control input rejection reasons

use thiserror::Error;

use crate::config::{ConfigError, ControlBoundsConfig};
use crate::farm_model::ModelError;
use crate::types::ControlKind;

/// Why a control change was rejected. The session is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ControlError {
    #[error("{control} must be a finite number")]
    NotFinite { control: ControlKind },

    #[error("{control} {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        control: ControlKind,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Feed cost must be greater than zero (got {value})")]
    NonPositiveCost { value: f64 },

    #[error("Concentrate feed rejected: {0}")]
    DegenerateYield(#[from] ModelError),
}

/// Why a session could not be started
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    #[error("Invalid seed controls: {0}")]
    InvalidSeed(#[from] ControlError),
}

/// Check one control value against its domain.
pub fn validate_control(
    kind: ControlKind,
    value: f64,
    bounds: &ControlBoundsConfig,
) -> Result<(), ControlError> {
    if !value.is_finite() {
        return Err(ControlError::NotFinite { control: kind });
    }

    let max = match kind {
        ControlKind::ConcentrateFeed => bounds.feed_max_kg_per_day,
        ControlKind::NitrogenRate => bounds.nitrogen_max_kg_per_ha,
        ControlKind::FeedCost => {
            if value <= 0.0 {
                return Err(ControlError::NonPositiveCost { value });
            }
            return Ok(());
        }
    };

    if !(0.0..=max).contains(&value) {
        return Err(ControlError::OutOfRange {
            control: kind,
            value,
            min: 0.0,
            max,
        });
    }
    Ok(())
}
