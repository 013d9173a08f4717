//! Guard configuration from the environment.
//!
//! `SafeParams::default()` is what the formulas are defined with. Callers that
//! want to experiment with other bounds can set them in the environment (or a
//! `.env` file):
//!
//! - `SAFE_EXP_MAX_VALUE`
//! - `SAFE_ARCTAN_MAX_VALUE`
//!
//! Unset variables keep their defaults.

use log::debug;

use crate::domain::SafeParams;
use crate::error::{EvalError, EvalResult};

pub const ENV_EXP_MAX_VALUE: &str = "SAFE_EXP_MAX_VALUE";
pub const ENV_ARCTAN_MAX_VALUE: &str = "SAFE_ARCTAN_MAX_VALUE";

impl SafeParams {
    /// Defaults overridden by `SAFE_*` variables, after loading `.env` if present.
    pub fn from_env() -> EvalResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`SafeParams::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> EvalResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut params = SafeParams::default();
        if let Some(v) = override_value(&lookup, ENV_EXP_MAX_VALUE)? {
            params.exp_max_value = v;
        }
        if let Some(v) = override_value(&lookup, ENV_ARCTAN_MAX_VALUE)? {
            params.arctan_max_value = v;
        }
        Ok(params)
    }
}

fn override_value<F>(lookup: &F, key: &'static str) -> EvalResult<Option<f64>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    let value: f64 = raw.trim().parse().map_err(|_| EvalError::InvalidConfig {
        key,
        value: raw.clone(),
        reason: "not a number",
    })?;
    if !(value.is_finite() && value > 0.0) {
        return Err(EvalError::InvalidConfig {
            key,
            value: raw,
            reason: "must be finite and > 0",
        });
    }

    debug!("{key} overridden: {value}");
    Ok(Some(value))
}
