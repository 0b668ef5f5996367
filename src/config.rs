use crate::secondary_validation::{NZ_BANK_ACCOUNT, NZ_IRD_NUMBER};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const BIND_ADDRESS_ENV_VAR: &str = "NZ_VALIDATORS_BIND_ADDRESS";
pub const DEFAULT_PORT: u16 = 7071;

/// Selects one of the New Zealand validators, e.g. `{"type": "NzIrdNumber"}`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(tag = "type")]
pub enum ValidatorKind {
    NzBankAccount,
    NzIrdNumber,
}

impl ValidatorKind {
    /// Name of the request parameter carrying the value to validate
    pub fn parameter_name(&self) -> &'static str {
        match self {
            ValidatorKind::NzBankAccount => "accountNumber",
            ValidatorKind::NzIrdNumber => "irdNumber",
        }
    }

    /// Name of the HTTP function exposing this validator
    pub fn function_name(&self) -> &'static str {
        match self {
            ValidatorKind::NzBankAccount => "ValidateNZBankAccount",
            ValidatorKind::NzIrdNumber => "ValidateNZIRDNumber",
        }
    }

    /// Value of the `validator` metric label
    pub fn metric_name(&self) -> &'static str {
        match self {
            ValidatorKind::NzBankAccount => NZ_BANK_ACCOUNT,
            ValidatorKind::NzIrdNumber => NZ_IRD_NUMBER,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{variable} is not a valid socket address: {value:?}")]
    InvalidBindAddress { variable: &'static str, value: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        }
    }
}

impl ServerConfig {
    /// Defaults, overridden by `NZ_VALIDATORS_BIND_ADDRESS` when it is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = ServerConfig::default();
        match lookup(BIND_ADDRESS_ENV_VAR) {
            Some(value) => {
                let bind_address =
                    value
                        .trim()
                        .parse()
                        .map_err(|_| ConfigError::InvalidBindAddress {
                            variable: BIND_ADDRESS_ENV_VAR,
                            value: value.clone(),
                        })?;
                Ok(config.bind_address(bind_address))
            }
            None => Ok(config),
        }
    }

    pub fn bind_address(&self, bind_address: SocketAddr) -> Self {
        self.mutate_clone(|x| x.bind_address = bind_address)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
