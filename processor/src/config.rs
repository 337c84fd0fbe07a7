//! Processor configuration, read from the environment (`.env` supported)

use std::{env, str::FromStr, time::Duration};

use alloy::primitives::Address;

use crate::{error::AppError, events::Contract};

mod defaults {
    pub const POLL_INTERVAL: &str = "10";
    pub const BATCH_SIZE: &str = "25";
}

/// Addresses of the indexed contracts.
///
/// When an address is set, events of that contract are only accepted from it.
/// Left unset, any emitter matching the event signature is indexed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractsConfig {
    pub pool_manager: Option<Address>,
    pub token_factory: Option<Address>,
}

impl ContractsConfig {
    pub fn accepts(&self, contract: Contract, emitter: Address) -> bool {
        let expected = match contract {
            Contract::PoolManager => self.pool_manager,
            Contract::TokenFactory => self.token_factory,
        };

        expected.map_or(true, |address| address == emitter)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub chain_id: i64,
    pub poll_interval: Duration,
    pub batch_size: i32,
    pub contracts: ContractsConfig,
    pub redis_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let chain_id = required("CHAIN_ID")?;

        let poll_interval = env::var("POLL_INTERVAL")
            .unwrap_or_else(|_| defaults::POLL_INTERVAL.to_string());
        let poll_interval = parse::<u64>("POLL_INTERVAL", &poll_interval)?;

        let batch_size =
            env::var("BATCH_SIZE").unwrap_or_else(|_| defaults::BATCH_SIZE.to_string());
        let batch_size = parse::<i32>("BATCH_SIZE", &batch_size)?;
        if batch_size <= 0 {
            return Err(AppError::invalid_config("BATCH_SIZE", "must be positive"));
        }

        let contracts = ContractsConfig {
            pool_manager: optional("POOL_MANAGER_ADDRESS")?,
            token_factory: optional("TOKEN_FACTORY_ADDRESS")?,
        };

        Ok(Self {
            chain_id,
            poll_interval: Duration::from_secs(poll_interval),
            batch_size,
            contracts,
            redis_url: env::var("REDIS_URL").ok().filter(|url| !url.is_empty()),
        })
    }
}

fn parse<T>(name: &str, value: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: ToString,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| AppError::invalid_config(name, e))
}

fn required<T>(name: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: ToString,
{
    let value = env::var(name).map_err(|_| AppError::MissingEnvVar(name.into()))?;
    parse(name, &value)
}

fn optional<T>(name: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: ToString,
{
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => parse(name, &value).map(Some),
        _ => Ok(None),
    }
}
