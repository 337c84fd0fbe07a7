//! Raw log decoding
//!
//! Turns a queued [`EvmLogs`] row into an [`IndexedEvent`] by matching its
//! topic0 against the indexed ABIs and decoding topics + data into an
//! [`ArgBag`] keyed by ABI argument name.

use std::fmt::Display;

use alloy::{
    primitives::{Address, B256, I256, U256},
    sol_types::{Error as AbiError, SolEvent},
};
use indexer_db::entity::evm_logs::EvmLogs;

use crate::{config::ContractsConfig, error::AppError};

use super::{
    abi::{IPoolManager, ITokenFactory},
    ArgBag, ArgValue, BlockMeta, EventId, EventKind, IndexedEvent,
};

/// Decode a queued log.
///
/// Returns `Ok(None)` for logs that are not ours: unknown topic0, or an event
/// emitted by a contract other than the configured one. A known event whose
/// payload does not decode is a [`AppError::MalformedEvent`].
pub fn decode_log(
    log: &EvmLogs,
    contracts: &ContractsConfig,
) -> Result<Option<IndexedEvent>, AppError> {
    let Ok(topic0) = B256::try_from(log.event_signature.as_slice()) else {
        return Ok(None);
    };

    let Some(kind) = EventKind::from_topic0(&topic0) else {
        return Ok(None);
    };

    let emitter = Address::try_from(log.address.as_slice())
        .map_err(|_| AppError::malformed(kind, "emitter is not a 20-byte address"))?;

    if !contracts.accepts(kind.contract(), emitter) {
        tracing::debug!(event = %kind, %emitter, "skipping log from unconfigured emitter");
        return Ok(None);
    }

    let topics = log
        .topics
        .iter()
        .map(|topic| B256::try_from(topic.as_slice()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| AppError::malformed(kind, "topic is not 32 bytes"))?;

    let args = decode_args(kind, &topics, &log.data)
        .map_err(|e| AppError::malformed(kind, e.to_string()))?;

    let position = |name: &str, value: i64| {
        u64::try_from(value).map_err(|_| AppError::malformed(kind, format!("negative {name}")))
    };

    let id = EventId::new(
        position("block number", log.block_number)?,
        position("transaction index", log.transaction_index)?,
        position("log index", log.log_index)?,
    );

    let block = BlockMeta {
        timestamp: position("block timestamp", log.block_timestamp)?,
        number: id.block_number,
    };

    Ok(Some(IndexedEvent {
        kind,
        id,
        args,
        block,
    }))
}

/// sol! maps odd widths (uint24, uint160, int24) to ruint aliases; going
/// through the decimal form normalises every width to 256 bits.
fn uint(value: impl Display) -> Result<ArgValue, AbiError> {
    U256::from_str_radix(&value.to_string(), 10)
        .map(ArgValue::Uint)
        .map_err(|e| AbiError::custom(e.to_string()))
}

fn int(value: impl Display) -> Result<ArgValue, AbiError> {
    I256::from_dec_str(&value.to_string())
        .map(ArgValue::Int)
        .map_err(|e| AbiError::custom(e.to_string()))
}

fn decode_args(kind: EventKind, topics: &[B256], data: &[u8]) -> Result<ArgBag, AbiError> {
    let topics = || topics.iter().copied();

    let bag = match kind {
        EventKind::Approval => {
            let e = IPoolManager::Approval::decode_raw_log(topics(), data, true)?;
            ArgBag::new()
                .with("owner", e.owner)
                .with("spender", e.spender)
                .with("id", e.id)
                .with("amount", e.amount)
        }
        EventKind::Donate => {
            let e = IPoolManager::Donate::decode_raw_log(topics(), data, true)?;
            ArgBag::new()
                .with("id", e.id)
                .with("sender", e.sender)
                .with("amount0", e.amount0)
                .with("amount1", e.amount1)
        }
        EventKind::Initialize => {
            let e = IPoolManager::Initialize::decode_raw_log(topics(), data, true)?;
            ArgBag::new()
                .with("id", e.id)
                .with("currency0", e.currency0)
                .with("currency1", e.currency1)
                .with("fee", uint(e.fee)?)
                .with("tickSpacing", int(e.tickSpacing)?)
                .with("hooks", e.hooks)
                .with("sqrtPriceX96", uint(e.sqrtPriceX96)?)
                .with("tick", int(e.tick)?)
        }
        EventKind::ModifyLiquidity => {
            let e = IPoolManager::ModifyLiquidity::decode_raw_log(topics(), data, true)?;
            ArgBag::new()
                .with("id", e.id)
                .with("sender", e.sender)
                .with("tickLower", int(e.tickLower)?)
                .with("tickUpper", int(e.tickUpper)?)
                .with("liquidityDelta", e.liquidityDelta)
                .with("salt", e.salt)
        }
        EventKind::OperatorSet => {
            let e = IPoolManager::OperatorSet::decode_raw_log(topics(), data, true)?;
            ArgBag::new()
                .with("owner", e.owner)
                .with("operator", e.operator)
                .with("approved", e.approved)
        }
        EventKind::OwnershipTransferred => {
            let e = IPoolManager::OwnershipTransferred::decode_raw_log(topics(), data, true)?;
            ArgBag::new()
                .with("user", e.user)
                .with("newOwner", e.newOwner)
        }
        EventKind::ProtocolFeeControllerUpdated => {
            let e =
                IPoolManager::ProtocolFeeControllerUpdated::decode_raw_log(topics(), data, true)?;
            ArgBag::new().with("protocolFeeController", e.protocolFeeController)
        }
        EventKind::ProtocolFeeUpdated => {
            let e = IPoolManager::ProtocolFeeUpdated::decode_raw_log(topics(), data, true)?;
            ArgBag::new()
                .with("id", e.id)
                .with("protocolFee", uint(e.protocolFee)?)
        }
        EventKind::Swap => {
            let e = IPoolManager::Swap::decode_raw_log(topics(), data, true)?;
            ArgBag::new()
                .with("id", e.id)
                .with("sender", e.sender)
                .with("amount0", int(e.amount0)?)
                .with("amount1", int(e.amount1)?)
                .with("sqrtPriceX96", uint(e.sqrtPriceX96)?)
                .with("liquidity", uint(e.liquidity)?)
                .with("tick", int(e.tick)?)
                .with("fee", uint(e.fee)?)
        }
        EventKind::Transfer => {
            let e = IPoolManager::Transfer::decode_raw_log(topics(), data, true)?;
            ArgBag::new()
                .with("caller", e.caller)
                .with("from", e.from)
                .with("to", e.to)
                .with("id", e.id)
                .with("amount", e.amount)
        }
        EventKind::TokenCreated => {
            let e = ITokenFactory::TokenCreated::decode_raw_log(topics(), data, true)?;
            ArgBag::new()
                .with("tokenAddress", e.tokenAddress)
                .with("creator", e.creator)
                .with("name", e.name)
                .with("symbol", e.symbol)
                .with("decimals", uint(e.decimals)?)
                .with("initialSupply", e.initialSupply)
                .with("description", e.description)
                .with("image", e.image)
                .with("website", e.website)
                .with("twitter", e.twitter)
                .with("telegram", e.telegram)
                .with("discord", e.discord)
        }
    };

    Ok(bag)
}
