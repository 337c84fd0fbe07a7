//! Event fixtures shared by the integration tests

#![allow(dead_code)]

use alloy::{
    primitives::{
        address,
        aliases::{I24, U160, U24},
        b256, Address,
    },
    sol_types::SolEvent,
};
use indexer_db::entity::evm_logs::EvmLogs;
use processor::events::{abi::IPoolManager, ArgBag, BlockMeta, EventId, EventKind, IndexedEvent};

pub const POOL_ID: &str = "0x6c5a3e2b4e6f2c0c1a0d7b5b2bfe6bbf6a4f1f1d3c2b1a09f8e7d6c5b4a39281";
pub const SENDER: &str = "0x66a9893cc07d91d95644aedd05d03f95e1dba8af";
pub const OWNER: &str = "0x1f98431c8ad98523631ae4a59f267346ea31f984";

pub fn block(number: u64) -> BlockMeta {
    BlockMeta {
        timestamp: 1_700_000_000 + number,
        number,
    }
}

/// Valid argument bag for every indexed event type, keyed by ABI names
pub fn args(kind: EventKind) -> ArgBag {
    match kind {
        EventKind::Approval => ArgBag::new()
            .with("owner", OWNER)
            .with("spender", SENDER)
            .with("id", "1")
            .with("amount", "1000"),
        EventKind::Donate => ArgBag::new()
            .with("id", POOL_ID)
            .with("sender", SENDER)
            .with("amount0", "5")
            .with("amount1", "7"),
        EventKind::Initialize => ArgBag::new()
            .with("id", POOL_ID)
            .with("currency0", "0x0000000000000000000000000000000000000000")
            .with("currency1", "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48")
            .with("fee", "3000")
            .with("tickSpacing", "60")
            .with("hooks", "0x0000000000000000000000000000000000000000")
            .with("sqrtPriceX96", "79228162514264337593543950336")
            .with("tick", "0"),
        EventKind::ModifyLiquidity => ArgBag::new()
            .with("id", POOL_ID)
            .with("sender", SENDER)
            .with("tickLower", "-120")
            .with("tickUpper", "120")
            .with("liquidityDelta", "1000000000000")
            .with(
                "salt",
                "0x0000000000000000000000000000000000000000000000000000000000000000",
            ),
        EventKind::OperatorSet => ArgBag::new()
            .with("owner", OWNER)
            .with("operator", SENDER)
            .with("approved", true),
        EventKind::OwnershipTransferred => ArgBag::new()
            .with("user", "0x0000000000000000000000000000000000000000")
            .with("newOwner", OWNER),
        EventKind::ProtocolFeeControllerUpdated => {
            ArgBag::new().with("protocolFeeController", OWNER)
        }
        EventKind::ProtocolFeeUpdated => ArgBag::new()
            .with("id", POOL_ID)
            .with("protocolFee", "1000"),
        EventKind::Swap => ArgBag::new()
            .with("id", POOL_ID)
            .with("sender", SENDER)
            .with("amount0", "-1000")
            .with("amount1", "2000")
            .with("sqrtPriceX96", "79228162514264337593543950336")
            .with("liquidity", "500000")
            .with("tick", "-23027")
            .with("fee", "3000"),
        EventKind::Transfer => ArgBag::new()
            .with("caller", SENDER)
            .with("from", OWNER)
            .with("to", SENDER)
            .with("id", "1")
            .with("amount", "250"),
        EventKind::TokenCreated => ArgBag::new()
            .with("tokenAddress", "0x2222222222222222222222222222222222222222")
            .with("creator", OWNER)
            .with("name", "Bean")
            .with("symbol", "BEAN")
            .with("decimals", "18")
            .with("initialSupply", "1000000000000000000000000000")
            .with("description", "Magic beans")
            .with("image", "ipfs://bafybean")
            .with("website", "https://bean.example")
            .with("twitter", "https://x.com/bean")
            .with("telegram", "https://t.me/bean")
            .with("discord", ""),
    }
}

pub fn event(kind: EventKind, id: EventId) -> IndexedEvent {
    IndexedEvent {
        kind,
        id,
        args: args(kind),
        block: block(id.block_number),
    }
}

/// Table columns per event type, beyond id/timestamp/blockNumber
pub fn fields(kind: EventKind) -> &'static [&'static str] {
    match kind {
        EventKind::Approval => &["owner", "spender", "tokenId", "amount"],
        EventKind::Donate => &["poolId", "sender", "amount0", "amount1"],
        EventKind::Initialize => &[
            "poolId",
            "currency0",
            "currency1",
            "fee",
            "tickSpacing",
            "hooks",
            "sqrtPriceX96",
            "tick",
        ],
        EventKind::ModifyLiquidity => &[
            "poolId",
            "sender",
            "tickLower",
            "tickUpper",
            "liquidityDelta",
            "salt",
        ],
        EventKind::OperatorSet => &["owner", "operator", "approved"],
        EventKind::OwnershipTransferred => &["user", "newOwner"],
        EventKind::ProtocolFeeControllerUpdated => &["protocolFeeController"],
        EventKind::ProtocolFeeUpdated => &["poolId", "protocolFee"],
        EventKind::Swap => &[
            "poolId",
            "sender",
            "amount0",
            "amount1",
            "sqrtPriceX96",
            "liquidity",
            "tick",
            "fee",
        ],
        EventKind::Transfer => &["caller", "from", "to", "tokenId", "amount"],
        EventKind::TokenCreated => &[
            "tokenAddress",
            "creator",
            "name",
            "symbol",
            "decimals",
            "initialSupply",
            "description",
            "image",
            "website",
            "twitter",
            "telegram",
            "discord",
        ],
    }
}

/// Table name per event type
pub fn table(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Approval => "approval",
        EventKind::Donate => "donate",
        EventKind::Initialize => "initialize",
        EventKind::ModifyLiquidity => "modifyLiquidity",
        EventKind::OperatorSet => "operatorSet",
        EventKind::OwnershipTransferred => "ownershipTransferred",
        EventKind::ProtocolFeeControllerUpdated => "protocolFeeControllerUpdated",
        EventKind::ProtocolFeeUpdated => "protocolFeeUpdated",
        EventKind::Swap => "swap",
        EventKind::Transfer => "transfer",
        EventKind::TokenCreated => "tokenCreated",
    }
}

pub const CHAIN_ID: i64 = 130;
pub const POOL_MANAGER: Address = address!("000000000004444c5dc75cB358380D2e3dE08A90");

/// A pool manager swap as emitted on chain
pub fn swap_log_event() -> IPoolManager::Swap {
    IPoolManager::Swap {
        id: b256!("6c5a3e2b4e6f2c0c1a0d7b5b2bfe6bbf6a4f1f1d3c2b1a09f8e7d6c5b4a39281"),
        sender: address!("66a9893cc07d91d95644aedd05d03f95e1dba8af"),
        amount0: -1000,
        amount1: 2000,
        sqrtPriceX96: U160::from(79_228_162_514_264_337_593_543_950_336_u128),
        liquidity: 500_000,
        tick: I24::try_from(-23027i32).unwrap(),
        fee: U24::try_from(3000u32).unwrap(),
    }
}

/// Queue row for an encoded event, as the log collector stores it
pub fn queued_log<E: SolEvent>(event: &E, queue_id: i64, block: i64, log_index: i64) -> EvmLogs {
    let topics: Vec<Vec<u8>> = event
        .encode_topics()
        .into_iter()
        .map(|topic| topic.0.to_vec())
        .collect();

    EvmLogs {
        id: queue_id,
        chain_id: CHAIN_ID,
        block_number: block,
        block_timestamp: 1_700_000_000 + block,
        transaction_hash: vec![0xab; 32],
        transaction_index: 0,
        log_index,
        address: POOL_MANAGER.to_vec(),
        event_signature: topics[0].clone(),
        topics,
        data: event.encode_data(),
        created_at: None,
    }
}
