//! Pool manager event mappers
//!
//! The ABI `id` argument is a pool id (`bytes32`) on pool events and an
//! ERC-6909 token id on `Approval`/`Transfer`; it is stored as `poolId` and
//! `tokenId` respectively.

use indexer_db::entity::{
    Approval, Donate, EventRecord, Initialize, ModifyLiquidity, OperatorSet, OwnershipTransferred,
    ProtocolFeeControllerUpdated, ProtocolFeeUpdated, Swap, Transfer,
};

use crate::events::IndexedEvent;

use super::{Args, Envelope, HandlerResult};

pub fn approval(event: &IndexedEvent) -> HandlerResult<EventRecord> {
    let args = Args::new(event);
    let envelope = Envelope::of(event)?;

    Ok(EventRecord::Approval(Approval {
        id: envelope.id,
        timestamp: envelope.timestamp,
        block_number: envelope.block_number,
        owner: args.address("owner")?,
        spender: args.address("spender")?,
        token_id: args.uint("id")?,
        amount: args.uint("amount")?,
    }))
}

pub fn donate(event: &IndexedEvent) -> HandlerResult<EventRecord> {
    let args = Args::new(event);
    let envelope = Envelope::of(event)?;

    Ok(EventRecord::Donate(Donate {
        id: envelope.id,
        timestamp: envelope.timestamp,
        block_number: envelope.block_number,
        pool_id: args.bytes32("id")?,
        sender: args.address("sender")?,
        amount0: args.uint("amount0")?,
        amount1: args.uint("amount1")?,
    }))
}

pub fn initialize(event: &IndexedEvent) -> HandlerResult<EventRecord> {
    let args = Args::new(event);
    let envelope = Envelope::of(event)?;

    Ok(EventRecord::Initialize(Initialize {
        id: envelope.id,
        timestamp: envelope.timestamp,
        block_number: envelope.block_number,
        pool_id: args.bytes32("id")?,
        currency0: args.address("currency0")?,
        currency1: args.address("currency1")?,
        fee: args.uint24("fee")?,
        tick_spacing: args.int24("tickSpacing")?,
        hooks: args.address("hooks")?,
        sqrt_price_x96: args.uint("sqrtPriceX96")?,
        tick: args.int24("tick")?,
    }))
}

pub fn modify_liquidity(event: &IndexedEvent) -> HandlerResult<EventRecord> {
    let args = Args::new(event);
    let envelope = Envelope::of(event)?;

    Ok(EventRecord::ModifyLiquidity(ModifyLiquidity {
        id: envelope.id,
        timestamp: envelope.timestamp,
        block_number: envelope.block_number,
        pool_id: args.bytes32("id")?,
        sender: args.address("sender")?,
        tick_lower: args.int24("tickLower")?,
        tick_upper: args.int24("tickUpper")?,
        liquidity_delta: args.int("liquidityDelta")?,
        salt: args.bytes32("salt")?,
    }))
}

pub fn operator_set(event: &IndexedEvent) -> HandlerResult<EventRecord> {
    let args = Args::new(event);
    let envelope = Envelope::of(event)?;

    Ok(EventRecord::OperatorSet(OperatorSet {
        id: envelope.id,
        timestamp: envelope.timestamp,
        block_number: envelope.block_number,
        owner: args.address("owner")?,
        operator: args.address("operator")?,
        approved: args.boolean("approved")?,
    }))
}

pub fn ownership_transferred(event: &IndexedEvent) -> HandlerResult<EventRecord> {
    let args = Args::new(event);
    let envelope = Envelope::of(event)?;

    Ok(EventRecord::OwnershipTransferred(OwnershipTransferred {
        id: envelope.id,
        timestamp: envelope.timestamp,
        block_number: envelope.block_number,
        user: args.address("user")?,
        new_owner: args.address("newOwner")?,
    }))
}

pub fn protocol_fee_controller_updated(event: &IndexedEvent) -> HandlerResult<EventRecord> {
    let args = Args::new(event);
    let envelope = Envelope::of(event)?;

    Ok(EventRecord::ProtocolFeeControllerUpdated(
        ProtocolFeeControllerUpdated {
            id: envelope.id,
            timestamp: envelope.timestamp,
            block_number: envelope.block_number,
            protocol_fee_controller: args.address("protocolFeeController")?,
        },
    ))
}

pub fn protocol_fee_updated(event: &IndexedEvent) -> HandlerResult<EventRecord> {
    let args = Args::new(event);
    let envelope = Envelope::of(event)?;

    Ok(EventRecord::ProtocolFeeUpdated(ProtocolFeeUpdated {
        id: envelope.id,
        timestamp: envelope.timestamp,
        block_number: envelope.block_number,
        pool_id: args.bytes32("id")?,
        protocol_fee: args.uint24("protocolFee")?,
    }))
}

/// `amount0`/`amount1` are signed deltas from the pool's perspective
pub fn swap(event: &IndexedEvent) -> HandlerResult<EventRecord> {
    let args = Args::new(event);
    let envelope = Envelope::of(event)?;

    Ok(EventRecord::Swap(Swap {
        id: envelope.id,
        timestamp: envelope.timestamp,
        block_number: envelope.block_number,
        pool_id: args.bytes32("id")?,
        sender: args.address("sender")?,
        amount0: args.int("amount0")?,
        amount1: args.int("amount1")?,
        sqrt_price_x96: args.uint("sqrtPriceX96")?,
        liquidity: args.uint("liquidity")?,
        tick: args.int24("tick")?,
        fee: args.uint24("fee")?,
    }))
}

pub fn transfer(event: &IndexedEvent) -> HandlerResult<EventRecord> {
    let args = Args::new(event);
    let envelope = Envelope::of(event)?;

    Ok(EventRecord::Transfer(Transfer {
        id: envelope.id,
        timestamp: envelope.timestamp,
        block_number: envelope.block_number,
        caller: args.address("caller")?,
        from: args.address("from")?,
        to: args.address("to")?,
        token_id: args.uint("id")?,
        amount: args.uint("amount")?,
    }))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use sqlx::types::BigDecimal;

    use super::*;
    use crate::{
        error::AppError,
        events::{ArgBag, BlockMeta, EventKind},
    };

    fn swap_event() -> IndexedEvent {
        IndexedEvent {
            kind: EventKind::Swap,
            id: "10-5-2".parse().unwrap(),
            args: ArgBag::new()
                .with("id", "0xabc...poolId")
                .with("sender", "0xSENDER")
                .with("amount0", "-1000")
                .with("amount1", "2000")
                .with("sqrtPriceX96", "79228162514264337593543950336")
                .with("liquidity", "500000")
                .with("tick", "-23027")
                .with("fee", "3000"),
            block: BlockMeta {
                timestamp: 1_700_000_000,
                number: 186_179_150,
            },
        }
    }

    #[test]
    fn swap_maps_every_field() {
        let record = swap(&swap_event()).unwrap();

        let expected = Swap {
            id: "10-5-2".into(),
            timestamp: 1_700_000_000,
            block_number: 186_179_150,
            pool_id: "0xabc...poolId".into(),
            sender: "0xSENDER".into(),
            amount0: BigDecimal::from(-1000),
            amount1: BigDecimal::from(2000),
            sqrt_price_x96: BigDecimal::from_str("79228162514264337593543950336").unwrap(),
            liquidity: BigDecimal::from(500_000),
            tick: -23027,
            fee: 3000,
        };

        assert_eq!(record, EventRecord::Swap(expected));
    }

    #[test]
    fn swap_without_tick_writes_nothing() {
        let mut event = swap_event();
        event.args.remove("tick");

        let err = swap(&event).unwrap_err();
        assert!(matches!(err, AppError::MalformedEvent { event: "Swap", .. }));
    }

    #[test]
    fn approval_renames_id_to_token_id() {
        let event = IndexedEvent {
            kind: EventKind::Approval,
            id: "7-0-1".parse().unwrap(),
            args: ArgBag::new()
                .with("owner", "0xowner")
                .with("spender", "0xspender")
                .with("id", "42")
                .with("amount", "1000000000000000000000"),
            block: BlockMeta {
                timestamp: 1,
                number: 7,
            },
        };

        let EventRecord::Approval(approval) = approval(&event).unwrap() else {
            panic!("expected an approval record");
        };

        assert_eq!(approval.token_id, BigDecimal::from(42));
        assert_eq!(
            approval.amount,
            BigDecimal::from_str("1000000000000000000000").unwrap()
        );
    }

    #[test]
    fn modify_liquidity_keeps_negative_delta() {
        let event = IndexedEvent {
            kind: EventKind::ModifyLiquidity,
            id: "8-2-0".parse().unwrap(),
            args: ArgBag::new()
                .with("id", "0xpool")
                .with("sender", "0xrouter")
                .with("tickLower", "-887220")
                .with("tickUpper", "887220")
                .with("liquidityDelta", "-123456789012345678901234567890")
                .with("salt", "0x00"),
            block: BlockMeta {
                timestamp: 1,
                number: 8,
            },
        };

        let EventRecord::ModifyLiquidity(modify) = modify_liquidity(&event).unwrap() else {
            panic!("expected a modifyLiquidity record");
        };

        assert_eq!(modify.tick_lower, -887_220);
        assert_eq!(
            modify.liquidity_delta,
            BigDecimal::from_str("-123456789012345678901234567890").unwrap()
        );
    }
}
