mod common;

use std::{collections::BTreeSet, str::FromStr};

use indexer_db::entity::{EventRecord, Swap};
use processor::{
    error::AppError,
    events::{ArgBag, BlockMeta, EventId, EventKind, IndexedEvent},
    handlers::map_event,
};
use sqlx::types::BigDecimal;

#[test]
fn every_event_maps_to_its_table_schema() {
    for (log_index, kind) in EventKind::ALL.into_iter().enumerate() {
        let id = EventId::new(10, 0, log_index as u64);
        let record = map_event(&common::event(kind, id)).unwrap();

        assert_eq!(record.table(), common::table(kind), "{kind}");
        assert_eq!(record.id(), id.to_string());

        let value = serde_json::to_value(&record).unwrap();
        let columns: BTreeSet<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        let mut expected: BTreeSet<&str> = ["id", "timestamp", "blockNumber"].into();
        expected.extend(common::fields(kind));

        assert_eq!(columns, expected, "{kind}");
    }
}

#[test]
fn envelope_is_copied_verbatim() {
    let event = common::event(EventKind::Donate, EventId::new(42, 3, 9));
    let EventRecord::Donate(donate) = map_event(&event).unwrap() else {
        panic!("expected a donate record");
    };

    assert_eq!(donate.id, "42-3-9");
    assert_eq!(donate.block_number, 42);
    assert_eq!(donate.timestamp, 1_700_000_042);
}

#[test]
fn swap_example_end_to_end() {
    let event = IndexedEvent {
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
    };

    let record = map_event(&event).unwrap();

    assert_eq!(
        record,
        EventRecord::Swap(Swap {
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
        })
    );
}

#[test]
fn initialize_without_sqrt_price_is_malformed() {
    let mut event = common::event(EventKind::Initialize, EventId::new(1, 0, 0));
    event.args.remove("sqrtPriceX96");

    let err = map_event(&event).unwrap_err();

    assert!(matches!(
        err,
        AppError::MalformedEvent {
            event: "Initialize",
            ..
        }
    ));
    assert!(err.to_string().contains("sqrtPriceX96"));
    assert!(err.is_halting());
}

#[test]
fn incompatible_type_is_malformed() {
    let mut event = common::event(EventKind::OperatorSet, EventId::new(1, 0, 0));
    event.args.insert("approved", "maybe");

    assert!(matches!(
        map_event(&event),
        Err(AppError::MalformedEvent { .. })
    ));
}

#[test]
fn fee_beyond_uint24_is_not_truncated() {
    let mut event = common::event(EventKind::Swap, EventId::new(1, 0, 0));
    event.args.insert("fee", "16777216");

    assert!(matches!(
        map_event(&event),
        Err(AppError::MalformedEvent { event: "Swap", .. })
    ));
}

#[test]
fn extra_arguments_are_ignored() {
    let mut event = common::event(EventKind::OwnershipTransferred, EventId::new(1, 0, 0));
    event.args.insert("previousOwner", "0xdead");

    let value = serde_json::to_value(map_event(&event).unwrap()).unwrap();
    assert!(value.get("previousOwner").is_none());
}

#[test]
fn token_created_keeps_empty_social_links() {
    let event = common::event(EventKind::TokenCreated, EventId::new(5, 1, 0));
    let EventRecord::TokenCreated(token) = map_event(&event).unwrap() else {
        panic!("expected a tokenCreated record");
    };

    assert_eq!(token.symbol, "BEAN");
    assert_eq!(token.decimals, 18);
    assert_eq!(token.discord, "");
    assert_eq!(
        token.initial_supply,
        BigDecimal::from_str("1000000000000000000000000000").unwrap()
    );
}
