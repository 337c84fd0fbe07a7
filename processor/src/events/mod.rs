//! Decoded event model
//!
//! An [`IndexedEvent`] is what the event source hands to the mapper: the event
//! type tag, its chain-ordered id, the ABI arguments by name and the block it
//! was emitted in.

pub mod abi;
pub mod decode;

use std::{collections::BTreeMap, fmt, str::FromStr};

use alloy::{
    primitives::{Address, B256, I256, U256},
    sol_types::SolEvent,
};

use abi::{IPoolManager, ITokenFactory};

/// Contract an event type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contract {
    PoolManager,
    TokenFactory,
}

/// Closed set of indexed event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Approval,
    Donate,
    Initialize,
    ModifyLiquidity,
    OperatorSet,
    OwnershipTransferred,
    ProtocolFeeControllerUpdated,
    ProtocolFeeUpdated,
    Swap,
    Transfer,
    TokenCreated,
}

impl EventKind {
    pub const ALL: [EventKind; 11] = [
        EventKind::Approval,
        EventKind::Donate,
        EventKind::Initialize,
        EventKind::ModifyLiquidity,
        EventKind::OperatorSet,
        EventKind::OwnershipTransferred,
        EventKind::ProtocolFeeControllerUpdated,
        EventKind::ProtocolFeeUpdated,
        EventKind::Swap,
        EventKind::Transfer,
        EventKind::TokenCreated,
    ];

    /// Event name as declared in the ABI
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Approval => "Approval",
            EventKind::Donate => "Donate",
            EventKind::Initialize => "Initialize",
            EventKind::ModifyLiquidity => "ModifyLiquidity",
            EventKind::OperatorSet => "OperatorSet",
            EventKind::OwnershipTransferred => "OwnershipTransferred",
            EventKind::ProtocolFeeControllerUpdated => "ProtocolFeeControllerUpdated",
            EventKind::ProtocolFeeUpdated => "ProtocolFeeUpdated",
            EventKind::Swap => "Swap",
            EventKind::Transfer => "Transfer",
            EventKind::TokenCreated => "TokenCreated",
        }
    }

    pub fn contract(self) -> Contract {
        match self {
            EventKind::TokenCreated => Contract::TokenFactory,
            _ => Contract::PoolManager,
        }
    }

    /// keccak256 of the canonical event signature (topic0)
    pub fn signature_hash(self) -> B256 {
        match self {
            EventKind::Approval => IPoolManager::Approval::SIGNATURE_HASH,
            EventKind::Donate => IPoolManager::Donate::SIGNATURE_HASH,
            EventKind::Initialize => IPoolManager::Initialize::SIGNATURE_HASH,
            EventKind::ModifyLiquidity => IPoolManager::ModifyLiquidity::SIGNATURE_HASH,
            EventKind::OperatorSet => IPoolManager::OperatorSet::SIGNATURE_HASH,
            EventKind::OwnershipTransferred => IPoolManager::OwnershipTransferred::SIGNATURE_HASH,
            EventKind::ProtocolFeeControllerUpdated => {
                IPoolManager::ProtocolFeeControllerUpdated::SIGNATURE_HASH
            }
            EventKind::ProtocolFeeUpdated => IPoolManager::ProtocolFeeUpdated::SIGNATURE_HASH,
            EventKind::Swap => IPoolManager::Swap::SIGNATURE_HASH,
            EventKind::Transfer => IPoolManager::Transfer::SIGNATURE_HASH,
            EventKind::TokenCreated => ITokenFactory::TokenCreated::SIGNATURE_HASH,
        }
    }

    /// Resolve a topic0 to an event type, `None` for events we do not index
    pub fn from_topic0(topic0: &B256) -> Option<EventKind> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.signature_hash() == *topic0)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown event type `{s}`"))
    }
}

/// Chain position of a log: `(block, transaction index, log index)`.
///
/// Ordering follows chain order, and the textual form
/// `"{block}-{transaction}-{log}"` is the primary key of every table. The text
/// does not sort in chain order (`"10-10-0" < "10-9-0"`): compare parsed ids,
/// never the strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId {
    pub block_number: u64,
    pub transaction_index: u64,
    pub log_index: u64,
}

impl EventId {
    pub fn new(block_number: u64, transaction_index: u64, log_index: u64) -> Self {
        Self {
            block_number,
            transaction_index,
            log_index,
        }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.block_number, self.transaction_index, self.log_index
        )
    }
}

impl FromStr for EventId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split('-')
            .map(str::parse::<u64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid event id `{s}`: {e}"))?;

        match parts.as_slice() {
            [block, tx, log] => Ok(EventId::new(*block, *tx, *log)),
            _ => Err(format!(
                "invalid event id `{s}`: expected block-transaction-log"
            )),
        }
    }
}

/// Block the event was emitted in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMeta {
    pub timestamp: u64,
    pub number: u64,
}

/// A single decoded argument value.
///
/// `String` is accepted for every field type: numeric strings are parsed as
/// decimal integers, address-like fields are stored verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Address(Address),
    Bytes32(B256),
    Uint(U256),
    Int(I256),
    Bool(bool),
    String(String),
}

impl From<Address> for ArgValue {
    fn from(value: Address) -> Self {
        ArgValue::Address(value)
    }
}

impl From<B256> for ArgValue {
    fn from(value: B256) -> Self {
        ArgValue::Bytes32(value)
    }
}

impl From<U256> for ArgValue {
    fn from(value: U256) -> Self {
        ArgValue::Uint(value)
    }
}

impl From<I256> for ArgValue {
    fn from(value: I256) -> Self {
        ArgValue::Int(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::String(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::String(value.to_string())
    }
}

/// Event arguments keyed by their ABI name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgBag(BTreeMap<String, ArgValue>);

impl ArgBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: &str, value: impl Into<ArgValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<ArgValue>) {
        self.0.insert(name.to_string(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<ArgValue> {
        self.0.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a, V: Into<ArgValue>> FromIterator<(&'a str, V)> for ArgBag {
    fn from_iter<I: IntoIterator<Item = (&'a str, V)>>(iter: I) -> Self {
        let mut bag = ArgBag::new();
        for (name, value) in iter {
            bag.insert(name, value);
        }
        bag
    }
}

/// Decoded event envelope delivered to the mapper
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedEvent {
    pub kind: EventKind,
    pub id: EventId,
    pub args: ArgBag,
    pub block: BlockMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_orders_by_chain_position() {
        let first = EventId::new(10, 0, 0);
        let second = EventId::new(10, 0, 1);
        let third = EventId::new(10, 1, 0);
        let fourth = EventId::new(11, 0, 0);

        assert!(first < second);
        assert!(second < third);
        assert!(third < fourth);
    }

    #[test]
    fn parsed_ids_sort_in_chain_order_where_text_does_not() {
        let mut ids = vec!["10-10-0", "10-9-0", "9-100-3", "10-9-10", "10-9-2"];

        ids.sort_by_key(|id| id.parse::<EventId>().unwrap());

        assert_eq!(ids, ["9-100-3", "10-9-0", "10-9-2", "10-9-10", "10-10-0"]);
        assert!("10-10-0" < "10-9-0");
    }

    #[test]
    fn event_id_text_form() {
        let id: EventId = "10-5-2".parse().unwrap();
        assert_eq!(id, EventId::new(10, 5, 2));
        assert_eq!(id.to_string(), "10-5-2");

        assert!("10-5".parse::<EventId>().is_err());
        assert!("10-x-2".parse::<EventId>().is_err());
    }

    #[test]
    fn topic0_resolves_every_kind() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::from_topic0(&kind.signature_hash()), Some(kind));
        }
        assert_eq!(EventKind::from_topic0(&B256::ZERO), None);
    }

    #[test]
    fn signature_hashes_match_canonical_signatures() {
        use alloy::primitives::keccak256;

        assert_eq!(
            EventKind::Swap.signature_hash(),
            keccak256("Swap(bytes32,address,int128,int128,uint160,uint128,int24,uint24)")
        );
        assert_eq!(
            EventKind::OwnershipTransferred.signature_hash(),
            keccak256("OwnershipTransferred(address,address)")
        );
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in EventKind::ALL {
            assert_eq!(kind.name().parse::<EventKind>(), Ok(kind));
        }
        assert!("Sync".parse::<EventKind>().is_err());
    }
}
