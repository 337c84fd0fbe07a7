//! Event mappers
//!
//! One pure function per event type turns an [`IndexedEvent`] into exactly one
//! [`EventRecord`]. Field names and order follow the contract's event
//! definition; the record is only built once every field has been read, so a
//! missing or mistyped argument never yields a partial row.

pub mod pool_manager;
pub mod token_factory;

use std::str::FromStr;

use alloy::primitives::{hex, I256, U256};
use indexer_db::entity::EventRecord;
use sqlx::types::BigDecimal;

use crate::{
    error::AppError,
    events::{ArgBag, ArgValue, EventKind, IndexedEvent},
};

/// Result type for handlers
pub type HandlerResult<T> = Result<T, AppError>;

/// Map a decoded event to the record of its table
pub fn map_event(event: &IndexedEvent) -> HandlerResult<EventRecord> {
    match event.kind {
        EventKind::Approval => pool_manager::approval(event),
        EventKind::Donate => pool_manager::donate(event),
        EventKind::Initialize => pool_manager::initialize(event),
        EventKind::ModifyLiquidity => pool_manager::modify_liquidity(event),
        EventKind::OperatorSet => pool_manager::operator_set(event),
        EventKind::OwnershipTransferred => pool_manager::ownership_transferred(event),
        EventKind::ProtocolFeeControllerUpdated => {
            pool_manager::protocol_fee_controller_updated(event)
        }
        EventKind::ProtocolFeeUpdated => pool_manager::protocol_fee_updated(event),
        EventKind::Swap => pool_manager::swap(event),
        EventKind::Transfer => pool_manager::transfer(event),
        EventKind::TokenCreated => token_factory::token_created(event),
    }
}

/// Columns shared by every table, taken from the event envelope
pub(crate) struct Envelope {
    pub id: String,
    pub timestamp: i64,
    pub block_number: i64,
}

impl Envelope {
    pub fn of(event: &IndexedEvent) -> HandlerResult<Self> {
        let timestamp = i64::try_from(event.block.timestamp)
            .map_err(|_| AppError::malformed(event.kind, "block timestamp exceeds BIGINT"))?;
        let block_number = i64::try_from(event.block.number)
            .map_err(|_| AppError::malformed(event.kind, "block number exceeds BIGINT"))?;

        Ok(Self {
            id: event.id.to_string(),
            timestamp,
            block_number,
        })
    }
}

/// Typed reads from an argument bag.
///
/// Every accessor fails with [`AppError::MalformedEvent`] when the argument is
/// absent or cannot be represented in the column type without loss.
pub(crate) struct Args<'a> {
    kind: EventKind,
    bag: &'a ArgBag,
}

impl<'a> Args<'a> {
    pub fn new(event: &'a IndexedEvent) -> Self {
        Self {
            kind: event.kind,
            bag: &event.args,
        }
    }

    fn get(&self, name: &str) -> HandlerResult<&'a ArgValue> {
        self.bag
            .get(name)
            .ok_or_else(|| AppError::malformed(self.kind, format!("missing field `{name}`")))
    }

    fn incompatible(&self, name: &str, expected: &str) -> AppError {
        AppError::malformed(self.kind, format!("field `{name}` is not a valid {expected}"))
    }

    /// Address as `0x` hex; string values are kept verbatim
    pub fn address(&self, name: &str) -> HandlerResult<String> {
        match self.get(name)? {
            ArgValue::Address(address) => Ok(hex::encode_prefixed(address)),
            ArgValue::String(s) => Ok(s.clone()),
            _ => Err(self.incompatible(name, "address")),
        }
    }

    /// bytes32 as `0x` hex; string values are kept verbatim
    pub fn bytes32(&self, name: &str) -> HandlerResult<String> {
        match self.get(name)? {
            ArgValue::Bytes32(bytes) => Ok(hex::encode_prefixed(bytes)),
            ArgValue::String(s) => Ok(s.clone()),
            _ => Err(self.incompatible(name, "bytes32")),
        }
    }

    pub fn boolean(&self, name: &str) -> HandlerResult<bool> {
        match self.get(name)? {
            ArgValue::Bool(value) => Ok(*value),
            ArgValue::String(s) => s
                .trim()
                .parse::<bool>()
                .map_err(|_| self.incompatible(name, "bool")),
            _ => Err(self.incompatible(name, "bool")),
        }
    }

    pub fn string(&self, name: &str) -> HandlerResult<String> {
        match self.get(name)? {
            ArgValue::String(s) => Ok(s.clone()),
            _ => Err(self.incompatible(name, "string")),
        }
    }

    /// Decimal digits of an unsigned value within uint256
    fn uint_digits(&self, name: &str) -> HandlerResult<String> {
        match self.get(name)? {
            ArgValue::Uint(value) => Ok(value.to_string()),
            ArgValue::String(s) => U256::from_str_radix(s.trim(), 10)
                .map(|value| value.to_string())
                .map_err(|_| self.incompatible(name, "uint256")),
            _ => Err(self.incompatible(name, "uint256")),
        }
    }

    /// Decimal digits of a signed value within int256
    fn int_digits(&self, name: &str) -> HandlerResult<String> {
        let parsed = match self.get(name)? {
            ArgValue::Int(value) => return Ok(value.to_string()),
            ArgValue::Uint(value) => I256::from_dec_str(&value.to_string()),
            ArgValue::String(s) => I256::from_dec_str(s.trim()),
            _ => return Err(self.incompatible(name, "int256")),
        };

        parsed
            .map(|value| value.to_string())
            .map_err(|_| self.incompatible(name, "int256"))
    }

    fn decimal(&self, name: &str, digits: &str) -> HandlerResult<BigDecimal> {
        BigDecimal::from_str(digits).map_err(|_| self.incompatible(name, "integer"))
    }

    /// Unsigned integer up to 256 bits, full precision
    pub fn uint(&self, name: &str) -> HandlerResult<BigDecimal> {
        let digits = self.uint_digits(name)?;
        self.decimal(name, &digits)
    }

    /// Signed integer up to 256 bits, full precision
    pub fn int(&self, name: &str) -> HandlerResult<BigDecimal> {
        let digits = self.int_digits(name)?;
        self.decimal(name, &digits)
    }

    fn uint_bits(&self, name: &str, bits: u32) -> HandlerResult<i64> {
        let expected = format!("uint{bits}");
        let value = self
            .uint_digits(name)?
            .parse::<i64>()
            .map_err(|_| self.incompatible(name, &expected))?;

        if value >= 1_i64 << bits {
            return Err(self.incompatible(name, &expected));
        }

        Ok(value)
    }

    fn int_bits(&self, name: &str, bits: u32) -> HandlerResult<i64> {
        let expected = format!("int{bits}");
        let value = self
            .int_digits(name)?
            .parse::<i64>()
            .map_err(|_| self.incompatible(name, &expected))?;

        let bound = 1_i64 << (bits - 1);
        if value < -bound || value >= bound {
            return Err(self.incompatible(name, &expected));
        }

        Ok(value)
    }

    pub fn uint8(&self, name: &str) -> HandlerResult<i16> {
        // Range checked: always fits
        Ok(self.uint_bits(name, 8)? as i16)
    }

    pub fn uint24(&self, name: &str) -> HandlerResult<i32> {
        Ok(self.uint_bits(name, 24)? as i32)
    }

    pub fn int24(&self, name: &str) -> HandlerResult<i32> {
        Ok(self.int_bits(name, 24)? as i32)
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, b256};

    use super::*;
    use crate::events::{BlockMeta, EventId};

    fn event(args: ArgBag) -> IndexedEvent {
        IndexedEvent {
            kind: EventKind::Swap,
            id: EventId::new(1, 0, 0),
            args,
            block: BlockMeta {
                timestamp: 1_700_000_000,
                number: 1,
            },
        }
    }

    #[test]
    fn address_renders_lowercase_hex_and_keeps_strings() {
        let event = event(
            ArgBag::new()
                .with("decoded", address!("000000000004444c5dc75cB358380D2e3dE08A90"))
                .with("given", "0xSENDER"),
        );
        let args = Args::new(&event);

        assert_eq!(
            args.address("decoded").unwrap(),
            "0x000000000004444c5dc75cb358380d2e3de08a90"
        );
        assert_eq!(args.address("given").unwrap(), "0xSENDER");
    }

    #[test]
    fn bytes32_renders_full_width() {
        let event = event(ArgBag::new().with(
            "id",
            b256!("00000000000000000000000000000000000000000000000000000000000000ff"),
        ));

        let pool_id = Args::new(&event).bytes32("id").unwrap();
        assert_eq!(pool_id.len(), 66);
        assert!(pool_id.ends_with("ff"));
    }

    #[test]
    fn missing_field_is_malformed() {
        let event = event(ArgBag::new());
        let err = Args::new(&event).uint("liquidity").unwrap_err();

        assert!(matches!(err, AppError::MalformedEvent { event: "Swap", .. }));
        assert!(err.to_string().contains("liquidity"));
    }

    #[test]
    fn uint_rejects_negative_and_non_numeric() {
        let event = event(
            ArgBag::new()
                .with("negative", "-1")
                .with("word", "lots")
                .with("flag", true),
        );
        let args = Args::new(&event);

        assert!(args.uint("negative").is_err());
        assert!(args.uint("word").is_err());
        assert!(args.uint("flag").is_err());
    }

    #[test]
    fn numeric_strings_are_decimal_only() {
        let event = event(
            ArgBag::new()
                .with("hex", "0x10")
                .with("binary", "0b1")
                .with("octal", "0o7")
                .with("signedHex", "-0x10")
                .with("decimal", "16"),
        );
        let args = Args::new(&event);

        assert!(args.uint("hex").is_err());
        assert!(args.uint("binary").is_err());
        assert!(args.uint("octal").is_err());
        assert!(args.uint24("hex").is_err());
        assert!(args.int("hex").is_err());
        assert!(args.int("signedHex").is_err());
        assert_eq!(args.uint("decimal").unwrap(), BigDecimal::from(16));
        assert_eq!(args.int("decimal").unwrap(), BigDecimal::from(16));
    }

    #[test]
    fn uint_keeps_full_256_bit_precision() {
        let event = event(ArgBag::new().with("amount", U256::MAX));
        let amount = Args::new(&event).uint("amount").unwrap();

        assert_eq!(amount.to_string(), U256::MAX.to_string());
    }

    #[test]
    fn int_accepts_signed_strings_and_values() {
        let event = event(
            ArgBag::new()
                .with("text", "-1000")
                .with("value", I256::MINUS_ONE)
                .with("unsigned", U256::from(7)),
        );
        let args = Args::new(&event);

        assert_eq!(args.int("text").unwrap(), BigDecimal::from(-1000));
        assert_eq!(args.int("value").unwrap(), BigDecimal::from(-1));
        assert_eq!(args.int("unsigned").unwrap(), BigDecimal::from(7));
    }

    #[test]
    fn int_rejects_values_beyond_int256() {
        let event = event(ArgBag::new().with("delta", U256::MAX));
        assert!(Args::new(&event).int("delta").is_err());
    }

    #[test]
    fn narrow_widths_are_range_checked() {
        let event = event(
            ArgBag::new()
                .with("fee", "16777215")
                .with("tooBigFee", "16777216")
                .with("tick", "-8388608")
                .with("tooLowTick", "-8388609")
                .with("decimals", "256"),
        );
        let args = Args::new(&event);

        assert_eq!(args.uint24("fee").unwrap(), 16_777_215);
        assert!(args.uint24("tooBigFee").is_err());
        assert_eq!(args.int24("tick").unwrap(), -8_388_608);
        assert!(args.int24("tooLowTick").is_err());
        assert!(args.uint8("decimals").is_err());
    }

    #[test]
    fn boolean_accepts_strings() {
        let event = event(ArgBag::new().with("a", "true").with("b", false).with("c", "yes"));
        let args = Args::new(&event);

        assert!(args.boolean("a").unwrap());
        assert!(!args.boolean("b").unwrap());
        assert!(args.boolean("c").is_err());
    }

    #[test]
    fn envelope_rejects_out_of_range_block_values() {
        let mut event = event(ArgBag::new());
        event.block.timestamp = u64::MAX;

        assert!(Envelope::of(&event).is_err());
    }
}
