// Ingestion queue
pub mod evm_logs;

// Pool manager tables
pub mod approval;
pub mod donate;
pub mod initialize;
pub mod modify_liquidity;
pub mod operator_set;
pub mod ownership_transferred;
pub mod protocol_fee_controller_updated;
pub mod protocol_fee_updated;
pub mod swap;
pub mod transfer;

// Token factory tables
pub mod token_created;

// Re-exports for convenience
pub use evm_logs::EvmLogs;

pub use approval::Approval;
pub use donate::Donate;
pub use initialize::Initialize;
pub use modify_liquidity::ModifyLiquidity;
pub use operator_set::OperatorSet;
pub use ownership_transferred::OwnershipTransferred;
pub use protocol_fee_controller_updated::ProtocolFeeControllerUpdated;
pub use protocol_fee_updated::ProtocolFeeUpdated;
pub use swap::Swap;
pub use transfer::Transfer;

pub use token_created::TokenCreated;

use serde::Serialize;
use sqlx::{Executor, Postgres};

/// `ORDER BY` terms putting event rows in chain order, newest first.
///
/// `id` is `"{block}-{tx}-{log}"` text and does not sort numerically
/// (`"10-10-0" < "10-9-0"`), so the transaction and log parts are cast back
/// to integers.
pub(crate) const CHAIN_ORDER_DESC: &str = r#""blockNumber" DESC, split_part("id", '-', 2)::BIGINT DESC, split_part("id", '-', 3)::BIGINT DESC"#;

/// `ORDER BY` terms putting event rows in chain order, oldest first
pub(crate) const CHAIN_ORDER_ASC: &str = r#""blockNumber" ASC, split_part("id", '-', 2)::BIGINT ASC, split_part("id", '-', 3)::BIGINT ASC"#;

/// One persisted row of any event table.
///
/// Serializes as the bare row (column names as keys), so the JSON form of a
/// record is exactly its table schema.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum EventRecord {
    Approval(Approval),
    Donate(Donate),
    Initialize(Initialize),
    ModifyLiquidity(ModifyLiquidity),
    OperatorSet(OperatorSet),
    OwnershipTransferred(OwnershipTransferred),
    ProtocolFeeControllerUpdated(ProtocolFeeControllerUpdated),
    ProtocolFeeUpdated(ProtocolFeeUpdated),
    Swap(Swap),
    Transfer(Transfer),
    TokenCreated(TokenCreated),
}

impl EventRecord {
    /// Table the record belongs to
    pub fn table(&self) -> &'static str {
        match self {
            Self::Approval(_) => Approval::TABLE,
            Self::Donate(_) => Donate::TABLE,
            Self::Initialize(_) => Initialize::TABLE,
            Self::ModifyLiquidity(_) => ModifyLiquidity::TABLE,
            Self::OperatorSet(_) => OperatorSet::TABLE,
            Self::OwnershipTransferred(_) => OwnershipTransferred::TABLE,
            Self::ProtocolFeeControllerUpdated(_) => ProtocolFeeControllerUpdated::TABLE,
            Self::ProtocolFeeUpdated(_) => ProtocolFeeUpdated::TABLE,
            Self::Swap(_) => Swap::TABLE,
            Self::Transfer(_) => Transfer::TABLE,
            Self::TokenCreated(_) => TokenCreated::TABLE,
        }
    }

    /// Event id (primary key)
    pub fn id(&self) -> &str {
        match self {
            Self::Approval(r) => &r.id,
            Self::Donate(r) => &r.id,
            Self::Initialize(r) => &r.id,
            Self::ModifyLiquidity(r) => &r.id,
            Self::OperatorSet(r) => &r.id,
            Self::OwnershipTransferred(r) => &r.id,
            Self::ProtocolFeeControllerUpdated(r) => &r.id,
            Self::ProtocolFeeUpdated(r) => &r.id,
            Self::Swap(r) => &r.id,
            Self::Transfer(r) => &r.id,
            Self::TokenCreated(r) => &r.id,
        }
    }

    /// Insert the record into its table.
    ///
    /// Returns `false` when a row with the same id already exists; the
    /// existing row is left untouched.
    pub async fn create<'c, E>(&self, connection: E) -> Result<bool, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let inserted = match self {
            Self::Approval(r) => Approval::create(r, connection).await?,
            Self::Donate(r) => Donate::create(r, connection).await?,
            Self::Initialize(r) => Initialize::create(r, connection).await?,
            Self::ModifyLiquidity(r) => ModifyLiquidity::create(r, connection).await?,
            Self::OperatorSet(r) => OperatorSet::create(r, connection).await?,
            Self::OwnershipTransferred(r) => OwnershipTransferred::create(r, connection).await?,
            Self::ProtocolFeeControllerUpdated(r) => {
                ProtocolFeeControllerUpdated::create(r, connection).await?
            }
            Self::ProtocolFeeUpdated(r) => ProtocolFeeUpdated::create(r, connection).await?,
            Self::Swap(r) => Swap::create(r, connection).await?,
            Self::Transfer(r) => Transfer::create(r, connection).await?,
            Self::TokenCreated(r) => TokenCreated::create(r, connection).await?,
        };

        Ok(inserted.is_some())
    }
}
