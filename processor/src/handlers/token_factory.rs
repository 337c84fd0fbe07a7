//! Token factory event mappers

use indexer_db::entity::{EventRecord, TokenCreated};

use crate::events::IndexedEvent;

use super::{Args, Envelope, HandlerResult};

/// New token launch. Social links are free-form and may be empty strings.
pub fn token_created(event: &IndexedEvent) -> HandlerResult<EventRecord> {
    let args = Args::new(event);
    let envelope = Envelope::of(event)?;

    Ok(EventRecord::TokenCreated(TokenCreated {
        id: envelope.id,
        timestamp: envelope.timestamp,
        block_number: envelope.block_number,
        token_address: args.address("tokenAddress")?,
        creator: args.address("creator")?,
        name: args.string("name")?,
        symbol: args.string("symbol")?,
        decimals: args.uint8("decimals")?,
        initial_supply: args.uint("initialSupply")?,
        description: args.string("description")?,
        image: args.string("image")?,
        website: args.string("website")?,
        twitter: args.string("twitter")?,
        telegram: args.string("telegram")?,
        discord: args.string("discord")?,
    }))
}
