//! Chain whitelist. Unknown chain ids are treated as disabled.

use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::state::{ChainRecord, CHAINS};

const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

/// Insert or overwrite the record for `chain_id`.
pub fn update_chain(
    storage: &mut dyn Storage,
    chain_id: u64,
    enabled: bool,
) -> StdResult<ChainRecord> {
    let record = ChainRecord { chain_id, enabled };
    CHAINS.save(storage, chain_id, &record)?;
    Ok(record)
}

pub fn is_chain_enabled(storage: &dyn Storage, chain_id: u64) -> StdResult<bool> {
    Ok(CHAINS
        .may_load(storage, chain_id)?
        .map(|record| record.enabled)
        .unwrap_or(false))
}

pub fn chains(
    storage: &dyn Storage,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<ChainRecord>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    CHAINS
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, record)| record))
        .collect()
}
