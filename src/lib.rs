use anyhow::Result;
use ethers::types::Address;
use log::{debug, info};

pub mod balances;
pub mod decode;
pub mod fetcher;
pub mod models;

use balances::BalanceBook;
use models::BalanceEntry;

/// Fetch all Transfer logs for `contract` since `from_block` and reduce them
/// to net holder balances, sorted descending. Any RPC, decode, or arithmetic
/// failure aborts the run with no partial result.
pub async fn collect_balances(
    rpc_url: &str,
    contract: Address,
    from_block: u64,
) -> Result<Vec<BalanceEntry>> {
    let provider = fetcher::connect(rpc_url)?;
    let logs = fetcher::fetch_transfer_logs(&provider, contract, from_block).await?;
    info!("fetched {} Transfer logs", logs.len());

    let mut book = BalanceBook::default();
    for log in &logs {
        let event = decode::decode_transfer(log)?;
        debug!(
            "transfer {:?} -> {:?} amount {}",
            event.from, event.to, event.value
        );
        book.apply(&event)?;
    }
    info!("{} addresses touched", book.len());

    Ok(book.ranked())
}
