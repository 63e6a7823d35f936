use anyhow::Result;
use ethers::contract::EthEvent;
use ethers::providers::{Http, Middleware, Provider};
use ethers::types::{Address, Filter, Log};

use crate::models::TransferEvent;

/// Built-in defaults matching the token this tool was written for; each one
/// can be overridden from the CLI.
pub const DEFAULT_RPC_HTTP: &str = "https://rpc.sandverse.oasys.games/";

/// BPC token contract on the Oasys Sandverse chain
pub const DEFAULT_TOKEN_CONTRACT: &str = "0x60E21183813719C7A78B403c3B0C5BdcA6ceDEb8";

/// Block the token was deployed at, so the query skips the empty prefix
pub const DEFAULT_FROM_BLOCK: u64 = 1000;

/// Build an HTTP JSON-RPC provider for the given endpoint.
pub fn connect(url: &str) -> Result<Provider<Http>> {
    Ok(Provider::<Http>::try_from(url)?)
}

/// Issue one `eth_getLogs` query for Transfer events emitted by `contract`
/// since `from_block`. Order and completeness of the result are whatever the
/// remote node guarantees.
pub async fn fetch_transfer_logs<M: Middleware + 'static>(
    provider: &M,
    contract: Address,
    from_block: u64,
) -> Result<Vec<Log>> {
    let filter = Filter::new()
        .address(contract)
        .topic0(TransferEvent::signature())
        .from_block(from_block);

    let logs = provider.get_logs(&filter).await?;
    Ok(logs)
}
