use clap::Parser;
use dotenv::dotenv;
use ethers::types::Address;
use log::info;

use erc20_balances::fetcher;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// HTTP JSON-RPC endpoint. If not provided, read from ETH_RPC_HTTP env,
    /// falling back to the built-in default.
    #[arg(short, long)]
    rpc: Option<String>,

    /// Token contract whose Transfer logs are queried
    #[arg(short, long, default_value = fetcher::DEFAULT_TOKEN_CONTRACT)]
    contract: Address,

    /// Block to start the log query from
    #[arg(short, long, default_value_t = fetcher::DEFAULT_FROM_BLOCK)]
    from_block: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let rpc_url = cli
        .rpc
        .or_else(|| std::env::var("ETH_RPC_HTTP").ok())
        .unwrap_or_else(|| fetcher::DEFAULT_RPC_HTTP.to_string());

    info!(
        "querying Transfer logs for {:?} from block {} via {}",
        cli.contract, cli.from_block, rpc_url
    );

    let entries = erc20_balances::collect_balances(&rpc_url, cli.contract, cli.from_block).await?;
    for (index, entry) in entries.iter().enumerate() {
        println!("{} : {:?} : {}", index, entry.address, entry.amount);
    }

    Ok(())
}
