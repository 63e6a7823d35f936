use ethers::contract::EthEvent;
use ethers::types::{Address, I256, U256};
use serde::Serialize;

/// ERC20 Transfer event. Sender and recipient are indexed topics, the
/// amount sits in the data payload.
#[derive(Clone, Debug, PartialEq, EthEvent)]
#[ethevent(name = "Transfer")]
pub struct TransferEvent {
    #[ethevent(indexed)]
    pub from: Address,
    #[ethevent(indexed)]
    pub to: Address,
    pub value: U256,
}

/// One row of the final report: an address and its net signed balance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceEntry {
    pub address: Address,
    pub amount: I256,
}
