use anyhow::Result;
use ethers::abi::RawLog;
use ethers::contract::EthLogDecode;
use ethers::types::Log;

use crate::models::TransferEvent;

/// Decode one raw log into a typed Transfer event. Sender and recipient come
/// from indexed topics 1 and 2, the amount from the data payload. A log that
/// does not carry a well-formed Transfer fails the whole run.
pub fn decode_transfer(log: &Log) -> Result<TransferEvent> {
    let raw = RawLog {
        topics: log.topics.clone(),
        data: log.data.to_vec(),
    };
    Ok(TransferEvent::decode_log(&raw)?)
}

#[cfg(test)]
mod test {
    use super::*;
    use ethers::contract::EthEvent;
    use ethers::types::{Address, Bytes, H256, U256};

    fn address_topic(addr: Address) -> H256 {
        // topics carry addresses right-aligned in 32 bytes
        let mut topic = [0u8; 32];
        topic[12..].copy_from_slice(addr.as_bytes());
        H256::from(topic)
    }

    fn amount_data(value: U256) -> Bytes {
        let mut buf = [0u8; 32];
        value.to_big_endian(&mut buf);
        Bytes::from(buf.to_vec())
    }

    fn transfer_log(from: Address, to: Address, value: U256) -> Log {
        Log {
            topics: vec![
                TransferEvent::signature(),
                address_topic(from),
                address_topic(to),
            ],
            data: amount_data(value),
            ..Log::default()
        }
    }

    #[test]
    fn decodes_sender_recipient_and_amount() {
        let from = Address::from_low_u64_be(0xa1);
        let to = Address::from_low_u64_be(0xb2);
        let value = U256::from(1_000_000u64);

        let event = decode_transfer(&transfer_log(from, to, value)).unwrap();
        assert_eq!(event.from, from);
        assert_eq!(event.to, to);
        assert_eq!(event.value, value);
    }

    #[test]
    fn rejects_log_with_missing_topics() {
        let mut log = transfer_log(
            Address::from_low_u64_be(1),
            Address::from_low_u64_be(2),
            U256::from(5u64),
        );
        log.topics.truncate(2);
        assert!(decode_transfer(&log).is_err());
    }

    #[test]
    fn rejects_foreign_event_signature() {
        let mut log = transfer_log(
            Address::from_low_u64_be(1),
            Address::from_low_u64_be(2),
            U256::from(5u64),
        );
        log.topics[0] = H256::zero();
        assert!(decode_transfer(&log).is_err());
    }
}
