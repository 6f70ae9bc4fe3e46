//! Safe `execTransactionFromModule` calldata codec
//!
//! Layout for `execTransactionFromModule(address,uint256,bytes,uint8)`:
//!
//! ```text
//! selector (4) | to (32) | value (32) | data offset (32) | operation (32) | data len (32) | data (padded)
//! ```

use crate::{Error, Identity, OperationKind, Result, TransferRequest};
use alloy_primitives::{Address, Bytes, U256, keccak256};

/// Solidity signature of the Safe module entry point
pub const EXEC_TRANSACTION_FROM_MODULE: &str =
    "execTransactionFromModule(address,uint256,bytes,uint8)";

const WORD: usize = 32;
const HEAD_WORDS: usize = 4;

/// Function selector for [`EXEC_TRANSACTION_FROM_MODULE`] (`0x468721a7`)
pub fn selector() -> [u8; 4] {
    let hash = keccak256(EXEC_TRANSACTION_FROM_MODULE.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Encode a transfer request as Safe module calldata
pub fn encode_exec_transaction_from_module(request: &TransferRequest) -> Vec<u8> {
    let padded_len = request.payload.len().div_ceil(WORD) * WORD;
    let mut encoded = Vec::with_capacity(4 + (HEAD_WORDS + 1) * WORD + padded_len);

    encoded.extend_from_slice(&selector());

    // to (32 bytes padded)
    encoded.extend_from_slice(&[0u8; 12]);
    encoded.extend_from_slice(request.destination.as_slice());

    // value
    encoded.extend_from_slice(&request.amount.to_be_bytes::<32>());

    // offset of the dynamic `data` argument, relative to the start of the arguments
    encoded.extend_from_slice(&U256::from(HEAD_WORDS * WORD).to_be_bytes::<32>());

    // operation
    encoded.extend_from_slice(&U256::from(request.operation.as_u8()).to_be_bytes::<32>());

    // data
    encoded.extend_from_slice(&U256::from(request.payload.len()).to_be_bytes::<32>());
    encoded.extend_from_slice(&request.payload);
    encoded.resize(encoded.len() + (padded_len - request.payload.len()), 0);

    encoded
}

/// Decode Safe module calldata received by `account`
///
/// # Errors
/// * `Deserialization` - On a foreign selector, truncated input, a non-canonical
///   address word, a data offset other than the canonical `0x80`, an
///   out-of-range length, or an unknown operation
pub fn decode_exec_transaction_from_module(
    calldata: &[u8],
    account: Identity,
) -> Result<TransferRequest> {
    if calldata.len() < 4 + HEAD_WORDS * WORD {
        return Err(Error::Deserialization(format!(
            "Calldata too short: {} bytes",
            calldata.len()
        )));
    }
    if calldata[..4] != selector() {
        return Err(Error::Deserialization(format!(
            "Unexpected selector 0x{}",
            hex::encode(&calldata[..4])
        )));
    }

    let args = &calldata[4..];

    let to_word = word(args, 0)?;
    if to_word[..12].iter().any(|b| *b != 0) {
        return Err(Error::Deserialization("Dirty address padding".into()));
    }
    let destination = Address::from_slice(&to_word[12..]);

    let amount = U256::from_be_slice(word(args, 1)?);

    let offset = word_as_usize(word(args, 2)?, "data offset")?;
    if offset != HEAD_WORDS * WORD {
        return Err(Error::Deserialization(format!(
            "Unexpected data offset {}",
            offset
        )));
    }

    let op_word = word(args, 3)?;
    if op_word[..31].iter().any(|b| *b != 0) {
        return Err(Error::Deserialization("Operation out of range".into()));
    }
    let operation = OperationKind::try_from(op_word[31])?;

    let len = word_as_usize(word(args, HEAD_WORDS)?, "data length")?;
    let len_end = (HEAD_WORDS + 1) * WORD;
    let payload = len_end
        .checked_add(len)
        .filter(|end| *end <= args.len())
        .map(|end| Bytes::copy_from_slice(&args[len_end..end]))
        .ok_or_else(|| Error::Deserialization("Data length out of bounds".into()))?;

    Ok(TransferRequest {
        account,
        destination,
        amount,
        payload,
        operation,
    })
}

fn word(args: &[u8], index: usize) -> Result<&[u8]> {
    args.get(index * WORD..(index + 1) * WORD)
        .ok_or_else(|| Error::Deserialization(format!("Missing argument word {}", index)))
}

fn word_as_usize(word: &[u8], what: &str) -> Result<usize> {
    let value = U256::from_be_slice(word);
    usize::try_from(value)
        .map_err(|_| Error::Deserialization(format!("{} does not fit in usize", what)))
}
