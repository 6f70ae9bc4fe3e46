//! Core types for the transfer module
//!
//! This module defines the identity and amount aliases, the operation kind
//! discriminant understood by Safe-style custodial accounts, and the
//! ephemeral transfer request the relay builds for every forwarded call.

use crate::{Error, Result};
use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account identity (owner, module, custodial account or destination)
pub type Identity = Address;

/// Native value amount in the smallest unit (wei)
pub type Amount = U256;

/// How the custodial account executes a forwarded call
///
/// The discriminant values match the `Enum.Operation` encoding used on the
/// wire by Safe smart accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum OperationKind {
    /// Execute in the target's own context (`CALL`)
    #[default]
    StandardCall = 0,
    /// Execute the target's code in the custodial account's context (`DELEGATECALL`)
    DelegatedCall = 1,
}

impl OperationKind {
    /// Wire value of this operation
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Check if this operation runs in the caller's context
    pub fn is_delegated(&self) -> bool {
        matches!(self, OperationKind::DelegatedCall)
    }
}

impl TryFrom<u8> for OperationKind {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(OperationKind::StandardCall),
            1 => Ok(OperationKind::DelegatedCall),
            other => Err(Error::Deserialization(format!(
                "Unknown operation kind: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::StandardCall => write!(f, "Call"),
            OperationKind::DelegatedCall => write!(f, "DelegateCall"),
        }
    }
}

/// A single forwarded fund-movement instruction
///
/// Built per call by the relay and handed to the custodial account; never
/// stored by the module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Custodial account asked to execute the request
    pub account: Identity,
    /// Recipient of the value
    pub destination: Identity,
    /// Value to move
    pub amount: Amount,
    /// Call payload (always empty for plain transfers)
    pub payload: Bytes,
    /// Execution context
    pub operation: OperationKind,
}

impl TransferRequest {
    /// Create a plain value transfer: empty payload, standard call
    pub fn native_transfer(account: Identity, destination: Identity, amount: Amount) -> Self {
        Self {
            account,
            destination,
            amount,
            payload: Bytes::new(),
            operation: OperationKind::StandardCall,
        }
    }

    /// Check if this request carries no calldata
    pub fn is_plain_transfer(&self) -> bool {
        self.payload.is_empty() && self.operation == OperationKind::StandardCall
    }

    /// Encode as `execTransactionFromModule` calldata
    pub fn to_calldata(&self) -> Vec<u8> {
        crate::custodial::abi::encode_exec_transaction_from_module(self)
    }
}

impl fmt::Display for TransferRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({} wei, {}, {} byte payload)",
            self.account,
            self.destination,
            self.amount,
            self.operation,
            self.payload.len()
        )
    }
}
