//! Audit events recorded by the transfer module
//!
//! Every committed privileged operation leaves exactly one event in the
//! module's [`EventLog`]. Aborted operations leave nothing behind.

use crate::{Amount, Identity};
use serde::{Deserialize, Serialize};

/// Emitted when the owner hands control to a new identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipTransferred {
    pub previous_owner: Identity,
    pub new_owner: Identity,
}

/// Emitted when a transfer request has been forwarded and committed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferForwarded {
    /// Owner that invoked the relay
    pub caller: Identity,
    /// Custodial account that executed the request
    pub account: Identity,
    pub destination: Identity,
    pub amount: Amount,
    /// Result reported by the custodial account
    pub success: bool,
}

/// Any event the module can emit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModuleEvent {
    OwnershipTransferred(OwnershipTransferred),
    TransferForwarded(TransferForwarded),
}

impl From<OwnershipTransferred> for ModuleEvent {
    fn from(event: OwnershipTransferred) -> Self {
        ModuleEvent::OwnershipTransferred(event)
    }
}

impl From<TransferForwarded> for ModuleEvent {
    fn from(event: TransferForwarded) -> Self {
        ModuleEvent::TransferForwarded(event)
    }
}

/// Append-only event log owned by a module instance
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Vec<ModuleEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn record(&mut self, event: impl Into<ModuleEvent>) {
        self.entries.push(event.into());
    }

    /// All events in emission order
    pub fn entries(&self) -> &[ModuleEvent] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and return all events
    pub fn drain(&mut self) -> Vec<ModuleEvent> {
        std::mem::take(&mut self.entries)
    }
}
