//! In-memory custodial account for testing and local development

use super::CustodialAccount;
use crate::{Amount, Error, Identity, Result, TransferRequest};
use alloy_primitives::U256;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Revert reason used by Safe when the sender is not an enabled module
pub const MODULE_NOT_ENABLED: &str = "GS104";

#[derive(Debug, Default)]
struct SafeState {
    balance: Amount,
    modules: HashSet<Identity>,
    credited: HashMap<Identity, Amount>,
    requests: Vec<TransferRequest>,
    scripted: Option<bool>,
}

/// In-memory Safe-style custodial account
///
/// Behaves like a Safe's module manager for plain value transfers:
/// - Every received request is recorded, whatever the outcome
/// - A forwarder that was never enabled makes the call revert
/// - Delegate calls are not simulated and report `false`
/// - Transfers above the balance report `false`
///
/// A scripted result (see [`MemorySafe::script_result`]) short-circuits
/// execution for registered forwarders, which makes it usable as a
/// recording stub. Clones share state.
#[derive(Debug, Clone)]
pub struct MemorySafe {
    address: Identity,
    state: Arc<Mutex<SafeState>>,
}

impl MemorySafe {
    /// Create an empty account at `address`
    pub fn new(address: Identity) -> Self {
        Self {
            address,
            state: Arc::new(Mutex::new(SafeState::default())),
        }
    }

    /// Create an account holding `balance`
    pub fn with_balance(address: Identity, balance: Amount) -> Self {
        let safe = Self::new(address);
        safe.deposit(balance);
        safe
    }

    /// Register `module` as an authorized forwarder
    pub fn enable_module(&self, module: Identity) {
        self.state.lock().modules.insert(module);
    }

    /// Remove `module` from the authorized forwarders
    pub fn disable_module(&self, module: Identity) -> bool {
        self.state.lock().modules.remove(&module)
    }

    pub fn is_module_enabled(&self, module: Identity) -> bool {
        self.state.lock().modules.contains(&module)
    }

    /// Add native value to the account
    pub fn deposit(&self, amount: Amount) {
        let mut state = self.state.lock();
        state.balance = state.balance.saturating_add(amount);
    }

    /// Current native balance
    pub fn balance(&self) -> Amount {
        self.state.lock().balance
    }

    /// Total value sent to `destination` by this account
    pub fn credited(&self, destination: Identity) -> Amount {
        self.state
            .lock()
            .credited
            .get(&destination)
            .copied()
            .unwrap_or(U256::ZERO)
    }

    /// Every request received so far, in order
    pub fn requests(&self) -> Vec<TransferRequest> {
        self.state.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().requests.len()
    }

    /// Return `result` for every call from an enabled forwarder without executing it
    pub fn script_result(&self, result: bool) {
        self.state.lock().scripted = Some(result);
    }

    /// Go back to executing requests
    pub fn clear_script(&self) {
        self.state.lock().scripted = None;
    }
}

impl CustodialAccount for MemorySafe {
    fn address(&self) -> Identity {
        self.address
    }

    fn execute_from_module(&self, forwarder: Identity, request: &TransferRequest) -> Result<bool> {
        let mut state = self.state.lock();
        state.requests.push(request.clone());

        if !state.modules.contains(&forwarder) {
            debug!(safe = %self.address, forwarder = %forwarder, "Forwarder not enabled");
            return Err(Error::ExternalCallFailed {
                account: self.address,
                reason: MODULE_NOT_ENABLED.to_string(),
            });
        }

        if let Some(result) = state.scripted {
            return Ok(result);
        }

        if request.operation.is_delegated() {
            debug!(safe = %self.address, "Delegate call not simulated");
            return Ok(false);
        }

        if request.amount > state.balance {
            debug!(
                safe = %self.address,
                balance = %state.balance,
                amount = %request.amount,
                "Insufficient balance"
            );
            return Ok(false);
        }

        if request.destination != self.address {
            state.balance -= request.amount;
            let credited = state.credited.entry(request.destination).or_default();
            *credited = credited.saturating_add(request.amount);
        }

        Ok(true)
    }
}
