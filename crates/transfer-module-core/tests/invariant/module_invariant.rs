//! Invariant tests for the transfer module
//!
//! These tests verify critical invariants that must always hold:
//! - The owner is never the zero address
//! - Only the latest owner can act after a chain of handovers
//! - The module never issues a delegate call
//! - Aborted operations commit nothing

use crate::support::{MODULE, RecordingAccount, SAFE, Script};
use alloy_primitives::{Address, U256};
use transfer_module_core::custodial::MemorySafe;
use transfer_module_core::{ModuleConfig, ModuleEvent, OperationKind, TransferModule};

fn owner(i: u8) -> Address {
    Address::repeat_byte(i.max(1))
}

/// INVARIANT: the owner is non-zero after any sequence of ownership calls
#[test]
fn invariant_owner_never_zero() {
    let mut module = TransferModule::new(MODULE, owner(1), ModuleConfig::default()).unwrap();

    for i in 0..50u8 {
        let current = module.owner();
        let target = if i % 3 == 0 { Address::ZERO } else { owner(i) };
        let caller = if i % 5 == 0 { owner(200) } else { current };

        let _ = module.transfer_ownership(caller, target);
        assert!(!module.owner().is_zero());
    }
}

/// INVARIANT: after a chain of handovers only the last owner is authorized
#[test]
fn invariant_only_latest_owner_acts() {
    let mut module = TransferModule::new(MODULE, owner(1), ModuleConfig::default()).unwrap();
    let account = RecordingAccount::returning(true);

    for i in 2..=10u8 {
        module.transfer_ownership(owner(i - 1), owner(i)).unwrap();
    }

    for i in 1..10u8 {
        assert!(
            module
                .transfer(owner(i), &account, owner(99), U256::from(1))
                .unwrap_err()
                .is_unauthorized()
        );
    }
    assert!(account.calls().is_empty());
    assert!(module.transfer(owner(10), &account, owner(99), U256::from(1)).unwrap());
}

/// INVARIANT: every request that ever reaches a custodial account is a standard call
#[test]
fn invariant_never_delegate_call() {
    let mut module = TransferModule::new(MODULE, owner(1), ModuleConfig::tolerant()).unwrap();
    let safe = MemorySafe::with_balance(SAFE, U256::from(50));
    safe.enable_module(MODULE);

    for amount in [0u64, 1, 25, 50, 51, u64::MAX] {
        let _ = module.transfer(owner(1), &safe, owner(7), U256::from(amount));
    }

    let requests = safe.requests();
    assert_eq!(requests.len(), 6);
    assert!(
        requests
            .iter()
            .all(|r| r.operation == OperationKind::StandardCall && r.payload.is_empty())
    );
}

/// INVARIANT: a failed operation leaves owner and event log unchanged
#[test]
fn invariant_aborted_operations_commit_nothing() {
    let mut module = TransferModule::new(MODULE, owner(1), ModuleConfig::default()).unwrap();
    let account = RecordingAccount::new(SAFE, Script::Return(false));

    let _ = module.transfer(owner(1), &account, owner(2), U256::from(1));
    account.set_script(Script::Revert);
    let _ = module.transfer(owner(1), &account, owner(2), U256::from(1));
    let _ = module.transfer(owner(2), &account, owner(2), U256::from(1));
    let _ = module.transfer_ownership(owner(2), owner(3));
    let _ = module.transfer_ownership(owner(1), Address::ZERO);

    assert_eq!(module.owner(), owner(1));
    assert!(module.events().is_empty());
}

/// INVARIANT: each committed transfer produces exactly one event
#[test]
fn invariant_one_event_per_committed_transfer() {
    let mut module = TransferModule::new(MODULE, owner(1), ModuleConfig::default()).unwrap();
    let account = RecordingAccount::returning(true);

    for i in 0..20u64 {
        module
            .transfer(owner(1), &account, owner(2), U256::from(i))
            .unwrap();
    }

    let transfers = module
        .events()
        .iter()
        .filter(|e| matches!(e, ModuleEvent::TransferForwarded(_)))
        .count();
    assert_eq!(transfers, 20);
    assert_eq!(account.calls().len(), 20);
}
