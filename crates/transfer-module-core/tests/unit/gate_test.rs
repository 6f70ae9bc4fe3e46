//! Unit tests for the owner gate and ownership transfer
//!
//! These tests verify:
//! - Only the owner may transfer ownership
//! - The zero address is never installed as owner
//! - Ownership changes never touch a custodial account

use crate::support::{ALICE, BOB, CAROL, DEST, MODULE, RecordingAccount};
use alloy_primitives::{Address, U256};
use transfer_module_core::{
    AuthorizationGate, Error, ModuleConfig, ModuleEvent, OwnershipTransferred, TransferModule,
};

fn module() -> TransferModule {
    TransferModule::new(MODULE, ALICE, ModuleConfig::default()).unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_deployer_becomes_owner() {
    let module = module();
    assert_eq!(module.owner(), ALICE);
    assert_eq!(module.address(), MODULE);
    assert!(module.events().is_empty());
}

#[test]
fn test_owner_reads_are_stable() {
    let module = module();
    let first = module.owner();
    for _ in 0..10 {
        assert_eq!(module.owner(), first);
    }
}

// ============================================================================
// Ownership Transfer
// ============================================================================

#[test]
fn test_owner_can_transfer_ownership() {
    let mut module = module();
    module.transfer_ownership(ALICE, BOB).unwrap();

    assert_eq!(module.owner(), BOB);
    assert_eq!(
        module.events(),
        &[ModuleEvent::OwnershipTransferred(OwnershipTransferred {
            previous_owner: ALICE,
            new_owner: BOB,
        })]
    );
}

#[test]
fn test_stranger_cannot_transfer_ownership() {
    let mut module = module();
    let err = module.transfer_ownership(BOB, BOB).unwrap_err();

    assert_eq!(
        err,
        Error::Unauthorized {
            caller: BOB,
            owner: ALICE
        }
    );
    assert_eq!(module.owner(), ALICE);
    assert!(module.events().is_empty());
}

#[test]
fn test_transfer_to_zero_rejected() {
    let mut module = module();
    let err = module.transfer_ownership(ALICE, Address::ZERO).unwrap_err();

    assert!(matches!(err, Error::InvalidIdentity(_)));
    assert_eq!(module.owner(), ALICE);
    assert!(module.events().is_empty());
}

#[test]
fn test_transfer_to_self_is_allowed() {
    let mut module = module();
    module.transfer_ownership(ALICE, ALICE).unwrap();
    assert_eq!(module.owner(), ALICE);
    assert_eq!(module.events().len(), 1);
}

#[test]
fn test_chained_transfers_lock_out_previous_owners() {
    let mut module = module();
    module.transfer_ownership(ALICE, BOB).unwrap();

    // Alice lost control after the first hop
    assert!(module.transfer_ownership(ALICE, CAROL).unwrap_err().is_unauthorized());

    module.transfer_ownership(BOB, CAROL).unwrap();
    assert_eq!(module.owner(), CAROL);

    assert!(module.transfer_ownership(ALICE, ALICE).unwrap_err().is_unauthorized());
    assert!(module.transfer_ownership(BOB, BOB).unwrap_err().is_unauthorized());
    assert_eq!(module.owner(), CAROL);
    assert_eq!(module.events().len(), 2);
}

#[test]
fn test_ownership_transfer_makes_no_external_call() {
    let mut module = module();
    let account = RecordingAccount::returning(true);

    module.transfer(ALICE, &account, DEST, U256::from(1)).unwrap();
    assert_eq!(account.calls().len(), 1);

    module.transfer_ownership(ALICE, BOB).unwrap();
    let _ = module.transfer_ownership(ALICE, CAROL);
    let _ = module.transfer_ownership(BOB, Address::ZERO);
    assert_eq!(account.calls().len(), 1);

    module.transfer(BOB, &account, DEST, U256::from(1)).unwrap();
    let calls = account.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].0, MODULE);
}

// ============================================================================
// Standalone Gate
// ============================================================================

#[test]
fn test_gate_check_is_side_effect_free() {
    let gate = AuthorizationGate::new(ALICE).unwrap();
    let before = gate.clone();

    assert!(gate.check(BOB).is_err());
    assert!(gate.check(ALICE).is_ok());
    assert_eq!(gate, before);
}
