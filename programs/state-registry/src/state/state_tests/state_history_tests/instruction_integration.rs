//! Append/read flows driven through the in-memory `Ledger`.
//!
//! The ledger stores raw account images and reloads them for every
//! instruction, so these tests exercise the same serialize / load / mutate /
//! write-back cycle the handlers go through on a validator.

use super::helpers::{assert_registry_error, entry_for, AccountSlot, Ledger, GENESIS_TIMESTAMP};
use crate::error::RegistryError;
use crate::state::{StateEntry, StateHistory};
use anchor_lang::error::Error;
use anchor_lang::prelude::*;

const STATE_A: &[u8] = &[0x12, 0x34];
const STATE_B: &[u8] = &[0x12, 0x35];

#[test]
fn unknown_owner_has_zero_height_and_no_states() {
    let ledger = Ledger::new();
    let stranger = Pubkey::new_unique();

    assert_eq!(ledger.height(&stranger).expect("height"), 0);
    assert_registry_error(ledger.state_at(&stranger, 0), RegistryError::OutOfRange);
    assert_registry_error(ledger.latest_state(&stranger), RegistryError::OutOfRange);
    assert_eq!(ledger.account_count(), 0, "reads never allocate accounts");
}

/// Owner A appends `0x1234` three times then `0x1235` once.
#[test]
fn repeated_and_distinct_values_are_kept_in_order() {
    let mut ledger = Ledger::new();
    let a = Pubkey::new_unique();

    for _ in 0..3 {
        ledger.append(&a, STATE_A).expect("append 0x1234");
    }
    ledger.append(&a, STATE_B).expect("append 0x1235");

    assert_eq!(ledger.height(&a).expect("height"), 4);
    assert_eq!(ledger.state_at(&a, 0).expect("index 0"), STATE_A);
    assert_eq!(ledger.state_at(&a, 1).expect("index 1"), STATE_A);
    assert_eq!(ledger.state_at(&a, 2).expect("index 2"), STATE_A);
    assert_eq!(ledger.state_at(&a, 3).expect("index 3"), STATE_B);
    assert_eq!(ledger.latest_state(&a).expect("latest"), STATE_B);

    assert_registry_error(ledger.state_at(&a, 4), RegistryError::OutOfRange);
    assert_registry_error(ledger.state_at(&a, u64::MAX), RegistryError::OutOfRange);
}

/// Owners A and B append the same value; their histories stay independent.
#[test]
fn owners_keep_independent_histories() {
    let mut ledger = Ledger::new();
    let a = Pubkey::new_unique();
    let b = Pubkey::new_unique();

    ledger.append(&a, STATE_A).expect("append by A");
    ledger.append(&b, STATE_A).expect("append by B");

    assert_eq!(ledger.height(&a).expect("height A"), 1);
    assert_eq!(ledger.height(&b).expect("height B"), 1);
    assert_eq!(ledger.state_at(&a, 0).expect("A[0]"), STATE_A);
    assert_eq!(ledger.state_at(&b, 0).expect("B[0]"), STATE_A);

    ledger.append(&b, STATE_B).expect("second append by B");
    assert_eq!(ledger.height(&a).expect("height A"), 1, "B's append must not touch A");
    assert_eq!(ledger.height(&b).expect("height B"), 2);
    assert_registry_error(ledger.state_at(&a, 1), RegistryError::OutOfRange);
    assert_eq!(ledger.state_at(&b, 1).expect("B[1]"), STATE_B);
}

/// Mirrors the signer rotation in the registry's reference scenario: a1, a2,
/// a3 each push once, then a1 pushes again.
#[test]
fn interleaved_signers_append_to_their_own_histories() {
    let mut ledger = Ledger::new();
    let signers: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();

    for signer in &signers {
        let receipt = ledger.append(signer, STATE_A).expect("first push");
        assert_eq!(receipt.index, 0);
        assert!(receipt.created);
    }
    let receipt = ledger.append(&signers[0], STATE_A).expect("second push by a1");
    assert_eq!(receipt.index, 1);
    assert_eq!(receipt.height, 2);
    assert!(!receipt.created);

    assert_eq!(ledger.height(&signers[0]).expect("a1"), 2);
    assert_eq!(ledger.height(&signers[1]).expect("a2"), 1);
    assert_eq!(ledger.height(&signers[2]).expect("a3"), 1);
}

/// Each append reports the index it was written at, and the entry is readable
/// there immediately after.
#[test]
fn receipts_point_at_readable_entries() {
    let mut ledger = Ledger::new();
    let owner = Pubkey::new_unique();

    for n in 0..16u8 {
        let value = vec![n; n as usize];
        let receipt = ledger.append(&owner, &value).expect("append");
        assert_eq!(receipt.index, n as u64);
        assert_eq!(receipt.height, n as u64 + 1);
        assert_eq!(ledger.height(&owner).expect("height"), receipt.height);
        assert_eq!(ledger.state_at(&owner, receipt.index).expect("read back"), value);
    }
}

#[test]
fn stored_accounts_carry_owner_index_and_timestamps() {
    let mut ledger = Ledger::new();
    let owner = Pubkey::new_unique();

    ledger.append(&owner, STATE_A).expect("first append");
    ledger.append(&owner, STATE_B).expect("second append");

    let history = ledger.history(&owner).expect("load").expect("history exists");
    assert_eq!(history.owner, owner);
    assert_eq!(history.height, 2);
    assert_eq!(history.created_at, GENESIS_TIMESTAMP + 1);
    assert_eq!(history.last_appended_at, GENESIS_TIMESTAMP + 2);
    assert_eq!(history.bump, StateHistory::address(&owner).1);

    let second = ledger.entry(&owner, 1).expect("load").expect("entry exists");
    assert_eq!(second.owner, owner);
    assert_eq!(second.index, 1);
    assert_eq!(second.appended_at, GENESIS_TIMESTAMP + 2);
    assert_eq!(second.bump, StateEntry::address(&owner, 1).1);
    assert_eq!(second.value, STATE_B);

    assert_eq!(ledger.account_count(), 3, "one history plus one account per entry");
}

/// An append targeting an already allocated entry slot aborts, and the
/// history keeps its height.
#[test]
fn append_over_occupied_slot_is_rolled_back() {
    let mut ledger = Ledger::new();
    let owner = Pubkey::new_unique();
    ledger.append(&owner, STATE_A).expect("first append");

    let (squatted, _) = StateEntry::address(&owner, 1);
    ledger.insert_slot(
        squatted,
        AccountSlot::program_owned(&entry_for(owner, 1, b"squatter")),
    );

    let err = ledger.append(&owner, STATE_B).expect_err("slot already in use");
    assert!(matches!(err, Error::ProgramError(_)), "unexpected error: {err:?}");
    assert_eq!(ledger.height(&owner).expect("height"), 1);
    assert_eq!(ledger.state_at(&owner, 0).expect("index 0"), STATE_A);
    assert_registry_error(ledger.state_at(&owner, 1), RegistryError::OutOfRange);
}

#[test]
fn latest_state_rejects_stale_entry_account() {
    let mut ledger = Ledger::new();
    let owner = Pubkey::new_unique();
    ledger.append(&owner, STATE_A).expect("first append");
    ledger.append(&owner, STATE_B).expect("second append");

    let (stale, _) = StateEntry::address(&owner, 0);
    assert_registry_error(
        ledger.latest_state_with_entry(&owner, &stale),
        RegistryError::EntryMismatch,
    );
    assert_eq!(ledger.latest_state(&owner).expect("latest"), STATE_B);
}

/// A history image planted at an owner's PDA but bound to someone else is
/// refused by every read.
#[test]
fn reads_refuse_history_bound_to_another_owner() {
    let mut ledger = Ledger::new();
    let owner = Pubkey::new_unique();
    let other = Pubkey::new_unique();
    ledger.append(&other, STATE_A).expect("append by other");

    let other_history = ledger.history(&other).expect("load").expect("exists");
    ledger.insert_slot(
        StateHistory::address(&owner).0,
        AccountSlot::program_owned(&other_history),
    );

    assert_registry_error(ledger.height(&owner), RegistryError::HistoryOwnerMismatch);
    assert_registry_error(ledger.state_at(&owner, 0), RegistryError::HistoryOwnerMismatch);
    assert_registry_error(ledger.append(&owner, STATE_A), RegistryError::HistoryOwnerMismatch);
}
