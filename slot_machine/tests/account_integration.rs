/// Integration tests for player accounts and their persisted records
///
/// These tests cover the balance rules, eligibility and the round trip
/// through `AccountStore`.
use chrono::NaiveDate;
use slot_machine::{
    STARTING_BALANCE,
    wallet::{
        AccountRecord, AccountStore, EntryDirection, EntryType, Identity, MemoryAccountStore,
        PlayerAccount, RecordError, WalletError,
    },
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2025, 9, 1)
}

fn adult(balance: u64) -> PlayerAccount {
    PlayerAccount::open(
        Identity::new("carla@example.com", "carla"),
        date(1988, 11, 30),
        balance,
        today(),
    )
}

#[test]
fn test_withdraw_needs_floor_balance() {
    let mut account = adult(99);
    assert!(matches!(
        account.withdraw(1),
        Err(WalletError::InsufficientFunds { .. })
    ));
    assert_eq!(account.balance(), 99);

    let mut account = adult(150);
    let entry = account.withdraw(100).unwrap();
    assert_eq!(account.balance(), 50);
    assert_eq!(entry.entry_type, EntryType::Withdrawal);
    assert_eq!(entry.balance_after, 50);
}

#[test]
fn test_withdraw_exactly_at_floor() {
    let mut account = adult(100);
    account.withdraw(100).unwrap();
    assert_eq!(account.balance(), 0);
}

#[test]
fn test_deposit_then_withdraw() {
    let mut account =
        PlayerAccount::register(Identity::new("new@example.com", "new"), date(2000, 1, 1), today());
    assert_eq!(account.balance(), STARTING_BALANCE);
    assert!(account.withdraw(10).is_err());

    account.deposit(60).unwrap();
    account.withdraw(10).unwrap();
    assert_eq!(account.balance(), STARTING_BALANCE + 50);
}

#[test]
fn test_minor_cannot_bet_but_can_deposit() {
    let mut account = PlayerAccount::register(
        Identity::new("minor@example.com", "minor"),
        date(2010, 4, 2),
        today(),
    );
    assert!(!account.is_eligible());

    account.deposit(1_000).unwrap();
    assert_eq!(account.place_bet(1), Err(WalletError::Ineligible));
    assert_eq!(account.balance(), STARTING_BALANCE + 1_000);
}

#[test]
fn test_every_entry_reflects_balance() {
    let mut account = adult(200);
    let entries = [
        account.deposit(25).unwrap(),
        account.place_bet(40).unwrap(),
        account.reward(400),
        account.withdraw(85).unwrap(),
    ];

    let directions: Vec<EntryDirection> = entries.iter().map(|e| e.direction).collect();
    assert_eq!(
        directions,
        vec![
            EntryDirection::Credit,
            EntryDirection::Debit,
            EntryDirection::Credit,
            EntryDirection::Debit
        ]
    );
    assert_eq!(
        entries.map(|e| e.balance_after),
        [225, 185, 585, 500]
    );
    assert_eq!(account.balance(), 500);
}

#[test]
fn test_record_round_trip_keeps_state() {
    let mut store = MemoryAccountStore::new();
    let mut account = adult(0);
    account.deposit(321).unwrap();
    store.save(&account.to_record()).unwrap();

    let record = store.load("carla@example.com").unwrap().unwrap();
    let restored = PlayerAccount::from_record(record, today());
    assert_eq!(restored, account);
    assert_eq!(restored.balance(), 321);
    assert_eq!(restored.identity().nickname, "carla");
    assert!(restored.is_eligible());
}

#[test]
fn test_reconstruction_rederives_eligibility() {
    let birth = date(2008, 3, 10);
    let minor = PlayerAccount::open(Identity::new("t@example.com", "t"), birth, 10, today());
    assert!(!minor.is_eligible());

    // Same record loaded after the 18th birthday.
    let later = PlayerAccount::from_record(minor.to_record(), date(2026, 3, 10));
    assert!(later.is_eligible());
    assert_eq!(later.balance(), 10);
}

#[test]
fn test_from_fields_rejects_corrupt_rows() {
    let fields = adult(5).to_record().to_fields();

    let mut wrong_version = fields.clone();
    wrong_version[0] = "0".to_string();
    assert!(matches!(
        PlayerAccount::from_fields(&wrong_version, today()),
        Err(RecordError::UnsupportedVersion(_))
    ));

    let truncated = &fields[..3];
    assert!(matches!(
        PlayerAccount::from_fields(truncated, today()),
        Err(RecordError::FieldCount { got: 3, .. })
    ));

    let restored = PlayerAccount::from_fields(&fields, today()).unwrap();
    assert_eq!(restored.to_record(), AccountRecord::from_fields(&fields).unwrap());
}
