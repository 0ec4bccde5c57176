mod common;

use std::fs;

use common::{CATEGORY_HEADER, Fixture, ITEM_HEADER, STORE_HEADER, USER_HEADER, orphan_store};
use qr_menu::coerce::{TimestampPolicy, timestamp_to_epoch_millis};
use qr_menu::repository::{MemoryRepository, SeedRepository};
use qr_menu::user::NewUser;
use qr_menu::{EntityKind, SeedError, seed};

fn user(id: &str) -> NewUser {
    NewUser {
        id: id.to_owned(),
        public_id: None,
        email: format!("{id}@old.example"),
        display_name: None,
        role: "owner".to_owned(),
        created_at: None,
        updated_at: None,
    }
}

#[tokio::test]
async fn headers_only_files_produce_empty_tables() {
    let fixture = Fixture::headers_only();
    let mut repo = MemoryRepository::constrained();

    let report = seed::run(&mut repo, &fixture.config()).await.unwrap();

    for (kind, rows) in seed::row_counts(&mut repo).await.unwrap() {
        assert_eq!(rows, 0, "{kind} should be empty");
    }
    assert!(report.phases.iter().all(|p| p.read == 0 && p.inserted == 0));
}

#[tokio::test]
async fn loads_one_row_per_entity_with_converted_timestamps() {
    let fixture = Fixture::single_menu();
    let mut repo = MemoryRepository::constrained();

    let report = seed::run(&mut repo, &fixture.config()).await.unwrap();

    let owner = &repo.users()["u1"];
    assert_eq!(owner.created_at.map(timestamp_to_epoch_millis), Some(1_700_000_000_000));
    assert_eq!(owner.updated_at.map(timestamp_to_epoch_millis), Some(1_700_000_000_000));
    assert_eq!(owner.display_name.as_deref(), Some("Ana"));

    let store = &repo.stores()[&1];
    assert_eq!(store.owner_id, "u1");
    assert_eq!(store.phone, None);

    assert_eq!(repo.categories()[&10].store_id, 1);

    let item = &repo.items()[&100];
    assert_eq!((item.category_id, item.store_id), (10, 1));
    assert_eq!(item.price, 7.25);

    for kind in EntityKind::LOAD_ORDER {
        assert_eq!(report.phase(kind).unwrap().inserted, 1, "{kind}");
    }
}

#[tokio::test]
async fn rerunning_yields_identical_state() {
    let fixture = Fixture::single_menu();
    let config = fixture.config();
    let mut repo = MemoryRepository::constrained();

    seed::run(&mut repo, &config).await.unwrap();
    let first = repo.clone();

    let report = seed::run(&mut repo, &config).await.unwrap();

    assert_eq!(repo, first);
    let users = report.phase(EntityKind::User).unwrap();
    assert_eq!((users.deleted, users.inserted, users.unchanged), (1, 1, 0));
}

#[tokio::test]
async fn clearing_replaces_rows_changed_since_last_load() {
    let fixture = Fixture::single_menu();
    let mut repo = MemoryRepository::new();
    repo.upsert_user(&user("u1")).await.unwrap();
    repo.upsert_user(&user("stale")).await.unwrap();

    seed::run(&mut repo, &fixture.config()).await.unwrap();

    assert_eq!(repo.users()["u1"].email, "owner@lamesa.example");
    assert!(!repo.users().contains_key("stale"));
}

#[tokio::test]
async fn duplicate_keys_in_a_file_keep_the_first_row() {
    let fixture = Fixture::new(
        &format!("{USER_HEADER}u1,,first@x.example,,owner,0,0\nu1,,second@x.example,,owner,0,0\n"),
        STORE_HEADER,
        CATEGORY_HEADER,
        ITEM_HEADER,
    );
    let mut repo = MemoryRepository::new();

    let report = seed::run(&mut repo, &fixture.config()).await.unwrap();

    assert_eq!(repo.users()["u1"].email, "first@x.example");
    let users = report.phase(EntityKind::User).unwrap();
    assert_eq!((users.inserted, users.unchanged), (1, 1));
}

#[tokio::test]
async fn malformed_rows_are_dropped_and_counted() {
    let fixture = Fixture::new(
        &format!("{USER_HEADER}u1,,a@x.example,,owner,0,0\nu2,broken\n"),
        STORE_HEADER,
        CATEGORY_HEADER,
        ITEM_HEADER,
    );
    let mut repo = MemoryRepository::new();

    let report = seed::run(&mut repo, &fixture.config()).await.unwrap();

    assert_eq!(repo.users().len(), 1);
    let users = report.phase(EntityKind::User).unwrap();
    assert_eq!((users.read, users.skipped), (1, 1));
}

#[tokio::test]
async fn unknown_owner_is_accepted_by_an_unconstrained_store() {
    let fixture = orphan_store();
    let mut repo = MemoryRepository::new();

    seed::run(&mut repo, &fixture.config()).await.unwrap();

    assert_eq!(repo.stores()[&1].owner_id, "ghost");
}

#[tokio::test]
async fn unknown_owner_fails_after_users_are_committed() {
    let fixture = Fixture::new(
        &format!("{USER_HEADER}u1,,a@x.example,,owner,0,0\n"),
        &format!("{STORE_HEADER}1,Orphan,,,,,,ghost\n"),
        &format!("{CATEGORY_HEADER}10,Tapas,,1,1\n"),
        ITEM_HEADER,
    );
    let mut repo = MemoryRepository::constrained();

    let err = seed::run(&mut repo, &fixture.config()).await.unwrap_err();

    assert!(matches!(err, SeedError::MissingReference { entity: "store", .. }), "got {err:?}");
    assert!(repo.users().contains_key("u1"));
    assert!(repo.stores().is_empty());
    assert!(repo.categories().is_empty());
}

#[tokio::test]
async fn missing_store_file_aborts_after_user_phase() {
    let fixture = Fixture::single_menu();
    fs::remove_file(fixture.dir.path().join("store.csv")).unwrap();
    let mut repo = MemoryRepository::constrained();

    let err = seed::run(&mut repo, &fixture.config()).await.unwrap_err();

    assert!(matches!(err, SeedError::Io { .. }), "got {err:?}");
    assert_eq!(repo.users().len(), 1);
    assert!(repo.stores().is_empty());
}

#[tokio::test]
async fn strict_timestamps_reject_user_file_without_created_at() {
    let fixture = Fixture::new(
        "id,email,role,updatedAt\nu1,a@x.example,owner,1700000000000\n",
        STORE_HEADER,
        CATEGORY_HEADER,
        ITEM_HEADER,
    );
    let mut repo = MemoryRepository::new();

    let err = seed::run(&mut repo, &fixture.config()).await.unwrap_err();

    assert!(
        matches!(err, SeedError::Header { file: "user.csv", .. }),
        "got {err:?}"
    );
    assert!(repo.users().is_empty());
}

#[tokio::test]
async fn lenient_timestamps_leave_missing_columns_unconverted() {
    let fixture = Fixture::new(
        "id,email,role,updatedAt\nu1,a@x.example,owner,1700000000000\n",
        STORE_HEADER,
        CATEGORY_HEADER,
        ITEM_HEADER,
    );
    let config = fixture.config().with_timestamps(TimestampPolicy::Lenient);
    let mut repo = MemoryRepository::new();

    seed::run(&mut repo, &config).await.unwrap();

    let user = &repo.users()["u1"];
    assert_eq!(user.created_at, None);
    assert_eq!(user.updated_at.map(timestamp_to_epoch_millis), Some(1_700_000_000_000));
}

#[tokio::test]
async fn bad_number_reports_file_and_line() {
    let fixture = Fixture::new(
        USER_HEADER,
        STORE_HEADER,
        &format!("{CATEGORY_HEADER}10,Tapas,,first,1\n"),
        ITEM_HEADER,
    );
    let mut repo = MemoryRepository::new();

    let err = seed::run(&mut repo, &fixture.config()).await.unwrap_err();

    assert!(
        matches!(err, SeedError::Row { file: "menucategory.csv", line: 2, .. }),
        "got {err:?}"
    );
    assert_eq!(
        err.to_string(),
        "menucategory.csv line 2: column `order`: \"first\" is not a valid integer"
    );
}
