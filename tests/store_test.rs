use cabinet_scraper::store::StoreError;
use cabinet_scraper::{Membership, Store};
use pretty_assertions::assert_eq;

fn membership(id: &str, position_id: &str, end_date: &str) -> Membership {
    Membership {
        id: id.to_string(),
        name: "Alice".to_string(),
        position_id: position_id.to_string(),
        position: "Q2".to_string(),
        label: "Minister".to_string(),
        start_date: "2020-01-01".to_string(),
        end_date: end_date.to_string(),
        ordinal: 1,
    }
}

#[test]
fn rows_are_saved_and_read_back() {
    let mut store = Store::open_in_memory().unwrap();
    let memberships = vec![
        membership("Q1", "S1", "2021-06-15"),
        membership("Q3", "S2", ""),
    ];

    store.save(&memberships, &["position_id"]).unwrap();
    assert_eq!(store.memberships().unwrap(), memberships);
}

#[test]
fn duplicate_keys_keep_the_last_row() {
    let mut store = Store::open_in_memory().unwrap();
    store
        .save(
            &[
                membership("Q1", "S1", "2020-12-31"),
                membership("Q1", "S1", "2021-06-15"),
            ],
            &["position_id"],
        )
        .unwrap();

    let rows = store.memberships().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].end_date, "2021-06-15");
}

#[test]
fn each_save_replaces_the_table() {
    let mut store = Store::open_in_memory().unwrap();
    store
        .save(
            &[
                membership("Q1", "S1", "2021-06-15"),
                membership("Q3", "S2", ""),
            ],
            &["position_id"],
        )
        .unwrap();

    // an empty run still rewrites the table, leaving it empty
    store.save(&[], &["position_id"]).unwrap();
    assert_eq!(store.memberships().unwrap().len(), 0);
}

#[test]
fn compound_keys_are_supported() {
    let mut store = Store::open_in_memory().unwrap();
    let mut second_term = membership("Q1", "S2", "");
    second_term.start_date = "2021-07-01".to_string();

    store
        .save(
            &[membership("Q1", "S1", "2021-06-15"), second_term],
            &["id", "position", "start_date"],
        )
        .unwrap();
    assert_eq!(store.memberships().unwrap().len(), 2);
}

#[test]
fn unknown_key_columns_are_rejected() {
    let mut store = Store::open_in_memory().unwrap();
    assert!(matches!(
        store.save(&[], &["nope"]),
        Err(StoreError::UnknownKey(_))
    ));
    assert!(matches!(store.save(&[], &[]), Err(StoreError::NoKeys)));
}
