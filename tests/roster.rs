//! Integration tests for creating, listing, editing and deleting players.

use table_tennis_ranking::{
    create_player, delete_player_by_name, get_player_by_id, list_rankings, update_player_details,
    MemoryStore, NewPlayer, PlayerPatch, PlayerStore, Rank, RankingError, DEFAULT_POINTS,
};

fn new_player(name: &str, points: Option<i64>) -> NewPlayer {
    NewPlayer {
        name: name.to_string(),
        total_points: points,
        phone_number: None,
    }
}

#[test]
fn create_computes_rank_and_defaults() {
    let mut store = MemoryStore::new();
    let p = create_player(&mut store, new_player("  Alice  ", None)).unwrap();
    assert_eq!(p.name, "Alice");
    assert_eq!(p.total_points, DEFAULT_POINTS);
    assert_eq!(p.rank, Rank::E);
    assert_eq!(p.phone_number, "");

    let q = create_player(
        &mut store,
        NewPlayer {
            name: "Bob".to_string(),
            total_points: Some(600),
            phone_number: Some("0901 234 567".to_string()),
        },
    )
    .unwrap();
    assert_eq!(q.rank, Rank::A0);
    assert_eq!(store.find_by_id(q.id).unwrap().unwrap(), q);
}

#[test]
fn create_rejects_duplicates_and_bad_input() {
    let mut store = MemoryStore::new();
    create_player(&mut store, new_player("Alice", Some(40))).unwrap();
    assert_eq!(
        create_player(&mut store, new_player(" Alice", Some(80))),
        Err(RankingError::NameTaken("Alice".to_string()))
    );
    assert!(matches!(
        create_player(&mut store, new_player("   ", Some(40))),
        Err(RankingError::Validation(_))
    ));
    assert!(matches!(
        create_player(&mut store, new_player("Bob", Some(-1))),
        Err(RankingError::Validation(_))
    ));
    assert_eq!(store.len(), 1);
}

#[test]
fn different_case_is_a_different_name() {
    let mut store = MemoryStore::new();
    create_player(&mut store, new_player("Alice", None)).unwrap();
    assert!(create_player(&mut store, new_player("alice", None)).is_ok());
}

#[test]
fn rankings_are_sorted_by_points_descending_with_stable_ties() {
    let mut store = MemoryStore::new();
    for (name, points) in [("A", 40), ("B", 200), ("C", 40), ("D", 580)] {
        create_player(&mut store, new_player(name, Some(points))).unwrap();
    }
    let names: Vec<String> = list_rankings(&store)
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["D", "B", "A", "C"]);
}

#[test]
fn delete_by_name() {
    let mut store = MemoryStore::new();
    create_player(&mut store, new_player("Alice", None)).unwrap();
    delete_player_by_name(&mut store, " Alice ").unwrap();
    assert!(store.is_empty());
    assert_eq!(
        delete_player_by_name(&mut store, "Alice"),
        Err(RankingError::PlayerNotFound("Alice".to_string()))
    );
    assert!(matches!(
        delete_player_by_name(&mut store, ""),
        Err(RankingError::Validation(_))
    ));
}

#[test]
fn get_by_id_distinguishes_invalid_and_unknown() {
    let mut store = MemoryStore::new();
    let alice = create_player(&mut store, new_player("Alice", None)).unwrap();
    assert_eq!(get_player_by_id(&store, &alice.id.to_string()).unwrap(), alice);
    assert_eq!(
        get_player_by_id(&store, "not-an-id"),
        Err(RankingError::InvalidId("not-an-id".to_string()))
    );
    let stranger = uuid::Uuid::new_v4();
    assert_eq!(
        get_player_by_id(&store, &stranger.to_string()),
        Err(RankingError::IdNotFound(stranger))
    );
}

#[test]
fn update_points_recomputes_rank() {
    let mut store = MemoryStore::new();
    let alice = create_player(&mut store, new_player("Alice", None)).unwrap();
    let id = alice.id.to_string();
    let updated = update_player_details(
        &mut store,
        &id,
        PlayerPatch {
            total_points: Some(250),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(updated.total_points, 250);
    assert_eq!(updated.rank, Rank::C2);
    assert_eq!(updated.name, "Alice");
    assert_eq!(store.find_by_name("Alice").unwrap().unwrap().rank, Rank::C2);
}

#[test]
fn update_name_and_phone_keep_points() {
    let mut store = MemoryStore::new();
    let alice = create_player(&mut store, new_player("Alice", Some(130))).unwrap();
    let updated = update_player_details(
        &mut store,
        &alice.id.to_string(),
        PlayerPatch {
            name: Some(" Alicia ".to_string()),
            phone_number: Some("555".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(updated.name, "Alicia");
    assert_eq!(updated.phone_number, "555");
    assert_eq!((updated.total_points, updated.rank), (130, Rank::D2));
    assert!(store.find_by_name("Alice").unwrap().is_none());
}

#[test]
fn update_rejects_bad_patches() {
    let mut store = MemoryStore::new();
    let alice = create_player(&mut store, new_player("Alice", None)).unwrap();
    create_player(&mut store, new_player("Bob", None)).unwrap();
    let id = alice.id.to_string();

    assert!(matches!(
        update_player_details(&mut store, &id, PlayerPatch::default()),
        Err(RankingError::Validation(_))
    ));
    assert!(matches!(
        update_player_details(
            &mut store,
            &id,
            PlayerPatch {
                total_points: Some(-5),
                ..Default::default()
            }
        ),
        Err(RankingError::Validation(_))
    ));
    assert_eq!(
        update_player_details(
            &mut store,
            &id,
            PlayerPatch {
                name: Some("Bob".to_string()),
                ..Default::default()
            }
        ),
        Err(RankingError::NameTaken("Bob".to_string()))
    );
    assert!(matches!(
        update_player_details(
            &mut store,
            &uuid::Uuid::new_v4().to_string(),
            PlayerPatch {
                phone_number: Some("1".to_string()),
                ..Default::default()
            }
        ),
        Err(RankingError::IdNotFound(_))
    ));
    assert_eq!(store.find_by_id(alice.id).unwrap().unwrap(), alice);
}

#[test]
fn renaming_to_own_name_is_allowed() {
    let mut store = MemoryStore::new();
    let alice = create_player(&mut store, new_player("Alice", None)).unwrap();
    let updated = update_player_details(
        &mut store,
        &alice.id.to_string(),
        PlayerPatch {
            name: Some("Alice".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(updated, alice);
}
