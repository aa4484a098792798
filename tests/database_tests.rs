use chrono::Utc;
use pretty_assertions::assert_eq;

mod common;

#[actix_web::test]
async fn test_insert_then_find_all_round_trips_the_roster() {
    let db = common::TestDb::new().await.unwrap();
    let repository = db.repository();

    let mut captain = common::member("S1", "cap@x.com");
    captain.wallet_address = Some("0xA478c2975Ab1Ea89e8196811F51A7B7Ade33eB11".to_string());
    let input = common::team(
        "Alpha",
        captain,
        vec![
            common::member("S2", "first@x.com"),
            common::member("S3", "second@x.com"),
        ],
    );

    let before = Utc::now();
    let inserted = repository.insert(input).await.unwrap();
    assert!(inserted.created_at >= before);

    let all = repository.find_all().await.unwrap();
    assert_eq!(all.len(), 1);

    let team = &all[0];
    assert_eq!(team.id, inserted.id);
    assert_eq!(team.team_name, "Alpha");
    assert_eq!(team.idea, "An idea");
    assert_eq!(team.captain.srn, "S1");
    assert_eq!(
        team.captain.wallet_address.as_deref(),
        Some("0xA478c2975Ab1Ea89e8196811F51A7B7Ade33eB11")
    );

    // Members come back in submission order, captain excluded.
    let srns: Vec<&str> = team.members.iter().map(|m| m.srn.as_str()).collect();
    assert_eq!(srns, vec!["S2", "S3"]);
}

#[actix_web::test]
async fn test_find_all_returns_teams_in_insertion_order() {
    let db = common::TestDb::new().await.unwrap();
    let repository = db.repository();

    for (name, srn, email) in [
        ("Alpha", "S1", "a@x.com"),
        ("Beta", "S2", "b@x.com"),
        ("Gamma", "S3", "c@x.com"),
    ] {
        repository
            .insert(common::team(name, common::member(srn, email), vec![]))
            .await
            .unwrap();
    }

    let all = repository.find_all().await.unwrap();
    let names: Vec<&str> = all.iter().map(|t| t.team_name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
}

#[actix_web::test]
async fn test_find_all_on_empty_store_is_empty() {
    let db = common::TestDb::new().await.unwrap();
    let all = db.repository().find_all().await.unwrap();
    assert!(all.is_empty());
}
