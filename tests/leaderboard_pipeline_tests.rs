use std::sync::Arc;
use std::time::Duration;

use campus_leaderboard::{
    FetchError, InMemoryProfileRepository, LeaderboardService, Profile, RankedEntry, SolvedSource,
};

mod utils;

use utils::*;

fn service(profiles: Vec<Profile>, fetcher: MockStatsFetcher) -> LeaderboardService {
    LeaderboardService::new(
        Arc::new(InMemoryProfileRepository::with_profiles(profiles)),
        Arc::new(fetcher),
    )
}

fn order(entries: &[RankedEntry]) -> Vec<(&str, u32)> {
    entries.iter().map(|e| (e.id.as_str(), e.rank)).collect()
}

#[tokio::test]
async fn test_live_counts_order_the_board() {
    let fetcher = MockStatsFetcher::new()
        .solved("a_codes", 200)
        .await
        .solved("b_codes", 150)
        .await;
    let service = service(
        vec![
            ProfileBuilder::new("b").practice_username("b_codes").stored_points(100).build(),
            ProfileBuilder::new("a").practice_username("a_codes").stored_points(100).build(),
        ],
        fetcher,
    );

    let ranked = service.load().await.unwrap();

    assert_eq!(order(&ranked), vec![("a", 1), ("b", 2)]);
    assert_eq!(ranked[0].solved_count, 200);
    assert_eq!(ranked[1].solved_count, 150);
}

#[tokio::test]
async fn test_points_break_equal_solved_counts() {
    let service = service(
        vec![
            ProfileBuilder::new("low").cached_solved(100).stored_points(300).build(),
            ProfileBuilder::new("high").cached_solved(100).stored_points(500).build(),
        ],
        MockStatsFetcher::new(),
    );

    let ranked = service.load().await.unwrap();

    assert_eq!(order(&ranked), vec![("high", 1), ("low", 2)]);
}

#[tokio::test]
async fn test_not_found_user_falls_back_to_cached_count() {
    let fetcher = MockStatsFetcher::new()
        .failing("ghost", FetchError::NotFound("user does not exist".into()))
        .await;
    let service = service(
        vec![ProfileBuilder::new("g").practice_username("ghost").cached_solved(42).build()],
        fetcher.clone(),
    );

    let ranked = service.load().await.unwrap();

    assert_eq!(ranked[0].solved_count, 42);
    assert_eq!(ranked[0].solved_source, SolvedSource::Cached);
    assert_eq!(fetcher.calls().await, vec!["ghost"]);
}

#[tokio::test]
async fn test_points_derive_from_streak_without_stored_points() {
    let service = service(
        vec![ProfileBuilder::new("s").streak(3).cached_solved(0).build()],
        MockStatsFetcher::new(),
    );

    let ranked = service.load().await.unwrap();

    assert_eq!(ranked[0].points, 30);
    assert_eq!(ranked[0].solved_count, 0);
}

#[tokio::test]
async fn test_empty_profile_list() {
    let service = service(vec![], MockStatsFetcher::new());
    assert!(service.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_full_ties_keep_source_order() {
    let tied = |id: &str| {
        ProfileBuilder::new(id)
            .cached_solved(10)
            .stored_points(50)
            .streak(2)
            .build()
    };
    let service = service(vec![tied("x"), tied("y"), tied("z")], MockStatsFetcher::new());

    let ranked = service.load().await.unwrap();

    assert_eq!(order(&ranked), vec![("x", 1), ("y", 2), ("z", 3)]);
}

#[tokio::test]
async fn test_all_zero_profile_is_ranked_once() {
    let service = service(
        vec![
            ProfileBuilder::new("busy").cached_solved(5).build(),
            Profile {
                id: "empty".to_string(),
                ..Profile::default()
            },
        ],
        MockStatsFetcher::new(),
    );

    let ranked = service.load().await.unwrap();

    let empties: Vec<&RankedEntry> = ranked.iter().filter(|e| e.id == "empty").collect();
    assert_eq!(empties.len(), 1);
    assert_eq!(empties[0].points, 0);
    assert_eq!(empties[0].solved_count, 0);
    assert_eq!(empties[0].rank, 2);
    assert_eq!(empties[0].display_name, "Anonymous");
    assert_eq!(empties[0].organization, "Unknown College");
}

#[tokio::test]
async fn test_one_failure_does_not_disturb_others() {
    let profiles = vec![
        ProfileBuilder::new("a").practice_username("alpha").cached_solved(1).build(),
        ProfileBuilder::new("b").practice_username("beta").cached_solved(80).build(),
        ProfileBuilder::new("c").practice_username("gamma").cached_solved(2).build(),
    ];

    let healthy = MockStatsFetcher::new()
        .solved("alpha", 90)
        .await
        .solved("beta", 60)
        .await
        .solved("gamma", 30)
        .await;
    let degraded = MockStatsFetcher::new()
        .solved("alpha", 90)
        .await
        .failing("beta", FetchError::Network("connection refused".into()))
        .await
        .solved("gamma", 30)
        .await;

    let baseline = service(profiles.clone(), healthy).load().await.unwrap();
    let with_failure = service(profiles, degraded).load().await.unwrap();

    let find = |entries: &[RankedEntry], id: &str| {
        entries.iter().find(|e| e.id == id).cloned().unwrap()
    };

    for id in ["a", "c"] {
        let before = find(&baseline, id);
        let after = find(&with_failure, id);
        assert_eq!(before.solved_count, after.solved_count);
        assert_eq!(before.points, after.points);
    }
    assert_eq!(find(&with_failure, "b").solved_count, 80);
    assert_eq!(order(&with_failure), vec![("a", 1), ("b", 2), ("c", 3)]);
}

#[tokio::test]
async fn test_waits_for_slow_fetches_before_ranking() {
    let fetcher = MockStatsFetcher::new()
        .slow("slowpoke", 500, Duration::from_millis(150))
        .await
        .solved("quick", 10)
        .await;
    let service = service(
        vec![
            ProfileBuilder::new("quick").practice_username("quick").build(),
            ProfileBuilder::new("slow").practice_username("slowpoke").cached_solved(1).build(),
        ],
        fetcher,
    );

    let ranked = service.load().await.unwrap();

    assert_eq!(order(&ranked), vec![("slow", 1), ("quick", 2)]);
    assert_eq!(ranked[0].solved_count, 500);
    assert_eq!(ranked[0].solved_source, SolvedSource::Live);
}

#[tokio::test]
async fn test_repeated_loads_are_identical() {
    let profiles: Vec<Profile> = (0..25u32)
        .map(|i| {
            ProfileBuilder::new(&format!("p{i}"))
                .practice_username(&format!("user{i}"))
                .cached_solved(i % 4)
                .streak(i % 3)
                .build()
        })
        .collect();

    let mut fetcher = MockStatsFetcher::new();
    for i in (0..25u32).step_by(2) {
        fetcher = fetcher.solved(&format!("user{i}"), (i * 11) % 7).await;
    }
    let service = service(profiles, fetcher);

    let first = service.load().await.unwrap();
    let second = service.load().await.unwrap();

    assert_eq!(first, second);
    let ranks: Vec<u32> = first.iter().map(|e| e.rank).collect();
    assert_eq!(ranks, (1..=25).collect::<Vec<u32>>());
}
