use chrono::{DateTime, Duration, TimeZone, Utc};

use related_content::similarity::{freshness_score, jaccard};
use related_content::{
    ContentRecord, Ranker, RankerConfig, TokenSet, feed_order, parse_corpus, score,
    select_related, siblings, tokenize,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

#[test]
fn scenario_a_single_candidate_breakdown() {
    let reference = ContentRecord::new("ref", "Building a Cache")
        .with_tags(["go", "rust"])
        .with_category("systems")
        .with_published_at(days_ago(1));
    let candidate = ContentRecord::new("x", "Building a Queue")
        .with_tags(["go"])
        .with_category("systems")
        .with_published_at(days_ago(30));

    let scored = score(&reference, &candidate, now());
    assert!((scored.tag_match - 33.333).abs() < 1e-2);
    assert!((scored.title_similarity - 50.0).abs() < 1e-9);
    assert!((scored.freshness - 26.7).abs() < 0.05);
    assert_eq!(scored.category_bonus, 10.0);
    assert!((scored.total() - 120.0).abs() < 0.1);
}

#[test]
fn scenario_b_fallback_fill_ignores_total_score() {
    let reference = ContentRecord::new("ref", "Async Rust Patterns")
        .with_tags(["rust"])
        .with_category("notes")
        .with_published_at(days_ago(0));
    let corpus = vec![
        ContentRecord::new("title_twin", "Async Rust Patterns Explained")
            .with_published_at(days_ago(700)),
        ContentRecord::new("tagged_old", "Misc")
            .with_tags(["rust", "x", "y"])
            .with_published_at(days_ago(800)),
        ContentRecord::new("fresh_same_category", "Gardening")
            .with_category("notes")
            .with_published_at(days_ago(2)),
        ContentRecord::new("tagged_new", "Other")
            .with_tags(["rust"])
            .with_published_at(days_ago(5)),
        ContentRecord::new("fresh", "Travel").with_published_at(days_ago(3)),
        ContentRecord::new("older_same_category", "Cooking")
            .with_category("notes")
            .with_published_at(days_ago(90)),
    ];

    let ranked = Ranker::default().rank(&reference, &corpus, now());
    let total = |id: &str| {
        ranked
            .iter()
            .find(|candidate| candidate.record.id == id)
            .map(|candidate| candidate.total())
            .unwrap()
    };
    assert!(total("title_twin") > total("tagged_old"));

    let ids = select_related(&reference, &corpus, 5, now());
    assert_eq!(
        ids,
        vec![
            "tagged_new",
            "tagged_old",
            "fresh_same_category",
            "older_same_category",
            "fresh",
        ]
    );
}

#[test]
fn scenario_c_empty_corpus() {
    let reference = ContentRecord::new("ref", "Anything").with_tags(["a"]);
    assert!(select_related(&reference, &[], 5, now()).is_empty());
}

#[test]
fn scenario_d_future_timestamp_is_unclamped() {
    let reference = ContentRecord::new("ref", "Anything");
    let published_at = now() + Duration::days(10);
    let future = ContentRecord::new("future", "Later").with_published_at(published_at);
    let scored = score(&reference, &future, now());
    assert!(scored.freshness > 30.0);
    let expected = freshness_score(Some(published_at), now());
    assert!((scored.freshness - expected).abs() < 1e-12);
    assert_eq!(
        select_related(&reference, std::slice::from_ref(&future), 5, now()),
        vec!["future"]
    );
}

#[test]
fn jaccard_of_two_empty_sets_is_zero() {
    let empty = TokenSet::new();
    assert_eq!(jaccard(&empty, &empty), 0.0);
    assert_eq!(jaccard(&tokenize("   "), &tokenize("")), 0.0);
}

#[test]
fn mixed_script_titles_overlap_on_shared_units() {
    let reference = ContentRecord::new("ref", "Rust 编程入门");
    let candidate = ContentRecord::new("cand", "rust编程进阶");
    // {rust, 编, 程, 入, 门} vs {rust, 编, 程, 进, 阶}: 3 shared of 7.
    let scored = score(&reference, &candidate, now());
    assert!((scored.title_similarity - 300.0 / 7.0).abs() < 1e-9);
}

#[test]
fn malformed_timestamps_rank_as_oldest_in_fallback() {
    let corpus = parse_corpus(
        r#"[
            {"id": "ref", "title": "Reference", "tags": ["a"], "published_at": "2025-05-01"},
            {"id": "broken", "title": "Broken", "published_at": "31/31/2025"},
            {"id": "ancient", "title": "Ancient", "published_at": "2001-01-01"},
            {"id": "recent", "title": "Recent", "published_at": "2025-05-20"}
        ]"#,
    )
    .unwrap();
    let reference = &corpus[0];
    let ranker = Ranker::new(RankerConfig::default());
    assert_eq!(
        ranker.related_ids(reference, &corpus, now()),
        vec!["recent", "ancient", "broken"]
    );
}

#[test]
fn feed_order_and_siblings_follow_pinned_then_newest() {
    let corpus = vec![
        ContentRecord::new("a", "A").with_published_at(days_ago(30)),
        ContentRecord::new("b", "B").with_published_at(days_ago(10)),
        ContentRecord::new("pin", "Pinned")
            .with_published_at(days_ago(400))
            .pinned(),
    ];
    let ordered = feed_order(&corpus);
    let ids: Vec<&str> = ordered.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(ids, vec!["pin", "b", "a"]);

    let around_b = siblings(&ordered, "b").unwrap();
    assert_eq!(around_b.newer.map(|record| record.id.as_str()), Some("pin"));
    assert_eq!(around_b.older.map(|record| record.id.as_str()), Some("a"));
}
