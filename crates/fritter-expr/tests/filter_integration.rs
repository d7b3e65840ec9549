//! End-to-end tests: snapshot file on disk, filter text in, post ids out.

use std::fs;

use fritter_expr_rs::feed::resolve_following;
use fritter_expr_rs::{resolve_filter, FilterError, SavedFilter, SyntaxError};
use fritter_store_rs::{MemoryStore, PostId, PostIdSet};
use tempfile::tempdir;

const SNAPSHOT: &str = r#"{
    "users": [
        {"id": "u1", "username": "alice"},
        {"id": "u2", "username": "bob"}
    ],
    "posts": [
        {"id": "635b1e0a9f1c2d3e4f506171", "author_id": "u1", "content": "walking the dog"},
        {"id": "635b1e0a9f1c2d3e4f506172", "author_id": "u1", "content": "coffee"},
        {"id": "635b1e0a9f1c2d3e4f506173", "author_id": "u2", "content": "dog park"}
    ],
    "tags": [
        {"label": "dog", "post_ids": [
            {"$oid": "635b1e0a9f1c2d3e4f506171"},
            "635b1e0a9f1c2d3e4f506173"
        ]}
    ]
}"#;

fn post(suffix: char) -> PostId {
    format!("635b1e0a9f1c2d3e4f50617{suffix}").parse().unwrap()
}

async fn load_store() -> MemoryStore {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("snapshot.json");
    fs::write(&path, SNAPSHOT).unwrap();
    MemoryStore::load(&path).await.unwrap()
}

#[tokio::test]
async fn test_filter_examples_against_snapshot() {
    let store = load_store().await;

    let cases = [
        ("@alice", vec![post('1'), post('2')]),
        ("#dog", vec![post('1'), post('3')]),
        ("!(#dog)", vec![post('2')]),
        ("&(@alice,#dog)", vec![post('1')]),
        ("|(@alice,@bob)", vec![post('1'), post('2'), post('3')]),
    ];

    for (input, expected) in cases {
        let result = resolve_filter(input, &store).await.unwrap();
        let expected: PostIdSet = expected.into_iter().collect();
        assert_eq!(result, expected, "filter {input}");
    }
}

#[tokio::test]
async fn test_filter_syntax_error_surfaces_through_resolve() {
    let store = load_store().await;

    match resolve_filter("&(@alice,#dog", &store).await {
        Err(FilterError::Syntax(SyntaxError::UnexpectedEnd { index })) => assert_eq!(index, 7),
        other => panic!("Expected UnexpectedEnd, got {other:?}"),
    }
}

#[tokio::test]
async fn test_saved_filter_and_following_feed() {
    let store = load_store().await;

    let filter = SavedFilter::new("u2", "not_dogs", "!(#dog)").unwrap();
    assert_eq!(
        filter.resolve(&store).await.unwrap(),
        PostIdSet::from([post('2')])
    );

    let feed = resolve_following(["bob"], &store).await.unwrap();
    assert_eq!(feed, PostIdSet::from([post('3')]));
}
