//! 并发取号测试
//!
//! 多个请求同时取号时，号码必须连续且不重复

mod common;

use common::spawn_app;
use futures::future::join_all;
use pos_server::db::repository::{counter, order};
use serde_json::json;
use shared::models::OrderCreate;

const CONCURRENCY: usize = 50;

fn request(i: usize) -> OrderCreate {
    OrderCreate {
        category: Some(if i % 2 == 0 { "bike" } else { "car" }.to_string()),
        amount: Some(json!(100 + i)),
        vehicle_no: Some(format!("KA01-{i:04}")),
        customer_email: None,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_issuance_is_gapless_and_unique() {
    let app = spawn_app().await;
    let pool = app.state.pool().clone();

    // Start from a non-zero counter
    for i in 0..3 {
        app.state.issuer.issue(request(i)).await.unwrap();
    }
    let start = counter::get(&pool)
        .await
        .unwrap()
        .unwrap()
        .current_token_number
        .unwrap();
    assert_eq!(start, 3);

    let handles = (0..CONCURRENCY).map(|i| {
        let issuer = app.state.issuer.clone();
        tokio::spawn(async move { issuer.issue(request(i)).await })
    });

    let mut tokens: Vec<i64> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap().token_number)
        .collect();
    tokens.sort_unstable();

    let expected: Vec<i64> = (start + 1..=start + CONCURRENCY as i64).collect();
    assert_eq!(tokens, expected);

    let current = counter::get(&pool).await.unwrap().unwrap();
    assert_eq!(current.current_token_number, Some(start + CONCURRENCY as i64));
    assert_eq!(order::count(&pool).await.unwrap(), 3 + CONCURRENCY as i64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_http_orders_get_distinct_tokens() {
    let app = spawn_app().await;

    let requests = (0..20).map(|i| {
        let app = &app;
        async move { app.issue(if i % 2 == 0 { "bike" } else { "car" }, 150.0).await }
    });
    let mut tokens = join_all(requests).await;
    tokens.sort_unstable();

    assert_eq!(tokens, (1..=20).collect::<Vec<i64>>());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_reset_during_traffic_restarts_sequence() {
    let app = spawn_app().await;
    let pool = app.state.pool().clone();

    let handles = (0..10).map(|i| {
        let issuer = app.state.issuer.clone();
        tokio::spawn(async move { issuer.issue(request(i)).await })
    });
    for joined in join_all(handles).await {
        joined.unwrap().unwrap();
    }

    counter::reset(&pool).await.unwrap();

    let handles = (0..5).map(|i| {
        let issuer = app.state.issuer.clone();
        tokio::spawn(async move { issuer.issue(request(i)).await })
    });
    let mut tokens: Vec<i64> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap().token_number)
        .collect();
    tokens.sort_unstable();
    assert_eq!(tokens, vec![1, 2, 3, 4, 5]);
    assert_eq!(order::count(&pool).await.unwrap(), 15);
}
