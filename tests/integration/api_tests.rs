//! API integration tests against a running server backed by a real database

use reqwest::Client;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080/api/v1";

async fn get(client: &Client, path: &str) -> (u16, Value) {
    let response = client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status().as_u16();
    let body: Value = response.json().await.expect("Failed to parse response");
    (status, body)
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();
    let (status, body) = get(&client, "/health").await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();
    let (status, body) = get(&client, "/ready").await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_dashboard_stats() {
    let client = Client::new();
    let (status, body) = get(&client, "/dashboard/stats").await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    for field in ["totalEquipments", "borrowed", "lateReturns", "maintenance"] {
        assert!(body["data"][field].is_i64(), "{field} should be a number");
    }
}

#[tokio::test]
#[ignore]
async fn test_borrowing_trend_window() {
    let client = Client::new();
    let (status, body) = get(&client, "/dashboard/borrowing-trend").await;

    assert_eq!(status, 200);
    let points = body["data"].as_array().expect("data should be an array");
    assert_eq!(points.len(), 7);
    let dates: Vec<&str> = points.iter().map(|p| p["date"].as_str().unwrap()).collect();
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
#[ignore]
async fn test_compliance_percentages() {
    let client = Client::new();
    let (status, body) = get(&client, "/dashboard/compliance").await;

    assert_eq!(status, 200);
    let data = &body["data"];
    let count: i64 = ["onTime", "dueToday", "overdue"]
        .iter()
        .map(|k| data[*k]["count"].as_i64().unwrap())
        .sum();
    let percent: f64 = ["onTime", "dueToday", "overdue"]
        .iter()
        .map(|k| data[*k]["percent"].as_f64().unwrap())
        .sum();
    if count == 0 {
        assert_eq!(percent, 0.0);
    } else {
        assert!((percent - 100.0).abs() <= 0.02);
    }
}

#[tokio::test]
#[ignore]
async fn test_upcoming_returns_sorted() {
    let client = Client::new();
    let (status, body) = get(&client, "/dashboard/upcoming-returns").await;

    assert_eq!(status, 200);
    let rows = body["data"].as_array().expect("data should be an array");
    assert!(rows.len() <= 10);
    assert!(rows.iter().all(|r| r["remainingDays"].as_i64().unwrap() >= 0));
    let due: Vec<&str> = rows.iter().map(|r| r["dueDate"].as_str().unwrap()).collect();
    assert!(due.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
#[ignore]
async fn test_recent_activities_sorted() {
    let client = Client::new();
    let (status, body) = get(&client, "/dashboard/recent-activities").await;

    assert_eq!(status, 200);
    let events = body["data"].as_array().expect("data should be an array");
    assert!(events.len() <= 15);
    let dates: Vec<&str> = events.iter().map(|e| e["actionDate"].as_str().unwrap()).collect();
    assert!(dates.windows(2).all(|w| w[0] >= w[1]));
}
