use axum::{
    body::{to_bytes, Body},
    extract::{Query, State},
    http::{header, Request, StatusCode},
    Json,
};
use tower::ServiceExt;

use crate::config::ServerConfig;
use crate::projection::GeographicCoordinate;
use crate::record::ExtractedLocation;
use super::handlers::{self, AppState};
use super::models::*;
use super::create_router;

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_utm_to_geographic_handler() {
    let Json(response) = handlers::utm_to_geographic(
        State(AppState::default()),
        Query(UtmQuery {
            easting: 561_063.0,
            northing: 2_066_147.0,
            zone: Some("19Q".to_string()),
        }),
    )
    .await;

    assert!((response.latitude - 18.6857).abs() < 0.001);
    assert_eq!(response.input_zone.as_deref(), Some("19Q"));
    assert_eq!(response.zone, "19N");
    assert!(!response.zone_fallback);
    assert!(!response.valid);
}

#[tokio::test]
async fn test_missing_zone_reports_fallback() {
    let Json(response) = handlers::utm_to_geographic(
        State(AppState::default()),
        Query(UtmQuery {
            easting: 561_063.0,
            northing: 2_066_147.0,
            zone: None,
        }),
    )
    .await;

    assert!(response.zone_fallback);
    assert_eq!(response.input_zone, None);
    assert_eq!(response.zone, "19N");
}

#[tokio::test]
async fn test_garbled_zone_is_echoed_verbatim() {
    let Json(response) = handlers::utm_to_geographic(
        State(AppState::default()),
        Query(UtmQuery {
            easting: 530_478.0,
            northing: 2_042_873.0,
            zone: Some("19H".to_string()),
        }),
    )
    .await;

    assert_eq!(response.input_zone.as_deref(), Some("19H"));
    assert_eq!(response.zone, "19N");
    assert!(response.zone_fallback);
    assert!((response.latitude - 18.476).abs() < 0.001);
}

#[tokio::test]
async fn test_geographic_to_utm_handler() {
    let Json(response) = handlers::geographic_to_utm(
        State(AppState::default()),
        Query(GeographicQuery {
            latitude: 18.4861,
            longitude: -69.9312,
        }),
    )
    .await;

    assert_eq!(response.zone, "19N");
    assert_eq!(response.easting, 401_691.0);
    assert!(response.valid);
}

#[tokio::test]
async fn test_centroid_handler_rejects_empty() {
    let result = handlers::centroid(Json(CentroidRequest { points: vec![] })).await;
    let (status, Json(body)) = result.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.error.contains("no vertices"));
}

#[tokio::test]
async fn test_centroid_handler() {
    let points = vec![
        GeographicCoordinate::new(18.48, -69.94),
        GeographicCoordinate::new(18.48, -69.92),
        GeographicCoordinate::new(18.50, -69.92),
        GeographicCoordinate::new(18.50, -69.94),
    ];
    let Json(response) = handlers::centroid(Json(CentroidRequest { points })).await.unwrap();
    assert!((response.latitude - 18.49).abs() < 1e-9);
    assert!((response.longitude + 69.93).abs() < 1e-9);
    assert!(response.bounds.is_some());
}

#[tokio::test]
async fn test_footprint_handler_without_vertices() {
    let result = handlers::footprint(State(AppState::default()), Json(vec![ExtractedLocation::default()])).await;
    assert_eq!(result.unwrap_err().0, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_router_distance() {
    let app = create_router(&ServerConfig::default());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/distance?from_lat=0&from_lng=0&to_lat=1&to_lng=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: DistanceResponse = serde_json::from_str(&body_text(response).await).unwrap();
    assert!((body.meters - 111_194.9).abs() < 1.0);
}

#[tokio::test]
async fn test_router_rejects_bad_query() {
    let app = create_router(&ServerConfig::default());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/geographic-to-utm?latitude=north")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_router_resolve() {
    let app = create_router(&ServerConfig::default());
    let payload = r#"[{"utm_x": 561063, "utm_y": 2066147, "utm_zone": "19N"}, {"name": "blank"}]"#;
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/resolve")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body[0]["source"], "converted_from_utm");
    assert!(body[1].is_null());
}

#[tokio::test]
async fn test_router_upload_csv() {
    let app = create_router(&ServerConfig::default());
    let boundary = "utmkit-boundary";
    let payload = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"csv\"; filename=\"permits.csv\"\r\n\
         Content-Type: text/csv\r\n\r\n\
         name,utm_x,utm_y,utm_zone\npermit-1,561063,2066147,19Q\npermit-2,,,\n\r\n--{b}--\r\n",
        b = boundary
    );

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/upload")
                .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={}", boundary))
                .body(Body::from(payload))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");

    let text = body_text(response).await;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("permit-1,"));
    assert!(lines[2].contains("UNRESOLVED"));
}

#[tokio::test]
async fn test_router_upload_without_csv_field() {
    let app = create_router(&ServerConfig::default());
    let boundary = "utmkit-boundary";
    let payload = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{b}--\r\n",
        b = boundary
    );

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/upload")
                .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={}", boundary))
                .body(Body::from(payload))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
