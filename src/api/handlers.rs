use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum::extract::multipart::Multipart;
use std::io;
use tracing::{error, info};

use crate::error::Error;
use crate::geometry::{haversine_distance, planar_centroid, BoundingBox};
use crate::projection::{GeographicCoordinate, Transformer, UtmCoordinate};
use crate::record::{self, ExtractedLocation, Footprint, ResolvedLocation};
use crate::validation::{is_valid_geographic, is_valid_utm};
use super::models::*;

/// Shared handler state
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    pub transformer: Transformer,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(e: Error) -> ApiError {
    let status = if e.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        error!(error = %e, "request failed");
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(ErrorResponse { error: e.to_string() }))
}

fn bad_request(message: impl Into<String>) -> ApiError {
    error_response(Error::InvalidInput(message.into()))
}

pub async fn utm_to_geographic(
    State(state): State<AppState>,
    Query(req): Query<UtmQuery>,
) -> Json<GeographicResponse> {
    let utm = UtmCoordinate::new(req.easting, req.northing, req.zone.clone().unwrap_or_default());
    let conversion = state.transformer.utm_to_geographic_detailed(&utm);

    Json(GeographicResponse {
        latitude: conversion.coordinate.latitude,
        longitude: conversion.coordinate.longitude,
        input_zone: req.zone,
        zone: conversion.zone.to_string(),
        zone_fallback: conversion.zone_fallback,
        valid: is_valid_utm(&utm) && is_valid_geographic(&conversion.coordinate),
    })
}

pub async fn geographic_to_utm(
    State(state): State<AppState>,
    Query(req): Query<GeographicQuery>,
) -> Json<UtmResponse> {
    let geographic = GeographicCoordinate::new(req.latitude, req.longitude);
    let utm = state.transformer.geographic_to_utm(&geographic);
    let valid = is_valid_geographic(&geographic) && is_valid_utm(&utm);

    Json(UtmResponse {
        easting: utm.easting,
        northing: utm.northing,
        zone: utm.zone,
        valid,
    })
}

pub async fn distance(Query(req): Query<DistanceQuery>) -> Json<DistanceResponse> {
    let from = GeographicCoordinate::new(req.from_lat, req.from_lng);
    let to = GeographicCoordinate::new(req.to_lat, req.to_lng);

    Json(DistanceResponse {
        meters: haversine_distance(&from, &to),
    })
}

pub async fn centroid(Json(req): Json<CentroidRequest>) -> Result<Json<CentroidResponse>, ApiError> {
    let centroid = planar_centroid(&req.points).map_err(error_response)?;

    Ok(Json(CentroidResponse {
        latitude: centroid.latitude,
        longitude: centroid.longitude,
        bounds: BoundingBox::from_points(&req.points),
    }))
}

pub async fn resolve(
    State(state): State<AppState>,
    Json(locations): Json<Vec<ExtractedLocation>>,
) -> Json<Vec<Option<ResolvedLocation>>> {
    Json(record::resolve_all(&locations, &state.transformer))
}

pub async fn footprint(
    State(state): State<AppState>,
    Json(locations): Json<Vec<ExtractedLocation>>,
) -> Result<Json<Footprint>, ApiError> {
    record::resolve_footprint(&locations, &state.transformer)
        .map(Json)
        .map_err(error_response)
}

pub async fn upload_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut csv_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() == Some("csv") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| bad_request(format!("Failed to read CSV field: {}", e)))?;
            csv_data = Some(bytes.to_vec());
        }
    }

    let csv_data = csv_data.ok_or_else(|| bad_request("Missing CSV file"))?;
    let transformer = state.transformer;

    let output = tokio::task::spawn_blocking(move || -> crate::Result<(usize, usize, Vec<u8>)> {
        let locations = record::read_locations(csv_data.as_slice())?;
        let resolved = record::resolve_all(&locations, &transformer);
        let placed = resolved.iter().filter(|r| r.is_some()).count();

        let mut out = Vec::with_capacity(locations.len() * 96);
        record::write_resolved(&mut out, &locations, &resolved)?;
        Ok((locations.len(), placed, out))
    })
    .await
    .map_err(|e| error_response(Error::Io(io::Error::new(io::ErrorKind::Other, format!("CSV worker failed: {}", e)))))?;

    let (total, placed, body) = output.map_err(error_response)?;
    info!(total, placed, "resolved uploaded CSV");

    Ok((
        [
            (header::CONTENT_TYPE, mime::TEXT_CSV.as_ref()),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"resolved_locations.csv\""),
        ],
        body,
    )
        .into_response())
}
