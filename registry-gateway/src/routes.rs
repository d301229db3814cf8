//! Axum route handlers for the device registry API.

use std::{sync::Arc, time::Duration};

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use registry_core::{Device, DeviceFilters, DeviceId, NewDevice};
use registry_store::{with_deadline, DeviceStore, DEFAULT_STORE_TIMEOUT};

use crate::error::ApiError;

// ── Shared state ─────────────────────────────────────────────────────────────

/// Immutable per-router state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn DeviceStore>,
    store_timeout: Duration,
}

impl AppState {
    /// State backed by `store`, with the default 3-second store deadline.
    #[must_use]
    pub fn new(store: Arc<dyn DeviceStore>) -> Self {
        Self { store, store_timeout: DEFAULT_STORE_TIMEOUT }
    }

    /// Override the deadline applied to each store call.
    #[must_use]
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }
}

// ── Request types ────────────────────────────────────────────────────────────

/// `POST /devices` payload. Missing or `null` fields decode as absent and are
/// reported as required by validation.
#[derive(Debug, Default, Deserialize)]
pub struct CreateDeviceBody {
    pub name: Option<String>,
    pub site: Option<String>,
    pub device_type: Option<String>,
}

impl CreateDeviceBody {
    /// Decode a raw request body.
    ///
    /// # Errors
    /// Returns [`ApiError::Validation`] if the bytes are not a JSON object of
    /// the expected shape.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(bytes).map_err(|e| {
            tracing::debug!(error = %e, "create body did not decode");
            ApiError::Validation("invalid request body".to_owned())
        })
    }

    fn into_new_device(self, id: DeviceId) -> Result<NewDevice, ApiError> {
        NewDevice::new(
            id,
            self.name.as_deref().unwrap_or_default(),
            self.site.as_deref().unwrap_or_default(),
            self.device_type.as_deref().unwrap_or_default(),
        )
        .map_err(ApiError::from)
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

const COLLECTION_METHODS: &str = "GET, POST";
const RESOURCE_METHODS: &str = "GET";

/// Build the application router over the given state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/devices", any(devices_collection))
        .route("/devices/", any(device_without_id))
        .route("/devices/{*id}", any(device_by_id))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /healthz`: liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

/// `/devices`: `POST` creates a device, `GET` lists devices.
///
/// # Errors
/// Returns [`ApiError::MethodNotAllowed`] for any other method, plus the
/// errors of the create and list operations.
pub async fn devices_collection(
    State(state): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<Response, ApiError> {
    match method {
        Method::POST => create_device(&state, &body).await.map(IntoResponse::into_response),
        Method::GET => {
            let raw = query.as_deref().unwrap_or_default();
            list_devices(&state, raw).await.map(IntoResponse::into_response)
        }
        _ => Err(ApiError::MethodNotAllowed { allow: COLLECTION_METHODS }),
    }
}

/// `GET /devices/{id}`: fetch one device.
///
/// # Errors
/// Returns [`ApiError::Validation`] for a malformed id and
/// [`ApiError::NotFound`] if no device has it.
pub async fn device_by_id(
    State(state): State<AppState>,
    method: Method,
    Path(raw): Path<String>,
) -> Result<Json<Device>, ApiError> {
    get_device(&state, &method, &raw).await
}

/// `GET /devices/`: the id segment is present but empty.
///
/// # Errors
/// Always fails: 405 for a method other than `GET`, otherwise 400.
pub async fn device_without_id(
    State(state): State<AppState>,
    method: Method,
) -> Result<Json<Device>, ApiError> {
    get_device(&state, &method, "").await
}

// ── Operations ────────────────────────────────────────────────────────────────

async fn create_device(
    state: &AppState,
    body: &[u8],
) -> Result<(StatusCode, Json<Device>), ApiError> {
    let new = CreateDeviceBody::from_slice(body)?.into_new_device(DeviceId::new())?;
    let id = new.id();

    let created = with_deadline(state.store_timeout, state.store.create(new))
        .await
        .map_err(|e| ApiError::from_store("create device", e))?;

    tracing::info!(device_id = %id, site = %created.site, "device created");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_devices(state: &AppState, raw_query: &str) -> Result<Json<Vec<Device>>, ApiError> {
    let filters = DeviceFilters::from_query(raw_query)?;

    let devices = with_deadline(state.store_timeout, state.store.list(&filters))
        .await
        .map_err(|source| ApiError::Store { action: "list devices", source })?;

    tracing::debug!(
        site = ?filters.site,
        status = ?filters.status,
        limit = filters.limit,
        offset = filters.offset,
        returned = devices.len(),
        "devices listed"
    );
    Ok(Json(devices))
}

async fn get_device(state: &AppState, method: &Method, raw: &str) -> Result<Json<Device>, ApiError> {
    if *method != Method::GET {
        return Err(ApiError::MethodNotAllowed { allow: RESOURCE_METHODS });
    }
    let id = DeviceId::parse(raw)?;

    let device = with_deadline(state.store_timeout, state.store.get(id))
        .await
        .map_err(|e| ApiError::from_store("get device", e))?;

    tracing::debug!(device_id = %id, "device fetched");
    Ok(Json(device))
}
