//! CRUD request handlers
//!
//! Each handler runs its registry call on the blocking pool (the store does
//! synchronous file I/O) and maps the outcome to a response.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use crate::error::{CadastroError, Result};
use crate::filter::Filter;
use crate::record::Fields;
use crate::registry::Registry;

/// `GET /cadastros/:id`
pub async fn get_record(
    State(registry): State<Arc<Registry>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let record = blocking(&registry, move |r| r.get(&id)).await?;
    Ok(Json(record))
}

/// `GET /cadastros/?id=&name=&level=`
pub async fn list_records(
    State(registry): State<Arc<Registry>>,
    Query(filter): Query<Filter>,
) -> Result<impl IntoResponse> {
    let records = blocking(&registry, move |r| r.list(&filter)).await?;
    Ok(Json(records))
}

/// `POST /cadastros/`
pub async fn create_record(
    State(registry): State<Arc<Registry>>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let fields = parse_fields(&body)?;
    let record = blocking(&registry, move |r| r.create(fields)).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `PUT /cadastros/:id`
pub async fn update_record(
    State(registry): State<Arc<Registry>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let fields = parse_fields(&body)?;
    let record = blocking(&registry, move |r| r.update(&id, fields)).await?;
    Ok(Json(record))
}

/// `DELETE /cadastros/:id`
pub async fn delete_record(
    State(registry): State<Arc<Registry>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    blocking(&registry, move |r| r.delete(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Run a registry call on the blocking thread pool
async fn blocking<T, F>(registry: &Arc<Registry>, f: F) -> Result<T>
where
    F: FnOnce(&Registry) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let registry = Arc::clone(registry);
    tokio::task::spawn_blocking(move || f(&registry))
        .await
        .map_err(|e| CadastroError::Internal(format!("registry task failed: {}", e)))?
}

/// Decode a request body into record fields
///
/// An empty body is an empty object. Field values are stored verbatim.
fn parse_fields(body: &[u8]) -> Result<Fields> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Fields::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(CadastroError::InvalidBody(
            "expected a JSON object".to_string(),
        )),
        Err(e) => Err(CadastroError::InvalidBody(e.to_string())),
    }
}
