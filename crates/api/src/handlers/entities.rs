//! Handlers for the `/entities` resource.
//!
//! Lists the DTO kinds, serves their field tables, and runs payloads
//! through a DTO's validation or JSON export.

use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::Json;
use organizer_core::registry::EntityKind;
use organizer_core::schema::FieldSpec;
use organizer_core::DomainEntity;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// One row of the entity listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySummary {
    pub kind: EntityKind,
    pub entity: &'static str,
    pub supports_json: bool,
}

impl From<EntityKind> for EntitySummary {
    fn from(kind: EntityKind) -> Self {
        Self {
            kind,
            entity: kind.entity_name(),
            supports_json: kind.supports_json(),
        }
    }
}

/// Field table of one kind.
#[derive(Debug, Serialize)]
pub struct EntityFields {
    pub kind: EntityKind,
    pub entity: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Outcome of validating a payload.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    /// Field errors keyed by field name; empty when valid.
    pub errors: serde_json::Value,
}

/// GET /api/v1/entities
pub async fn list_entities() -> Json<DataResponse<Vec<EntitySummary>>> {
    let data = EntityKind::ALL.iter().copied().map(EntitySummary::from).collect();
    Json(DataResponse { data })
}

/// GET /api/v1/entities/{kind}/fields
///
/// Returns 404 for an unknown kind.
pub async fn get_fields(Path(kind): Path<String>) -> AppResult<Json<DataResponse<EntityFields>>> {
    let kind: EntityKind = kind.parse()?;
    Ok(Json(DataResponse {
        data: EntityFields {
            kind,
            entity: kind.entity_name(),
            fields: kind.fields(),
        },
    }))
}

/// POST /api/v1/entities/{kind}/validate
///
/// Decodes the payload into the kind's DTO and checks its declared
/// constraints. Constraint failures are reported in the body with 200;
/// only an undecodable payload fails the request.
pub async fn validate(
    Path(kind): Path<String>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<Json<DataResponse<ValidationReport>>> {
    let (kind, entity) = decode(&kind, payload)?;

    let report = match entity.validate() {
        Ok(()) => ValidationReport {
            valid: true,
            errors: serde_json::Value::Object(Default::default()),
        },
        Err(errors) => ValidationReport {
            valid: false,
            errors: serde_json::to_value(&errors)
                .map_err(|e| AppError::InternalError(e.to_string()))?,
        },
    };

    tracing::debug!(%kind, valid = report.valid, "Validated payload");
    Ok(Json(DataResponse { data: report }))
}

/// POST /api/v1/entities/{kind}/export
///
/// Decodes the payload and returns the DTO's own JSON export. Kinds whose
/// export is not implemented answer 501.
pub async fn export(
    Path(kind): Path<String>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let (kind, entity) = decode(&kind, payload)?;
    let body = entity.to_json()?;
    tracing::debug!(%kind, bytes = body.len(), "Exported payload");
    Ok(([(CONTENT_TYPE, "application/json")], body))
}

fn decode(
    kind: &str,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<(EntityKind, Box<dyn DomainEntity>)> {
    let kind: EntityKind = kind.parse()?;
    let Json(value) = payload?;
    let entity = kind.decode(value)?;
    Ok((kind, entity))
}
