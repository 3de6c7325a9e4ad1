//! Structural validation of catalog documents.
//!
//! A catalog document is checked against [`catalog_schema`] with the
//! `jsonschema` crate before it is mapped onto the data model. Every
//! violation is collected so the caller sees the full failure set at once.

use serde_json::{json, Value};
use tracing::{debug, warn};

use checkup_contracts::{Catalog, CheckupError, CheckupResult};

/// JSON Schema describing the catalog document layout.
pub fn catalog_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "required": ["profile", "latestCheckup"],
        "properties": {
            "profile": { "$ref": "#/$defs/profile" },
            "latestCheckup": { "$ref": "#/$defs/checkup" },
            "metricHistories": { "type": "array", "items": { "$ref": "#/$defs/metricHistory" } },
            "alerts": { "type": "array", "items": { "$ref": "#/$defs/alert" } },
            "hospitals": { "type": "array", "items": { "$ref": "#/$defs/hospital" } },
            "activity": { "type": "array", "items": { "$ref": "#/$defs/activity" } },
            "medications": { "type": "array" },
            "visits": { "type": "array" }
        },
        "$defs": {
            "status": { "enum": ["safe", "caution", "danger"] },
            "date": { "type": "string", "pattern": "^[0-9]{4}-[0-9]{2}-[0-9]{2}$" },
            "range": {
                "type": "object",
                "required": ["min", "max"],
                "properties": {
                    "min": { "type": "number" },
                    "max": { "type": "number" }
                }
            },
            "profile": {
                "type": "object",
                "required": ["id", "name", "birthDate", "gender", "height", "weight"],
                "properties": {
                    "birthDate": { "$ref": "#/$defs/date" },
                    "gender": { "enum": ["male", "female"] },
                    "height": { "type": "number", "exclusiveMinimum": 0 },
                    "weight": { "type": "number", "exclusiveMinimum": 0 }
                }
            },
            "metric": {
                "type": "object",
                "required": [
                    "id", "name", "value", "unit", "status",
                    "normalRange", "cautionRange", "description", "advice"
                ],
                "properties": {
                    "id": { "type": "string", "minLength": 1 },
                    "value": { "type": "number" },
                    "status": { "$ref": "#/$defs/status" },
                    "normalRange": { "$ref": "#/$defs/range" },
                    "cautionRange": { "$ref": "#/$defs/range" }
                }
            },
            "checkup": {
                "type": "object",
                "required": ["id", "date", "metrics", "overallStatus", "healthAge", "actualAge"],
                "properties": {
                    "date": { "$ref": "#/$defs/date" },
                    "metrics": { "type": "array", "items": { "$ref": "#/$defs/metric" } },
                    "overallStatus": { "$ref": "#/$defs/status" },
                    "healthAge": { "type": "integer" },
                    "actualAge": { "type": "integer" }
                }
            },
            "metricHistory": {
                "type": "object",
                "required": ["metricId", "metricName", "unit", "history"],
                "properties": {
                    "history": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "required": ["date", "value", "status"],
                            "properties": {
                                "date": { "type": "string" },
                                "value": { "type": "number" },
                                "status": { "$ref": "#/$defs/status" }
                            }
                        }
                    }
                }
            },
            "alert": {
                "type": "object",
                "required": ["id", "type", "title", "message", "date", "isRead"],
                "properties": {
                    "type": { "enum": ["warning", "info", "urgent"] },
                    "date": { "$ref": "#/$defs/date" },
                    "isRead": { "type": "boolean" }
                }
            },
            "hospital": {
                "type": "object",
                "required": [
                    "id", "name", "type", "specialty", "address",
                    "distance", "rating", "phone", "isOpen", "openHours"
                ],
                "properties": {
                    "specialty": { "type": "array", "items": { "type": "string" } },
                    "rating": { "type": "number", "minimum": 0, "maximum": 5 },
                    "isOpen": { "type": "boolean" }
                }
            },
            "activity": {
                "type": "object",
                "required": ["date", "steps", "distance", "calories", "activeMinutes"],
                "properties": {
                    "date": { "$ref": "#/$defs/date" },
                    "steps": { "type": "integer", "minimum": 0 },
                    "calories": { "type": "integer", "minimum": 0 },
                    "activeMinutes": { "type": "integer", "minimum": 0 }
                }
            }
        }
    })
}

/// Validate `document` against [`catalog_schema`].
///
/// Returns every violation as `"<message> at <instance path>"`. An empty
/// vector means the document is structurally sound.
pub fn schema_violations(document: &Value) -> CheckupResult<Vec<String>> {
    let schema = catalog_schema();
    let validator = jsonschema::validator_for(&schema).map_err(|e| CheckupError::ConfigError {
        reason: format!("invalid catalog schema: {e}"),
    })?;

    let violations: Vec<String> = validator
        .iter_errors(document)
        .map(|error| {
            let message = format!("{} at {}", error, error.instance_path);
            warn!(%message, "catalog schema violation");
            message
        })
        .collect();

    Ok(violations)
}

/// Validate `document` and fail with one `SchemaValidation` error listing
/// all violations.
pub fn validate_document(document: &Value) -> CheckupResult<()> {
    let violations = schema_violations(document)?;
    if violations.is_empty() {
        Ok(())
    } else {
        Err(CheckupError::SchemaValidation {
            reason: violations.join("; "),
        })
    }
}

/// Parse, validate and deserialise a catalog document.
pub fn load_catalog(json: &str) -> CheckupResult<Catalog> {
    let document: Value = serde_json::from_str(json).map_err(|e| CheckupError::CatalogInvalid {
        reason: format!("catalog is not valid JSON: {e}"),
    })?;

    validate_document(&document)?;

    let catalog: Catalog =
        serde_json::from_value(document).map_err(|e| CheckupError::CatalogInvalid {
            reason: format!("catalog does not match the data model: {e}"),
        })?;

    debug!(
        checkup = %catalog.latest_checkup.id,
        metrics = catalog.latest_checkup.metrics.len(),
        "catalog loaded"
    );
    Ok(catalog)
}
