//! Circuit decoder
//!
//! Circuit datasets come in two shapes. Older datasets list each circuit
//! as a bare coordinate array:
//!
//! ```json
//! [[[52.5, 13.4], [52.6, 13.5]]]
//! ```
//!
//! Newer ones wrap the coordinates with metadata, writing dates in the
//! locale's pattern:
//!
//! ```json
//! [{"validSince": "01.01.2020", "zoneNumber": 4, "points": [[52.5, 13.4]]}]
//! ```

use super::registry::{DecodeContext, RecordError};
use serde_json::Value;
use umweltzone_domain::{Circuit, GeoPoint, ZoneNumber};

pub fn decode_circuit(value: Value, context: &DecodeContext) -> Result<Circuit, RecordError> {
    let mut fields = match value {
        Value::Array(_) => {
            let points: Vec<GeoPoint> = serde_json::from_value(value)?;
            return Ok(Circuit::new(points));
        }
        Value::Object(fields) => fields,
        other => {
            return Err(RecordError::Invalid(format!(
                "expected object or coordinate array, found {}",
                json_type(&other)
            )));
        }
    };

    let points = fields
        .remove("points")
        .ok_or_else(|| RecordError::Invalid("missing field 'points'".to_string()))?;
    let mut circuit = Circuit::new(serde_json::from_value(points)?);

    match fields.remove("validSince") {
        None | Some(Value::Null) => {}
        Some(Value::String(since)) => {
            circuit.valid_since = Some(context.date_pattern.parse_date(&since)?);
        }
        Some(other) => {
            return Err(RecordError::Invalid(format!(
                "'validSince' must be a string, found {}",
                json_type(&other)
            )));
        }
    }

    match fields.remove("zoneNumber") {
        None | Some(Value::Null) => {}
        Some(number) => {
            let number: u8 = serde_json::from_value(number)?;
            circuit.zone_number = Some(ZoneNumber::try_from(number)?);
        }
    }

    Ok(circuit)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
