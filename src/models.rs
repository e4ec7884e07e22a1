use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

/// Live server information from the craftigames count endpoint.
///
/// The payload is kept as-is in [`data`](Count::data); the only derived
/// field is [`updated_at_date`](Count::updated_at_date), parsed from the
/// payload's `updated_at` field (RFC 3339 string or Unix-millisecond
/// number). `None` when the field is missing or unparseable.
#[derive(Debug, Clone)]
pub struct Count {
    pub data: Value,
    pub updated_at_date: Option<DateTime<Utc>>,
}

impl Count {
    pub(crate) fn from_value(data: Value) -> Self {
        let updated_at_date = data.get("updated_at").and_then(parse_timestamp);
        Self {
            data,
            updated_at_date,
        }
    }
}

fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rfc3339_updated_at_is_parsed() {
        let count = Count::from_value(json!({
            "ip": "play.example.com",
            "updated_at": "2024-01-01T00:00:00Z",
        }));
        assert_eq!(count.data["ip"], "play.example.com");
        let date = count.updated_at_date.unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn numeric_updated_at_is_treated_as_millis() {
        let count = Count::from_value(json!({ "updated_at": 1_704_067_200_000_i64 }));
        let date = count.updated_at_date.unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn missing_or_garbage_updated_at_yields_none() {
        assert!(Count::from_value(json!({})).updated_at_date.is_none());
        assert!(Count::from_value(json!({ "updated_at": "yesterday" }))
            .updated_at_date
            .is_none());
    }
}
