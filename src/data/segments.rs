//! Segment records and JSON document loading

use crate::error::{MetricsError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::io::Read;

/// One scene's list of co-present speakers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Speaker ids in order of appearance; absent or malformed means empty
    #[serde(default, deserialize_with = "deserialize_speakers")]
    pub speakers: Vec<String>,
}

impl Segment {
    pub fn new<I, S>(speakers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            speakers: speakers.into_iter().map(Into::into).collect(),
        }
    }

    /// Interpret an arbitrary JSON value as a segment.
    ///
    /// Anything other than an object with a `speakers` array is an empty
    /// segment.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => Self {
                speakers: fields
                    .remove("speakers")
                    .map(speakers_from_value)
                    .unwrap_or_default(),
            },
            other => {
                log::debug!("Treating non-object segment {} as empty", other);
                Self::default()
            }
        }
    }
}

fn deserialize_speakers<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(speakers_from_value(value))
}

/// Strings are kept, numbers become their decimal text, anything else is dropped
fn speakers_from_value(value: Value) -> Vec<String> {
    let Value::Array(items) = value else {
        log::debug!("Segment speakers field is not a list; treating as empty");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(id) => Some(id),
            Value::Number(number) => Some(number.to_string()),
            other => {
                log::debug!("Skipping non-scalar speaker id {}", other);
                None
            }
        })
        .collect()
}

/// Parse a segment document.
///
/// Accepts either a bare array of segments or an object carrying a
/// `segments` array.
pub fn parse_segments(input: &str) -> Result<Vec<Segment>> {
    let document: Value = serde_json::from_str(input)?;

    let entries = match document {
        Value::Array(entries) => entries,
        Value::Object(mut fields) => match fields.remove("segments") {
            Some(Value::Array(entries)) => entries,
            Some(_) => {
                return Err(MetricsError::InvalidDocument(
                    "`segments` must be an array".to_string(),
                ))
            }
            None => {
                return Err(MetricsError::InvalidDocument(
                    "missing `segments` field".to_string(),
                ))
            }
        },
        _ => {
            return Err(MetricsError::InvalidDocument(
                "expected an array of segments or an object with `segments`".to_string(),
            ))
        }
    };

    Ok(entries.into_iter().map(Segment::from_value).collect())
}

/// Load segments from a file, or from stdin when `path` is `-`
pub fn load_segments(path: &str) -> Result<Vec<Segment>> {
    let mut input = String::new();

    if path == "-" {
        log::info!("Reading segments from stdin");
        std::io::stdin().read_to_string(&mut input)?;
    } else {
        log::info!("Reading segments from {}", path);
        input = std::fs::read_to_string(path)?;
    }

    let segments = parse_segments(&input)?;
    log::info!("Loaded {} segments", segments.len());

    Ok(segments)
}
