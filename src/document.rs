use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// A named top-level fragment of an ECS document, e.g. `("url", {...})`.
pub type Section = (&'static str, Value);

/// Value of the `@version` metadata field.
pub const DOCUMENT_VERSION: &str = "1";

/// ECS document assembled from section fragments.
///
/// Sections keep the order in which they were folded in. The document
/// is built fresh for every formatted record and owned by that call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EcsDocument {
    fields: Map<String, Value>,
}

impl FromIterator<Section> for EcsDocument {
    fn from_iter<I: IntoIterator<Item = Section>>(sections: I) -> Self {
        let fields = sections
            .into_iter()
            .fold(Map::new(), |mut fields, (name, value)| {
                fields.insert(name.to_string(), value);
                fields
            });
        EcsDocument { fields }
    }
}

impl EcsDocument {
    /// Overlay application-supplied entries at the top level.
    ///
    /// The merge is shallow: a custom key replaces a built section of the
    /// same name wholesale.
    pub fn merge(mut self, overlay: Option<&Map<String, Value>>) -> Self {
        if let Some(overlay) = overlay {
            for (key, value) in overlay {
                self.fields.insert(key.clone(), value.clone());
            }
        }
        self
    }

    /// Drop null and empty branches, see [`deep_compact`].
    pub fn compact(self) -> Self {
        EcsDocument {
            fields: deep_compact(self.fields),
        }
    }

    /// Prepend the `@timestamp` and `@version` metadata fields.
    pub fn with_metadata(self, timestamp: DateTime<Utc>) -> Self {
        let mut fields = Map::with_capacity(self.fields.len() + 2);
        fields.insert(
            "@timestamp".to_string(),
            Value::String(timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        fields.insert(
            "@version".to_string(),
            Value::String(DOCUMENT_VERSION.to_string()),
        );
        // Sections never shadow the metadata keys.
        for (key, value) in self.fields {
            fields.entry(key).or_insert(value);
        }
        EcsDocument { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.fields)
    }
}

/// Recursively remove null, empty-mapping and empty-sequence values.
///
/// Nested mappings are compacted first, so a mapping whose members were
/// all pruned disappears too. Sequences are kept as they are (only
/// dropped when empty); their elements are not walked.
pub fn deep_compact(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::Object(nested) => Value::Object(deep_compact(nested)),
                other => other,
            };
            if is_blank(&value) {
                None
            } else {
                Some((key, value))
            }
        })
        .collect()
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
