use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

use super::Stage;

/// One stage of a rollout: version, date, optional link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageEntry {
    #[serde(default, deserialize_with = "display_string")]
    pub version: String,
    /// ISO-8601 date string, kept raw; see `utils::parse_stage_date`
    #[serde(default, deserialize_with = "display_string")]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "text_or_none")]
    pub url: Option<String>,
}

impl StageEntry {
    pub fn new(version: &str, date: &str) -> Self {
        StageEntry {
            version: version.to_string(),
            date: date.to_string(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Link for this stage; blank URLs count as absent
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

/// Stages reported for one IDE. A stage that is `null` or not an object is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageSet {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "object_or_none")]
    pub ga: Option<StageEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "object_or_none")]
    pub preview: Option<StageEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "object_or_none")]
    pub private_preview: Option<StageEntry>,
}

impl StageSet {
    pub fn get(&self, stage: Stage) -> Option<&StageEntry> {
        match stage {
            Stage::Ga => self.ga.as_ref(),
            Stage::Preview => self.preview.as_ref(),
            Stage::PrivatePreview => self.private_preview.as_ref(),
        }
    }

    pub fn set(&mut self, stage: Stage, entry: StageEntry) {
        match stage {
            Stage::Ga => self.ga = Some(entry),
            Stage::Preview => self.preview = Some(entry),
            Stage::PrivatePreview => self.private_preview = Some(entry),
        }
    }

    pub fn with(mut self, stage: Stage, entry: StageEntry) -> Self {
        self.set(stage, entry);
        self
    }

    /// Present stages in `Stage::ALL` order
    pub fn present(&self) -> impl Iterator<Item = (Stage, &StageEntry)> + '_ {
        Stage::ALL
            .into_iter()
            .filter_map(move |stage| self.get(stage).map(|entry| (stage, entry)))
    }

    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

/// A feature row: name plus stage data per IDE.
///
/// `ides` holds every IDE found in the source, known or not. The record as it
/// was read is kept in `source` so re-export reproduces it exactly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    #[serde(rename = "feature", default, deserialize_with = "display_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_ides")]
    pub ides: BTreeMap<String, StageSet>,
    #[serde(skip)]
    pub source: Value,
}

impl Feature {
    pub fn new(name: &str) -> Self {
        Feature {
            name: name.to_string(),
            ides: BTreeMap::new(),
            source: Value::Null,
        }
    }

    pub fn with_ide(mut self, ide: &str, stages: StageSet) -> Self {
        self.ides.insert(ide.to_string(), stages);
        self
    }

    /// Parse a feature from a raw JSON record, retaining the record
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        let mut feature: Feature = serde_json::from_value(value.clone())?;
        feature.source = value;
        Ok(feature)
    }

    /// JSON shape for re-export: the original record when there is one
    pub fn to_value(&self) -> Value {
        if !self.source.is_null() {
            return self.source.clone();
        }
        let ides: serde_json::Map<String, Value> = self
            .ides
            .iter()
            .map(|(ide, stages)| {
                let stages = serde_json::to_value(stages).unwrap_or(Value::Null);
                (ide.clone(), stages)
            })
            .collect();
        serde_json::json!({ "feature": self.name, "ides": ides })
    }

    /// Stage data for one IDE, if the feature mentions it
    pub fn stages_for(&self, ide: &str) -> Option<&StageSet> {
        self.ides.get(ide)
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// Features in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub features: Vec<Feature>,
}

impl Dataset {
    pub fn new(features: Vec<Feature>) -> Self {
        Dataset { features }
    }

    /// Parse a JSON array of feature records
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        let records: Vec<Value> = serde_json::from_str(json)?;
        let features = records
            .into_iter()
            .map(Feature::from_value)
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(Dataset { features })
    }

    /// Pretty-printed JSON (2-space indent) of the raw records
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.features)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// IDE map where `null` or non-object entries count as "no stages".
/// A missing, `null` or non-object `ides` value is an empty map.
fn lenient_ides<'de, D>(deserializer: D) -> Result<BTreeMap<String, StageSet>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(ides) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };
    Ok(ides
        .into_iter()
        .map(|(ide, stages)| {
            let stages = serde_json::from_value(stages).unwrap_or_default();
            (ide, stages)
        })
        .collect())
}

/// A stage entry is only read from a JSON object; anything else is absent
fn object_or_none<'de, D>(deserializer: D) -> Result<Option<StageEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        entry @ Value::Object(_) => serde_json::from_value(entry).ok(),
        _ => None,
    })
}

/// Only string URLs are kept
fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(url) => Some(url),
        _ => None,
    })
}

/// Accept strings, numbers and booleans where text is expected
fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
