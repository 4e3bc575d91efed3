//! Typed view of `dmno resolve --format json-full` output.

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Deserializer, de};

use crate::domain::AppError;

/// A single resolved configuration item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigNode {
    /// Resolved value rendered as text; empty when dmno produced no value.
    #[serde(default, deserialize_with = "value_as_text")]
    pub resolved_value: String,
    #[serde(default)]
    pub is_sensitive: Option<bool>,
}

impl ConfigNode {
    pub fn sensitive(&self) -> bool {
        self.is_sensitive.unwrap_or(false)
    }
}

/// Strings verbatim, `null` as empty, anything else as compact JSON.
fn value_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        other => serde_json::to_string(&other).map_err(de::Error::custom),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolveDocument {
    #[serde(default)]
    config_nodes: Option<BTreeMap<String, ConfigNode>>,
}

/// Resolved configuration keyed by configuration key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    nodes: BTreeMap<String, ConfigNode>,
}

impl ResolvedConfig {
    /// Parse the tool's stdout.
    ///
    /// Empty output or a document without nodes is an [`AppError::EmptyResolution`].
    pub fn parse(stdout: &str) -> Result<Self, AppError> {
        let stdout = stdout.trim();
        if stdout.is_empty() {
            return Err(AppError::EmptyResolution);
        }

        let document: ResolveDocument = serde_json::from_str(stdout)
            .map_err(|e| AppError::parse_error("dmno resolve output", e))?;

        let nodes = document.config_nodes.unwrap_or_default();
        if nodes.is_empty() {
            return Err(AppError::EmptyResolution);
        }

        Ok(Self { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every key matched by `pattern`, returning the removed keys in order.
    pub fn remove_skipped(&mut self, pattern: &SkipPattern) -> Vec<String> {
        let skipped: Vec<String> =
            self.nodes.keys().filter(|key| pattern.matches(key)).cloned().collect();
        for key in &skipped {
            self.nodes.remove(key);
        }
        skipped
    }

    /// Key → value for every node; valueless nodes map to an empty string.
    pub fn values(&self) -> BTreeMap<String, String> {
        self.nodes.iter().map(|(key, node)| (key.clone(), node.resolved_value.clone())).collect()
    }

    /// Non-empty values of nodes flagged sensitive.
    pub fn sensitive_values(&self) -> Vec<&str> {
        self.nodes
            .values()
            .filter(|node| node.sensitive() && !node.resolved_value.is_empty())
            .map(|node| node.resolved_value.as_str())
            .collect()
    }
}

/// Compiled `skip-regex` input.
#[derive(Debug, Clone)]
pub struct SkipPattern(Regex);

impl SkipPattern {
    /// Compile the input; an empty input means no keys are skipped.
    pub fn compile(raw: &str) -> Result<Option<Self>, AppError> {
        if raw.is_empty() {
            return Ok(None);
        }
        Regex::new(raw).map(|re| Some(Self(re))).map_err(|e| AppError::InvalidSkipPattern {
            pattern: raw.to_string(),
            details: e.to_string(),
        })
    }

    /// Unanchored search, so `^` / `$` must be spelled out to match whole keys.
    pub fn matches(&self, key: &str) -> bool {
        self.0.is_match(key)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
