use serde::{Deserialize, Deserializer, Serialize};

// Audit keys read for the vitals section
pub const LARGEST_CONTENTFUL_PAINT: &str = "largest-contentful-paint";
pub const CUMULATIVE_LAYOUT_SHIFT: &str = "cumulative-layout-shift";
pub const INTERACTION_TO_NEXT_PAINT: &str = "interaction-to-next-paint";

// pub struct for individual audit results
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    #[serde(default)]
    pub display_value: Option<String>,
}

/// The three audits the vitals section reads. Every other audit in the
/// report is skipped without being decoded.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Audits {
    #[serde(rename = "largest-contentful-paint", default)]
    pub largest_contentful_paint: Option<Audit>,
    #[serde(rename = "cumulative-layout-shift", default)]
    pub cumulative_layout_shift: Option<Audit>,
    /// Missing from older Lighthouse versions, so a malformed entry counts as
    /// absent instead of failing the decode.
    #[serde(
        rename = "interaction-to-next-paint",
        default,
        deserialize_with = "lenient_audit"
    )]
    pub interaction_to_next_paint: Option<Audit>,
}

fn lenient_audit<'de, D>(deserializer: D) -> Result<Option<Audit>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
