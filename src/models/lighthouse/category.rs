use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// pub struct for each category score
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Category {
    pub title: String,
    pub score: f64,
}

/// Categories in the order the report lists them.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct Categories(pub Vec<(String, Category)>);

impl Categories {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.0.iter().map(|(key, category)| (key.as_str(), category))
    }
}

struct CategoriesVisitor;

impl<'de> Visitor<'de> for CategoriesVisitor {
    type Value = Categories;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of category key to {title, score}")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(4));
        while let Some((key, category)) = access.next_entry::<String, Category>()? {
            entries.push((key, category));
        }
        Ok(Categories(entries))
    }
}

impl<'de> Deserialize<'de> for Categories {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CategoriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_report_order() {
        let json = r#"{
            "seo": {"title": "SEO", "score": 0.9},
            "performance": {"title": "Performance", "score": 0.5},
            "accessibility": {"title": "Accessibility", "score": 1}
        }"#;
        let categories: Categories = serde_json::from_str(json).expect("categories");
        let entries: Vec<(&str, f64)> = categories.iter().map(|(k, c)| (k, c.score)).collect();
        assert_eq!(
            entries,
            vec![("seo", 0.9), ("performance", 0.5), ("accessibility", 1.0)]
        );
    }

    #[test]
    fn null_score_is_rejected() {
        let json = r#"{"performance": {"title": "Performance", "score": null}}"#;
        assert!(serde_json::from_str::<Categories>(json).is_err());
    }
}
