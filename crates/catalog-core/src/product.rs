//! Product records as delivered by the catalog data source

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::review::Review;

/// A product listed in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_name: String,
    #[serde(default)]
    pub brand: String,
    /// Category bucket; overwritten with the bucket name when the store is built
    #[serde(default)]
    pub category: String,
    #[serde(default, rename = "imageURL")]
    pub image_url: String,
    /// Free-form audience rating as published (e.g. "4.6/5")
    #[serde(default, deserialize_with = "string_or_number")]
    pub audience_rating: String,
    #[serde(default)]
    pub key_specs: KeySpecs,
    #[serde(default)]
    pub critic_reviews: Vec<Review>,
    #[serde(default)]
    pub ai_pros_cons: ProsCons,
}

impl Product {
    pub fn new(name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            product_name: name.into(),
            brand: brand.into(),
            category: String::new(),
            image_url: String::new(),
            audience_rating: String::new(),
            key_specs: KeySpecs::default(),
            critic_reviews: Vec::new(),
            ai_pros_cons: ProsCons::default(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_review(mut self, review: Review) -> Self {
        self.critic_reviews.push(review);
        self
    }

    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.key_specs.push(key, value);
        self
    }
}

/// Summarised pros and cons shown in the detail view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsCons {
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

/// Key specifications in the order the data source listed them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySpecs(Vec<(String, String)>);

impl KeySpecs {
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Human label for a camelCase key: `screenSize` becomes `Screen Size`.
    pub fn display_label(key: &str) -> String {
        let mut label = String::with_capacity(key.len() + 4);
        for (i, c) in key.chars().enumerate() {
            if i == 0 {
                label.extend(c.to_uppercase());
            } else {
                if c.is_uppercase() {
                    label.push(' ');
                }
                label.push(c);
            }
        }
        label
    }
}

impl Serialize for KeySpecs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for KeySpecs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeySpecsVisitor;

        impl<'de> Visitor<'de> for KeySpecsVisitor {
            type Value = KeySpecs;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of specification names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<KeySpecs, A::Error> {
                let mut specs = KeySpecs::default();
                while let Some((key, value)) =
                    access.next_entry::<String, serde_json::Value>()?
                {
                    specs.push(key, scalar_to_string(value));
                }
                Ok(specs)
            }

            fn visit_unit<E>(self) -> Result<KeySpecs, E> {
                Ok(KeySpecs::default())
            }
        }

        deserializer.deserialize_any(KeySpecsVisitor)
    }
}

fn scalar_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(scalar_to_string(value))
}
