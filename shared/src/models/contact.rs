//! Contact & Restaurant Model

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Restaurant identity shown in the home page hero
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
}

/// Postal address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "zipCode", alias = "zip_code")]
    pub zip_code: String,
}

impl Address {
    /// "San Francisco, CA 94102"
    pub fn locality(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip_code)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.street, self.locality())
    }
}

/// String-to-string mapping that keeps document order
///
/// Opening hours must be listed Monday to Sunday as written, not sorted, so this
/// is backed by a `Vec` and (de)serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedPairs(Vec<(String, String)>);

impl OrderedPairs {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
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
}

impl Serialize for OrderedPairs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OrderedPairs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = OrderedPairs;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    pairs.push((k, v));
                }
                Ok(OrderedPairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

/// Contact information (single read-only record)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: Address,
    /// Day name -> display string ("Monday" -> "7:00 AM - 9:00 PM")
    #[serde(default)]
    pub hours: OrderedPairs,
    /// Platform -> profile URL
    #[serde(default)]
    pub social: OrderedPairs,
}

impl ContactInfo {
    pub fn phone_href(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// The contact document (`contact.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDocument {
    pub restaurant: Restaurant,
    #[serde(flatten)]
    pub contact: ContactInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "restaurant": {"name": "Bella Vista Cafe", "tagline": "Where Every Meal Tells a Story"},
        "phone": "(415) 555-0123",
        "email": "hello@bellavistacafe.com",
        "address": {"street": "123 Main Street", "city": "San Francisco", "state": "CA", "zipCode": "94102"},
        "hours": {"Monday": "7:00 AM - 9:00 PM", "Tuesday": "7:00 AM - 9:00 PM", "Sunday": "8:00 AM - 8:00 PM"},
        "social": {"instagram": "https://instagram.com/bellavista", "facebook": "https://facebook.com/bellavista"}
    }"#;

    #[test]
    fn test_document_parses_and_keeps_hours_order() {
        let doc: ContactDocument = serde_json::from_str(DOC).unwrap();
        assert_eq!(doc.restaurant.name, "Bella Vista Cafe");
        assert_eq!(doc.restaurant.description, "");

        let days: Vec<&str> = doc.contact.hours.iter().map(|(d, _)| d).collect();
        assert_eq!(days, vec!["Monday", "Tuesday", "Sunday"]);
        assert_eq!(doc.contact.hours.get("sunday"), Some("8:00 AM - 8:00 PM"));

        let platforms: Vec<&str> = doc.contact.social.iter().map(|(p, _)| p).collect();
        assert_eq!(platforms, vec!["instagram", "facebook"]);
    }

    #[test]
    fn test_links_and_address() {
        let doc: ContactDocument = serde_json::from_str(DOC).unwrap();
        let contact = doc.contact;
        assert_eq!(contact.phone_href(), "tel:(415) 555-0123");
        assert_eq!(contact.email_href(), "mailto:hello@bellavistacafe.com");
        assert_eq!(contact.address.locality(), "San Francisco, CA 94102");
        assert_eq!(
            contact.address.to_string(),
            "123 Main Street, San Francisco, CA 94102"
        );
    }

    #[test]
    fn test_serialize_keeps_order_and_camel_case_zip() {
        let doc: ContactDocument = serde_json::from_str(DOC).unwrap();
        let json = serde_json::to_string(&doc).unwrap();
        let monday = json.find("Monday").unwrap();
        let sunday = json.find("Sunday").unwrap();
        assert!(monday < sunday);
        assert!(json.contains("\"zipCode\":\"94102\""));
    }

    #[test]
    fn test_hours_reject_non_string_values() {
        let result: Result<OrderedPairs, _> = serde_json::from_str(r#"{"Monday": 9}"#);
        assert!(result.is_err());
    }
}
