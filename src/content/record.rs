//! Raw post records as written in the YAML source files

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Custom deserializer that accepts any YAML scalar as text
///
/// `title: 2025` or `author: true` are kept as written rather than rejected.
fn scalar_to_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ScalarToString;

    impl<'de> Visitor<'de> for ScalarToString {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number or boolean")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(ScalarToString)
}

/// One post file's key/value document
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecord {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(deserialize_with = "scalar_to_string")]
    pub title: String,
    #[serde(deserialize_with = "scalar_to_string")]
    pub date: String,
    #[serde(deserialize_with = "scalar_to_string")]
    pub author: String,
    #[serde(deserialize_with = "scalar_to_string")]
    pub summary: String,
    #[serde(deserialize_with = "scalar_to_string")]
    pub content: String,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
    #[serde(rename = "readingTime", default)]
    pub reading_time: Option<f64>,
}

impl PostRecord {
    /// The explicit slug, if one is set and non-blank
    pub fn explicit_slug(&self) -> Option<&str> {
        self.slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Parse the date string into a UTC timestamp
    pub fn parse_date(&self) -> Option<DateTime<Utc>> {
        parse_date_string(&self.date)
    }
}

/// Parse a date string in various formats; values without an offset are UTC
pub fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let offset_formats = ["%Y-%m-%d %H:%M:%S%.f %z", "%Y-%m-%dT%H:%M:%S%.f%z"];
    for fmt in offset_formats {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        let yaml = r#"
title: Hello World
date: 2025-01-05
author: Ada
summary: A short summary.
readingTime: 4
tags:
  - local-first
  - design
content: |
  # Heading

  Body text.
"#;
        let record: PostRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.title, "Hello World");
        assert_eq!(record.date, "2025-01-05");
        assert_eq!(record.tags, vec!["local-first", "design"]);
        assert_eq!(record.reading_time, Some(4.0));
        assert!(record.content.contains("Body text."));
        assert_eq!(record.explicit_slug(), None);
    }

    #[test]
    fn test_single_string_tag() {
        let yaml = "title: T\ndate: 2025-01-05\nauthor: A\nsummary: S\ncontent: C\ntags: Notes\n";
        let record: PostRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.tags, vec!["Notes"]);
    }

    #[test]
    fn test_numeric_scalars_as_text() {
        let yaml = "title: 2025\ndate: 2025-01-05\nauthor: 42\nsummary: 1.5\ncontent: true\n";
        let record: PostRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.title, "2025");
        assert_eq!(record.author, "42");
        assert_eq!(record.summary, "1.5");
        assert_eq!(record.content, "true");
    }

    #[test]
    fn test_fractional_reading_time() {
        let yaml = "title: T\ndate: 2025-01-05\nauthor: A\nsummary: S\ncontent: C\nreadingTime: 4.5\n";
        let record: PostRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.reading_time, Some(4.5));
    }

    #[test]
    fn test_mapping_title_is_rejected() {
        let yaml = "title: {a: b}\ndate: 2025-01-05\nauthor: A\nsummary: S\ncontent: C\n";
        assert!(serde_yaml::from_str::<PostRecord>(yaml).is_err());
    }

    #[test]
    fn test_blank_slug_is_ignored() {
        let yaml = "slug: '  '\ntitle: T\ndate: 2025-01-05\nauthor: A\nsummary: S\ncontent: C\n";
        let record: PostRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.explicit_slug(), None);
    }

    #[test]
    fn test_missing_required_field() {
        let yaml = "title: T\ndate: 2025-01-05\nauthor: A\ncontent: C\n";
        assert!(serde_yaml::from_str::<PostRecord>(yaml).is_err());
    }

    #[test]
    fn test_parse_date_formats() {
        let day = parse_date_string("2025-01-05").unwrap();
        assert_eq!(day.format("%Y-%m-%d %H:%M").to_string(), "2025-01-05 00:00");

        let local = parse_date_string("2025-01-05 10:30:00").unwrap();
        assert_eq!(local.format("%H:%M").to_string(), "10:30");

        let offset = parse_date_string("2025-01-05T10:30:00+02:00").unwrap();
        assert_eq!(offset.format("%H:%M").to_string(), "08:30");

        let slashed = parse_date_string("2025/01/05").unwrap();
        assert_eq!(slashed, day);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date_string("next tuesday").is_none());
        assert!(parse_date_string("").is_none());
    }
}
