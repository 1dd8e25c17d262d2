//! Package records as delivered by the JSON feed.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

use crate::utils::format::format_published_date;
use crate::utils::parse_float_prefix;

/// Spreadsheet serial date as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SerialDate {
    Number(f64),
    Text(String),
}

impl SerialDate {
    /// Numeric serial value; unparseable text yields `NaN`.
    pub fn value(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => parse_float_prefix(s),
        }
    }
}

/// Publication date of a package, before or after normalization.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PublishedDate {
    /// Raw serial value, not yet normalized.
    Raw(SerialDate),
    /// Normalized local date-time.
    At(NaiveDateTime),
    /// The serial value could not be converted.
    Invalid,
    /// The record carries no publication date.
    #[default]
    Missing,
}

impl PublishedDate {
    /// The normalized date-time, if any.
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Self::At(at) => Some(*at),
            _ => None,
        }
    }

    /// Text used for collation. ISO-8601 keeps chronological order.
    pub fn sort_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::At(at) => Some(Cow::Owned(at.format("%Y-%m-%dT%H:%M:%S").to_string())),
            Self::Raw(SerialDate::Text(s)) => Some(Cow::Borrowed(s)),
            Self::Raw(SerialDate::Number(n)) => Some(Cow::Owned(n.to_string())),
            Self::Invalid | Self::Missing => None,
        }
    }
}

impl<'de> Deserialize<'de> for PublishedDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<SerialDate>::deserialize(deserializer)?
            .map_or(Self::Missing, Self::Raw))
    }
}

/// Value of a filterable attribute.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    List(Vec<String>),
    Other(serde_json::Value),
}

/// Borrowed view of one row field, as seen by filtering and sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    List(&'a [String]),
    Date(&'a PublishedDate),
}

/// One package record.
///
/// Attributes without a dedicated field (`softwareType`, `operatingSystem`,
/// `provider`, `fileType`, and anything else the feed adds) are kept in
/// [`Row::attributes`] so they stay filterable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub package_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub size: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sha1_hash: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub icon: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default)]
    pub eula: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub public_link: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub release_notes: String,
    #[serde(default)]
    pub date_published: PublishedDate,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, AttrValue>,
}

fn text_field(s: &str) -> Option<FieldValue<'_>> {
    Some(FieldValue::Text(Cow::Borrowed(s)))
}

/// Accept strings, numbers and `null` for text fields.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Text(String),
        Number(serde_json::Number),
        Flag(bool),
    }

    Ok(match Option::<Lenient>::deserialize(deserializer)? {
        Some(Lenient::Text(s)) => s,
        Some(Lenient::Number(n)) => n.to_string(),
        Some(Lenient::Flag(b)) => b.to_string(),
        None => String::new(),
    })
}

impl Row {
    /// Create a row with only a name and size; everything else is empty.
    pub fn new(package_name: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            size: size.into(),
            sha1_hash: String::new(),
            icon: String::new(),
            description: String::new(),
            eula: None,
            public_link: String::new(),
            release_notes: String::new(),
            date_published: PublishedDate::Missing,
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, key: impl Into<String>, value: AttrValue) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Look up a field by its feed key (e.g. `"packageName"`).
    ///
    /// Returns `None` when the row has no value for `key`.
    pub fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "packageName" => text_field(&self.package_name),
            "size" => text_field(&self.size),
            "sha1Hash" => text_field(&self.sha1_hash),
            "icon" => text_field(&self.icon),
            "description" => text_field(&self.description),
            "publicLink" => text_field(&self.public_link),
            "releaseNotes" => text_field(&self.release_notes),
            "eula" => self.eula.as_deref().and_then(text_field),
            "datePublished" => match self.date_published {
                PublishedDate::Missing => None,
                ref date => Some(FieldValue::Date(date)),
            },
            _ => match self.attributes.get(key)? {
                AttrValue::Text(s) => text_field(s),
                AttrValue::List(items) => Some(FieldValue::List(items)),
                AttrValue::Other(serde_json::Value::Null) => None,
                AttrValue::Other(serde_json::Value::String(s)) => text_field(s),
                AttrValue::Other(value) => Some(FieldValue::Text(Cow::Owned(value.to_string()))),
            },
        }
    }

    /// Display text for a field; lists are joined with commas.
    pub fn display(&self, key: &str) -> String {
        match self.field(key) {
            Some(FieldValue::Text(s)) => s.into_owned(),
            Some(FieldValue::List(items)) => items.join(", "),
            Some(FieldValue::Date(date)) => format_published_date(date),
            None => String::new(),
        }
    }

    /// EULA link, if the record has a non-empty one.
    pub fn eula_link(&self) -> Option<&str> {
        self.eula.as_deref().map(str::trim).filter(|link| !link.is_empty())
    }

    /// Case-insensitive package name comparison.
    pub fn is_named(&self, package_name: &str) -> bool {
        self.package_name.to_lowercase() == package_name.to_lowercase()
    }
}

/// Wire document of the package feed: `{ "data": [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub data: Vec<Row>,
}

/// The canonical row set of one page load.
///
/// Immutable once built; clones share the same rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Arc<[Row]>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows: rows.into() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row whose package name matches case-insensitively.
    pub fn find_by_name(&self, package_name: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.is_named(package_name))
    }
}
