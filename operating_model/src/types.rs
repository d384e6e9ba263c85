//! Data types for the operating model tree.
//!
//! The tree is two levels deep at most:
//!
//! ```text
//! Section ─┬─ Flat:    [Item, Item, ...]
//!          └─ Grouped: [Subsection ─ [Item, ...], Subsection ─ [Item, ...]]
//! ```
//!
//! All types are:
//!
//! - **Serializable** - catalogs can be loaded from TOML via serde
//! - **Clone-friendly** - components take owned copies without borrowing issues
//!
//! # Example
//!
//! ```rust
//! use operating_model::types::{Item, Palette, Section, SectionBody};
//!
//! let section = Section {
//!     key: "ENABLING".into(),
//!     name: "Enabling Capabilities".into(),
//!     palette: Palette::new("#76B5A8", "#ffffff"),
//!     body: SectionBody::Flat(vec![Item::new("growth", "Growth")]),
//! };
//! assert!(!section.is_grouped());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A leaf entry: one concrete capability or practice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier, unique across the catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Detail bullet points (empty when the item has none)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl Item {
    /// Item without details.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            details: Vec::new(),
        }
    }

    /// Attach detail bullet points.
    pub fn with_details<I, S>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details = details.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_details(&self) -> bool {
        !self.details.is_empty()
    }

    /// Details joined the way item cells display them.
    pub fn details_line(&self) -> Option<String> {
        self.has_details().then(|| self.details.join(" • "))
    }
}

/// Second-level grouping, only present under grouped sections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsection {
    pub key: String,
    pub name: String,
    /// Header background (CSS color)
    pub color: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Header colors for a top-level section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Header background (CSS color)
    pub color: String,
    /// Header text color (CSS color)
    pub text_color: String,
    /// Optional background for the whole section box
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl Palette {
    pub fn new(color: impl Into<String>, text_color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            text_color: text_color.into(),
            background: None,
        }
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }
}

/// Contents of a section: either a flat item list or named subsections.
///
/// In TOML the variant is chosen by which key the section table carries:
/// `[[sections.items]]` or `[[sections.subsections]]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionBody {
    #[serde(rename = "items")]
    Flat(Vec<Item>),
    #[serde(rename = "subsections")]
    Grouped(Vec<Subsection>),
}

/// Top-level grouping in the operating model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSection")]
pub struct Section {
    pub key: String,
    pub name: String,
    #[serde(flatten)]
    pub palette: Palette,
    #[serde(flatten)]
    pub body: SectionBody,
}

/// Section table as written in TOML, before the body variant is decided.
#[derive(Deserialize)]
struct RawSection {
    key: String,
    name: String,
    #[serde(flatten)]
    palette: Palette,
    items: Option<Vec<Item>>,
    subsections: Option<Vec<Subsection>>,
}

impl TryFrom<RawSection> for Section {
    type Error = ModelError;

    fn try_from(raw: RawSection) -> Result<Self, Self::Error> {
        let body = match (raw.items, raw.subsections) {
            (Some(items), None) => SectionBody::Flat(items),
            (None, Some(subsections)) => SectionBody::Grouped(subsections),
            _ => return Err(ModelError::AmbiguousSection(raw.key)),
        };
        Ok(Self {
            key: raw.key,
            name: raw.name,
            palette: raw.palette,
            body,
        })
    }
}

impl Section {
    pub fn is_grouped(&self) -> bool {
        matches!(self.body, SectionBody::Grouped(_))
    }

    /// Look up a subsection by key (always `None` for flat sections).
    pub fn subsection(&self, key: &str) -> Option<&Subsection> {
        match &self.body {
            SectionBody::Flat(_) => None,
            SectionBody::Grouped(subs) => subs.iter().find(|s| s.key == key),
        }
    }

    /// All items of the section, subsections flattened in order.
    pub fn items(&self) -> Vec<&Item> {
        match &self.body {
            SectionBody::Flat(items) => items.iter().collect(),
            SectionBody::Grouped(subs) => subs.iter().flat_map(|s| s.items.iter()).collect(),
        }
    }
}

/// Country tag shown in the filter strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Country {
    Global,
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "UKI")]
    Uki,
    Canada,
    Iberia,
    France,
    Italy,
    Germany,
    India,
    #[serde(rename = "SM")]
    Sm,
    Japan,
}

impl Country {
    /// Every country, in strip order.
    pub const ALL: [Country; 11] = [
        Country::Global,
        Country::Us,
        Country::Uki,
        Country::Canada,
        Country::Iberia,
        Country::France,
        Country::Italy,
        Country::Germany,
        Country::India,
        Country::Sm,
        Country::Japan,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Country::Global => "Global",
            Country::Us => "US",
            Country::Uki => "UKI",
            Country::Canada => "Canada",
            Country::Iberia => "Iberia",
            Country::France => "France",
            Country::Italy => "Italy",
            Country::Germany => "Germany",
            Country::India => "India",
            Country::Sm => "SM",
            Country::Japan => "Japan",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Country {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Country::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ModelError::UnknownCountry(s.to_string()))
    }
}

/// Identifies one collapsible header: a section, or a subsection inside it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExpansionKey {
    pub section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsection: Option<String>,
}

impl ExpansionKey {
    pub fn section(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            subsection: None,
        }
    }

    pub fn subsection(section: impl Into<String>, subsection: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            subsection: Some(subsection.into()),
        }
    }
}

impl fmt::Display for ExpansionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subsection {
            Some(sub) => write!(f, "{}/{}", self.section, sub),
            None => f.write_str(&self.section),
        }
    }
}

/// Parses `SECTION` or `SECTION/SUBSECTION`. Keys are not checked against a catalog.
impl FromStr for ExpansionKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('/') {
            Some((section, sub)) if !section.is_empty() && !sub.is_empty() => {
                Ok(Self::subsection(section, sub))
            }
            None if !s.is_empty() => Ok(Self::section(s)),
            _ => Err(ModelError::UnknownSection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn country_parses_case_insensitively() {
        assert_eq!("japan".parse::<Country>().unwrap(), Country::Japan);
        assert_eq!(" UKI ".parse::<Country>().unwrap(), Country::Uki);
        assert_eq!("sm".parse::<Country>().unwrap(), Country::Sm);
    }

    #[test]
    fn country_rejects_unknown_label() {
        let err = "Atlantis".parse::<Country>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownCountry(name) if name == "Atlantis"));
    }

    #[test]
    fn country_strip_order_starts_global_ends_japan() {
        assert_eq!(Country::ALL.len(), 11);
        assert_eq!(Country::ALL[0], Country::Global);
        assert_eq!(Country::ALL[10], Country::Japan);
    }

    #[test]
    fn expansion_keys_do_not_collide() {
        // "A-B" as a section key must not equal section "A" / subsection "B"
        let dashed = ExpansionKey::section("A-B");
        let nested = ExpansionKey::subsection("A", "B");
        assert_ne!(dashed, nested);
    }

    #[test]
    fn expansion_key_round_trips_through_display() {
        let key: ExpansionKey = "CONSULT_PROPOSITIONS/GLOBAL".parse().unwrap();
        assert_eq!(key, ExpansionKey::subsection("CONSULT_PROPOSITIONS", "GLOBAL"));
        assert_eq!(key.to_string(), "CONSULT_PROPOSITIONS/GLOBAL");

        let key: ExpansionKey = "ENABLING".parse().unwrap();
        assert_eq!(key, ExpansionKey::section("ENABLING"));
    }

    #[test]
    fn expansion_key_rejects_empty_parts() {
        assert!("".parse::<ExpansionKey>().is_err());
        assert!("/GLOBAL".parse::<ExpansionKey>().is_err());
        assert!("CONSULT_PROPOSITIONS/".parse::<ExpansionKey>().is_err());
    }

    #[test]
    fn details_line_joins_with_bullet() {
        let item = Item::new("dataai", "Data and AI").with_details(["Analytics", "ML"]);
        assert_eq!(item.details_line().as_deref(), Some("Analytics • ML"));
        assert_eq!(Item::new("vital", "Vital").details_line(), None);
    }
}
