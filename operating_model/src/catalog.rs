//! The operating model catalog: the static tree of sections, subsections and items.
//!
//! [`Catalog::builtin`] returns the Consult operating model. Alternative
//! catalogs can be loaded from TOML:
//!
//! ```toml
//! [[sections]]
//! key = "ENABLING"
//! name = "Enabling Capabilities"
//! color = "#76B5A8"
//! text_color = "#ffffff"
//!
//! [[sections.items]]
//! id = "growth"
//! name = "Growth"
//! details = ["Investment cases", "GTM"]
//! ```
//!
//! Grouped sections carry `[[sections.subsections]]` tables instead of items,
//! each with its own `[[sections.subsections.items]]`.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ModelError, Result};
use crate::types::{ExpansionKey, Item, Palette, Section, SectionBody, Subsection};

const WHITE: &str = "#ffffff";
const BLACK: &str = "#000000";
const LIGHT_GREY: &str = "#f9fafb";

/// Ordered collection of top-level sections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub sections: Vec<Section>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The Consult operating model (Horizon 1).
    pub fn builtin() -> Self {
        let consult = Section {
            key: "CONSULT_PROPOSITIONS".into(),
            name: "Consult Propositions".into(),
            palette: Palette::new("#29707A", WHITE).with_background(LIGHT_GREY),
            body: SectionBody::Grouped(vec![
                Subsection {
                    key: "GLOBAL".into(),
                    name: "Global Practices".into(),
                    color: "#3E8975".into(),
                    items: vec![
                        Item::new("cloud", "Cloud"),
                        Item::new("adai", "Enterprise Services (ADAI)"),
                        Item::new("corez", "CoreZ"),
                        Item::new("dws", "DWS"),
                        Item::new("network", "Network & Edge"),
                        Item::new("secres", "Sec & Res"),
                    ],
                },
                Subsection {
                    key: "SERVICE".into(),
                    name: "Service Lines".into(),
                    color: "#2D7261".into(),
                    items: vec![
                        Item::new("transform", "Enterprise Transformation").with_details([
                            "EA",
                            "PPM",
                            "Change",
                            "IT Strategy",
                            "Process",
                            "Bridge Insights",
                        ]),
                        Item::new("dataai", "Data and AI").with_details([
                            "Analytics",
                            "ML",
                            "Data Strategy",
                        ]),
                    ],
                },
            ]),
        };

        let enabling = Section {
            key: "ENABLING".into(),
            name: "Enabling Capabilities".into(),
            palette: Palette::new("#76B5A8", WHITE),
            body: SectionBody::Flat(vec![
                Item::new("growth", "Growth").with_details([
                    "Investment cases",
                    "GTM",
                    "Sales Hub",
                    "Knowledge mgmt",
                ]),
                Item::new("collab", "Collaboratives"),
                Item::new("industry", "Industry"),
                Item::new("workforce", "Consulting Workforce").with_details([
                    "Professions",
                    "Training",
                    "Career paths",
                    "Skills",
                ]),
                Item::new("methods", "Methods & Tools"),
            ]),
        };

        let channels = Section {
            key: "CHANNELS".into(),
            name: "Channels to Market".into(),
            palette: Palette::new("#CCE3F0", BLACK).with_background(LIGHT_GREY),
            body: SectionBody::Flat(vec![
                Item::new("partners", "Consult Partners"),
                Item::new("vital", "Vital"),
                Item::new("alliances", "Alliances"),
                Item::new("kyndryl", "Kyndryl Institute"),
                Item::new("cvp", "Value Proposition"),
            ]),
        };

        Self {
            sections: vec![consult, enabling, channels],
        }
    }

    /// Parse and validate a TOML catalog. `origin` is only used in error messages.
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self> {
        let catalog: Catalog = toml::from_str(content).map_err(|source| ModelError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        catalog.validate()?;
        debug!(
            origin = %origin.display(),
            sections = catalog.sections.len(),
            items = catalog.items().len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Read, parse and validate a TOML catalog file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Check key/id uniqueness and that every header has something to expand into.
    ///
    /// Item ids must be unique across the whole catalog because selection
    /// compares items by id.
    pub fn validate(&self) -> Result<()> {
        let mut section_keys = HashSet::new();
        let mut item_ids = HashSet::new();

        let mut check_items = |owner: &str, items: &[Item]| -> Result<()> {
            if items.is_empty() {
                return Err(ModelError::EmptySection(owner.to_string()));
            }
            for item in items {
                if !item_ids.insert(item.id.clone()) {
                    return Err(ModelError::DuplicateItem(item.id.clone()));
                }
            }
            Ok(())
        };

        for section in &self.sections {
            if !section_keys.insert(section.key.as_str()) {
                return Err(ModelError::DuplicateSection(section.key.clone()));
            }
            match &section.body {
                SectionBody::Flat(items) => check_items(&section.key, items)?,
                SectionBody::Grouped(subs) => {
                    if subs.is_empty() {
                        return Err(ModelError::EmptySection(section.key.clone()));
                    }
                    let mut sub_keys = HashSet::new();
                    for sub in subs {
                        if !sub_keys.insert(sub.key.as_str()) {
                            return Err(ModelError::DuplicateSubsection {
                                section: section.key.clone(),
                                key: sub.key.clone(),
                            });
                        }
                        check_items(&format!("{}/{}", section.key, sub.key), &sub.items)?;
                    }
                }
            }
        }
        Ok(())
    }

    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }

    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.items().into_iter().find(|item| item.id == id)
    }

    /// Every item, depth-first in catalog order.
    pub fn items(&self) -> Vec<&Item> {
        self.sections.iter().flat_map(Section::items).collect()
    }

    /// Every collapsible header in the catalog, in render order.
    pub fn expansion_keys(&self) -> Vec<ExpansionKey> {
        let mut keys = Vec::new();
        for section in &self.sections {
            keys.push(ExpansionKey::section(&section.key));
            if let SectionBody::Grouped(subs) = &section.body {
                keys.extend(
                    subs.iter()
                        .map(|sub| ExpansionKey::subsection(&section.key, &sub.key)),
                );
            }
        }
        keys
    }

    /// Confirm that `key` names a header in this catalog.
    pub fn resolve_key(&self, key: &ExpansionKey) -> Result<()> {
        let section = self
            .section(&key.section)
            .ok_or_else(|| ModelError::UnknownSection(key.section.clone()))?;
        match &key.subsection {
            Some(sub) if section.subsection(sub).is_none() => Err(ModelError::UnknownSubsection {
                section: key.section.clone(),
                key: sub.clone(),
            }),
            _ => Ok(()),
        }
    }

    /// Look up an item by id, failing with [`ModelError::UnknownItem`].
    pub fn resolve_item(&self, id: &str) -> Result<&Item> {
        self.find_item(id)
            .ok_or_else(|| ModelError::UnknownItem(id.to_string()))
    }
}
