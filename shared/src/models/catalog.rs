//! Product and material catalog models
//!
//! The order-entry forms drive cascading dropdowns off two hierarchies
//! delivered by the backend: air-conditioning units as a depth-4 tree
//! (Brand → Horsepower → Series → Type) resolving to indoor/outdoor model
//! identifiers, and consumable materials as a depth-2 tree
//! (Category → Material) resolving to a unit of measure.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Depth of the air-conditioning unit hierarchy
pub const UNIT_CATALOG_DEPTH: usize = 4;
/// Depth of the consumable-material hierarchy
pub const MATERIAL_CATALOG_DEPTH: usize = 2;

/// Leaf record of the unit catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitModels {
    pub indoor_model: String,
    pub outdoor_model: String,
}

/// Leaf record of the material catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialInfo {
    pub unit_of_measure: String,
}

/// One node of a catalog hierarchy: named children plus an optional leaf
/// record at terminal depth.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogNode<L> {
    children: BTreeMap<String, CatalogNode<L>>,
    leaf: Option<L>,
}

impl<L> Default for CatalogNode<L> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
            leaf: None,
        }
    }
}

/// A catalog hierarchy of fixed depth.
///
/// The tree is read-only input data for a session: it is built once from a
/// feed and never mutated by selection.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTree<L> {
    depth: usize,
    root: CatalogNode<L>,
}

impl<L> CatalogTree<L> {
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            root: CatalogNode::default(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Insert a leaf at a full-depth path. Returns false (and leaves the
    /// tree unchanged) if the path length does not match the tree depth.
    pub fn insert<S: AsRef<str>>(&mut self, path: &[S], leaf: L) -> bool {
        if path.len() != self.depth {
            return false;
        }
        let mut node = &mut self.root;
        for key in path {
            node = node.children.entry(key.as_ref().to_string()).or_default();
        }
        node.leaf = Some(leaf);
        true
    }

    /// The set of valid next-level choices under a partial selection.
    ///
    /// An empty path yields the top-level keys. Any unknown key along the
    /// path yields the empty set; a miss is an expected state of an
    /// interactive form, not an error. Ordering is left to presentation.
    pub fn options_at<S: AsRef<str>>(&self, path: &[S]) -> BTreeSet<String> {
        match self.walk(path) {
            Some(node) => node.children.keys().cloned().collect(),
            None => BTreeSet::new(),
        }
    }

    /// Resolve a complete selection to its leaf record.
    ///
    /// Present only when `path` has exactly the tree's depth and every
    /// segment matches; shorter, longer, or non-matching paths are absent.
    pub fn resolve_leaf<S: AsRef<str>>(&self, path: &[S]) -> Option<&L> {
        if path.len() != self.depth {
            return None;
        }
        self.walk(path).and_then(|node| node.leaf.as_ref())
    }

    fn walk<S: AsRef<str>>(&self, path: &[S]) -> Option<&CatalogNode<L>> {
        let mut node = &self.root;
        for key in path {
            node = node.children.get(key.as_ref())?;
        }
        Some(node)
    }
}

/// Build the unit catalog from its feed shape:
/// `{brand: {hp: {series: {type: {indoor_model, outdoor_model}}}}}`.
///
/// Malformed subtrees are skipped with a warning rather than failing the
/// whole feed.
pub fn unit_catalog_from_feed(feed: &Value) -> CatalogTree<UnitModels> {
    let mut tree = CatalogTree::new(UNIT_CATALOG_DEPTH);
    let Some(brands) = feed.as_object() else {
        tracing::warn!("unit catalog feed is not an object; catalog left empty");
        return tree;
    };
    for (brand, hps) in brands {
        let Some(hps) = hps.as_object() else {
            tracing::warn!(brand = %brand, "skipping malformed unit catalog branch");
            continue;
        };
        for (hp, serieses) in hps {
            let Some(serieses) = serieses.as_object() else {
                tracing::warn!(brand = %brand, hp = %hp, "skipping malformed unit catalog branch");
                continue;
            };
            for (series, types) in serieses {
                let Some(types) = types.as_object() else {
                    continue;
                };
                for (unit_type, models) in types {
                    let leaf = UnitModels {
                        indoor_model: string_field(models, "indoor_model"),
                        outdoor_model: string_field(models, "outdoor_model"),
                    };
                    tree.insert(&[brand, hp, series, unit_type], leaf);
                }
            }
        }
    }
    tree
}

/// Build the material catalog from its feed shape:
/// `{category: [{description, uom}, ...]}`.
pub fn material_catalog_from_feed(feed: &Value) -> CatalogTree<MaterialInfo> {
    let mut tree = CatalogTree::new(MATERIAL_CATALOG_DEPTH);
    let Some(categories) = feed.as_object() else {
        tracing::warn!("material catalog feed is not an object; catalog left empty");
        return tree;
    };
    for (category, materials) in categories {
        let Some(materials) = materials.as_array() else {
            tracing::warn!(category = %category, "skipping malformed material catalog branch");
            continue;
        };
        for material in materials {
            let description = string_field(material, "description");
            if description.is_empty() {
                continue;
            }
            let leaf = MaterialInfo {
                unit_of_measure: string_field(material, "uom"),
            };
            tree.insert(&[category, &description], leaf);
        }
    }
    tree
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
