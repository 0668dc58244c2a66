//! Outfit catalog.
//!
//! The catalog is immutable data: the ordered options of every category and
//! the exclusive groups of accessories. Option order is significant since it
//! defines the 1-based index written into the outfit code.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Highest number of options a single-select list or exclusive group may hold
/// so every index stays one digit.
pub const MAX_OPTIONS: usize = 9;

/// The top-level outfit slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Tops,
    Bottoms,
    Shoes,
    Accessories,
    Perfume,
}

impl Category {
    /// All categories in catalog order.
    pub const ALL: [Category; 5] = [
        Category::Tops,
        Category::Bottoms,
        Category::Shoes,
        Category::Accessories,
        Category::Perfume,
    ];

    /// Lowercase name, as used in asset paths and catalog files.
    pub fn name(self) -> &'static str {
        match self {
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
            Category::Perfume => "perfume",
        }
    }

    /// Returns true for categories holding at most one option.
    pub fn is_single_select(self) -> bool {
        self != Category::Accessories
    }

    fn index(self) -> usize {
        match self {
            Category::Tops => 0,
            Category::Bottoms => 1,
            Category::Shoes => 2,
            Category::Accessories => 3,
            Category::Perfume => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Errors raised while building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("'{list}' has {count} options, at most {max} are allowed", max = MAX_OPTIONS)]
    TooManyOptions { list: String, count: usize },
    #[error("'{option}' is listed twice in '{list}'")]
    DuplicateOption { list: String, option: String },
    #[error("exclusive group name must not be empty")]
    EmptyGroupName,
    #[error("exclusive group '{0}' is defined twice")]
    DuplicateGroup(String),
    #[error("exclusive group '{0}' has no options")]
    EmptyGroup(String),
    #[error("'{option}' in group '{group}' is not an accessory")]
    UnknownGroupMember { group: String, option: String },
    #[error("'{option}' belongs to both '{first}' and '{second}'")]
    OverlappingGroups {
        option: String,
        first: String,
        second: String,
    },
}

/// A named set of accessories of which at most one may be worn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusiveGroup {
    name: String,
    /// Accessory indices, in group order.
    members: Vec<usize>,
}

impl ExclusiveGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Section title for the accessories panel ("glasses" -> "Glasses").
    pub fn title(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Accessory indices of the members, in group order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// 0-based position of an accessory within this group.
    pub fn position(&self, accessory: usize) -> Option<usize> {
        self.members.iter().position(|&m| m == accessory)
    }
}

/// The immutable catalog of categories and exclusive groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    options: [Vec<String>; 5],
    groups: Vec<ExclusiveGroup>,
    /// Accessory index -> index into `groups`.
    group_of: HashMap<usize, usize>,
    /// Accessories outside every group, in catalog order.
    misc: Vec<usize>,
}

impl Catalog {
    /// Builds and validates a catalog.
    ///
    /// Categories missing from `categories` get no options. Groups reference
    /// accessories by name.
    pub fn new<C, G>(categories: C, groups: G) -> Result<Self, CatalogError>
    where
        C: IntoIterator<Item = (Category, Vec<String>)>,
        G: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut options: [Vec<String>; 5] = Default::default();
        for (category, list) in categories {
            // Accessories are encoded as flags or by group position, never by
            // their place in this list.
            validate_list(category.name(), &list, category.is_single_select())?;
            options[category.index()] = list;
        }

        let accessories = &options[Category::Accessories.index()];
        let mut resolved = Vec::new();
        let mut names = HashSet::new();
        let mut owner: HashMap<usize, String> = HashMap::new();

        for (name, members) in groups {
            if name.trim().is_empty() {
                return Err(CatalogError::EmptyGroupName);
            }
            if !names.insert(name.clone()) {
                return Err(CatalogError::DuplicateGroup(name));
            }
            if members.is_empty() {
                return Err(CatalogError::EmptyGroup(name));
            }
            validate_list(&name, &members, true)?;

            let mut indices = Vec::with_capacity(members.len());
            for option in members {
                let Some(idx) = accessories.iter().position(|a| *a == option) else {
                    return Err(CatalogError::UnknownGroupMember {
                        group: name,
                        option,
                    });
                };
                if let Some(first) = owner.get(&idx) {
                    return Err(CatalogError::OverlappingGroups {
                        option,
                        first: first.clone(),
                        second: name,
                    });
                }
                owner.insert(idx, name.clone());
                indices.push(idx);
            }
            resolved.push((name, indices));
        }

        Ok(Self::assemble(options, resolved))
    }

    /// Loads a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// The built-in catalog.
    pub fn builtin() -> Self {
        let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let options = [
            list(&["Coat", "Hoodie", "Sprayjacket", "Tee", "Buttonup", "Blazer"]),
            list(&["Jeans", "Stubbies", "Pants", "Trousers"]),
            list(&["Sneakers", "Salomons", "Birks", "Chucks", "Crocs", "Docs"]),
            list(&[
                "Rings",
                "Cap",
                "Beard",
                "Flowers",
                "Glasses Square",
                "Glasses Round",
                "Glasses Reading",
                "Watch Classy",
                "Watch Nerd",
                "Watch Nerd+",
                "Watch Shiny",
            ]),
            list(&["Figgy", "Smoky", "Fresh"]),
        ];
        let groups = vec![
            ("glasses".to_string(), vec![4, 5, 6]),
            ("watches".to_string(), vec![7, 8, 9, 10]),
        ];
        Self::assemble(options, groups)
    }

    fn assemble(options: [Vec<String>; 5], groups: Vec<(String, Vec<usize>)>) -> Self {
        let groups: Vec<ExclusiveGroup> = groups
            .into_iter()
            .map(|(name, members)| ExclusiveGroup { name, members })
            .collect();

        let group_of: HashMap<usize, usize> = groups
            .iter()
            .enumerate()
            .flat_map(|(g, group)| group.members.iter().map(move |&m| (m, g)))
            .collect();

        let misc = (0..options[Category::Accessories.index()].len())
            .filter(|idx| !group_of.contains_key(idx))
            .collect();

        Self {
            options,
            groups,
            group_of,
            misc,
        }
    }

    /// Options of a category, in catalog order.
    pub fn options(&self, category: Category) -> &[String] {
        &self.options[category.index()]
    }

    /// Name of the option at `index` in `category`.
    pub fn option(&self, category: Category, index: usize) -> Option<&str> {
        self.options(category).get(index).map(String::as_str)
    }

    /// 0-based catalog index of an option.
    pub fn index_of(&self, category: Category, option: &str) -> Option<usize> {
        self.options(category).iter().position(|o| o == option)
    }

    pub fn groups(&self) -> &[ExclusiveGroup] {
        &self.groups
    }

    /// Index of the exclusive group containing an accessory, if any.
    pub fn group_of(&self, accessory: usize) -> Option<usize> {
        self.group_of.get(&accessory).copied()
    }

    /// Accessories that belong to no exclusive group, in catalog order.
    pub fn misc_accessories(&self) -> &[usize] {
        &self.misc
    }

    /// Number of characters in an outfit code for this catalog.
    pub fn code_len(&self) -> usize {
        // tops, bottoms, shoes, one flag per misc accessory, one digit per group, perfume
        3 + self.misc.len() + self.groups.len() + 1
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FromStr for Catalog {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let file: CatalogFile = toml::from_str(s)?;
        let CategoriesFile {
            tops,
            bottoms,
            shoes,
            accessories,
            perfume,
        } = file.categories;

        Catalog::new(
            [
                (Category::Tops, tops),
                (Category::Bottoms, bottoms),
                (Category::Shoes, shoes),
                (Category::Accessories, accessories),
                (Category::Perfume, perfume),
            ],
            file.exclusive_groups
                .into_iter()
                .map(|g| (g.name, g.options)),
        )
    }
}

fn validate_list(list: &str, options: &[String], indexed: bool) -> Result<(), CatalogError> {
    if indexed && options.len() > MAX_OPTIONS {
        return Err(CatalogError::TooManyOptions {
            list: list.to_string(),
            count: options.len(),
        });
    }
    let mut seen = HashSet::new();
    for option in options {
        if !seen.insert(option.as_str()) {
            return Err(CatalogError::DuplicateOption {
                list: list.to_string(),
                option: option.clone(),
            });
        }
    }
    Ok(())
}

// ============================================================================
// Catalog file format
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    categories: CategoriesFile,
    #[serde(default)]
    exclusive_groups: Vec<GroupFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoriesFile {
    #[serde(default)]
    tops: Vec<String>,
    #[serde(default)]
    bottoms: Vec<String>,
    #[serde(default)]
    shoes: Vec<String>,
    #[serde(default)]
    accessories: Vec<String>,
    #[serde(default)]
    perfume: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupFile {
    name: String,
    options: Vec<String>,
}
