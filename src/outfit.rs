//! Outfit selection state.
//!
//! Holds the active tab and the current selection of every category, and
//! applies the toggle rules: single-select categories hold at most one
//! option, and at most one member of each exclusive accessory group may be
//! worn at a time.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::catalog::{Catalog, Category};

/// The tabs of the option panel.
///
/// `Save` is a view selector: it shows the perfume options and the outfit
/// code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Tops,
    Bottoms,
    Shoes,
    Accessories,
    Save,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 5] = [Tab::Tops, Tab::Bottoms, Tab::Shoes, Tab::Accessories, Tab::Save];

    pub fn name(self) -> &'static str {
        match self {
            Tab::Tops => "tops",
            Tab::Bottoms => "bottoms",
            Tab::Shoes => "shoes",
            Tab::Accessories => "accessories",
            Tab::Save => "save",
        }
    }

    /// The category whose options this tab toggles.
    pub fn category(self) -> Category {
        match self {
            Tab::Tops => Category::Tops,
            Tab::Bottoms => Category::Bottoms,
            Tab::Shoes => Category::Shoes,
            Tab::Accessories => Category::Accessories,
            Tab::Save => Category::Perfume,
        }
    }

    /// Position in `Tab::ALL`.
    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tab {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| SelectionError::UnknownTab(s.to_string()))
    }
}

/// Errors raised by selection operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("'{option}' is not a {category} option")]
    UnknownOption { category: Category, option: String },
    #[error("unknown tab '{0}'")]
    UnknownTab(String),
}

/// The current outfit.
#[derive(Debug, Clone)]
pub struct Outfit {
    catalog: Arc<Catalog>,
    active_tab: Tab,
    top: Option<usize>,
    bottom: Option<usize>,
    shoes: Option<usize>,
    perfume: Option<usize>,
    /// Worn accessories by catalog index, in the order they were put on.
    accessories: Vec<usize>,
}

impl Outfit {
    /// Creates an empty outfit showing the tops tab.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            active_tab: Tab::default(),
            top: None,
            bottom: None,
            shoes: None,
            perfume: None,
            accessories: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Switches the visible tab. Selections are untouched.
    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Toggles an option of the category shown by the active tab.
    pub fn toggle_option(&mut self, option: &str) -> Result<(), SelectionError> {
        self.toggle(self.active_tab.category(), option)
    }

    /// Toggles an option of `category`.
    ///
    /// Single-select categories clear the slot when the option already fills
    /// it, and replace it otherwise. Accessories in an exclusive group evict
    /// the other members of that group; other accessories toggle on their own.
    pub fn toggle(&mut self, category: Category, option: &str) -> Result<(), SelectionError> {
        let index = self
            .catalog
            .index_of(category, option)
            .ok_or_else(|| SelectionError::UnknownOption {
                category,
                option: option.to_string(),
            })?;

        if !category.is_single_select() {
            self.toggle_accessory(index);
        } else if let Some(slot) = self.slot_mut(category) {
            *slot = if *slot == Some(index) { None } else { Some(index) };
        }
        Ok(())
    }

    fn toggle_accessory(&mut self, index: usize) {
        let was_worn = self.accessories.contains(&index);
        match self.catalog.group_of(index) {
            Some(group) => {
                let catalog = &self.catalog;
                self.accessories
                    .retain(|&worn| catalog.group_of(worn) != Some(group));
                if !was_worn {
                    self.accessories.push(index);
                }
            }
            None if was_worn => self.accessories.retain(|&worn| worn != index),
            None => self.accessories.push(index),
        }
    }

    /// Clears every selection, keeping the active tab.
    pub fn clear(&mut self) {
        self.top = None;
        self.bottom = None;
        self.shoes = None;
        self.perfume = None;
        self.accessories.clear();
    }

    fn slot(&self, category: Category) -> Option<usize> {
        match category {
            Category::Tops => self.top,
            Category::Bottoms => self.bottom,
            Category::Shoes => self.shoes,
            Category::Perfume => self.perfume,
            Category::Accessories => None,
        }
    }

    fn slot_mut(&mut self, category: Category) -> Option<&mut Option<usize>> {
        match category {
            Category::Tops => Some(&mut self.top),
            Category::Bottoms => Some(&mut self.bottom),
            Category::Shoes => Some(&mut self.shoes),
            Category::Perfume => Some(&mut self.perfume),
            Category::Accessories => None,
        }
    }

    /// Catalog index of the option filling a single-select slot.
    ///
    /// Always `None` for accessories.
    pub fn selected_index(&self, category: Category) -> Option<usize> {
        self.slot(category)
    }

    /// Name of the option filling a single-select slot.
    pub fn selected(&self, category: Category) -> Option<&str> {
        self.slot(category)
            .and_then(|index| self.catalog.option(category, index))
    }

    /// Returns true if the option is currently selected or worn.
    pub fn is_selected(&self, category: Category, option: &str) -> bool {
        let Some(index) = self.catalog.index_of(category, option) else {
            return false;
        };
        match category {
            Category::Accessories => self.accessories.contains(&index),
            _ => self.slot(category) == Some(index),
        }
    }

    /// Returns true if the accessory at catalog index `index` is worn.
    pub fn wears(&self, index: usize) -> bool {
        self.accessories.contains(&index)
    }

    /// Worn accessories, in the order they were put on.
    pub fn accessories(&self) -> impl Iterator<Item = &str> + '_ {
        self.accessories
            .iter()
            .filter_map(|&index| self.catalog.option(Category::Accessories, index))
    }

    /// 0-based position, within exclusive group `group`, of the worn member.
    pub fn group_member(&self, group: usize) -> Option<usize> {
        let group = self.catalog.groups().get(group)?;
        self.accessories
            .iter()
            .find_map(|&worn| group.position(worn))
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        Category::ALL
            .into_iter()
            .all(|c| self.slot(c).is_none())
            && self.accessories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outfit() -> Outfit {
        Outfit::new(Arc::new(Catalog::builtin()))
    }

    fn worn(outfit: &Outfit) -> Vec<&str> {
        outfit.accessories().collect()
    }

    #[test]
    fn test_new_outfit_is_empty() {
        let outfit = outfit();
        assert_eq!(outfit.active_tab(), Tab::Tops);
        assert!(outfit.is_empty());
        for category in Category::ALL {
            assert_eq!(outfit.selected(category), None);
        }
    }

    #[test]
    fn test_reselecting_single_option_deselects() {
        let mut outfit = outfit();
        outfit.toggle_option("Coat").unwrap();
        assert_eq!(outfit.selected(Category::Tops), Some("Coat"));
        outfit.toggle_option("Coat").unwrap();
        assert_eq!(outfit.selected(Category::Tops), None);
    }

    #[test]
    fn test_single_select_replaces_previous() {
        let mut outfit = outfit();
        outfit.set_active_tab(Tab::Shoes);
        outfit.toggle_option("Birks").unwrap();
        outfit.toggle_option("Docs").unwrap();
        assert_eq!(outfit.selected(Category::Shoes), Some("Docs"));
        assert!(!outfit.is_selected(Category::Shoes, "Birks"));
    }

    #[test]
    fn test_set_active_tab_keeps_selections() {
        let mut outfit = outfit();
        outfit.toggle_option("Tee").unwrap();
        outfit.set_active_tab(Tab::Bottoms);
        assert_eq!(outfit.active_tab(), Tab::Bottoms);
        assert_eq!(outfit.selected(Category::Tops), Some("Tee"));
    }

    #[test]
    fn test_save_tab_toggles_perfume() {
        let mut outfit = outfit();
        outfit.set_active_tab(Tab::Save);
        outfit.toggle_option("Smoky").unwrap();
        assert_eq!(outfit.selected(Category::Perfume), Some("Smoky"));
        outfit.toggle_option("Fresh").unwrap();
        assert_eq!(outfit.selected(Category::Perfume), Some("Fresh"));
        outfit.toggle_option("Fresh").unwrap();
        assert_eq!(outfit.selected(Category::Perfume), None);
    }

    #[test]
    fn test_exclusive_group_swaps_member() {
        let mut outfit = outfit();
        outfit.set_active_tab(Tab::Accessories);
        outfit.toggle_option("Glasses Square").unwrap();
        outfit.toggle_option("Glasses Round").unwrap();
        assert_eq!(worn(&outfit), ["Glasses Round"]);
        assert_eq!(outfit.group_member(0), Some(1));
    }

    #[test]
    fn test_exclusive_group_reselect_removes_member() {
        let mut outfit = outfit();
        outfit.set_active_tab(Tab::Accessories);
        outfit.toggle_option("Watch Nerd").unwrap();
        outfit.toggle_option("Watch Nerd").unwrap();
        assert!(worn(&outfit).is_empty());
        assert_eq!(outfit.group_member(1), None);
    }

    #[test]
    fn test_groups_do_not_interfere() {
        let mut outfit = outfit();
        outfit.set_active_tab(Tab::Accessories);
        outfit.toggle_option("Rings").unwrap();
        outfit.toggle_option("Glasses Reading").unwrap();
        outfit.toggle_option("Watch Shiny").unwrap();
        outfit.toggle_option("Watch Classy").unwrap();
        assert_eq!(worn(&outfit), ["Rings", "Glasses Reading", "Watch Classy"]);
    }

    #[test]
    fn test_misc_accessory_toggle_is_self_inverse() {
        let mut outfit = outfit();
        outfit.set_active_tab(Tab::Accessories);
        outfit.toggle_option("Beard").unwrap();
        outfit.toggle_option("Cap").unwrap();
        assert!(outfit.is_selected(Category::Accessories, "Cap"));
        outfit.toggle_option("Cap").unwrap();
        assert!(!outfit.is_selected(Category::Accessories, "Cap"));
        assert_eq!(worn(&outfit), ["Beard"]);
    }

    #[test]
    fn test_unknown_option_leaves_state_untouched() {
        let mut outfit = outfit();
        outfit.toggle_option("Hoodie").unwrap();
        let err = outfit.toggle_option("Jeans").unwrap_err();
        assert_eq!(
            err,
            SelectionError::UnknownOption {
                category: Category::Tops,
                option: "Jeans".to_string(),
            }
        );
        assert_eq!(outfit.selected(Category::Tops), Some("Hoodie"));
    }

    #[test]
    fn test_clear_keeps_tab() {
        let mut outfit = outfit();
        outfit.toggle_option("Hoodie").unwrap();
        outfit.toggle(Category::Accessories, "Cap").unwrap();
        outfit.set_active_tab(Tab::Save);
        outfit.clear();
        assert!(outfit.is_empty());
        assert_eq!(outfit.active_tab(), Tab::Save);
    }

    proptest::proptest! {
        /// Any toggle sequence keeps one option per slot and one member per group.
        #[test]
        fn toggle_sequences_keep_invariants(
            steps in proptest::collection::vec((0usize..5, 0usize..12), 0..64)
        ) {
            let mut outfit = outfit();
            for (tab, option) in steps {
                let tab = Tab::ALL[tab];
                outfit.set_active_tab(tab);
                let name = outfit.catalog().option(tab.category(), option).map(str::to_string);
                match name {
                    Some(name) => outfit.toggle_option(&name).unwrap(),
                    None => continue,
                }

                for category in Category::ALL.into_iter().filter(|c| c.is_single_select()) {
                    if let Some(index) = outfit.selected_index(category) {
                        assert!(index < outfit.catalog().options(category).len());
                    }
                }

                let mut seen = std::collections::HashSet::new();
                for &worn in &outfit.accessories {
                    assert!(seen.insert(worn), "accessory {worn} worn twice");
                }

                for (g, group) in outfit.catalog().groups().iter().enumerate() {
                    let members = outfit
                        .accessories
                        .iter()
                        .filter(|&&worn| outfit.catalog().group_of(worn) == Some(g))
                        .count();
                    assert!(members <= 1, "group {} has {members} members", group.name());
                }
            }
        }

        /// Toggling an accessory outside every group twice restores the outfit.
        #[test]
        fn misc_toggle_is_self_inverse(
            before in proptest::collection::vec(0usize..11, 0..8),
            misc in 0usize..4
        ) {
            let mut outfit = outfit();
            for accessory in before {
                let name = outfit.catalog().options(Category::Accessories)[accessory].clone();
                outfit.toggle(Category::Accessories, &name).unwrap();
            }
            let snapshot: Vec<String> = outfit.accessories().map(str::to_string).collect();
            let was_worn = outfit.wears(misc);

            let name = outfit.catalog().options(Category::Accessories)[misc].clone();
            outfit.toggle(Category::Accessories, &name).unwrap();
            assert_ne!(outfit.wears(misc), was_worn);
            outfit.toggle(Category::Accessories, &name).unwrap();

            assert_eq!(outfit.wears(misc), was_worn);
            let mut after: Vec<String> = outfit.accessories().map(str::to_string).collect();
            let mut snapshot = snapshot;
            after.sort();
            snapshot.sort();
            assert_eq!(after, snapshot);
        }
    }

    #[test]
    fn test_tab_navigation_wraps() {
        assert_eq!(Tab::Tops.previous(), Tab::Save);
        assert_eq!(Tab::Save.next(), Tab::Tops);
        assert_eq!(Tab::Shoes.next(), Tab::Accessories);
        assert_eq!("accessories".parse::<Tab>().unwrap(), Tab::Accessories);
        assert_eq!(
            "hats".parse::<Tab>().unwrap_err(),
            SelectionError::UnknownTab("hats".to_string())
        );
    }
}
