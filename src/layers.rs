//! Overlay layers and asset paths.
//!
//! The outfit is drawn as a stack of transparent images over the base model.
//! This module decides which images are drawn and in which order; loading
//! and compositing them is left to whoever renders the layers.

use crate::catalog::Category;
use crate::outfit::{Outfit, Tab};

/// Image of the bare model, drawn below every overlay.
pub const BASE_MODEL: &str = "/jay_model.png";

/// Single-select clothing drawn directly over the model, bottom first.
const CLOTHING_ORDER: [Category; 3] = [Category::Bottoms, Category::Shoes, Category::Tops];

/// One image in the overlay stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// `None` for the base model.
    pub category: Option<Category>,
    pub label: String,
    pub asset: String,
}

/// Builds the overlay stack, bottom to top: the model, bottoms, shoes, tops,
/// the worn accessories in the order they were put on, and perfume last.
pub fn overlay_layers(outfit: &Outfit) -> Vec<Layer> {
    let mut layers = vec![Layer {
        category: None,
        label: "model".to_string(),
        asset: BASE_MODEL.to_string(),
    }];

    for category in CLOTHING_ORDER {
        if let Some(option) = outfit.selected(category) {
            layers.push(clothing_layer(category, option));
        }
    }

    layers.extend(
        outfit
            .accessories()
            .map(|option| clothing_layer(Category::Accessories, option)),
    );

    if let Some(perfume) = outfit.selected(Category::Perfume) {
        layers.push(clothing_layer(Category::Perfume, perfume));
    }

    layers
}

fn clothing_layer(category: Category, option: &str) -> Layer {
    Layer {
        category: Some(category),
        label: option.to_string(),
        asset: overlay_path(category, option),
    }
}

/// File-name form of an option: spaces become underscores.
pub fn asset_name(option: &str) -> String {
    option.replace(' ', "_")
}

/// Overlay image of a worn option.
///
/// Only accessory names are rewritten for the file system.
pub fn overlay_path(category: Category, option: &str) -> String {
    match category {
        Category::Accessories => format!("/clothes/accessories/{}.png", asset_name(option)),
        _ => format!("/clothes/{}/{}.png", category.name(), option),
    }
}

/// Icon of a tab in the tab bar.
pub fn tab_icon_path(tab: Tab, active: bool) -> String {
    let suffix = if active { "-active" } else { "" };
    format!("/ui/icon-{}{}.png", tab.name(), suffix)
}

/// Icon of an option button in the option panel.
pub fn option_icon_path(category: Category, option: &str, selected: bool) -> String {
    let state = if selected { "on" } else { "off" };
    format!(
        "/ui/option-{}/{}-{}.png",
        category.name(),
        asset_name(option),
        state
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::Catalog;

    fn assets(layers: &[Layer]) -> Vec<&str> {
        layers.iter().map(|l| l.asset.as_str()).collect()
    }

    #[test]
    fn test_empty_outfit_shows_model_only() {
        let outfit = Outfit::new(Arc::new(Catalog::builtin()));
        assert_eq!(assets(&overlay_layers(&outfit)), [BASE_MODEL]);
    }

    #[test]
    fn test_layer_order() {
        let mut outfit = Outfit::new(Arc::new(Catalog::builtin()));
        outfit.toggle(Category::Perfume, "Figgy").unwrap();
        outfit.toggle(Category::Accessories, "Watch Nerd+").unwrap();
        outfit.toggle(Category::Tops, "Sprayjacket").unwrap();
        outfit.toggle(Category::Accessories, "Cap").unwrap();
        outfit.toggle(Category::Shoes, "Salomons").unwrap();
        outfit.toggle(Category::Bottoms, "Stubbies").unwrap();

        assert_eq!(
            assets(&overlay_layers(&outfit)),
            [
                BASE_MODEL,
                "/clothes/bottoms/Stubbies.png",
                "/clothes/shoes/Salomons.png",
                "/clothes/tops/Sprayjacket.png",
                "/clothes/accessories/Watch_Nerd+.png",
                "/clothes/accessories/Cap.png",
                "/clothes/perfume/Figgy.png",
            ]
        );
    }

    #[test]
    fn test_icon_paths() {
        assert_eq!(tab_icon_path(Tab::Save, false), "/ui/icon-save.png");
        assert_eq!(tab_icon_path(Tab::Tops, true), "/ui/icon-tops-active.png");
        assert_eq!(
            option_icon_path(Category::Accessories, "Glasses Round", true),
            "/ui/option-accessories/Glasses_Round-on.png"
        );
        assert_eq!(
            option_icon_path(Category::Perfume, "Smoky", false),
            "/ui/option-perfume/Smoky-off.png"
        );
    }
}
