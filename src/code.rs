//! Outfit code encoding.
//!
//! The outfit code is a string of digits summarizing an outfit, read by the
//! redemption side. Fields, in order and without separators:
//!
//! - tops, bottoms and shoes: 1-based catalog index, `0` when empty
//! - one flag per accessory outside every exclusive group: `1` when worn
//! - one digit per exclusive group: 1-based position of the worn member
//! - perfume: 1-based catalog index, `0` when empty

use std::fmt;

use crate::catalog::Category;
use crate::outfit::Outfit;

/// An encoded outfit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitCode(String);

impl OutfitCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[cfg(test)]
    pub(crate) fn from_digits(digits: &str) -> Self {
        Self(digits.to_string())
    }
}

impl fmt::Display for OutfitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encodes an outfit. Pure: the same outfit always yields the same code.
pub fn generate_code(outfit: &Outfit) -> OutfitCode {
    let catalog = outfit.catalog();
    let mut code = String::with_capacity(catalog.code_len());

    for category in [Category::Tops, Category::Bottoms, Category::Shoes] {
        push_index(&mut code, outfit.selected_index(category));
    }

    for &accessory in catalog.misc_accessories() {
        code.push(if outfit.wears(accessory) { '1' } else { '0' });
    }

    for group in 0..catalog.groups().len() {
        push_index(&mut code, outfit.group_member(group));
    }

    push_index(&mut code, outfit.selected_index(Category::Perfume));

    OutfitCode(code)
}

/// Appends a 0-based index as its 1-based digit, or `0` when absent.
fn push_index(code: &mut String, index: Option<usize>) {
    let position = index.map_or(0, |i| i + 1);
    code.push_str(&position.to_string());
}
