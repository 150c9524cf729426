//! Services the host editor provides to the passes

use pagebuilder_components::Component;
use std::collections::HashMap;

/// Looks up display strings by translation key
pub trait LabelLookup {
    fn translate(&self, key: &str) -> String;
}

/// Unknown keys translate to themselves
impl LabelLookup for HashMap<String, String> {
    fn translate(&self, key: &str) -> String {
        self.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

/// Hands over the page content stored from an earlier session
pub trait ContentSupplier {
    /// The stored components, in page order. Called on every load, so each
    /// call hands out a fresh copy.
    fn components(&self) -> Vec<Component>;
}

impl ContentSupplier for Vec<Component> {
    fn components(&self) -> Vec<Component> {
        self.clone()
    }
}
