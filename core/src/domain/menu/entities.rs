use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Point-in-time view of the dining menus: location -> meal -> section ->
/// items. Best-effort by contract: an empty snapshot is valid, and nothing is
/// persisted across requests.
///
/// Backed by `BTreeMap` so serialization is canonical; prompt composition
/// relies on that stability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuSnapshot {
    locations: BTreeMap<String, BTreeMap<String, BTreeMap<String, Vec<MenuItem>>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// Free-text dietary tag, often empty.
    #[serde(default)]
    pub details: String,
    /// String-typed nutrition facts; carries at least "calories" and
    /// "protein".
    pub nutrition: BTreeMap<String, String>,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        details: impl Into<String>,
        calories: &str,
        protein: &str,
    ) -> Self {
        let mut nutrition = BTreeMap::new();
        nutrition.insert(String::from("calories"), calories.to_string());
        nutrition.insert(String::from("protein"), protein.to_string());
        Self {
            name: name.into(),
            details: details.into(),
            nutrition,
        }
    }
}

impl MenuSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn item_count(&self) -> usize {
        self.locations
            .values()
            .flat_map(|meals| meals.values())
            .flat_map(|sections| sections.values())
            .map(Vec::len)
            .sum()
    }

    /// Appends an item, creating the location/meal/section levels as needed.
    /// Items within a section keep insertion order.
    pub fn push_item(&mut self, location: &str, meal: &str, section: &str, item: MenuItem) {
        self.locations
            .entry(location.to_string())
            .or_default()
            .entry(meal.to_string())
            .or_default()
            .entry(section.to_string())
            .or_default()
            .push(item);
    }

    pub fn items(&self, location: &str, meal: &str, section: &str) -> &[MenuItem] {
        self.locations
            .get(location)
            .and_then(|meals| meals.get(meal))
            .and_then(|sections| sections.get(section))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_item_keeps_section_order() {
        let mut snapshot = MenuSnapshot::new();
        snapshot.push_item(
            "Cafe 3",
            "Breakfast",
            "Main",
            MenuItem::new("Scrambled Eggs", "vegetarian", "140", "12g"),
        );
        snapshot.push_item(
            "Cafe 3",
            "Breakfast",
            "Main",
            MenuItem::new("Turkey Sausage", "", "120", "8g"),
        );

        let items = snapshot.items("Cafe 3", "Breakfast", "Main");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Scrambled Eggs");
        assert_eq!(items[1].name, "Turkey Sausage");
        assert_eq!(snapshot.item_count(), 2);
        assert_eq!(snapshot.location_count(), 1);
    }

    #[test]
    fn serialization_is_stable_across_insertion_order() {
        let mut first = MenuSnapshot::new();
        first.push_item("B Hall", "Lunch", "Pizza", MenuItem::new("Cheese Pizza", "", "300", "12g"));
        first.push_item("A Hall", "Lunch", "Pizza", MenuItem::new("Cheese Pizza", "", "300", "12g"));

        let mut second = MenuSnapshot::new();
        second.push_item("A Hall", "Lunch", "Pizza", MenuItem::new("Cheese Pizza", "", "300", "12g"));
        second.push_item("B Hall", "Lunch", "Pizza", MenuItem::new("Cheese Pizza", "", "300", "12g"));

        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }

    #[test]
    fn empty_snapshot_is_valid() {
        let snapshot = MenuSnapshot::new();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.item_count(), 0);
        assert_eq!(serde_json::to_string(&snapshot).unwrap(), "{}");
    }
}
