use crate::domain::menu::{
    entities::{MenuItem, MenuSnapshot},
    ports::MenuProvider,
};

/// Serves the bundled snapshot without touching the network.
#[derive(Debug, Clone, Default)]
pub struct StaticMenuProvider;

impl StaticMenuProvider {
    pub fn new() -> Self {
        Self
    }
}

impl MenuProvider for StaticMenuProvider {
    async fn get_menu(&self) -> MenuSnapshot {
        bundled_menu()
    }
}

/// Sample dataset shipped with the service, also used as the fallback when
/// live retrieval yields nothing usable.
pub fn bundled_menu() -> MenuSnapshot {
    let mut menu = MenuSnapshot::new();

    menu.push_item(
        "Cafe 3",
        "Breakfast",
        "Main",
        MenuItem::new("Scrambled Eggs", "vegetarian", "140", "12g"),
    );
    menu.push_item(
        "Cafe 3",
        "Breakfast",
        "Main",
        MenuItem::new("Turkey Sausage", "", "120", "8g"),
    );
    menu.push_item(
        "Cafe 3",
        "Breakfast",
        "Main",
        MenuItem::new("Tater Tots", "", "200", "3g"),
    );
    menu.push_item(
        "Cafe 3",
        "Breakfast",
        "Plant Forward",
        MenuItem::new("Tofu Scramble", "vegan", "150", "10g"),
    );
    menu.push_item(
        "Cafe 3",
        "Breakfast",
        "Plant Forward",
        MenuItem::new("Vegan Sausage", "vegan", "100", "6g"),
    );
    menu.push_item(
        "Cafe 3",
        "Lunch",
        "Center Plate",
        MenuItem::new("Korean BBQ Chicken Tenders", "", "280", "25g"),
    );
    menu.push_item(
        "Cafe 3",
        "Lunch",
        "Center Plate",
        MenuItem::new("Kimchi Fried Rice", "", "220", "6g"),
    );
    menu.push_item(
        "Cafe 3",
        "Lunch",
        "Center Plate",
        MenuItem::new("Korean-style Tofu", "vegan", "180", "12g"),
    );
    menu.push_item(
        "Cafe 3",
        "Lunch",
        "Pizza",
        MenuItem::new("Cheese Pizza", "vegetarian", "300", "12g"),
    );

    menu.push_item(
        "Clark Kerr Campus",
        "Breakfast",
        "Main",
        MenuItem::new("Scrambled Eggs", "vegetarian", "140", "12g"),
    );
    menu.push_item(
        "Clark Kerr Campus",
        "Breakfast",
        "Main",
        MenuItem::new("Ham and Cheddar Scramble", "", "200", "16g"),
    );
    menu.push_item(
        "Clark Kerr Campus",
        "Breakfast",
        "Main",
        MenuItem::new("Hashbrown Patties", "", "150", "2g"),
    );
    menu.push_item(
        "Clark Kerr Campus",
        "Lunch",
        "Pizza",
        MenuItem::new("Cheese Pizza", "vegetarian", "300", "12g"),
    );
    menu.push_item(
        "Clark Kerr Campus",
        "Lunch",
        "Pizza",
        MenuItem::new("Pepperoni Pizza", "", "350", "15g"),
    );
    menu.push_item(
        "Clark Kerr Campus",
        "Lunch",
        "Main",
        MenuItem::new("Szechuan Chicken", "", "320", "28g"),
    );
    menu.push_item(
        "Clark Kerr Campus",
        "Lunch",
        "Main",
        MenuItem::new("Garlic Fried Rice", "", "180", "4g"),
    );

    menu
}
