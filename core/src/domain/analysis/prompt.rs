use crate::domain::menu::entities::MenuSnapshot;

const INSTRUCTION_BLOCK: &str = "Based on the campus dining menu data below and the attached picture \
of a plate, match all the items visible on the plate to the one dining location whose menu contains \
those exact items. Answer in one or two lines, starting with the matched location name, followed by \
the matched items and the total calories and total protein for the whole plate. (Ex: Cafe 3: \
scrambled eggs, 33 grams of protein. Total meal - Total calories and protein)";

/// Serializes the snapshot after a fixed instruction block.
///
/// Pure and deterministic: identical snapshots produce byte-identical
/// prompts.
pub fn compose_prompt(menu: &MenuSnapshot) -> String {
    let menu_json = serde_json::to_string_pretty(menu).unwrap_or_else(|_| String::from("{}"));
    format!("{INSTRUCTION_BLOCK}\n\nCampus dining menu data:\n{menu_json}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::entities::MenuItem;

    fn sample_snapshot() -> MenuSnapshot {
        let mut snapshot = MenuSnapshot::new();
        snapshot.push_item(
            "Cafe 3",
            "Breakfast",
            "Main",
            MenuItem::new("Scrambled Eggs", "vegetarian", "140", "12g"),
        );
        snapshot
    }

    #[test]
    fn composition_is_deterministic() {
        let snapshot = sample_snapshot();
        assert_eq!(compose_prompt(&snapshot), compose_prompt(&snapshot));
    }

    #[test]
    fn prompt_carries_the_serialized_snapshot() {
        let prompt = compose_prompt(&sample_snapshot());
        assert!(prompt.contains("\"Scrambled Eggs\""));
        assert!(prompt.contains("\"calories\": \"140\""));
        assert!(prompt.contains("\"protein\": \"12g\""));
        assert!(prompt.contains("\"vegetarian\""));
    }

    #[test]
    fn instructions_ask_for_location_items_and_totals() {
        let prompt = compose_prompt(&MenuSnapshot::new());
        assert!(prompt.contains("location"));
        assert!(prompt.contains("matched items"));
        assert!(prompt.contains("total calories"));
        assert!(prompt.contains("total protein"));
    }
}
