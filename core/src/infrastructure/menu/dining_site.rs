use std::sync::OnceLock;

use regex::Regex;

use crate::domain::{
    common::MenuConfig,
    menu::{
        entities::{MenuItem, MenuSnapshot},
        ports::{MenuPageSource, MenuProvider},
    },
};

use super::static_provider::bundled_menu;

/// Live menu retrieval from the dining site.
///
/// Extraction is tolerant and line-oriented over the rendered page text; when
/// it recognizes nothing, or the fetch fails, the provider falls back to the
/// bundled snapshot so callers always receive usable menu data. Failures are
/// absorbed here and never surface to the request path.
#[derive(Debug, Clone)]
pub struct DiningSiteMenuProvider<S> {
    source: S,
    config: MenuConfig,
}

impl<S> DiningSiteMenuProvider<S> {
    pub fn new(source: S, config: MenuConfig) -> Self {
        Self { source, config }
    }
}

impl<S> MenuProvider for DiningSiteMenuProvider<S>
where
    S: MenuPageSource,
{
    async fn get_menu(&self) -> MenuSnapshot {
        match self.source.fetch_rendered(&self.config.url).await {
            Ok(page) => {
                let snapshot = extract_menu(&rendered_text(&page));
                if snapshot.is_empty() {
                    tracing::warn!(
                        url = %self.config.url,
                        "no menu items recognized on the dining page, serving bundled snapshot"
                    );
                    bundled_menu()
                } else {
                    tracing::info!(
                        locations = snapshot.location_count(),
                        items = snapshot.item_count(),
                        "extracted live menu snapshot"
                    );
                    snapshot
                }
            }
            Err(err) => {
                tracing::warn!(
                    url = %self.config.url,
                    error = %err,
                    "menu retrieval failed, serving bundled snapshot"
                );
                bundled_menu()
            }
        }
    }
}

/// Headings longer than this are treated as prose, not location/section
/// names.
const MAX_HEADING_LEN: usize = 60;

fn meal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(breakfast|brunch|lunch|dinner)$").expect("meal heading pattern")
    })
}

// Item lines look like: Name (140 Cal, 12g Protein) [vegetarian]
fn item_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^(?P<name>.+?)\s*\(\s*(?P<calories>\d+)\s*cal(?:ories)?\s*,\s*(?P<protein>\d+(?:\.\d+)?\s*g)\s*protein\s*\)\s*(?:\[(?P<details>[^\]]+)\])?$",
        )
        .expect("item line pattern")
    })
}

fn markup_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<script\b.*?</script>|<style\b.*?</style>|<[^>]+>")
            .expect("markup pattern")
    })
}

/// Strips markup and squashes the page down to trimmed, non-empty lines.
fn rendered_text(page: &str) -> String {
    let text = markup_re().replace_all(page, "\n");
    let text = text
        .replace("&amp;", "&")
        .replace("&nbsp;", " ")
        .replace("&#8217;", "'");
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Walks the rendered outline. A short free-standing line right before a meal
/// heading names the location; one right before the first item of a block
/// names the section. Anything unrecognized is skipped.
fn extract_menu(text: &str) -> MenuSnapshot {
    let mut snapshot = MenuSnapshot::new();
    let mut location: Option<String> = None;
    let mut meal: Option<String> = None;
    let mut section = String::from("Menu");
    let mut pending: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if meal_re().is_match(line) {
            if let Some(heading) = pending.take() {
                location = Some(heading);
            }
            meal = Some(titlecase(line));
            section = String::from("Menu");
            continue;
        }

        if let Some(caps) = item_re().captures(line) {
            let (Some(location), Some(meal)) = (location.as_deref(), meal.as_deref()) else {
                continue;
            };
            if let Some(heading) = pending.take() {
                section = heading;
            }
            let item = MenuItem::new(
                caps["name"].trim(),
                caps.name("details").map(|m| m.as_str().trim()).unwrap_or(""),
                caps["calories"].trim(),
                &caps["protein"].replace(' ', ""),
            );
            snapshot.push_item(location, meal, &section, item);
            continue;
        }

        if line.len() <= MAX_HEADING_LEN {
            pending = Some(line.to_string());
        }
    }

    snapshot
}

fn titlecase(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
