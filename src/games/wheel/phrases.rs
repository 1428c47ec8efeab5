use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::games::wheel::puzzle::Puzzle;
use crate::games::wheel::random::RandomSource;

pub const DEFAULT_PUZZLE_FILE: &str = "puzzles.json";

type Categories = BTreeMap<String, Vec<String>>;

/// Category name to phrases, as stored in the puzzle file. Deserializing validates like `new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Categories", into = "Categories")]
pub struct PhraseBook {
    categories: Categories,
}

impl TryFrom<Categories> for PhraseBook {
    type Error = anyhow::Error;

    fn try_from(categories: Categories) -> Result<Self> {
        Self::new(categories)
    }
}

impl From<PhraseBook> for Categories {
    fn from(book: PhraseBook) -> Self {
        book.categories
    }
}

impl Default for PhraseBook {
    fn default() -> Self {
        let defaults: [(&str, [&str; 4]); 3] = [
            (
                "Famous Phrases",
                [
                    "THE EARLY BIRD GETS THE WORM",
                    "A PENNY SAVED IS A PENNY EARNED",
                    "ACTIONS SPEAK LOUDER THAN WORDS",
                    "BETTER LATE THAN NEVER",
                ],
            ),
            ("Movies", ["THE WIZARD OF OZ", "GONE WITH THE WIND", "STAR WARS", "BACK TO THE FUTURE"]),
            ("Places", ["NEW YORK CITY", "GRAND CANYON", "EIFFEL TOWER", "GOLDEN GATE BRIDGE"]),
        ];

        let categories = defaults
            .iter()
            .map(|(name, phrases)| (name.to_string(), phrases.iter().map(|p| p.to_string()).collect()))
            .collect();
        Self { categories }
    }
}

impl PhraseBook {
    /// Builds a book from raw categories, dropping empty ones. Fails if nothing playable is left.
    pub fn new(categories: Categories) -> Result<Self> {
        let mut kept = BTreeMap::new();
        for (name, phrases) in categories {
            let phrases: Vec<String> = phrases.into_iter().filter(|p| !p.trim().is_empty()).collect();
            if phrases.is_empty() {
                warn!(category = %name, "skipping category with no phrases");
                continue;
            }
            kept.insert(name, phrases);
        }

        if kept.is_empty() {
            return Err(anyhow!("phrase book has no category with at least one phrase"));
        }
        Ok(Self { categories: kept })
    }

    /// Reads the puzzle file, or writes the built-in defaults there when it does not exist yet.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if !path.exists() {
            let book = Self::default();
            book.save(path)?;
            info!(path = %path.display(), "wrote default puzzles");
            return Ok(book);
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read puzzle file {}", path.display()))?;
        let book: Self = serde_json::from_str(&raw)
            .with_context(|| format!("no playable category map in puzzle file {}", path.display()))?;

        info!(path = %path.display(), categories = book.categories.len(), "loaded puzzles");
        Ok(book)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("failed to write puzzle file {}", path.display()))
    }

    /// Uniform category, then uniform phrase within it.
    pub fn draw(&self, rng: &mut dyn RandomSource) -> Puzzle {
        let names: Vec<&String> = self.categories.keys().collect();
        let name = names[rng.pick(names.len())];
        let phrases = &self.categories[name];
        let phrase = &phrases[rng.pick(phrases.len())];
        Puzzle::new(name.as_str(), phrase)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, usize)> {
        self.categories.iter().map(|(name, phrases)| (name.as_str(), phrases.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::wheel::random::ScriptedSource;
    use std::path::PathBuf;

    fn scratch_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("wheelterm-{}-{}.json", name, std::process::id()));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn test_missing_file_is_seeded_with_defaults() {
        let path = scratch_file("seed");

        let first = PhraseBook::load_or_init(&path).unwrap();
        assert!(path.exists());
        let second = PhraseBook::load_or_init(&path).unwrap();

        assert_eq!(first, PhraseBook::default());
        assert_eq!(first, second);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_custom_file_drops_empty_categories() {
        let path = scratch_file("custom");
        std::fs::write(&path, r#"{ "Food": ["apple pie"], "Empty": [], "Blank": ["  "] }"#).unwrap();

        let book = PhraseBook::load_or_init(&path).unwrap();
        let names: Vec<(&str, usize)> = book.categories().collect();
        assert_eq!(names, vec![("Food", 1)]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unplayable_file_is_an_error() {
        let path = scratch_file("empty");
        std::fs::write(&path, "{}").unwrap();
        assert!(PhraseBook::load_or_init(&path).is_err());

        std::fs::write(&path, "[1, 2]").unwrap();
        assert!(PhraseBook::load_or_init(&path).is_err());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_deserializing_goes_through_validation() {
        assert!(serde_json::from_str::<PhraseBook>("{}").is_err());
        assert!(serde_json::from_str::<PhraseBook>(r#"{ "Empty": [] }"#).is_err());

        let book: PhraseBook = serde_json::from_str(r#"{ "Food": ["TACO"], "Empty": [] }"#).unwrap();
        assert_eq!(book.categories().collect::<Vec<_>>(), vec![("Food", 1)]);
        assert_eq!(serde_json::to_string(&book).unwrap(), r#"{"Food":["TACO"]}"#);
    }

    #[test]
    fn test_draw_uses_category_then_phrase() {
        let book = PhraseBook::default();
        // Sorted categories: Famous Phrases, Movies, Places
        let mut rng = ScriptedSource::new(vec![1, 2], vec![]);

        let puzzle = book.draw(&mut rng);
        assert_eq!(puzzle.category, "Movies");
        assert_eq!(puzzle.phrase, "STAR WARS");
    }
}
