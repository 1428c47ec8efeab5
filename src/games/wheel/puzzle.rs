pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(&letter)
}

/// The phrase being played and the category it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub category: String,
    pub phrase: String,
}

impl Puzzle {
    pub fn new(category: impl Into<String>, phrase: &str) -> Self {
        Self {
            category: category.into(),
            phrase: phrase.to_uppercase(),
        }
    }

    pub fn occurrences(&self, letter: char) -> usize {
        self.phrase.chars().filter(|&c| c == letter).count()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.phrase.contains(letter)
    }
}

/// Visibility of one character position of the phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealCell {
    Hidden,
    Revealed(char),
    /// Spaces and punctuation, visible from the start.
    Literal(char),
}

impl RevealCell {
    pub fn display(&self) -> Option<char> {
        match *self {
            RevealCell::Hidden => None,
            RevealCell::Revealed(c) | RevealCell::Literal(c) => Some(c),
        }
    }
}

/// Reveal mask over a phrase; always one cell per phrase character.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevealState {
    cells: Vec<RevealCell>,
}

impl RevealState {
    pub fn new(phrase: &str) -> Self {
        let cells = phrase
            .chars()
            .map(|c| if c.is_alphabetic() { RevealCell::Hidden } else { RevealCell::Literal(c) })
            .collect();
        Self { cells }
    }

    /// Reveals every position of `letter`, returning how many cells flipped.
    pub fn reveal(&mut self, phrase: &str, letter: char) -> usize {
        let mut flipped = 0;
        for (cell, c) in self.cells.iter_mut().zip(phrase.chars()) {
            if c == letter && *cell == RevealCell::Hidden {
                *cell = RevealCell::Revealed(c);
                flipped += 1;
            }
        }
        flipped
    }

    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == RevealCell::Hidden).count()
    }

    pub fn is_complete(&self) -> bool {
        self.hidden_count() == 0
    }

    pub fn cells(&self) -> &[RevealCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Board text with `_` for hidden letters, as the hangman view shows it.
    pub fn masked(&self) -> String {
        self.cells.iter().map(|c| c.display().unwrap_or('_')).collect()
    }
}
