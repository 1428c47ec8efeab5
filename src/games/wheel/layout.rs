//! Arranges a phrase into centered board rows without breaking words.
//!
//! Packing is greedy left to right: a word costs one cell per character plus half a cell for
//! the separating space when the row already has content. A word that would push the row past
//! the limit starts the next row. A word wider than the limit gets a row of its own.

use crate::games::wheel::puzzle::RevealCell;

pub const MAX_CELLS_PER_ROW: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutCell {
    /// Character position in the phrase.
    pub index: usize,
    pub is_space: bool,
    /// `None` while the letter is still hidden.
    pub display: Option<char>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub cells: Vec<LayoutCell>,
}

/// Sizes used to center rows, in whatever unit the surface draws in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardMetrics {
    pub box_size: i32,
    pub gap: i32,
}

impl Row {
    /// Letters take `box_size + gap`, spaces half a box.
    pub fn width(&self, metrics: BoardMetrics) -> i32 {
        self.cells
            .iter()
            .map(|cell| if cell.is_space { metrics.box_size / 2 } else { metrics.box_size + metrics.gap })
            .sum()
    }

    /// Left offset that centers the row; negative when the row is wider than the space.
    pub fn center_offset(&self, metrics: BoardMetrics, available_width: i32) -> i32 {
        (available_width - self.width(metrics)).div_euclid(2)
    }

    pub fn text(&self) -> String {
        self.cells
            .iter()
            .map(|cell| if cell.is_space { ' ' } else { cell.display.unwrap_or('_') })
            .collect()
    }
}

pub fn layout(phrase: &str, max_cells_per_row: usize, reveal: &[RevealCell]) -> Vec<Row> {
    // Half-cell units keep the space cost exact.
    let limit = max_cells_per_row * 2;

    let mut rows = Vec::new();
    let mut current = Row::default();
    let mut used = 0usize;
    let mut index = 0usize;

    for (n, word) in phrase.split(' ').enumerate() {
        let separator = if n > 0 {
            index += 1;
            Some(index - 1)
        } else {
            None
        };

        let word_len = word.chars().count();
        let needed = word_len * 2 + usize::from(used > 0);

        if used > 0 && used + needed > limit {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }

        if let Some(space_index) = separator {
            if used > 0 {
                current.cells.push(LayoutCell {
                    index: space_index,
                    is_space: true,
                    display: Some(' '),
                });
                used += 1;
            }
        }

        for _ in 0..word_len {
            // A cell missing from the mask stays hidden
            let display = reveal.get(index).and_then(RevealCell::display);
            current.cells.push(LayoutCell { index, is_space: false, display });
            index += 1;
            used += 2;
        }
    }

    if !current.cells.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::wheel::puzzle::RevealState;

    fn texts(phrase: &str, max: usize) -> Vec<String> {
        let reveal: Vec<RevealCell> = phrase
            .chars()
            .map(|c| if c == ' ' { RevealCell::Literal(c) } else { RevealCell::Revealed(c) })
            .collect();
        layout(phrase, max, &reveal).iter().map(Row::text).collect()
    }

    #[test]
    fn test_greedy_packing_matches_board() {
        assert_eq!(
            texts("THE EARLY BIRD GETS THE WORM", 13),
            vec!["THE EARLY BIRD", "GETS THE WORM"]
        );
        assert_eq!(
            texts("A PENNY SAVED IS A PENNY EARNED", 13),
            vec!["A PENNY SAVED", "IS A PENNY", "EARNED"]
        );
    }

    #[test]
    fn test_half_cell_space_lets_row_fill_exactly() {
        // 4 + 0.5 + 4 + 0.5 + 4 = 13
        assert_eq!(texts("ABCD EFGH IJKL", 13), vec!["ABCD EFGH IJKL"]);
        assert_eq!(texts("ABCD EFGH IJKLM", 13), vec!["ABCD EFGH", "IJKLM"]);
    }

    #[test]
    fn test_indices_skip_the_space_at_a_break() {
        let phrase = "AB CD";
        let reveal = RevealState::new(phrase);
        let rows = layout(phrase, 2, reveal.cells());

        assert_eq!(rows.len(), 2);
        let second: Vec<usize> = rows[1].cells.iter().map(|c| c.index).collect();
        assert_eq!(second, vec![3, 4]);
        assert!(rows.iter().flat_map(|r| &r.cells).all(|c| !c.is_space));
    }

    #[test]
    fn test_letters_survive_in_order() {
        let phrase = "ACTIONS SPEAK LOUDER THAN WORDS";
        let rows = layout(phrase, 8, RevealState::new(phrase).cells());

        let indices: Vec<usize> = rows
            .iter()
            .flat_map(|r| &r.cells)
            .filter(|c| !c.is_space)
            .map(|c| c.index)
            .collect();
        let letters: String = indices.iter().map(|&i| phrase.chars().nth(i).unwrap()).collect();
        assert_eq!(letters, phrase.replace(' ', ""));

        for row in &rows {
            let text = row.text();
            assert!(!text.starts_with(' ') && !text.ends_with(' '));
        }
    }

    #[test]
    fn test_hidden_cells_have_no_display() {
        let phrase = "STAR WARS";
        let mut reveal = RevealState::new(phrase);
        reveal.reveal(phrase, 'A');

        let rows = layout(phrase, 13, reveal.cells());
        assert_eq!(rows[0].text(), "__A_ _A__");
    }

    #[test]
    fn test_short_mask_keeps_letters_hidden() {
        let phrase = "GONE WITH";
        let mut reveal = RevealState::new("GONE");
        reveal.reveal("GONE", 'G');

        let rows = layout(phrase, 13, reveal.cells());
        assert_eq!(rows[0].text(), "G___ ____");
    }

    #[test]
    fn test_empty_and_oversized() {
        assert!(layout("", 13, &[]).is_empty());
        assert_eq!(texts("SUPERCALIFRAGILISTIC", 13), vec!["SUPERCALIFRAGILISTIC"]);
        assert_eq!(texts("HI SUPERCALIFRAGILISTIC YO", 13), vec!["HI", "SUPERCALIFRAGILISTIC", "YO"]);
    }

    #[test]
    fn test_centering() {
        let metrics = BoardMetrics { box_size: 60, gap: 6 };
        let row = &layout("STAR WARS", 13, RevealState::new("STAR WARS").cells())[0];

        assert_eq!(row.width(metrics), 8 * 66 + 30);
        assert_eq!(row.center_offset(metrics, 850), (850 - 558) / 2);
        assert_eq!(row.center_offset(metrics, 100), -229);
    }
}
