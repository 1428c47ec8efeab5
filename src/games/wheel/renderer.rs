/// Wheel game renderer - pure drawing, no game logic
use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::games::wheel::layout::{layout, BoardMetrics, Row, MAX_CELLS_PER_ROW};
use crate::games::wheel::round::{RoundEngine, VOWEL_COST};
use crate::games::wheel::wheel::WHEEL_VALUES;

const WHEEL_COLORS: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

/// A letter box is drawn as `[X]` followed by a one column gap.
const BOARD_METRICS: BoardMetrics = BoardMetrics { box_size: 3, gap: 1 };

pub fn render(frame: &mut Frame, round: &RoundEngine, next_puzzle_in: Option<Duration>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(frame.area());

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(WHEEL_VALUES.len() as u16 + 2), // Wheel
            Constraint::Length(3),                              // Status
            Constraint::Min(0),                                 // Options
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Category
            Constraint::Min(8),    // Board
            Constraint::Length(4), // Guessed letters
            Constraint::Length(3), // Score
        ])
        .split(columns[1]);

    frame.render_widget(wheel_widget(round), left[0]);

    let status = Paragraph::new(round.message().to_string())
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(status, left[1]);

    frame.render_widget(options_widget(round, next_puzzle_in), left[2]);

    let category = Paragraph::new(round.puzzle().category.clone())
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(category, right[0]);

    render_board(frame, round, right[1]);

    frame.render_widget(guessed_widget(round), right[2]);

    let score = Paragraph::new(format!("SCORE: ${}", round.score()))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(score, right[3]);
}

fn wheel_widget(round: &RoundEngine) -> Paragraph<'static> {
    let wheel = round.wheel();
    let pointer = wheel.current_segment();

    let lines: Vec<Line> = WHEEL_VALUES
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let color = WHEEL_COLORS[i % WHEEL_COLORS.len()];
            let marker = if i == pointer { "▶ " } else { "  " };
            let mut style = Style::default().fg(color);
            if i == pointer {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            Line::from(vec![Span::raw(marker), Span::styled(format!(" ${:<4}", value), style)])
        })
        .collect();

    let title = if wheel.spinning { "Wheel (spinning)" } else { "Wheel" };
    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .alignment(Alignment::Center)
}

fn options_widget(round: &RoundEngine, next_puzzle_in: Option<Duration>) -> Paragraph<'static> {
    let option = |text: String| Line::from(Span::styled(text, Style::default().fg(Color::Green)));
    let mut lines = Vec::new();

    if let Some(left) = next_puzzle_in {
        lines.push(option(format!("Next puzzle in {}s", left.as_secs() + 1)));
    } else if round.vowel_purchase_pending() {
        lines.push(option("► Type a VOWEL (A E I O U)".to_string()));
    } else {
        let actions = round.available_actions();
        if actions.spin {
            lines.push(option("► SPACE  spin the wheel".to_string()));
        }
        if actions.buy_vowel {
            lines.push(option(format!("► TAB    buy a vowel (${})", VOWEL_COST)));
        }
        if actions.guess_consonant {
            lines.push(option("► A-Z    call a consonant".to_string()));
        }
        if actions.solve {
            lines.push(option("► ENTER  solve the puzzle".to_string()));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "ESC new puzzle · Ctrl+C quit",
        Style::default().fg(Color::Gray),
    )));

    Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Your options"))
}

fn render_board(frame: &mut Frame, round: &RoundEngine, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Puzzle");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = layout(&round.puzzle().phrase, MAX_CELLS_PER_ROW, round.reveal().cells());
    let mut lines = Vec::new();
    for row in &rows {
        lines.push(board_line(row, inner.width as i32));
        lines.push(Line::default());
    }

    let top = inner.height.saturating_sub(lines.len() as u16) / 2;
    let board_area = Rect { y: inner.y + top, height: inner.height - top, ..inner };
    frame.render_widget(Paragraph::new(lines), board_area);
}

fn board_line(row: &Row, width: i32) -> Line<'static> {
    let offset = row.center_offset(BOARD_METRICS, width).max(0) as usize;
    let mut spans = vec![Span::raw(" ".repeat(offset))];

    for cell in &row.cells {
        if cell.is_space {
            spans.push(Span::raw(" ".repeat((BOARD_METRICS.box_size / 2) as usize)));
            continue;
        }
        let span = match cell.display {
            Some(c) => Span::styled(format!("[{}]", c), Style::default().fg(Color::Black).bg(Color::Gray)),
            None => Span::styled("[ ]", Style::default().fg(Color::White)),
        };
        spans.push(span);
        spans.push(Span::raw(" ".repeat(BOARD_METRICS.gap as usize)));
    }
    Line::from(spans)
}

fn guessed_widget(round: &RoundEngine) -> Paragraph<'static> {
    let join = |letters: Vec<char>| letters.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ");

    let lines = vec![
        Line::from(vec![
            Span::raw("Consonants: "),
            Span::styled(join(round.guessed_consonants()), Style::default().fg(Color::Blue)),
        ]),
        Line::from(vec![
            Span::raw("Vowels:     "),
            Span::styled(join(round.guessed_vowels()), Style::default().fg(Color::Red)),
        ]),
    ];

    Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Guessed letters"))
}
