use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, info};

use crate::games::wheel::phrases::PhraseBook;
use crate::games::wheel::puzzle::{is_vowel, Puzzle, RevealState, VOWELS};
use crate::games::wheel::random::RandomSource;
use crate::games::wheel::wheel::{WheelState, SPIN_SPEED_MAX, SPIN_SPEED_MIN};

pub const VOWEL_COST: u32 = 250;
pub const SOLVE_BONUS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingSpin,
    /// The wheel has landed; one consonant may be called.
    AwaitingGuess,
}

/// Why a player action was refused. Nothing but the status message changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotALetter(char),
    AlreadyGuessed(char),
    VowelNotPurchased(char),
    InsufficientFunds,
    NoVowelsLeft,
    SpinFirst,
    WheelSpinning,
    GuessPending,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotALetter(c) => write!(f, "'{}' is not a letter", c),
            Rejection::AlreadyGuessed(_) => write!(f, "Already guessed!"),
            Rejection::VowelNotPurchased(_) => write!(f, "Buy vowels with TAB!"),
            Rejection::InsufficientFunds => write!(f, "Need ${}!", VOWEL_COST),
            Rejection::NoVowelsLeft => write!(f, "No vowels left!"),
            Rejection::SpinFirst => write!(f, "Spin the wheel first!"),
            Rejection::WheelSpinning => write!(f, "The wheel is still spinning!"),
            Rejection::GuessPending => write!(f, "Call a consonant first!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit { letter: char, count: usize, earned: u32, solved: bool },
    Miss { letter: char },
}

impl GuessOutcome {
    pub fn solved(&self) -> bool {
        matches!(self, GuessOutcome::Hit { solved: true, .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AvailableActions {
    pub spin: bool,
    pub buy_vowel: bool,
    pub guess_consonant: bool,
    pub solve: bool,
}

/// Authoritative state of one player's game: the puzzle in play, the wheel and the bank.
pub struct RoundEngine {
    phrases: PhraseBook,
    rng: Box<dyn RandomSource>,
    puzzle: Puzzle,
    reveal: RevealState,
    guessed: BTreeSet<char>,
    wheel: WheelState,
    phase: TurnPhase,
    score: u32,
    message: String,
    pending_vowel_purchase: bool,
    solved: bool,
}

impl RoundEngine {
    pub fn new(phrases: PhraseBook, rng: Box<dyn RandomSource>) -> Self {
        let mut engine = Self {
            phrases,
            rng,
            puzzle: Puzzle::new("", ""),
            reveal: RevealState::default(),
            guessed: BTreeSet::new(),
            wheel: WheelState::default(),
            phase: TurnPhase::AwaitingSpin,
            score: 0,
            message: String::new(),
            pending_vowel_purchase: false,
            solved: false,
        };
        engine.new_puzzle();
        engine
    }

    /// Draws the next puzzle. The score carries over.
    pub fn new_puzzle(&mut self) {
        self.puzzle = self.phrases.draw(self.rng.as_mut());
        self.reveal = RevealState::new(&self.puzzle.phrase);
        self.guessed.clear();
        self.wheel.reset();
        self.phase = TurnPhase::AwaitingSpin;
        self.pending_vowel_purchase = false;
        self.solved = false;
        self.message.clear();

        info!(category = %self.puzzle.category, letters = self.reveal.hidden_count(), "new puzzle");
        debug!(phrase = %self.puzzle.phrase, "puzzle answer");
    }

    /// Starts the wheel. Ignored unless it is idle and a spin is due.
    pub fn spin(&mut self) -> Result<(), Rejection> {
        if self.wheel.spinning {
            return Err(Rejection::WheelSpinning);
        }
        if self.phase != TurnPhase::AwaitingSpin {
            return Err(Rejection::GuessPending);
        }

        let speed = self.rng.spin_speed(SPIN_SPEED_MIN, SPIN_SPEED_MAX);
        self.wheel.start(speed);
        self.message = "Spinning...".to_string();
        debug!(speed, "wheel spinning");
        Ok(())
    }

    /// One animation tick of the wheel. Returns the value when it comes to rest.
    pub fn advance_wheel(&mut self) -> Option<u32> {
        let landed = self.wheel.advance()?;
        self.phase = TurnPhase::AwaitingGuess;
        self.message = format!("Landed on ${}!", landed);
        info!(value = landed, segment = self.wheel.current_segment(), "wheel landed");
        Some(landed)
    }

    /// Opens a vowel purchase; the next `guess` is then allowed to be a vowel.
    pub fn buy_vowel(&mut self) -> Result<(), Rejection> {
        let result = if self.score < VOWEL_COST {
            Err(Rejection::InsufficientFunds)
        } else if !self.has_vowels_left() {
            Err(Rejection::NoVowelsLeft)
        } else {
            Ok(())
        };

        match result {
            Ok(()) => {
                self.pending_vowel_purchase = true;
                self.message = "Type a vowel (A, E, I, O, U)".to_string();
                debug!(score = self.score, "vowel purchase opened");
            }
            Err(rejection) => self.message = rejection.to_string(),
        }
        result
    }

    /// Guess using the engine's own purchase flag, which is spent by this call.
    pub fn guess(&mut self, letter: char) -> Result<GuessOutcome, Rejection> {
        let purchase = std::mem::take(&mut self.pending_vowel_purchase);
        self.guess_letter(letter, purchase)
    }

    pub fn guess_letter(&mut self, letter: char, vowel_purchase: bool) -> Result<GuessOutcome, Rejection> {
        let mut upper = letter.to_uppercase();
        let checked = match (upper.next(), upper.next()) {
            (Some(single), None) => self.check_guess(single, vowel_purchase).map(|()| single),
            // 'ß' and friends widen to several letters, none of which was typed
            _ => Err(Rejection::NotALetter(letter)),
        };

        let letter = match checked {
            Ok(letter) => letter,
            Err(rejection) => {
                debug!(%letter, ?rejection, "guess rejected");
                self.message = rejection.to_string();
                return Err(rejection);
            }
        };

        let vowel = is_vowel(letter);
        if vowel {
            // The purchase pays for the attempt, hit or miss.
            self.score -= VOWEL_COST;
        }
        self.guessed.insert(letter);

        let count = self.puzzle.occurrences(letter);
        if count == 0 {
            if !vowel {
                self.consume_spin();
            }
            self.message = format!("Sorry, no {}", letter);
            info!(%letter, score = self.score, "miss");
            return Ok(GuessOutcome::Miss { letter });
        }

        self.reveal.reveal(&self.puzzle.phrase, letter);

        let earned = if vowel {
            self.message = format!("Yes! Found {}", count);
            0
        } else {
            let earned = self.wheel.value * count as u32;
            self.score += earned;
            self.message = format!("Yes! +${}", earned);
            self.consume_spin();
            earned
        };

        let solved = self.reveal.is_complete() && !self.solved;
        if solved {
            self.solved = true;
            self.score += SOLVE_BONUS;
            self.message = format!("SOLVED! +${} bonus!", SOLVE_BONUS);
            info!(score = self.score, "puzzle solved");
        }

        info!(%letter, count, earned, score = self.score, "hit");
        Ok(GuessOutcome::Hit { letter, count, earned, solved })
    }

    /// Solving the whole phrase is not offered yet; only reports so when it would be allowed.
    pub fn solve(&mut self) -> Result<(), Rejection> {
        if self.wheel.spinning {
            self.message = Rejection::WheelSpinning.to_string();
            return Err(Rejection::WheelSpinning);
        }
        if self.phase != TurnPhase::AwaitingSpin {
            self.message = Rejection::GuessPending.to_string();
            return Err(Rejection::GuessPending);
        }
        self.message = "Feature coming soon!".to_string();
        Ok(())
    }

    fn check_guess(&self, letter: char, vowel_purchase: bool) -> Result<(), Rejection> {
        if !letter.is_alphabetic() {
            return Err(Rejection::NotALetter(letter));
        }
        if self.guessed.contains(&letter) {
            return Err(Rejection::AlreadyGuessed(letter));
        }
        if is_vowel(letter) {
            if !vowel_purchase {
                return Err(Rejection::VowelNotPurchased(letter));
            }
            if self.score < VOWEL_COST {
                return Err(Rejection::InsufficientFunds);
            }
        } else if self.phase != TurnPhase::AwaitingGuess {
            return Err(Rejection::SpinFirst);
        }
        Ok(())
    }

    fn consume_spin(&mut self) {
        self.wheel.value = 0;
        self.phase = TurnPhase::AwaitingSpin;
    }

    fn has_vowels_left(&self) -> bool {
        VOWELS.iter().any(|v| self.puzzle.contains(*v) && !self.guessed.contains(v))
    }

    pub fn available_actions(&self) -> AvailableActions {
        let idle_turn = self.wheel.is_idle() && self.phase == TurnPhase::AwaitingSpin;
        AvailableActions {
            spin: idle_turn,
            buy_vowel: self.score >= VOWEL_COST && self.has_vowels_left(),
            guess_consonant: self.phase == TurnPhase::AwaitingGuess,
            solve: idle_turn,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    pub fn wheel(&self) -> &WheelState {
        &self.wheel
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn vowel_purchase_pending(&self) -> bool {
        self.pending_vowel_purchase
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn guessed_consonants(&self) -> Vec<char> {
        self.guessed.iter().copied().filter(|c| !is_vowel(*c)).collect()
    }

    pub fn guessed_vowels(&self) -> Vec<char> {
        self.guessed.iter().copied().filter(|c| is_vowel(*c)).collect()
    }
}
