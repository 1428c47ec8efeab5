/// Wheel-spin word game: spin for a dollar value, call letters, buy vowels.
pub mod game;
pub mod layout;
pub mod phrases;
pub mod puzzle;
pub mod random;
pub mod renderer;
pub mod round;
pub mod wheel;

pub use game::WheelGame;
pub use phrases::PhraseBook;
pub use round::{GuessOutcome, Rejection, RoundEngine, TurnPhase};
