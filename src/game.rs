use crate::board::{Board, Placement};
use crate::config::Config;
use crate::cubes::CubeSet;
use crate::search::{
    board_driven_search, dictionary_driven_search, find_word_in_board, score_word, MIN_WORD_LEN,
};
use crate::trie::{normalized, Dictionary};
use crate::Error;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;
use tracing::{info, trace};

/// A game of boggle: the board, the dictionary, and the words claimed by the player.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    dictionary: Dictionary,
    words: Vec<(String, Placement)>,
    last_added_word: Option<Placement>,
}

impl Game {
    /// Start a game on a random board of `size` x `size` cubes.
    /// ## Errors
    /// If `size` is less than 2, or there are not enough cubes to fill the board.
    /// See [`Board::random`].
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        cubes: &CubeSet,
        dictionary: Dictionary,
        rng: &mut R,
    ) -> Result<Game, Error> {
        let board = Board::random(size, cubes, rng)?;
        info!(size, words = dictionary.word_count(), board = %board, "new game");
        Ok(Game::with_board(board, dictionary))
    }

    /// Start a game on a given board.
    pub fn with_board(board: Board, dictionary: Dictionary) -> Game {
        Game {
            board,
            dictionary,
            words: Vec::new(),
            last_added_word: None,
        }
    }

    /// Set up a game from `config`: read the word file and the cube file,
    /// and roll the board with the configured seed.
    /// ## Errors
    /// - If the word file or cube file can not be read.
    /// - If the board can not be filled, see [`Game::new`].
    pub fn from_config(config: &Config) -> Result<Game, Error> {
        let dictionary = Dictionary::from_file(&config.wordfile)?;
        let cubes = match &config.cubefile {
            Some(cubefile) => CubeSet::from_file(cubefile)?,
            None => CubeSet::classic(),
        };
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Game::new(config.size, &cubes, dictionary, &mut rng)
    }

    /// Roll a new board with the same dictionary, and clear the claimed words.
    /// ## Errors
    /// If the board can not be filled. The current game is kept in that case.
    pub fn new_game<R: Rng + ?Sized>(
        &mut self,
        size: usize,
        cubes: &CubeSet,
        rng: &mut R,
    ) -> Result<(), Error> {
        self.board = Board::random(size, cubes, rng)?;
        self.words.clear();
        self.last_added_word = None;
        info!(size, board = %self.board, "new game");
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The board as rows of letters.
    pub fn get_board(&self) -> Vec<Vec<char>> {
        self.board.rows()
    }

    /// Replace the board. The letters are stored in lowercase.
    /// ## Errors
    /// If the board is smaller than 2x2 or not square.
    pub fn set_game<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<(), Error> {
        self.board = Board::from_strings(rows)?;
        Ok(())
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The claimed words with their placements, in the order they were claimed.
    pub fn words(&self) -> &[(String, Placement)] {
        &self.words
    }

    fn is_claimed(&self, word: &str) -> bool {
        self.words.iter().any(|(claimed, _)| claimed == word)
    }

    /// Claim `word` for the player and return its score.
    ///
    /// Returns 0 without claiming when the word is shorter than 4 letters, was already
    /// claimed, is not in the dictionary, or can not be placed on the board.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Board, Dictionary, Error, Game};
    /// let board = Board::from_strings(&["rust", "ytes", "abcd", "efgh"])?;
    /// let mut game = Game::with_board(board, Dictionary::from_words(&["rust", "rusty"]));
    /// assert_eq!(game.add_word("Rusty"), 2);
    /// assert_eq!(game.add_word("rusty"), 0);
    /// assert_eq!(game.last_added_word(), Some(&vec![(0, 0), (0, 1), (0, 2), (1, 1), (1, 0)]));
    /// assert_eq!(game.score(), 2);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn add_word(&mut self, word: &str) -> u32 {
        let word: String = normalized(word).collect();
        if word.chars().count() < MIN_WORD_LEN {
            trace!(%word, "rejected: too short");
            return 0;
        }
        if self.is_claimed(&word) {
            trace!(%word, "rejected: already claimed");
            return 0;
        }
        if !self.dictionary.contains(&word) {
            trace!(%word, "rejected: not in dictionary");
            return 0;
        }
        match find_word_in_board(&self.board, &word) {
            Some(placement) => {
                let score = score_word(&word);
                trace!(%word, score, "claimed");
                self.last_added_word = Some(placement.clone());
                self.words.push((word, placement));
                score
            }
            None => {
                trace!(%word, "rejected: not on board");
                0
            }
        }
    }

    /// The placement of the last claimed word, if any.
    pub fn last_added_word(&self) -> Option<&Placement> {
        self.last_added_word.as_ref()
    }

    /// The total score of the claimed words.
    pub fn score(&self) -> u32 {
        self.words.iter().map(|(word, _)| score_word(word)).sum()
    }

    /// Find the cells that spell `word` on the board. See [`find_word_in_board`].
    pub fn find_word_in_board(&self, word: &str) -> Option<Placement> {
        find_word_in_board(&self.board, word)
    }

    /// All dictionary words on the board. See [`dictionary_driven_search`].
    pub fn dictionary_driven_search(&self) -> HashSet<String> {
        dictionary_driven_search(&self.board, &self.dictionary)
    }

    /// All dictionary words on the board. See [`board_driven_search`].
    pub fn board_driven_search(&self) -> HashSet<String> {
        board_driven_search(&self.board, &self.dictionary)
    }

    /// The words on the board that have not been claimed, sorted.
    pub fn missed_words(&self) -> Vec<String> {
        let mut missed: Vec<String> = self
            .board_driven_search()
            .into_iter()
            .filter(|word| !self.is_claimed(word))
            .collect();
        missed.sort();
        missed
    }
}
