//! A boggle library for Rust.
//! <br>
//! This crate finds all the words on a boggle board, checks the words claimed by a player,
//! and keeps the score.
//! It can use the `rayon` crate to search the board in parallel.
//!
//! # How to use `boggle_solver`
//! Start by loading a dictionary, then roll a random board or set the letters yourself.
//! The word file must be in utf-8 and contain one word per line.
//! Cubes can be read from a file with one cube per line, each cube having 6 letters.
//! The 16 classic boggle cubes are built in.
//!
//! Only words of 4 or more letters count. A word scores one point for every letter beyond the third.
//!
//! # Basic usage
//!  ```
//! # use boggle_solver::{Board, Dictionary, Error, Game};
//! let dictionary = Dictionary::from_words(&["rust", "rusty", "trust", "stun"]);
//! let board = Board::from_strings(&["rust", "ytes", "abcd", "efgh"])?;
//! let mut game = Game::with_board(board, dictionary);
//! let words = game.board_driven_search();
//! assert_eq!(words.len(), 3);
//! assert_eq!(words, game.dictionary_driven_search());
//! assert_eq!(game.add_word("trust"), 2);
//! assert_eq!(game.add_word("stun"), 0);
//! println!("{}\nscore: {}", game.board(), game.score());
//! # Ok::<(), Error>(())
//! ```
//!
//! # Random boards
//! ```
//! # use boggle_solver::{CubeSet, Dictionary, Error, Game};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(123);
//! let game = Game::new(4, &CubeSet::classic(), Dictionary::from_words(&["tone"]), &mut rng)?;
//! assert_eq!(game.board().size(), 4);
//! # Ok::<(), Error>(())
//! ```
mod board;
mod config;
mod cubes;
mod error;
mod game;
mod search;
mod trie;

pub use crate::board::{are_adjacent, Board, Coord, Placement, DIRECTIONS};
pub use crate::config::Config;
pub use crate::cubes::{Cube, CubeSet, CUBE_SIDES};
pub use crate::error::Error;
pub use crate::game::Game;
pub use crate::search::{
    board_driven_search, dictionary_driven_search, exhaustive_board_search, find_word_in_board,
    score_word, MIN_WORD_LEN,
};
pub use crate::trie::{Dictionary, TrieNode, Words};
