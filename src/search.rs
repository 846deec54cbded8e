//! Finding words on the board.
//!
//! There are two ways to find all words on a board, which must give the same result:
//! - [`dictionary_driven_search`] tries to place every word of the dictionary on the board.
//! - [`board_driven_search`] walks every path on the board and looks up the letters
//!   along the path in the dictionary.
use crate::board::{Board, Coord, Placement};
use crate::trie::{normalized, Dictionary, TrieNode};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::collections::HashSet;
use tracing::debug;

/// Words shorter than this do not count.
pub const MIN_WORD_LEN: usize = 4;

/// The score for `word`: one point for each letter beyond the third,
/// or 0 if the word is too short.
pub fn score_word(word: &str) -> u32 {
    let len = word.chars().count();
    if len >= MIN_WORD_LEN {
        (len - (MIN_WORD_LEN - 1)) as u32
    } else {
        0
    }
}

/// Find the cells that spell `word` on the board.
///
/// Start cells are tried in row-major order, and the neighbours of each cell in the order of
/// [`DIRECTIONS`](crate::board::DIRECTIONS). The first complete path is returned.
/// Returns `None` if `word` is empty or can not be placed.
/// ## Examples
/// ```
/// # use boggle_solver::{find_word_in_board, Board, Error};
/// let board = Board::from_strings(&["ab", "cd"])?;
/// assert_eq!(find_word_in_board(&board, "abd"), Some(vec![(0, 0), (0, 1), (1, 1)]));
/// assert_eq!(find_word_in_board(&board, "aba"), None);
/// # Ok::<(), Error>(())
/// ```
pub fn find_word_in_board(board: &Board, word: &str) -> Option<Placement> {
    let word: Vec<char> = normalized(word).collect();
    let first = *word.first()?;
    let mut visited = vec![false; board.size() * board.size()];
    let mut path = Placement::with_capacity(word.len());
    for coord in board.coords() {
        if board[coord] == first && locate(board, &word, coord, &mut visited, &mut path) {
            return Some(path);
        }
    }
    None
}

/// Try to extend `path` with `coord` and the rest of `word`.
/// On success `path` holds the full placement. On failure `path` and `visited` are
/// restored to their state before the call.
fn locate(
    board: &Board,
    word: &[char],
    coord: Coord,
    visited: &mut [bool],
    path: &mut Placement,
) -> bool {
    let i = board.index_of(coord);
    if visited[i] || board[coord] != word[path.len()] {
        return false;
    }
    path.push(coord);
    if path.len() == word.len() {
        return true;
    }
    visited[i] = true;
    for next in board.neighbours(coord) {
        if locate(board, word, next, visited, path) {
            return true;
        }
    }
    visited[i] = false;
    path.pop();
    false
}

/// Find all words of at least [`MIN_WORD_LEN`] letters by trying to place every word
/// of the dictionary on the board.
pub fn dictionary_driven_search(board: &Board, dictionary: &Dictionary) -> HashSet<String> {
    let on_board = |word: &String| {
        word.chars().count() >= MIN_WORD_LEN && find_word_in_board(board, word).is_some()
    };
    #[cfg(feature = "rayon")]
    let found: HashSet<String> = dictionary.iter().par_bridge().filter(on_board).collect();
    #[cfg(not(feature = "rayon"))]
    let found: HashSet<String> = dictionary.iter().filter(on_board).collect();
    debug!(words = found.len(), "dictionary driven search");
    found
}

/// Find all words of at least [`MIN_WORD_LEN`] letters by walking every path on the board.
///
/// A path is abandoned as soon as its letters are not a prefix of any dictionary word.
/// ## Examples
/// ```
/// # use boggle_solver::{board_driven_search, Board, Dictionary, Error};
/// let board = Board::from_strings(&["ab", "cd"])?;
/// let dictionary = Dictionary::from_words(&["ab", "abc", "abd", "abcd", "dcba", "abca"]);
/// let found = board_driven_search(&board, &dictionary);
/// assert_eq!(found.len(), 2);
/// assert!(found.contains("abcd") && found.contains("dcba"));
/// # Ok::<(), Error>(())
/// ```
pub fn board_driven_search(board: &Board, dictionary: &Dictionary) -> HashSet<String> {
    let found = search_paths(board, dictionary, true);
    debug!(words = found.len(), "board driven search");
    found
}

/// Same as [`board_driven_search`], but walks every simple path on the board without pruning.
/// The number of paths grows very fast with the board size: only use this on small boards.
pub fn exhaustive_board_search(board: &Board, dictionary: &Dictionary) -> HashSet<String> {
    search_paths(board, dictionary, false)
}

fn search_paths(board: &Board, dictionary: &Dictionary, prune: bool) -> HashSet<String> {
    // every start cell gets its own visited set and word buffer
    let from_cell = |index: usize| {
        let mut search = PathSearch::new(board, prune);
        search.visit(board.coord_of(index), Some(dictionary.root()), 1);
        search.found
    };
    let cells = 0..board.size() * board.size();
    #[cfg(feature = "rayon")]
    let found = cells
        .into_par_iter()
        .map(from_cell)
        .reduce(HashSet::new, |mut all, found| {
            all.extend(found);
            all
        });
    #[cfg(not(feature = "rayon"))]
    let found = cells.map(from_cell).fold(HashSet::new(), |mut all, found| {
        all.extend(found);
        all
    });
    found
}

/// Depth first walk over the simple paths starting at one cell.
struct PathSearch<'a> {
    board: &'a Board,
    prune: bool,
    visited: Vec<bool>,
    word: String,
    found: HashSet<String>,
}

impl<'a> PathSearch<'a> {
    fn new(board: &'a Board, prune: bool) -> Self {
        PathSearch {
            board,
            prune,
            visited: vec![false; board.size() * board.size()],
            word: String::new(),
            found: HashSet::new(),
        }
    }

    /// Extend the current path with `coord`, making it `len` cells long.
    /// `parent` is the trie node for the letters before `coord`, or `None` once they
    /// left the dictionary.
    fn visit(&mut self, coord: Coord, parent: Option<&'a TrieNode>, len: usize) {
        let board = self.board;
        let i = board.index_of(coord);
        if self.visited[i] {
            return;
        }
        let letter = board[coord];
        let node = parent.and_then(|parent| parent.child(letter));
        if node.is_none() && self.prune {
            return;
        }
        self.word.push(letter);
        if len >= MIN_WORD_LEN && node.map_or(false, TrieNode::is_word) {
            self.found.insert(self.word.clone());
        }
        self.visited[i] = true;
        for next in board.neighbours(coord) {
            self.visit(next, node, len + 1);
        }
        self.visited[i] = false;
        self.word.pop();
    }
}
