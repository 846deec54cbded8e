use crate::cubes::{CubeSet, CUBE_SIDES};
use crate::trie::normalized;
use crate::Error;
use rand::seq::SliceRandom;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Index;

/// A (row, column) pair identifying a board cell, 0-indexed.
pub type Coord = (usize, usize);

/// The cells used to spell a word, in order.
pub type Placement = Vec<Coord>;

/// Steps to the eight neighbours of a cell, as (row, column) deltas.
pub static DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Returns true if `a` and `b` are different cells that touch horizontally,
/// vertically or diagonally.
pub fn are_adjacent(a: Coord, b: Coord) -> bool {
    let row_diff = (a.0 as isize - b.0 as isize).abs();
    let col_diff = (a.1 as isize - b.1 as isize).abs();
    row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
}

fn lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// A square boggle board of N x N letters, N >= 2.
///
/// Letters are stored in lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    size: usize,
    cells: Vec<char>,
}

/// Display the board as one line of letters per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Index<Coord> for Board {
    type Output = char;

    /// ## Panics
    /// If `coord` is not on the board. Use [`Board::get`] to check.
    fn index(&self, coord: Coord) -> &Self::Output {
        assert!(
            self.contains_coord(coord),
            "{:?} is outside the {}x{} board",
            coord,
            self.size,
            self.size
        );
        &self.cells[self.index_of(coord)]
    }
}

impl Board {
    /// Create a `Board` from strings, one string per row.
    /// Each row must have one letter for each row of the board; whitespace is ignored.
    ///
    /// ## Errors
    /// If the board has less than two rows, or is not square.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Board, Error};
    /// let board = Board::from_strings(&["AB", "cd"])?;
    /// assert_eq!(board.size(), 2);
    /// assert_eq!(board[(0, 0)], 'a');
    /// assert_eq!(board.to_string(), "ab\ncd");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Board, Error> {
        let size = rows.len();
        if size < 2 {
            return Err(Error::InvalidBoardSize(size));
        }
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            let letters: Vec<char> = row
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(lowercase)
                .collect();
            if letters.len() != size {
                return Err(Error::InvalidRowLength {
                    row: String::from(row),
                    expected: size,
                    found: letters.len(),
                });
            }
            cells.extend(letters);
        }
        Ok(Board { size, cells })
    }

    /// Create a `Board` from rows of single letters.
    ///
    /// ## Errors
    /// If the board has less than two rows, or is not square.
    pub fn from_rows(rows: &[Vec<char>]) -> Result<Board, Error> {
        let rows: Vec<String> = rows.iter().map(|row| row.iter().collect()).collect();
        Board::from_strings(&rows)
    }

    /// Roll a random board.
    ///
    /// The cubes are shuffled, and the first `size * size` of them are placed in row-major
    /// order, each showing one of its faces at random.
    /// ## Errors
    /// - `InvalidBoardSize` if `size` is less than 2.
    /// - `InsufficientCubes` if `cubes` has less than `size * size` cubes.
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        cubes: &CubeSet,
        rng: &mut R,
    ) -> Result<Board, Error> {
        if size < 2 {
            return Err(Error::InvalidBoardSize(size));
        }
        let needed = size * size;
        if cubes.len() < needed {
            return Err(Error::InsufficientCubes {
                needed,
                found: cubes.len(),
            });
        }
        let mut shuffled: Vec<_> = cubes.cubes().iter().collect();
        shuffled.shuffle(rng);
        let cells = shuffled
            .into_iter()
            .take(needed)
            .map(|cube| cube[rng.gen_range(0..CUBE_SIDES)])
            .collect();
        Ok(Board { size, cells })
    }

    /// The number of rows (and columns) of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the letter at `coord`, or None if outside the board.
    pub fn get(&self, coord: Coord) -> Option<char> {
        if self.contains_coord(coord) {
            Some(self[coord])
        } else {
            None
        }
    }

    /// Returns true if `coord` lies on the board.
    pub fn contains_coord(&self, (row, col): Coord) -> bool {
        row < self.size && col < self.size
    }

    pub(crate) fn index_of(&self, (row, col): Coord) -> usize {
        row * self.size + col
    }

    pub(crate) fn coord_of(&self, index: usize) -> Coord {
        (index / self.size, index % self.size)
    }

    /// All coordinates of the board in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(move |i| self.coord_of(i))
    }

    /// The neighbours of `coord` that lie on the board, in the order of [`DIRECTIONS`].
    pub fn neighbours(&self, (row, col): Coord) -> impl Iterator<Item = Coord> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if r < 0 || c < 0 {
                return None;
            }
            let coord = (r as usize, c as usize);
            if self.contains_coord(coord) {
                Some(coord)
            } else {
                None
            }
        })
    }

    /// Get the board as rows of letters.
    pub fn rows(&self) -> Vec<Vec<char>> {
        self.cells.chunks(self.size).map(<[char]>::to_vec).collect()
    }

    /// Get the board as a vec of strings, one per row.
    pub fn to_strings(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Spell the letters along `placement`.
    /// Coordinates outside the board are skipped.
    pub fn word_at(&self, placement: &[Coord]) -> String {
        placement.iter().filter_map(|&coord| self.get(coord)).collect()
    }

    /// Check that `placement` spells `word` on the board: every cell is on the board and used once,
    /// each cell touches the previous one, and the letters match case-insensitively.
    pub fn is_valid_placement(&self, word: &str, placement: &[Coord]) -> bool {
        if placement.is_empty() {
            return false;
        }
        if !placement.iter().all(|&coord| self.contains_coord(coord)) {
            return false;
        }
        if !placement.windows(2).all(|w| are_adjacent(w[0], w[1])) {
            return false;
        }
        let unique: HashSet<_> = placement.iter().collect();
        if unique.len() != placement.len() {
            return false;
        }
        normalized(word).eq(placement.iter().map(|&coord| self[coord]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    type Result<T> = std::result::Result<T, Error>;

    #[test]
    fn test_from_strings() -> Result<()> {
        let board = Board::from_strings(&["AbC", "d e f", "ghi"])?;
        assert_eq!(board.size(), 3);
        assert_eq!(board[(1, 1)], 'e');
        assert_eq!(board.get((2, 0)), Some('g'));
        assert_eq!(board.get((3, 0)), None);
        assert_eq!(board.to_strings(), ["abc", "def", "ghi"]);
        assert_eq!(Board::from_rows(&board.rows())?, board);
        Ok(())
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(matches!(
            Board::from_strings(&["a"]),
            Err(Error::InvalidBoardSize(1))
        ));
        let no_rows: &[&str] = &[];
        assert!(matches!(
            Board::from_strings(no_rows),
            Err(Error::InvalidBoardSize(0))
        ));
        match Board::from_strings(&["ab", "cde"]) {
            Err(Error::InvalidRowLength {
                expected, found, ..
            }) => {
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_index_column_outside() {
        let board = Board::from_strings(&["ab", "cd"]).unwrap();
        let _ = board[(0, 2)];
    }

    #[test]
    fn test_adjacent_positions() {
        assert!(are_adjacent((0, 0), (0, 1)));
        assert!(are_adjacent((0, 1), (1, 1)));
        assert!(are_adjacent((1, 0), (0, 1)));
        assert!(!are_adjacent((0, 0), (0, 0)));
        assert!(!are_adjacent((0, 0), (2, 2)));
        assert!(!are_adjacent((0, 0), (0, 2)));
    }

    #[test]
    fn test_neighbours() -> Result<()> {
        let board = Board::from_strings(&["abc", "def", "ghi"])?;
        let corner: Vec<Coord> = board.neighbours((0, 0)).collect();
        assert_eq!(corner, [(1, 0), (0, 1), (1, 1)]);
        assert_eq!(board.neighbours((1, 1)).count(), 8);
        assert_eq!(board.neighbours((2, 1)).count(), 5);
        assert!(board.neighbours((2, 2)).all(|n| are_adjacent(n, (2, 2))));
        Ok(())
    }

    #[test]
    fn test_coords_row_major() -> Result<()> {
        let board = Board::from_strings(&["ab", "cd"])?;
        let coords: Vec<Coord> = board.coords().collect();
        assert_eq!(coords, [(0, 0), (0, 1), (1, 0), (1, 1)]);
        Ok(())
    }

    #[test]
    fn test_is_valid_placement() -> Result<()> {
        let board = Board::from_strings(&["ab", "cd"])?;
        assert!(board.is_valid_placement("abd", &[(0, 0), (0, 1), (1, 1)]));
        assert!(board.is_valid_placement("ABC", &[(0, 0), (0, 1), (1, 0)]));
        // wrong letters
        assert!(!board.is_valid_placement("abc", &[(0, 0), (0, 1), (1, 1)]));
        // reused cell
        assert!(!board.is_valid_placement("aba", &[(0, 0), (0, 1), (0, 0)]));
        // outside the board
        assert!(!board.is_valid_placement("ab", &[(0, 1), (0, 2)]));
        assert!(!board.is_valid_placement("", &[]));
        // placement shorter than the word
        assert!(!board.is_valid_placement("abcd", &[(0, 0), (0, 1)]));
        assert_eq!(board.word_at(&[(1, 1), (1, 0), (0, 0)]), "dca");
        Ok(())
    }

    #[test]
    fn test_random_board() -> Result<()> {
        let cubes = CubeSet::classic();
        let mut rng = StdRng::seed_from_u64(123);
        let board = Board::random(4, &cubes, &mut rng)?;
        assert_eq!(board.size(), 4);
        assert_eq!(board.rows().len(), 4);
        assert!(board.coords().all(|c| board[c].is_ascii_lowercase()));
        // seeded to get reproducible results
        let mut rng = StdRng::seed_from_u64(123);
        assert_eq!(Board::random(4, &cubes, &mut rng)?, board);
        Ok(())
    }

    #[test]
    fn test_random_board_invalid() {
        let cubes = CubeSet::classic();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            Board::random(1, &cubes, &mut rng),
            Err(Error::InvalidBoardSize(1))
        ));
        match Board::random(5, &cubes, &mut rng) {
            Err(Error::InsufficientCubes { needed, found }) => {
                assert_eq!(needed, 25);
                assert_eq!(found, 16);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
