use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fs::read_to_string;
use tracing::debug;

/// The number of faces of a cube.
pub const CUBE_SIDES: usize = 6;

/// The letters on the faces of one cube.
pub type Cube = [char; CUBE_SIDES];

/// The 16 cubes of a standard 4x4 boggle game. The `q` face stands for "qu".
const CLASSIC: [&str; 16] = [
    "aaeegn", "abbjoo", "achops", "affkps", "aoottw", "cimotu", "deilrx", "delrvy", "distty",
    "eeghnw", "eeinsu", "ehrtvw", "eiosst", "elrtty", "himnqu", "hlnnrz",
];

/// The cubes used to roll a random board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubeSet {
    cubes: Vec<Cube>,
}

impl Default for CubeSet {
    fn default() -> Self {
        Self::classic()
    }
}

/// Parse one line of a cube file. Only lines with exactly 6 letters are cubes.
fn parse_cube(line: &str) -> Option<Cube> {
    let faces: Vec<char> = line
        .trim()
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();
    if faces.iter().any(|c| c.is_whitespace()) {
        return None;
    }
    Cube::try_from(faces.as_slice()).ok()
}

impl CubeSet {
    /// The standard set of 16 cubes, enough for a 4x4 board.
    pub fn classic() -> CubeSet {
        CubeSet::from_lines(CLASSIC.iter())
    }

    /// Parse cubes from lines of text, one cube per line.
    /// Lines that do not have exactly 6 letters after trimming, or that have whitespace
    /// between the letters, are ignored.
    /// ## Examples
    /// ```
    /// use boggle_solver::CubeSet;
    /// let cubes = CubeSet::from_lines("AAEEGN\nnot a cube\nabbjoo\n".lines());
    /// assert_eq!(cubes.len(), 2);
    /// assert_eq!(cubes.cubes()[0], ['a', 'a', 'e', 'e', 'g', 'n']);
    /// ```
    pub fn from_lines<I, S>(lines: I) -> CubeSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cubes = lines
            .into_iter()
            .filter_map(|line| parse_cube(line.as_ref()))
            .collect();
        CubeSet { cubes }
    }

    /// Read the cubes from `cubefile`, with one cube per line.
    /// ## Errors
    /// Fails if the file can not be read.
    pub fn from_file(cubefile: &str) -> Result<CubeSet, Error> {
        let contents = read_to_string(cubefile).map_err(|source| Error::ReadError {
            path: String::from(cubefile),
            source,
        })?;
        let cubes = CubeSet::from_lines(contents.lines());
        debug!(cubefile, cubes = cubes.len(), "loaded cubes");
        Ok(cubes)
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic() {
        let cubes = CubeSet::classic();
        assert_eq!(cubes.len(), 16);
        assert_eq!(CubeSet::default(), cubes);
        assert!(cubes.cubes().iter().flatten().all(char::is_ascii_lowercase));
    }

    #[test]
    fn test_wrong_length_lines_ignored() {
        let text = "abcdef\nabcde\nabcdefg\n\n  GHIJKL  \nab cde\nab\tcde\n";
        let cubes = CubeSet::from_lines(text.lines());
        assert_eq!(cubes.len(), 2);
        assert_eq!(cubes.cubes()[1], ['g', 'h', 'i', 'j', 'k', 'l']);
    }

    #[test]
    fn test_rolled_board_reads_back() -> Result<(), Error> {
        use crate::Board;
        use rand::{rngs::StdRng, SeedableRng};

        let cubes = CubeSet::from_lines(&[
            "ab cde", "a bcde", "aaaaaa", "bbbbbb", "cccccc", "dddddd",
        ]);
        assert_eq!(cubes.len(), 4);
        let mut rng = StdRng::seed_from_u64(3);
        let board = Board::random(2, &cubes, &mut rng)?;
        assert_eq!(Board::from_strings(&board.to_strings())?, board);
        Ok(())
    }

    #[test]
    fn test_from_file() -> Result<(), Error> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cubes.txt");
        std::fs::write(&path, "aaeegn\nabbjoo\nshort\n").unwrap();
        let cubes = CubeSet::from_file(path.to_str().unwrap())?;
        assert_eq!(cubes.len(), 2);
        assert!(CubeSet::from_file("no/such/cubes.txt").is_err());
        Ok(())
    }
}
