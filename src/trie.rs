use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::read_to_string;
use tracing::debug;

/// A node in the dictionary trie.
///
/// The children are kept sorted by character, so lookups can use a binary search
/// and a depth first walk visits the words in alphabetical order.
/// The code for `TrieNode` is based on the `TrieVec` from the [`louds`](https://github.com/ajalab/louds) crate.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrieNode {
    children: Vec<(char, Box<TrieNode>)>,
    is_word: bool,
}

impl TrieNode {
    pub fn new() -> TrieNode {
        TrieNode {
            children: Vec::new(),
            is_word: false,
        }
    }

    /// The child nodes, sorted by their label.
    pub fn children(&self) -> &[(char, Box<TrieNode>)] {
        &self.children
    }

    /// Returns true if the path from the root to this node spells a word.
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Get the child with label `c`, if present.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children
            .binary_search_by(|(c2, _)| c2.cmp(&c))
            .ok()
            .map(|pos| &*self.children[pos].1)
    }

    /// Insert `key` below this node.
    /// Returns whether `key` was a new word, and the number of nodes created.
    fn insert<K: IntoIterator<Item = char>>(&mut self, key: K) -> (bool, usize) {
        let mut t = self;
        let mut created = 0;
        for c in key {
            let pos = match t.children.binary_search_by(|(c2, _)| c2.cmp(&c)) {
                Ok(pos) => pos,
                Err(pos) => {
                    t.children.insert(pos, (c, Box::new(TrieNode::new())));
                    created += 1;
                    pos
                }
            };
            t = &mut { t }.children[pos].1;
        }
        let is_new = !t.is_word;
        t.is_word = true;
        (is_new, created)
    }
}

/// Lowercase `s` one character at a time, without allocating.
pub(crate) fn normalized(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A trie data structure that holds all the words of a game.
///
/// Words are stored in lowercase, and all lookups are case insensitive.
/// Every word is stored regardless of its length: short words are still needed
/// as prefixes when searching the board.
pub struct Dictionary {
    root: TrieNode,
    /// Path of the file used to build the dictionary.
    /// Empty if the dictionary is not built from a file.
    wordfile: String,
    word_count: usize,
    node_count: usize,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words, {} nodes from '{}'>",
            self.word_count, self.node_count, self.wordfile
        )
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// Create an empty dictionary. It only holds the empty prefix.
    pub fn new() -> Dictionary {
        Dictionary {
            root: TrieNode::new(),
            wordfile: String::new(),
            word_count: 0,
            node_count: 1,
        }
    }

    /// Read the dictionary from a file. The file must be encoded in utf-8 and
    /// have one word per line.
    /// ## Errors
    /// Fails if the file can not be read.
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut dictionary = Dictionary::new();
        dictionary.load(contents.lines());
        dictionary.wordfile = String::from(wordfile);
        debug!(
            wordfile,
            words = dictionary.word_count,
            nodes = dictionary.node_count,
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    /// Build a dictionary from a list of words.
    /// ## Examples
    /// ```
    /// use boggle_solver::Dictionary;
    /// let dictionary = Dictionary::from_words(&["Rust", "rusty", "crab"]);
    /// assert!(dictionary.contains("rust"));
    /// assert!(dictionary.is_prefix("cr"));
    /// assert_eq!(dictionary.word_count(), 3);
    /// ```
    pub fn from_words(words: &[&str]) -> Dictionary {
        let mut dictionary = Dictionary::new();
        dictionary.load(words);
        dictionary
    }

    /// Insert every word in `words`, lowercased, creating nodes as needed.
    /// Surrounding whitespace is removed, and blank entries are skipped.
    pub fn load<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.insert(word);
            }
        }
    }

    /// Insert a single word. Returns true if the word was not yet present.
    pub fn insert(&mut self, word: &str) -> bool {
        let (is_new, created) = self.root.insert(normalized(word));
        self.node_count += created;
        if is_new {
            self.word_count += 1;
        }
        is_new
    }

    /// Follow `prefix` from the root, one character at a time.
    /// Returns `None` as soon as a character is missing.
    pub fn traverse(&self, prefix: &str) -> Option<&TrieNode> {
        let mut t = &self.root;
        for c in normalized(prefix) {
            t = t.child(c)?;
        }
        Some(t)
    }

    /// Returns true if some word in the dictionary starts with `prefix`.
    /// The empty string is a prefix of every dictionary.
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.traverse(prefix).is_some()
    }

    /// Returns true if `word` is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.traverse(word).map_or(false, TrieNode::is_word)
    }

    /// Iterate over all words, in alphabetical order.
    pub fn iter(&self) -> Words<'_> {
        Words::new(&self.root)
    }

    /// The root of the trie, representing the empty prefix.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// The number of distinct words in the dictionary.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of nodes in the trie, including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns true if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Path of the word file, or an empty string.
    pub fn wordfile(&self) -> &str {
        &self.wordfile
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the dictionary from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(path: &str) -> Result<Dictionary, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        let reader = BufReader::new(file);
        let dictionary: Dictionary = bincode::deserialize_from(reader)
            .map_err(|_| Error::DeserializeError(String::from(path)))?;
        debug!(path, words = dictionary.word_count, "deserialized dictionary");
        Ok(dictionary)
    }

    #[cfg(feature = "bincode")]
    /// Serialize the dictionary to a bincoded file.
    /// ## Errors
    /// If the file can not be created or written.
    pub fn serialize_into(&self, path: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::SerializeError(String::from(path)))
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy depth first iterator over the words below a trie node.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    stack: Vec<(&'a TrieNode, String)>,
}

impl<'a> Words<'a> {
    fn new(root: &'a TrieNode) -> Self {
        Words {
            stack: vec![(root, String::new())],
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, prefix)) = self.stack.pop() {
            // push in reverse so the smallest label is visited first
            for (c, child) in node.children.iter().rev() {
                let mut word = prefix.clone();
                word.push(*c);
                self.stack.push((child, word));
            }
            if node.is_word {
                return Some(prefix);
            }
        }
        None
    }
}
