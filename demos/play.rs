use anyhow::Result;
use boggle_solver::{Config, Game};
use std::io::{self, BufRead};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Roll a board, then claim the words typed on stdin, one per line.
/// An empty line ends the game and shows the words that were missed.
///
/// Settings are read from `BOGGLE_SIZE`, `BOGGLE_WORDFILE`, `BOGGLE_CUBEFILE` and `BOGGLE_SEED`.
fn run() -> Result<()> {
    let config = Config::from_env()?;
    let t0 = Instant::now();
    let mut game = Game::from_config(&config)?;
    println!("Create game with {} took {:?}", game.dictionary(), t0.elapsed());

    let t0 = Instant::now();
    let by_board = game.board_driven_search();
    let dt_board = t0.elapsed();
    let t0 = Instant::now();
    let by_dictionary = game.dictionary_driven_search();
    let dt_dictionary = t0.elapsed();
    println!(
        "Board driven search: {} words in {:?}, dictionary driven search: {} words in {:?}",
        by_board.len(),
        dt_board,
        by_dictionary.len(),
        dt_dictionary
    );
    anyhow::ensure!(by_board == by_dictionary, "searches disagree");

    println!("\n{}\n", game.board());
    for line in io::stdin().lock().lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            break;
        }
        match game.add_word(word) {
            0 => println!("{}: no points", word),
            score => println!(
                "{}: {} points at {:?}, total {}",
                word,
                score,
                game.last_added_word().unwrap_or(&Vec::new()),
                game.score()
            ),
        }
    }
    println!("Final score: {}", game.score());
    println!("Missed: {}", game.missed_words().join(" "));
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
