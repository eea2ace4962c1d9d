use std::path::Path;

use anyhow::{anyhow, Result};

use snapdeck_core::Deck;

pub fn run(deck_path: &Path) -> Result<()> {
    match Deck::load(deck_path) {
        Ok(deck) => {
            println!("{}: ok ({} sections)", deck_path.display(), deck.len());
            Ok(())
        }
        Err(e) => Err(anyhow!("{}: {}", deck_path.display(), e)),
    }
}
