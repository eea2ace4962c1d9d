use std::path::Path;

use anyhow::Result;

use snapdeck_core::Deck;

pub fn run(deck_path: &Path) -> Result<()> {
    let deck = Deck::load(deck_path)?;

    if !deck.title.is_empty() {
        println!("{}", deck.title);
        println!();
    }
    for (index, section) in deck.sections.iter().enumerate() {
        println!(
            "{}  {:<20} {}",
            deck.ordinal(index),
            section.id,
            section.label
        );
    }

    Ok(())
}
