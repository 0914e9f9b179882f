use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::{attr_in, social, text_in};
use crate::model::Founder;

static CARD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section.founders div.founder-card").unwrap());
static TILE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section.founders div.founder-tile").unwrap());
static CARD_NAME: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3.font-bold").unwrap());
static CARD_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.founder-title").unwrap());
static CARD_BIO: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p.prose").unwrap());
static TILE_NAME: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.font-bold").unwrap());
static TILE_ROLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.founder-role").unwrap());
static IMG: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

/// Profile pages come in two shapes: full founder cards with a bio
/// paragraph, or compact tiles without one. Detect which container is
/// present once, then normalize both to the same `Founder` record.
pub fn extract(doc: &Html) -> Vec<Founder> {
    let cards: Vec<_> = doc.select(&CARD).collect();
    if !cards.is_empty() {
        return cards.into_iter().map(from_card).collect();
    }
    doc.select(&TILE).map(from_tile).collect()
}

fn from_card(card: ElementRef) -> Founder {
    Founder {
        name: text_in(card, &CARD_NAME),
        image: attr_in(card, &IMG, "src").map(str::to_string),
        position: text_in(card, &CARD_TITLE),
        description: text_in(card, &CARD_BIO),
        social_links: social::links_within(card),
    }
}

fn from_tile(tile: ElementRef) -> Founder {
    Founder {
        name: text_in(tile, &TILE_NAME),
        image: attr_in(tile, &IMG, "src").map(str::to_string),
        position: text_in(tile, &TILE_ROLE),
        description: None,
        social_links: social::links_within(tile),
    }
}
