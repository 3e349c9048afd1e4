// tests/deck_export.rs
//
// Deck buffer assembly and file writing.
//
use std::fs;
use std::path::PathBuf;

use ll_scrape::config::consts::DECK_HEADER;
use ll_scrape::export::Deck;
use ll_scrape::scrape::Card;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ll_deck_{}", name));
    let _ = fs::remove_dir_all(&p);
    p
}

fn card(a: &str, b: &str) -> Card {
    Card { side_a: a.into(), side_b: b.into() }
}

#[test]
fn chapter_emits_two_rows_per_card_forward_block_first() {
    let cards = vec![card("uno", "one"), card("dos", "two")];
    let mut deck = Deck::new("Book", 'S');
    deck.push_chapter("01. Numbers", &cards);

    let body = deck.contents().strip_prefix(DECK_HEADER).unwrap();
    let rows: Vec<&str> = body.lines().collect();
    assert_eq!(
        rows,
        vec![
            "uno\tone\tBook\t01. (S2E) Numbers",
            "dos\ttwo\tBook\t01. (S2E) Numbers",
            "one\tuno\tBook\t01. (E2S) Numbers",
            "two\tdos\tBook\t01. (E2S) Numbers",
        ]
    );
}

#[test]
fn untagged_chapter_label_is_shared_by_both_directions() {
    let mut deck = Deck::new("Book", 'S');
    deck.push_chapter("Appendix", &[card("sí", "yes")]);

    let body = deck.contents().strip_prefix(DECK_HEADER).unwrap();
    assert_eq!(body, "sí\tyes\tBook\tAppendix\nyes\tsí\tBook\tAppendix\n");
}

#[test]
fn empty_chapters_leave_the_deck_empty() {
    let mut deck = Deck::new("Book", 'S');
    assert!(deck.is_empty());
    deck.push_chapter("01. Nothing", &[]);
    assert!(deck.is_empty());
    assert_eq!(deck.contents(), DECK_HEADER);

    deck.push_chapter("02. Something", &[card("a", "b")]);
    assert!(!deck.is_empty());
}

#[test]
fn write_creates_the_output_directory() {
    let dir = tmp_dir("mkdir");
    let path = dir.join("Book.txt");

    let mut deck = Deck::new("Book", 'S');
    deck.push_chapter("01. X", &[card("a", "b")]);
    deck.write_to(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with(DECK_HEADER));
    assert!(contents.ends_with("b\ta\tBook\t01. (E2S) X\n"));
}

#[test]
fn rewrite_overwrites_previous_contents() {
    let dir = tmp_dir("overwrite");
    let path = dir.join("Book.txt");

    let mut big = Deck::new("Book", 'S');
    big.push_chapter("01. X", &[card("a", "b"), card("c", "d")]);
    big.write_to(&path).unwrap();

    let mut small = Deck::new("Book", 'S');
    small.push_chapter("01. X", &[card("e", "f")]);
    small.write_to(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.len(), small.contents().len());
    assert!(!contents.contains("a\tb"));
}
