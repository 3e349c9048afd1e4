// tests/menu_pick.rs
//
// Exact-title selection with name preference order.
//
use ll_scrape::specs::menu::{MenuEntry, pick_named};

fn entry(id: u32, title: &str) -> MenuEntry {
    MenuEntry {
        id,
        title: title.into(),
        ..Default::default()
    }
}

#[test]
fn first_name_wins_over_menu_order() {
    // "Progress Checks" comes first in the menu, but "Flashcards" is the
    // preferred name and all entries are tried against it first.
    let entries = vec![entry(1, "Progress Checks"), entry(2, "Flashcards")];
    let picked = pick_named(&entries, &["Flashcards", "Progress Checks"]).unwrap();
    assert_eq!(picked.id, 2);
}

#[test]
fn falls_back_to_the_second_name() {
    let entries = vec![entry(1, "Quizzes"), entry(2, "Progress Checks")];
    let picked = pick_named(&entries, &["Flashcards", "Progress Checks"]).unwrap();
    assert_eq!(picked.id, 2);
}

#[test]
fn matching_is_exact_and_case_sensitive() {
    let entries = vec![entry(1, "flashcards"), entry(2, "Flashcards ")];
    assert!(pick_named(&entries, &["Flashcards"]).is_none());
}

#[test]
fn first_matching_entry_wins_within_a_name() {
    let entries = vec![entry(1, "Flashcards"), entry(2, "Flashcards")];
    let picked = pick_named(&entries, &["Flashcards"]).unwrap();
    assert_eq!(picked.id, 1);
}
