// tests/cards.rs
//
// Card cleanup: break stripping, the fused-record repair, empty-side drops.
//
use ll_scrape::core::sanitize::{split_fused_sides, strip_field_breaks};
use ll_scrape::scrape::{Card, clean_cards};
use ll_scrape::specs::cards::RawCard;

fn raw(side_a: &str, side_b: &str) -> RawCard {
    RawCard {
        side_a: side_a.into(),
        side_b: side_b.into(),
        ..Default::default()
    }
}

#[test]
fn field_breaks_are_stripped_from_both_sides() {
    let out = clean_cards(vec![raw("el\tgato\n", "the\rcat")]);
    assert_eq!(out, vec![Card { side_a: "elgato".into(), side_b: "thecat".into() }]);
}

#[test]
fn clean_card_sides_never_contain_separators() {
    let out = clean_cards(vec![raw("a\t\r\nb\tc", "d"), raw("x\ny", "z\tw")]);
    for card in out {
        assert!(!card.side_a.contains(['\t', '\r', '\n']));
        assert!(!card.side_b.contains(['\t', '\r', '\n']));
    }
}

#[test]
fn fused_record_splits_into_its_real_cards() {
    // First fragment belongs to the previous card and is discarded.
    let pairs = split_fused_sides("X\r\nY\tZ\r\nQ\tR");
    assert_eq!(pairs, vec![("Y".into(), "Z".into()), ("Q".into(), "R".into())]);
}

#[test]
fn fused_fragments_without_two_parts_are_dropped() {
    // One part and three parts both fail the exactly-two rule.
    assert_eq!(split_fused_sides("X\r\nA\tB\tC\r\nD"), vec![]);
}

#[test]
fn fused_record_bypasses_generic_stripping() {
    // Side B of the fused record is vendor garbage and never consulted.
    let out = clean_cards(vec![raw("junk\r\nY\tZ", "ignored")]);
    assert_eq!(out, vec![Card { side_a: "Y".into(), side_b: "Z".into() }]);
}

#[test]
fn cards_with_an_empty_side_are_dropped() {
    let out = clean_cards(vec![raw("", "hello"), raw("hola", ""), raw("\t\n", "x")]);
    assert!(out.is_empty());

    // Order of survivors is input order.
    let out = clean_cards(vec![raw("uno", "one"), raw("", "nope"), raw("dos", "two")]);
    let sides: Vec<&str> = out.iter().map(|c| c.side_a.as_str()).collect();
    assert_eq!(sides, ["uno", "dos"]);
}
