// src/core/sanitize.rs

// Pure text rules. Nothing in here touches the network or mutates fetched
// records; callers get new strings back.

/// Which side of a card is the prompt. Every card is emitted once per
/// direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Side A prompts (language → English).
    Forward,
    /// Side B prompts (English → language).
    Reverse,
}

/// Stable, sortable, markup-free chapter title.
/// `"5. Family"` → `"05. Family"`; `"1.<i>2</i> Greetings"` → `"01.2 Greetings"`.
pub fn normalize_chapter_title(title: &str) -> String {
    // Zero-pad single-digit chapter numbers so lexicographic sort works.
    let padded = if title.as_bytes().get(1) == Some(&b'.') {
        let mut t = s!("0");
        t.push_str(title);
        t
    } else {
        s!(title)
    };
    // Vendor titles sometimes wrap sub-numbers in italics markup.
    padded.replace("<i>", "").replace("</i>", "")
}

/// Deck label for one emission direction. Titles shaped `"NN. rest"` get a
/// direction tag spliced in after the number: `"05. (S2E) rest"` /
/// `"05. (E2S) rest"`, where the letter is the language title's initial.
/// Any other shape is used as-is for both directions.
pub fn deck_label(title: &str, lang_initial: char, dir: Direction) -> String {
    if title.get(2..4) != Some(". ") {
        return s!(title);
    }
    let tag = match dir {
        Direction::Forward => format!("({lang_initial}2E)"),
        Direction::Reverse => format!("(E2{lang_initial})"),
    };
    // Bytes 2..4 are ASCII, so 4 is a char boundary.
    format!("{}{} {}", &title[..4], tag, &title[4..])
}

/// Strip every tab, carriage return and newline. Card sides must stay valid
/// as single-line tab-separated fields.
pub fn strip_field_breaks(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '\t' | '\r' | '\n')).collect()
}

/// Recover card pairs from a fused record: several cards concatenated into
/// one side-A text, `"\r\n"` between cards and a tab between sides.
///
/// The first fragment belongs to the previous, already-parsed card and is
/// discarded. Fragments that don't split into exactly two tab-separated
/// parts are dropped. This matches one known-bad upstream record; don't
/// generalize it.
pub fn split_fused_sides(side_a: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for fragment in side_a.split("\r\n").skip(1) {
        let halves: Vec<&str> = fragment.split('\t').collect();
        if let [a, b] = halves[..] {
            pairs.push((s!(a), s!(b)));
        }
    }
    pairs
}
