// src/config/consts.rs

// Net config
pub const API_BASE: &str = "https://mhe-language-lab.azurewebsites.net/api";
pub const ROOT_MENU_ID: u32 = 0;

// Menu titles the walk keys on. Exact matches only; the vendor renaming
// any of these breaks the scrape (known, accepted).
pub const FLASHCARDS: &str = "Flashcards";
pub const PROGRESS_CHECKS: &str = "Progress Checks";
pub const STUDY_MODE: &str = "Flashcards: Study Mode";

// Selection defaults
pub const DEFAULT_LANGUAGE: &str = "Spanish";
pub const DEFAULT_BOOK: &str = "Complete Spanish Step-by-Step";

// Export
pub const DEFAULT_OUT_DIR: &str = "output";
pub const DECK_EXT: &str = "txt";

// Anki import preamble: tab-separated, HTML allowed, deck name in column 3.
pub const DECK_HEADER: &str = "#separator:tab\n#html:true\n#deck column:3\n";
