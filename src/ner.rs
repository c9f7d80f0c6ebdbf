//! Named-entity collaborator contract and the built-in person tagger.
//!
//! The name detector does not care how person entities are produced; it
//! consumes any [`NerTagger`] that reports `PER` entities over **character**
//! offsets (the common convention of NLP tooling). The engine converts to
//! byte offsets at this boundary and works in bytes everywhere else.
//!
//! The shipped [`LexiconTagger`] is a deterministic heuristic: a capitalised
//! token anchors a candidate when it is a known DACH given name or directly
//! preceded by a salutation/title token, and the candidate extends over
//! adjacent capitalised words. Swap in a model-backed tagger for higher
//! recall; the scanner only needs the trait.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::catalog;

const BUILTIN_FIRST_NAMES: &str = include_str!("data/first_names.txt");

/// Entity label the engine consumes; everything else is ignored.
pub const PERSON_LABEL: &str = "PER";

/// A tagged entity over character offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub label: String,
    pub start_char: usize,
    pub end_char: usize,
}

/// Person-entity tagger contract.
///
/// `text[start_char..end_char]` (in characters) must yield the entity text;
/// entities must be reported in document order.
pub trait NerTagger: Send + Sync {
    fn entities(&self, text: &str) -> Vec<Entity>;
}

/// Convert a character span to the equivalent byte span.
///
/// Returns `None` when the char offsets do not fit the text.
pub(crate) fn char_span_to_bytes(
    text: &str,
    start_char: usize,
    end_char: usize,
) -> Option<(usize, usize)> {
    if start_char >= end_char {
        return None;
    }
    let mut start_byte = None;
    let mut end_byte = None;
    for (char_idx, (byte_idx, ch)) in text.char_indices().enumerate() {
        if char_idx == start_char {
            start_byte = Some(byte_idx);
        }
        if char_idx + 1 == end_char {
            end_byte = Some(byte_idx + ch.len_utf8());
            break;
        }
    }
    Some((start_byte?, end_byte?))
}

static FIRST_NAMES: LazyLock<HashSet<String>> = LazyLock::new(|| {
    catalog::parse_lines(BUILTIN_FIRST_NAMES)
        .into_iter()
        .map(|n| n.to_lowercase())
        .collect()
});

/// Salutations and title stems that anchor a following capitalised token
/// even when it is not in the given-name lexicon ("Herr Özdemir").
static ANCHOR_TITLES: &[&str] = &["herr", "frau", "dr", "prof", "mag", "di", "ing", "doz"];

/// A word token (letters and hyphens) with character offsets.
struct Token<'t> {
    text: &'t str,
    start_char: usize,
    end_char: usize,
    /// Only whitespace separates this token from its predecessor.
    adjacent: bool,
    /// The token is immediately followed by a period ("Dr.", "Müller.").
    dotted: bool,
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut iter = text.char_indices().enumerate().peekable();
    let mut adjacent = false;

    while let Some((char_idx, (byte_idx, ch))) = iter.peek().copied() {
        if ch.is_alphabetic() {
            let start_char = char_idx;
            let start_byte = byte_idx;
            let mut end_byte = byte_idx;
            let mut chars_in_token = 0;
            while let Some((_, (bi, c))) = iter.peek().copied() {
                if c.is_alphabetic() || c == '-' {
                    end_byte = bi + c.len_utf8();
                    chars_in_token += 1;
                    iter.next();
                } else {
                    break;
                }
            }
            // A directly trailing period belongs to the token ("Dr.") but is
            // never part of the reported span.
            let dotted = matches!(iter.peek(), Some((_, (_, '.'))));
            if dotted {
                iter.next();
            }
            tokens.push(Token {
                text: &text[start_byte..end_byte],
                start_char,
                end_char: start_char + chars_in_token,
                adjacent,
                dotted,
            });
            adjacent = true;
        } else {
            if !ch.is_whitespace() {
                adjacent = false;
            }
            iter.next();
        }
    }
    tokens
}

/// True for tokens shaped like a single name word: leading uppercase,
/// lowercase continuation, hyphenated segments allowed (Müller-Lüdenscheid).
fn name_shaped(token: &str) -> bool {
    !token.is_empty()
        && token.split('-').all(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) if first.is_uppercase() => chars.all(|c| c.is_lowercase()),
                _ => false,
            }
        })
}

fn is_anchor_title(token: &str) -> bool {
    ANCHOR_TITLES.contains(&token.to_lowercase().as_str())
}

/// Deterministic lexicon-driven person tagger for German text.
pub struct LexiconTagger {
    first_names: &'static HashSet<String>,
}

impl LexiconTagger {
    pub fn new() -> Self {
        LexiconTagger {
            first_names: &FIRST_NAMES,
        }
    }

    fn is_known_first_name(&self, token: &str) -> bool {
        self.first_names.contains(&token.to_lowercase())
    }
}

impl Default for LexiconTagger {
    fn default() -> Self {
        LexiconTagger::new()
    }
}

impl NerTagger for LexiconTagger {
    fn entities(&self, text: &str) -> Vec<Entity> {
        let tokens = tokenize(text);
        let mut entities = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let token = &tokens[i];
            let title_before = i > 0 && token.adjacent && is_anchor_title(tokens[i - 1].text);
            // Titles themselves never anchor, or "Prof. Dr." would read as a
            // person called Dr.
            let anchors = name_shaped(token.text)
                && !is_anchor_title(token.text)
                && (self.is_known_first_name(token.text) || title_before);

            if !anchors {
                i += 1;
                continue;
            }

            let start_char = token.start_char;
            let mut end_char = token.end_char;
            let mut j = i + 1;
            // Extend over directly adjacent capitalised words (the surname
            // and at most two further segments). A period ends the mention.
            while j < tokens.len()
                && j - i <= 3
                && !tokens[j - 1].dotted
                && tokens[j].adjacent
                && name_shaped(tokens[j].text)
                && !is_anchor_title(tokens[j].text)
            {
                end_char = tokens[j].end_char;
                j += 1;
            }

            entities.push(Entity {
                label: PERSON_LABEL.to_string(),
                start_char,
                end_char,
            });
            i = j;
        }

        entities
    }
}
