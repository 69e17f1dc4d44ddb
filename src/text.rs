//! Title tokenization with script-aware word segmentation.
//!
//! Alphabetic and numeric scripts segment on whitespace and punctuation. Han
//! ideographs and Hiragana have no reliable boundaries without a dictionary, so
//! each character is its own word unit. Katakana and Hangul runs stay whole.
//!
//! Per-character Han units make title overlap coarser than word-level
//! segmentation: `数据库设计` and `数据结构` share `数` and `据`, so they
//! score 2/7 title similarity even though no whole word matches.

use indexmap::IndexSet;

use crate::types::Token;

/// Normalized, deduplicated tokens derived from a title.
pub type TokenSet = IndexSet<Token>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CharClass {
    /// Letters and digits outside the CJK-specific ranges below.
    Alphanumeric,
    /// Han ideographs and Hiragana: one character per word unit.
    Ideograph,
    Katakana,
    Hangul,
    /// Combining marks that extend whatever segment is open.
    Extend,
    /// Whitespace, punctuation, symbols, emoji.
    Boundary,
}

/// Split a title into normalized word tokens.
///
/// Non-word segments are dropped and each token is lowercased. Empty or
/// whitespace-only input yields an empty set.
pub fn tokenize(title: &str) -> TokenSet {
    let chars: Vec<char> = title.chars().collect();
    let mut segmenter = Segmenter::default();

    for (idx, &ch) in chars.iter().enumerate() {
        match classify(ch) {
            CharClass::Extend => segmenter.extend(ch),
            CharClass::Boundary => {
                if segmenter.open_class() == Some(CharClass::Alphanumeric)
                    && is_inner_apostrophe(&chars, idx)
                {
                    segmenter.extend(ch);
                } else {
                    segmenter.flush();
                }
            }
            CharClass::Ideograph => {
                segmenter.flush();
                segmenter.push_run(CharClass::Ideograph, ch);
                segmenter.flush();
            }
            class => segmenter.push_run(class, ch),
        }
    }
    segmenter.finish()
}

#[derive(Default)]
struct Segmenter {
    tokens: TokenSet,
    current: String,
    class: Option<CharClass>,
}

impl Segmenter {
    fn open_class(&self) -> Option<CharClass> {
        self.class
    }

    fn push_run(&mut self, class: CharClass, ch: char) {
        if self.class != Some(class) {
            self.flush();
        }
        self.current.push(ch);
        self.class = Some(class);
    }

    fn extend(&mut self, ch: char) {
        if self.class.is_some() {
            self.current.push(ch);
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.tokens.insert(self.current.to_lowercase());
            self.current.clear();
        }
        self.class = None;
    }

    fn finish(mut self) -> TokenSet {
        self.flush();
        self.tokens
    }
}

fn classify(ch: char) -> CharClass {
    match ch {
        '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{3134F}'
        | '\u{3005}'
        | '\u{3007}'
        | '\u{3041}'..='\u{3096}'
        | '\u{309D}'..='\u{309F}' => CharClass::Ideograph,
        '\u{30A1}'..='\u{30FA}'
        | '\u{30FC}'..='\u{30FF}'
        | '\u{31F0}'..='\u{31FF}'
        | '\u{FF66}'..='\u{FF9F}' => CharClass::Katakana,
        '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}' | '\u{3131}'..='\u{318E}' => {
            CharClass::Hangul
        }
        '\u{0300}'..='\u{036F}'
        | '\u{1AB0}'..='\u{1AFF}'
        | '\u{1DC0}'..='\u{1DFF}'
        | '\u{20D0}'..='\u{20FF}'
        | '\u{FE20}'..='\u{FE2F}'
        | '\u{3099}'..='\u{309A}' => CharClass::Extend,
        _ if ch.is_alphanumeric() => CharClass::Alphanumeric,
        _ => CharClass::Boundary,
    }
}

/// Apostrophe between two letters, as in `don't` or `l’été`.
fn is_inner_apostrophe(chars: &[char], idx: usize) -> bool {
    matches!(chars[idx], '\'' | '\u{2019}')
        && idx > 0
        && idx + 1 < chars.len()
        && chars[idx - 1].is_alphabetic()
        && chars[idx + 1].is_alphabetic()
        && classify(chars[idx + 1]) == CharClass::Alphanumeric
}
