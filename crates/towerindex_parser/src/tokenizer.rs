//! Argument tokenization.
//!
//! Splits a raw command line into arguments.

/// One command argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgToken {
    /// A lower-cased bare word.
    Word(String),
    /// A quoted string, kept as typed so multi-word names stay together.
    Quoted(String),
}

impl ArgToken {
    /// Returns the token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Word(s) | Self::Quoted(s) => s,
        }
    }
}

/// Tokenizes command lines.
pub struct ArgTokenizer;

impl ArgTokenizer {
    /// Tokenizes a raw command line.
    ///
    /// - Splits on whitespace and lower-cases words
    /// - Strips `,` `;` `!` `?` outside quotes
    /// - Keeps `#`, `-`, `.`, and `'`, which appear in names and shorthand
    /// - Keeps `"quoted strings"` as one token; an unterminated quote runs to
    ///   the end of the line
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<ArgToken> {
        let mut tokens = Vec::new();
        let mut chars = input.chars();
        let mut word = String::new();

        while let Some(ch) = chars.next() {
            match ch {
                '"' => {
                    flush(&mut word, &mut tokens);
                    let quoted: String = chars.by_ref().take_while(|&c| c != '"').collect();
                    if !quoted.trim().is_empty() {
                        tokens.push(ArgToken::Quoted(quoted));
                    }
                }
                c if c.is_whitespace() => flush(&mut word, &mut tokens),
                ',' | ';' | '!' | '?' => {}
                _ => word.push(ch),
            }
        }

        flush(&mut word, &mut tokens);
        tokens
    }
}

fn flush(word: &mut String, tokens: &mut Vec<ArgToken>) {
    if !word.is_empty() {
        tokens.push(ArgToken::Word(word.to_lowercase()));
        word.clear();
    }
}
