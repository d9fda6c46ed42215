//! Command argument parsing.

use towerindex_aliases::AliasRegistry;

use crate::entity::EntityParser;
use crate::parsed::{Parsed, ParsedError};
use crate::tokenizer::{ArgToken, ArgTokenizer};

/// Runs a parser over every argument of a command and merges the results.
pub struct CommandParser;

impl CommandParser {
    /// Parses already-canonical arguments.
    pub fn parse<S, P>(args: &[S], parser: &P) -> Parsed
    where
        S: AsRef<str>,
        P: EntityParser + ?Sized,
    {
        Parsed::merge_all(args.iter().map(|arg| Parsed::from(parser.parse(arg.as_ref()))))
    }

    /// Canonicalizes each raw argument, then parses it.
    ///
    /// An argument that does not canonicalize is recorded as
    /// [`ParsedError::CanonicalNotFound`] and never reaches the parser.
    pub fn parse_raw<S, P>(registry: &AliasRegistry, args: &[S], parser: &P) -> Parsed
    where
        S: AsRef<str>,
        P: EntityParser + ?Sized,
    {
        Parsed::merge_all(args.iter().map(|arg| {
            let arg = arg.as_ref();
            match registry.canonicalize_arg(arg) {
                Some(canonical) => Parsed::from(parser.parse(&canonical)),
                None => Parsed::from_error(ParsedError::CanonicalNotFound {
                    token: arg.to_string(),
                }),
            }
        }))
    }

    /// Tokenizes a raw command line and parses every argument.
    pub fn parse_line<P>(registry: &AliasRegistry, line: &str, parser: &P) -> Parsed
    where
        P: EntityParser + ?Sized,
    {
        let tokens = ArgTokenizer::tokenize(line);
        let args: Vec<&str> = tokens.iter().map(ArgToken::as_str).collect();
        Self::parse_raw(registry, &args, parser)
    }
}
