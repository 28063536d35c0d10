#[cfg(test)]
mod test;

pub mod template;

pub use template::Template;

use gloom_core::{value::render_list, Arena, Token};
use log::debug;
use std::str::SplitWhitespace;

/**
Resolves the structural tokens of a whitespace-separated token stream.

`(` ... `)` comments are dropped (they nest). `[` ... `]` blocks are parsed
recursively and rendered back into a single `[ a b ]` token. When the parser
holds an arena, every rendered block is replaced by a freshly minted reference
instead; inner blocks are minted before the blocks that contain them.
*/
pub struct Parser<'input, 'arena> {
    tokens: SplitWhitespace<'input>,
    arena: Option<&'arena mut Arena>,
}

impl<'input, 'arena> Parser<'input, 'arena> {
    /// A parser that keeps list blocks as inline literals.
    pub fn new(input: &'input str) -> Self {
        Parser {
            tokens: input.split_whitespace(),
            arena: None,
        }
    }

    /// A parser that promotes every list block to a reference in `arena`.
    pub fn minting(input: &'input str, arena: &'arena mut Arena) -> Self {
        Parser {
            tokens: input.split_whitespace(),
            arena: Some(arena),
        }
    }

    /**
    Parse up to the end of the stream, or up to (and consuming) the first
    unmatched `]`.
    */
    pub fn parse(&mut self) -> Vec<Token> {
        let mut processed = Vec::new();
        while let Some(token) = self.tokens.next() {
            match token {
                "(" => self.comment(),
                "[" => {
                    let list = self.list();
                    processed.push(list);
                }
                "]" => return processed,
                _ => processed.push(Token::from(token)),
            }
        }
        processed
    }

    fn list(&mut self) -> Token {
        let items = self.parse();
        let list = render_list(items.iter());
        match &mut self.arena {
            None => Token::from(list),
            Some(arena) => {
                let handle = arena.mint(Token::from(list));
                debug!("minted {}", handle);
                handle.to_token()
            }
        }
    }

    fn comment(&mut self) {
        while let Some(token) = self.tokens.next() {
            match token {
                ")" => return,
                "(" => self.comment(),
                _ => {}
            }
        }
    }
}

/// Parse without minting references.
pub fn parse(input: &str) -> Vec<Token> {
    Parser::new(input).parse()
}

/// Parse, minting a reference for every list literal.
pub fn parse_minting(input: &str, arena: &mut Arena) -> Vec<Token> {
    Parser::minting(input, arena).parse()
}
