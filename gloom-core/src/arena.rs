use crate::Token;
use std::{fmt, num::NonZeroUsize};

/// A 1-based handle into an [`Arena`], written `&N` in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(NonZeroUsize);

impl Handle {
    pub fn parse(token: &str) -> Option<Self> {
        let digits = token.strip_prefix('&')?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse::<NonZeroUsize>().ok().map(Handle)
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }

    fn index(&self) -> usize {
        self.0.get() - 1
    }

    pub fn to_token(self) -> Token {
        Token::from(self.to_string())
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&{}", self.0)
    }
}

/**
The table of list bodies addressed by reference handles.

Slots are appended by [`Arena::mint`] and overwritten by [`Arena::set`]; they
are never removed, so a handle stays valid for the life of the arena. Nothing
is ever reclaimed, which means the arena only grows over a long session.
*/
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Arena {
    slots: Vec<Token>,
}

impl Arena {
    pub fn new() -> Self {
        Arena { slots: Vec::new() }
    }

    pub fn mint(&mut self, body: Token) -> Handle {
        self.slots.push(body);
        // len >= 1 after a push
        Handle(NonZeroUsize::MIN.saturating_add(self.slots.len() - 1))
    }

    /// Overwrite a live slot. Returns `false` if `handle` has no slot.
    pub fn set(&mut self, handle: Handle, body: Token) -> bool {
        match self.slots.get_mut(handle.index()) {
            None => false,
            Some(slot) => {
                *slot = body;
                true
            }
        }
    }

    pub fn get(&self, handle: Handle) -> Option<&Token> {
        self.slots.get(handle.index())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Dereference `token` if it is a live reference.
    pub fn deref(&self, token: &str) -> Option<&Token> {
        Handle::parse(token).and_then(|handle| self.get(handle))
    }

    /**
    Replace every live reference in `text` by the list it names, recursively.

    A handle that is already being expanded further up is left as `&N`, so a
    list that was made to contain itself still renders.
    */
    pub fn expand(&self, text: &str) -> String {
        let mut visiting = Vec::new();
        self.expand_with(text, &mut visiting)
    }

    fn expand_with(&self, text: &str, visiting: &mut Vec<Handle>) -> String {
        let mut out = Vec::new();
        for token in text.split_whitespace() {
            match Handle::parse(token) {
                Some(handle) if !visiting.contains(&handle) => match self.get(handle) {
                    Some(body) => {
                        visiting.push(handle);
                        out.push(self.expand_with(body, visiting));
                        visiting.pop();
                    }
                    None => out.push(String::from(token)),
                },
                _ => out.push(String::from(token)),
            }
        }
        out.join(" ")
    }
}
