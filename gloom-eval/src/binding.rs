use fnv::FnvHashMap;
use gloom_core::{value::strip_list, Builtin, Token};
use gloom_parse::Template;
use std::rc::Rc;

/**
A user-level definition: the body text and its pre-split template.

The body is stored as it was bound (a list body keeps its brackets). Calling
the macro behaves like pushing the body and running `eval` on it.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macro {
    body: Token,
    template: Template,
}

impl Macro {
    pub fn new(body: Token) -> Self {
        let template = if body.starts_with('[') {
            Template::new(strip_list(&body))
        } else {
            Template::new(&body)
        };
        Macro { body, template }
    }

    pub fn body(&self) -> &Token {
        &self.body
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn arity(&self) -> usize {
        self.template.arity()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    Native(Builtin),
    Macro(Rc<Macro>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings(FnvHashMap<Token, Binding>);

impl Bindings {
    pub fn new() -> Self {
        Bindings(FnvHashMap::default())
    }

    /// Every native primitive, bound under its own name.
    pub fn natives() -> Self {
        Bindings(
            Builtin::ALL
                .iter()
                .map(|builtin| (Token::from(builtin.name()), Binding::Native(*builtin)))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: Token, binding: Binding) -> Option<Binding> {
        self.0.insert(name, binding)
    }

    pub fn define(&mut self, name: &str, body: &str) -> Option<Binding> {
        self.insert(
            Token::from(name),
            Binding::Macro(Rc::new(Macro::new(Token::from(body)))),
        )
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &Token> {
        self.0.keys()
    }
}
