use crate::{Error, Fault, Interpreter};
use gloom_core::{
    value::{list_items, parse_int, render_list},
    Builtin, Handle, ListOp, Token,
};

/// Where a mutated list goes back to.
#[derive(Debug, Clone, Copy)]
enum Target {
    Reference(Handle),
    Inline,
}

fn index(
    op: &'static str,
    token: &Token,
    size: usize,
    one_past_end: bool,
) -> Result<usize, Fault> {
    let index = parse_int(token).ok_or_else(|| Fault::type_mismatch(op, token))?;
    match usize::try_from(index) {
        Ok(i) if i < size || (one_past_end && i == size) => Ok(i),
        _ => Err(Fault::OutOfBounds { op, index, size }),
    }
}

impl<'ctx> Interpreter<'ctx> {
    pub(crate) fn list_op(&mut self, op: ListOp) -> Result<(), Error> {
        let name = Builtin::List(op).name();
        let outcome = match op {
            ListOp::Size => {
                let list = self.pop(name)?;
                self.resolve(name, &list).map(|(_, items)| {
                    self.push(Token::from(items.len().to_string()));
                })
            }
            ListOp::Copy => {
                let list = self.pop(name)?;
                self.resolve(name, &list).map(|(_, items)| {
                    let handle = self.mint(Token::from(render_list(items)));
                    self.push(handle.to_token());
                })
            }
            ListOp::Get => {
                let list = self.pop(name)?;
                let at = self.pop(name)?;
                self.get(name, &at, &list)
            }
            ListOp::Set => {
                let list = self.pop(name)?;
                let at = self.pop(name)?;
                let value = self.pop(name)?;
                self.set(name, value, &at, &list)
            }
            ListOp::Remove => {
                let list = self.pop(name)?;
                let at = self.pop(name)?;
                self.remove(name, &at, &list)
            }
            ListOp::Insert => {
                let list = self.pop(name)?;
                let at = self.pop(name)?;
                let value = self.pop(name)?;
                self.insert(name, value, &at, &list)
            }
            ListOp::Append => {
                let second = self.pop(name)?;
                let first = self.pop(name)?;
                self.append(name, &first, &second)
            }
        };
        if let Err(fault) = outcome {
            self.fault(fault);
        }
        Ok(())
    }

    /// Dereference a list operand and split it into its elements.
    fn resolve(&self, op: &'static str, list: &Token) -> Result<(Target, Vec<String>), Fault> {
        match Handle::parse(list) {
            Some(handle) => match self.arena().get(handle) {
                Some(body) => Ok((Target::Reference(handle), list_items(body))),
                None => Err(Fault::Dangling {
                    op,
                    handle: list.clone(),
                }),
            },
            None if list.starts_with('[') => Ok((Target::Inline, list_items(list))),
            None => Err(Fault::type_mismatch(op, list)),
        }
    }

    /// Write a mutated list back. A reference is updated in place and the
    /// handle returned; an inline list becomes a new inline value.
    fn store(&mut self, target: Target, items: &[String]) -> Token {
        let body = Token::from(render_list(items));
        match target {
            Target::Reference(handle) => {
                self.arena.set(handle, body);
                handle.to_token()
            }
            Target::Inline => body,
        }
    }

    fn get(&mut self, op: &'static str, at: &Token, list: &Token) -> Result<(), Fault> {
        let (_, items) = self.resolve(op, list)?;
        let i = index(op, at, items.len(), false)?;
        self.push(Token::from(items[i].as_str()));
        Ok(())
    }

    fn set(
        &mut self,
        op: &'static str,
        value: Token,
        at: &Token,
        list: &Token,
    ) -> Result<(), Fault> {
        let (target, mut items) = self.resolve(op, list)?;
        let i = index(op, at, items.len(), false)?;
        items[i] = String::from(&*value);
        let stored = self.store(target, &items);
        self.push(stored);
        Ok(())
    }

    fn remove(&mut self, op: &'static str, at: &Token, list: &Token) -> Result<(), Fault> {
        let (target, mut items) = self.resolve(op, list)?;
        let i = index(op, at, items.len(), false)?;
        let removed = items.remove(i);
        let stored = self.store(target, &items);
        self.push(stored);
        self.push(Token::from(removed));
        Ok(())
    }

    fn insert(
        &mut self,
        op: &'static str,
        value: Token,
        at: &Token,
        list: &Token,
    ) -> Result<(), Fault> {
        let (target, mut items) = self.resolve(op, list)?;
        let i = index(op, at, items.len(), true)?;
        items.insert(i, String::from(&*value));
        let stored = self.store(target, &items);
        self.push(stored);
        Ok(())
    }

    /// A fresh reference holding `first`'s elements followed by `second`'s.
    fn append(
        &mut self,
        op: &'static str,
        first: &Token,
        second: &Token,
    ) -> Result<(), Fault> {
        let (_, mut items) = self.resolve(op, first)?;
        let (_, rest) = self.resolve(op, second)?;
        items.extend(rest);
        let handle = self.mint(Token::from(render_list(items)));
        self.push(handle.to_token());
        Ok(())
    }
}
