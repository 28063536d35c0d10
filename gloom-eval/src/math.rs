use crate::{Error, Fault, Interpreter};
use gloom_core::{
    value::{from_bool, parse_int},
    Builtin, MathOp, Token,
};

fn apply(op: MathOp, left: i64, right: i64) -> Result<Token, Fault> {
    let name = Builtin::Math(op).name();
    let checked = |result: Option<i64>| match result {
        Some(n) => Ok(Token::from(n.to_string())),
        None => Err(Fault::Overflow { op: name }),
    };
    match op {
        MathOp::Add => checked(left.checked_add(right)),
        MathOp::Sub => checked(left.checked_sub(right)),
        MathOp::Mul => checked(left.checked_mul(right)),
        MathOp::Div | MathOp::Mod if right == 0 => Err(Fault::DivisionByZero { op: name }),
        MathOp::Div => checked(left.checked_div(right)),
        // lands in 0..|right|, which always fits
        MathOp::Mod => Ok(Token::from(
            i128::from(left).rem_euclid(i128::from(right)).to_string(),
        )),
        MathOp::Greater => Ok(Token::from(from_bool(left > right))),
    }
}

impl<'ctx> Interpreter<'ctx> {
    /// `left right op`. Both operands are consumed even when one is rejected.
    pub(crate) fn math_op(&mut self, op: MathOp) -> Result<(), Error> {
        let name = Builtin::Math(op).name();
        let right = self.pop(name)?;
        let left = self.pop(name)?;
        let result = match (parse_int(&left), parse_int(&right)) {
            (Some(l), Some(r)) => apply(op, l, r),
            (None, _) => Err(Fault::type_mismatch(name, &left)),
            (_, None) => Err(Fault::type_mismatch(name, &right)),
        };
        match result {
            Ok(value) => self.push(value),
            Err(fault) => self.fault(fault),
        }
        Ok(())
    }
}
