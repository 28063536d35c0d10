
pub mod arena;
pub mod value;

pub use arena::{Arena, Handle};
pub use value::{classify, matches, Kind};

use std::rc::Rc;

/// The language's only atom. Every value on a stack is a token.
pub type Token = Rc<str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListOp {
    Size,
    Get,
    Set,
    Remove,
    Insert,
    Append,
    Copy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Greater,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlOp {
    If,
    Loop,
    Rep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingOp {
    Def,
    Eval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackOp {
    ToRetain,
    FromRetain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeOp {
    TypeOf,
    Is(Kind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugOp {
    Size,
    Remove,
}

/// The native primitives, grouped by family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    List(ListOp),
    Math(MathOp),
    Control(ControlOp),
    Binding(BindingOp),
    Stack(StackOp),
    Type(TypeOp),
    Debug(DebugOp),
    Import,
}

impl Builtin {
    pub const ALL: &'static [Builtin] = &[
        Builtin::List(ListOp::Size),
        Builtin::List(ListOp::Get),
        Builtin::List(ListOp::Set),
        Builtin::List(ListOp::Remove),
        Builtin::List(ListOp::Insert),
        Builtin::List(ListOp::Append),
        Builtin::List(ListOp::Copy),
        Builtin::Math(MathOp::Add),
        Builtin::Math(MathOp::Sub),
        Builtin::Math(MathOp::Mul),
        Builtin::Math(MathOp::Div),
        Builtin::Math(MathOp::Mod),
        Builtin::Math(MathOp::Greater),
        Builtin::Control(ControlOp::If),
        Builtin::Control(ControlOp::Loop),
        Builtin::Control(ControlOp::Rep),
        Builtin::Binding(BindingOp::Def),
        Builtin::Binding(BindingOp::Eval),
        Builtin::Stack(StackOp::ToRetain),
        Builtin::Stack(StackOp::FromRetain),
        Builtin::Type(TypeOp::TypeOf),
        Builtin::Type(TypeOp::Is(Kind::Int)),
        Builtin::Type(TypeOp::Is(Kind::List)),
        Builtin::Type(TypeOp::Is(Kind::Bool)),
        Builtin::Type(TypeOp::Is(Kind::Reference)),
        Builtin::Type(TypeOp::Is(Kind::String)),
        Builtin::Debug(DebugOp::Size),
        Builtin::Debug(DebugOp::Remove),
        Builtin::Import,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::List(op) => match op {
                ListOp::Size => "size",
                ListOp::Get => "get",
                ListOp::Set => "set",
                ListOp::Remove => "remove",
                ListOp::Insert => "insert",
                ListOp::Append => "append",
                ListOp::Copy => "copy",
            },
            Builtin::Math(op) => match op {
                MathOp::Add => "+",
                MathOp::Sub => "-",
                MathOp::Mul => "*",
                MathOp::Div => "/",
                MathOp::Mod => "mod",
                MathOp::Greater => ">",
            },
            Builtin::Control(op) => match op {
                ControlOp::If => "if",
                ControlOp::Loop => "loop",
                ControlOp::Rep => "rep",
            },
            Builtin::Binding(op) => match op {
                BindingOp::Def => "def",
                BindingOp::Eval => "eval",
            },
            Builtin::Stack(op) => match op {
                StackOp::ToRetain => ">r",
                StackOp::FromRetain => "r>",
            },
            Builtin::Type(op) => match op {
                TypeOp::TypeOf => "type",
                TypeOp::Is(Kind::Int) => "int?",
                TypeOp::Is(Kind::List) => "list?",
                TypeOp::Is(Kind::Bool) => "bool?",
                TypeOp::Is(Kind::Reference) => "ref?",
                TypeOp::Is(Kind::String) => "string?",
            },
            Builtin::Debug(op) => match op {
                DebugOp::Size => "debug.size",
                DebugOp::Remove => "debug.remove",
            },
            Builtin::Import => "import",
        }
    }

    /**
    The minimum stack depth the primitive needs before it runs.

    For `r>` the depth is checked against the retain stack; for everything else
    it is checked against main.
    */
    pub fn needs(&self) -> usize {
        match self {
            Builtin::List(op) => match op {
                ListOp::Size | ListOp::Copy => 1,
                ListOp::Get | ListOp::Remove | ListOp::Append => 2,
                ListOp::Set | ListOp::Insert => 3,
            },
            Builtin::Math(_) => 2,
            Builtin::Control(op) => match op {
                ControlOp::If => 3,
                ControlOp::Loop => 1,
                ControlOp::Rep => 2,
            },
            Builtin::Binding(op) => match op {
                BindingOp::Def => 2,
                BindingOp::Eval => 1,
            },
            Builtin::Stack(_) | Builtin::Type(_) | Builtin::Debug(_) | Builtin::Import => 1,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Builtin::ALL
            .iter()
            .find(|builtin| builtin.name() == name)
            .copied()
    }
}
