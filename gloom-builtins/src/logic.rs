//! Booleans and comparisons. Everything here bottoms out in `>` and `if`.

pub const DEFINITIONS: &[(&str, &str)] = &[
    ("t", "-1"),
    ("f", "0"),
    ("<", "[ $1 $2 > ]"),
    (">=", "[ $2 $1 > t [ $2 $1 = ] if ]"),
    ("<=", "[ $1 $2 > t [ $2 $1 = ] if ]"),
    ("=", "[ $2 $1 > not $1 $2 > not and ]"),
    ("!=", "[ = not ]"),
    ("not", "[ $1 f t if ]"),
    ("and", "[ $1 $2 f if ]"),
    ("or", "[ $1 t $2 if ]"),
    ("xor", "[ $1 $2 or $1 $2 nand and ]"),
    ("nand", "[ and not ]"),
    ("nor", "[ or not ]"),
    ("xnor", "[ xor not ]"),
];
