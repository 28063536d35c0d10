pub const DEFINITIONS: &[(&str, &str)] = &[
    ("%", "mod"),
    ("math.mod", "mod"),
    // exponents below 1 are not supported
    ("math.pow", "[ $2 $2 [ over * ] $1 1 - rep swap drop ]"),
    ("^", "math.pow"),
    ("pow", "math.pow"),
    ("math.max", "[ $2 $1 > $2 $1 if ]"),
    ("math.min", "[ $2 $1 > $1 $2 if ]"),
    ("max", "math.max"),
    ("min", "math.min"),
];
