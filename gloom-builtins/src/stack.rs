pub const DEFINITIONS: &[(&str, &str)] = &[
    ("dup", "[ $1 $1 ]"),
    ("over", "[ $2 $1 $2 ]"),
    ("swap", "[ $1 $2 ]"),
    // binds the value to `@`, which takes it off the stack
    ("drop", "[ [ @ ] $1 def ]"),
    ("debug.clear", "[ main debug.size debug.remove ]"),
];
