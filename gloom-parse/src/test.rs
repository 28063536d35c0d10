use crate::{parse, parse_minting, Template};
use gloom_core::{Arena, Token};
use pretty_assertions::assert_eq;

fn tokens(ts: &[&str]) -> Vec<Token> {
    ts.iter().map(|t| Token::from(*t)).collect()
}

macro_rules! parse_test {
    ($input:expr, $output:expr) => {{
        assert_eq!(parse($input), tokens(&$output))
    }};
}

#[test]
fn parse_plain_1() {
    parse_test!("3 4 +", ["3", "4", "+"])
}

#[test]
fn parse_whitespace_1() {
    parse_test!("  3\t4\n  + ", ["3", "4", "+"])
}

#[test]
fn parse_list_1() {
    parse_test!("[ 1 2 3 ] size", ["[ 1 2 3 ]", "size"])
}

#[test]
fn parse_list_empty() {
    parse_test!("[ ]", ["[ ]"])
}

#[test]
fn parse_list_nested() {
    parse_test!("[ 1 [ 2 ] ( c ) ]", ["[ 1 [ 2 ] ]"])
}

#[test]
fn parse_comment_nested() {
    parse_test!("1 ( a ( b ) c ) 2", ["1", "2"])
}

#[test]
fn parse_comment_unterminated() {
    parse_test!("1 ( a b", ["1"])
}

#[test]
fn parse_stray_close() {
    parse_test!("1 ] 2", ["1"])
}

#[test]
fn parse_unterminated_list() {
    parse_test!("1 [ 2 3", ["1", "[ 2 3 ]"])
}

#[test]
fn parse_glued_brackets_are_plain_tokens() {
    parse_test!("[1 2]", ["[1", "2]"])
}

#[test]
fn parse_minting_1() {
    let mut arena = Arena::new();
    let parsed = parse_minting("[ 1 [ 2 ] ] [ ]", &mut arena);
    assert_eq!(parsed, tokens(&["&2", "&3"]));
    assert_eq!(arena.deref("&1"), Some(&Token::from("[ 2 ]")));
    assert_eq!(arena.deref("&2"), Some(&Token::from("[ 1 &1 ]")));
    assert_eq!(arena.deref("&3"), Some(&Token::from("[ ]")));
}

#[test]
fn parse_minting_comment_inside_list() {
    let mut arena = Arena::new();
    let parsed = parse_minting("[ a ( [ b ] ) ]", &mut arena);
    assert_eq!(parsed, tokens(&["&1"]));
    assert_eq!(arena.len(), 1);
}

#[test]
fn template_arity_1() {
    assert_eq!(Template::new("$1 $2 +").arity(), 2);
}

#[test]
fn template_arity_gap() {
    assert_eq!(Template::new("$1 $3").arity(), 1);
    assert_eq!(Template::new("$2 $3").arity(), 0);
}

#[test]
fn template_arity_nested() {
    assert_eq!(Template::new("$2 [ $1 $3 ] if").arity(), 3);
}

#[test]
fn template_instantiate_1() {
    let template = Template::new("$2 $1 -");
    assert_eq!(
        template.instantiate(&tokens(&["1", "10"])),
        tokens(&["10", "1", "-"])
    );
}

#[test]
fn template_instantiate_whole_value() {
    let template = Template::new("$1 size");
    assert_eq!(
        template.instantiate(&tokens(&["[ 1 2 ]"])),
        tokens(&["[ 1 2 ]", "size"])
    );
}

#[test]
fn template_instantiate_spliced() {
    let template = Template::new("[ $1 $1 * ] $$1 x$2y");
    assert_eq!(
        template.instantiate(&tokens(&["7", "8"])),
        tokens(&["[ 7 7 * ]", "$7", "x8y"])
    );
}

#[test]
fn template_instantiate_past_arity() {
    let template = Template::new("$1 $3");
    assert_eq!(
        template.instantiate(&tokens(&["a", "b", "c"])),
        tokens(&["a", "$3"])
    );
}

#[test]
fn template_multi_digit() {
    let template = Template::new("$1 $12");
    assert_eq!(template.arity(), 1);
    assert_eq!(
        template.instantiate(&tokens(&["a"])),
        tokens(&["a", "$12"])
    );
}
