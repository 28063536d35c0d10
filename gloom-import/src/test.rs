use crate::FileLoader;
use gloom_builtins::builtins;
use gloom_eval::{Config, Interpreter, LoadError, Loader, Module};
use pretty_assertions::assert_eq;
use std::{fs, path::PathBuf};

fn run(loader: &FileLoader, source: &str) -> Vec<String> {
    let context = builtins();
    let mut interpreter = Interpreter::new(&context, loader, Config::default());
    interpreter.evaluate(source).unwrap();
    interpreter
        .main()
        .iter()
        .map(|token| interpreter.expand(token))
        .collect()
}

fn register_answer(interpreter: &mut Interpreter) {
    interpreter.define("answer", "42");
}

#[test]
fn import_source_1() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("square.gloom"), "[ sq ] [ $1 $1 * ] def").unwrap();
    let loader = FileLoader::new(vec![dir.path().to_path_buf()]);
    assert_eq!(run(&loader, "square import 4 sq"), vec!["16"]);
}

#[test]
fn import_with_extension() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("square.gloom"), "[ sq ] [ $1 $1 * ] def").unwrap();
    let loader = FileLoader::new(vec![dir.path().to_path_buf()]);
    assert_eq!(run(&loader, "square.gloom import 3 sq"), vec!["9"]);
}

#[test]
fn import_uses_library() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("twice.gloom"),
        "( doubles the top of the stack )\n[ twice ] [ dup + ] def\n",
    )
    .unwrap();
    let loader = FileLoader::new(vec![dir.path().to_path_buf()]);
    assert_eq!(run(&loader, "twice import 5 twice"), vec!["10"]);
}

#[test]
fn import_leaves_values() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("values.gloom"), "1 [ 2 3 ]").unwrap();
    let loader = FileLoader::new(vec![dir.path().to_path_buf()]);
    assert_eq!(run(&loader, "0 values import"), vec!["0", "1", "[ 2 3 ]"]);
}

#[test]
fn import_search_order() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    fs::write(first.path().join("value.gloom"), "1").unwrap();
    fs::write(second.path().join("value.gloom"), "2").unwrap();
    fs::write(second.path().join("other.gloom"), "3").unwrap();
    let loader = FileLoader::new(vec![
        first.path().to_path_buf(),
        second.path().to_path_buf(),
    ]);
    assert_eq!(run(&loader, "value import other import"), vec!["1", "3"]);
}

#[test]
fn import_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let loader = FileLoader::new(vec![dir.path().to_path_buf()]);
    assert_eq!(
        run(&loader, "missing import 1"),
        vec!["Error in import: File missing not found", "1"]
    );
}

#[test]
fn import_directory_is_not_a_module() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("sub.gloom")).unwrap();
    let loader = FileLoader::new(vec![dir.path().to_path_buf()]);
    assert_eq!(loader.resolve("sub"), None);
}

#[test]
fn import_native_first() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("answer.gloom"), "0").unwrap();
    let loader =
        FileLoader::new(vec![dir.path().to_path_buf()]).with_native("answer", register_answer);
    assert_eq!(run(&loader, "answer import answer"), vec!["42"]);
}

#[test]
fn resolve_1() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lib.gloom");
    fs::write(&path, "").unwrap();
    let loader = FileLoader::new(vec![PathBuf::from("does-not-exist"), dir.path().to_path_buf()]);
    assert_eq!(loader.resolve("lib"), Some(path.clone()));
    assert_eq!(loader.resolve("lib.gloom"), Some(path));
}

#[test]
fn load_not_found() {
    let loader = FileLoader::new(Vec::new());
    match loader.load("x") {
        Err(LoadError::NotFound { name }) => assert_eq!(name, "x"),
        Err(err) => panic!("unexpected error {}", err),
        Ok(_) => panic!("expected an error"),
    }
}

#[test]
fn load_source() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("m.gloom"), "1 2 +").unwrap();
    let loader = FileLoader::new(vec![dir.path().to_path_buf()]);
    match loader.load("m") {
        Ok(Module::Source(source)) => assert_eq!(source, "1 2 +"),
        Ok(Module::Native(_)) => panic!("expected a source module"),
        Err(err) => panic!("unexpected error {}", err),
    }
}
