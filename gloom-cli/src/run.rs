use gloom_builtins as builtins;
use gloom_eval::{self as eval, Interpreter};
use gloom_import::FileLoader;
use log::info;
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};
use thiserror::Error;

pub struct Config {
    pub filename: String,
    pub search_paths: Vec<PathBuf>,
    pub max_depth: usize,
    pub stdout: Option<Box<dyn Write>>,
}

#[derive(Debug, Error)]
pub enum InterpreterError {
    #[error("file {} does not exist", .0.display())]
    FileDoesNotExist(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Eval(#[from] eval::Error),
}

/// Evaluates a whole file once, then prints what is left on main.
pub fn run_interpreter(config: Config) -> Result<(), InterpreterError> {
    let target_path = PathBuf::from(config.filename.as_str());
    if !target_path.is_file() {
        return Err(InterpreterError::FileDoesNotExist(target_path));
    }
    let source = fs::read_to_string(&target_path)?;

    let context = builtins::builtins();
    let loader = FileLoader::new(config.search_paths);
    let mut interpreter = Interpreter::new(
        &context,
        &loader,
        eval::Config {
            max_depth: config.max_depth,
        },
    );

    info!("running {}", target_path.display());
    interpreter.evaluate(&source)?;

    let mut stdout: Box<dyn Write> = config.stdout.unwrap_or_else(|| Box::new(io::stdout()));
    writeln!(stdout, "main: {}", interpreter.render_stack())?;
    stdout.flush()?;
    Ok(())
}
