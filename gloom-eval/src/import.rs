use crate::{Error, Fault, Interpreter};
use log::debug;
use std::io;

/// A module implemented in Rust. It registers bindings into the interpreter.
pub type NativeModule = fn(&mut Interpreter<'_>);

pub enum Module {
    Source(String),
    Native(NativeModule),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File {name} not found")]
    NotFound { name: String },
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Resolves the names passed to `import`.
pub trait Loader {
    fn load(&self, name: &str) -> Result<Module, LoadError>;
}

/// A loader that knows no modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoModules;

impl Loader for NoModules {
    fn load(&self, name: &str) -> Result<Module, LoadError> {
        Err(LoadError::NotFound {
            name: String::from(name),
        })
    }
}

impl<'ctx> Interpreter<'ctx> {
    pub(crate) fn import(&mut self) -> Result<(), Error> {
        let name = self.pop("import")?;
        let loader = self.loader;
        match loader.load(&name) {
            Ok(Module::Source(source)) => {
                debug!("importing source module {}", name);
                self.evaluate(&source)
            }
            Ok(Module::Native(register)) => {
                debug!("importing native module {}", name);
                register(self);
                Ok(())
            }
            Err(err) => {
                self.fault(Fault::Import(err));
                Ok(())
            }
        }
    }
}
