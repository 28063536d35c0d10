#[cfg(test)]
mod test;

use fnv::FnvHashMap;
use gloom_eval::{LoadError, Loader, Module, NativeModule};
use log::debug;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const EXTENSION: &str = "gloom";

/**
Resolves `import` names against registered native modules and then source
files.

A name that does not already end in `.gloom` gets the extension appended. Each
search path is tried in order and the first existing file wins.
*/
#[derive(Clone, Default)]
pub struct FileLoader {
    search_paths: Vec<PathBuf>,
    natives: FnvHashMap<String, NativeModule>,
}

impl FileLoader {
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        FileLoader {
            search_paths,
            natives: FnvHashMap::default(),
        }
    }

    /// Register a native module. Natives are checked before any file.
    pub fn with_native(mut self, name: &str, module: NativeModule) -> Self {
        self.natives.insert(String::from(name), module);
        self
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// The file that `import` of `name` would read, if any.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let file = file_name(name);
        self.search_paths
            .iter()
            .map(|dir| dir.join(&file))
            .find(|path| path.is_file())
    }
}

fn file_name(name: &str) -> PathBuf {
    let path = Path::new(name);
    match path.extension() {
        Some(extension) if extension == EXTENSION => PathBuf::from(path),
        _ => PathBuf::from(format!("{}.{}", name, EXTENSION)),
    }
}

impl Loader for FileLoader {
    fn load(&self, name: &str) -> Result<Module, LoadError> {
        if let Some(module) = self.natives.get(name) {
            debug!("{} is a native module", name);
            return Ok(Module::Native(*module));
        }
        match self.resolve(name) {
            None => Err(LoadError::NotFound {
                name: String::from(name),
            }),
            Some(path) => {
                debug!("loading {} from {}", name, path.display());
                let source = fs::read_to_string(&path)?;
                Ok(Module::Source(source))
            }
        }
    }
}
