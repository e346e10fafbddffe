use std::{
    fs, io,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

/// Flat-file store for a whole JSON document of type `D`.
///
/// Every load reads the full file and every save rewrites it; there is no
/// caching between requests. The document on disk always reflects the last
/// completed write.
#[derive(Debug, Clone)]
pub struct JsonStore<D> {
    path: PathBuf,
    _doc: PhantomData<D>,
}

impl<D> JsonStore<D>
where
    D: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _doc: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> io::Result<D> {
        let text = fs::read_to_string(&self.path)?;
        serde_json::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Resilient read: a missing or unparsable file yields the default
    /// document instead of an error.
    pub fn load_or_default(&self) -> D
    where
        D: Default,
    {
        self.load().unwrap_or_default()
    }

    pub fn save(&self, doc: &D) -> io::Result<()> {
        let text = serde_json::to_string_pretty(doc)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
