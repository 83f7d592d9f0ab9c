use super::state::{PersistedState, StoredState};
use crate::error::{BrightnessError, Result};
use std::{
    fs::{self, File, OpenOptions},
    io::{ErrorKind, Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

/// Default location of the config file, relative to the home directory.
const CONFIG_RELATIVE_PATH: [&str; 3] = [".config", "brightness", "config.json"];

/// Resolve the config file location, preferring `override_path` when given.
pub fn locate(override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }
    let mut path = dirs::home_dir().ok_or(BrightnessError::PathResolution)?;
    path.extend(CONFIG_RELATIVE_PATH);
    Ok(path)
}

/// Owner of the config file for the duration of one invocation.
///
/// The file handle is held open from [ConfigStore::open] until the store is
/// closed or dropped, and every [ConfigStore::save] rewrites it in place.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    file: File,
    state: PersistedState,
}

impl ConfigStore {
    /// Open the config file at `path`, creating it and its parent directories
    /// if needed. When the file is new or empty, the state starts out with
    /// `default_device` at full brightness.
    pub fn open(path: impl Into<PathBuf>, default_device: &str) -> Result<ConfigStore> {
        let path = path.into();
        match OpenOptions::new().read(true).write(true).open(&path) {
            Ok(mut file) => {
                let state = read_state(&mut file, &path, default_device)?;
                log::debug!("Loaded {:?} from {}", state, path.display());
                Ok(ConfigStore { path, file, state })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)
                        .map_err(|e| BrightnessError::io("create directory for", &path, e))?;
                }
                let file = OpenOptions::new()
                    .read(true)
                    .write(true)
                    .create(true)
                    .open(&path)
                    .map_err(|e| BrightnessError::io("create", &path, e))?;
                log::info!("Created config file {}", path.display());
                Ok(ConfigStore {
                    path,
                    file,
                    state: PersistedState::new(default_device),
                })
            }
            Err(e) => Err(BrightnessError::io("open", &path, e)),
        }
    }

    pub fn state(&self) -> &PersistedState {
        &self.state
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a new state and rewrite the file with it.
    ///
    /// The file is rewound, truncated and then written, in that order, so no
    /// bytes of a longer previous record survive. A failure part way through
    /// leaves the file in an unspecified state.
    pub fn save(&mut self, device: &str, brightness: f64) -> Result<()> {
        self.state = PersistedState {
            device: device.to_owned(),
            brightness,
        };
        let content = serde_json::to_string_pretty(&self.state)
            .map_err(|e| BrightnessError::io("serialize", &self.path, e.into()))?;

        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|e| BrightnessError::io("seek", &self.path, e))?;
        self.file
            .set_len(0)
            .map_err(|e| BrightnessError::io("truncate", &self.path, e))?;
        self.file
            .write_all(content.as_bytes())
            .map_err(|e| BrightnessError::io("write", &self.path, e))?;
        self.file
            .flush()
            .map_err(|e| BrightnessError::io("write", &self.path, e))?;
        log::debug!("Saved {:?} to {}", self.state, self.path.display());
        Ok(())
    }

    /// Flush the file to disk and release it.
    ///
    /// Dropping the store also releases the handle, so error paths which never
    /// reach this still close the file.
    pub fn close(self) -> Result<()> {
        self.file
            .sync_all()
            .map_err(|e| BrightnessError::io("sync", &self.path, e))
    }
}

fn read_state(file: &mut File, path: &Path, default_device: &str) -> Result<PersistedState> {
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| BrightnessError::io("read", path, e))?;
    if content.trim().is_empty() {
        log::debug!("Config file {} is empty, using defaults", path.display());
        return Ok(PersistedState::new(default_device));
    }
    let stored: StoredState =
        serde_json::from_str(&content).map_err(|source| BrightnessError::Deserialization {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(PersistedState::from_stored(stored, default_device))
}
