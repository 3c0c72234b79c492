//! CLI execution context.

use std::path::{Path, PathBuf};

use aero_cache::FileStore;
use aero_commerce::cart::CartStore;
use aero_commerce::catalog::Menu;
use anyhow::{Context as _, Result};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["aero.toml", ".aero.toml", "aero.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (CliConfig::load(&path)?, Some(path))
            }
            // Try to find config in current directory or parent directories
            None => match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory holding the cart record.
    pub fn storage_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.dir)
    }

    /// Open the cart over the configured file store.
    pub fn cart_store(&self) -> CartStore<FileStore> {
        let dir = self.storage_dir();
        self.output
            .debug(&format!("Using cart storage at {}", dir.display()));
        CartStore::client(FileStore::open(dir))
    }

    /// Load the configured menu feed.
    pub fn load_menu(&self) -> Result<Menu> {
        let Some(ref menu) = self.config.catalog.menu else {
            anyhow::bail!("No menu configured; set catalog.menu in aero.toml");
        };

        let path = self.resolve_path(menu);
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read menu: {}", path.display()))?;
        Menu::from_json(&json).with_context(|| format!("Failed to parse menu: {}", path.display()))
    }

    /// Resolve a path relative to the config file's directory, or the
    /// working directory when no config file was found.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            return path;
        }
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(self.cwd.as_path());
        base.join(path)
    }
}

/// Find a config file in `start` or its ancestors.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
