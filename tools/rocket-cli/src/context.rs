//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use rocket_cache::{Cache, FileStore};
use rocket_commerce::cart::Notice;
use rocket_data::{FetchClient, HttpShopApi};
use rocket_store::{CartStore, ChannelNotifier};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::{CliConfig, API_URL_ENV, CONFIG_NAMES};
use crate::output::Output;

/// Store type driven by the CLI.
pub type Store = CartStore<HttpShopApi>;

/// Execution context for CLI commands.
pub struct Context {
    /// Effective configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// File the configuration was read from, if any.
    pub config_file: Option<PathBuf>,
}

impl Context {
    /// Load context from config file and environment.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_file) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match find_config(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };
        let config = config.with_api_url(std::env::var(API_URL_ENV).ok());

        Ok(Self {
            config,
            output,
            cwd,
            config_file,
        })
    }

    /// Open the cart store described by the configuration.
    ///
    /// Notices are queued on the returned receiver for the command to print.
    pub fn store(&self) -> Result<(Store, UnboundedReceiver<Notice>)> {
        let mut client = FetchClient::new(self.config.api.base_url.as_str())
            .with_context(|| format!("Invalid api.base_url: {}", self.config.api.base_url))?;
        if let Some(timeout) = self.config.api.timeout() {
            client = client.with_timeout(timeout);
        }

        let dir = self.resolve_path(&self.config.storage.dir);
        let files = FileStore::open(&dir)
            .with_context(|| format!("Failed to open storage directory: {}", dir.display()))?;

        let (notifier, notices) = ChannelNotifier::channel();
        let store = CartStore::builder(HttpShopApi::new(client), Cache::new(files))
            .with_namespace(self.config.storage.namespace.as_str())
            .with_notifier(notifier)
            .open();

        self.output.debug(&format!(
            "cart slot {} in {}",
            store.key(),
            dir.display()
        ));

        Ok((store, notices))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find a config file in the directory tree.
///
/// The first existing file wins; a file that fails to parse is an error.
fn find_config(start: &Path) -> Result<Option<(CliConfig, PathBuf)>> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                let config = CliConfig::load(&config_path.to_string_lossy())?;
                return Ok(Some((config, config_path)));
            }
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            root.path().join(".rocket.toml"),
            "[storage]\nnamespace = \"@Nested\"\n",
        )
        .unwrap();

        let (config, path) = find_config(&nested).unwrap().unwrap();
        assert_eq!(config.storage.namespace, "@Nested");
        assert_eq!(path, root.path().join(".rocket.toml"));
    }

    #[test]
    fn test_find_config_rejects_malformed_file() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(
            root.path().join("rocket.toml"),
            "[storage]\nnamespace = \"@Prod\n",
        )
        .unwrap();

        let err = find_config(root.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse TOML config"));
    }

    #[test]
    fn test_resolve_path() {
        let ctx = Context {
            config: CliConfig::default(),
            output: Output::new(false, true),
            cwd: PathBuf::from("/home/shopper"),
            config_file: None,
        };
        assert_eq!(ctx.resolve_path(".rocket"), PathBuf::from("/home/shopper/.rocket"));
        assert_eq!(ctx.resolve_path("/tmp/cart"), PathBuf::from("/tmp/cart"));
    }
}
