//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use boutique_cache::{cache_key, FileStore};
use boutique_commerce::cart::{CartStore, KvCartPersistence};
use boutique_commerce::checkout::HttpOrderGateway;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Cart store backed by the on-disk storage directory.
pub type DiskCartStore = CartStore<KvCartPersistence<FileStore>>;

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

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config: config.with_env_overrides(),
            config_path,
            output,
            cwd,
        })
    }

    /// Directory the cart is stored in.
    pub fn storage_dir(&self) -> PathBuf {
        match &self.config.storage.dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => self.cwd.join(dir),
            None => dirs_path().join("boutique"),
        }
    }

    /// Storage key for the cart, namespaced by profile when one is given.
    pub fn cart_key(&self, profile: Option<&str>) -> String {
        match profile {
            Some(profile) => cache_key!(&self.config.storage.key, profile),
            None => self.config.storage.key.clone(),
        }
    }

    /// Open the persisted cart.
    pub fn open_cart(&self, profile: Option<&str>) -> Result<DiskCartStore> {
        let dir = self.storage_dir();
        let store = FileStore::open(&dir)
            .with_context(|| format!("Failed to open cart storage: {}", dir.display()))?;

        let key = self.cart_key(profile);
        self.output
            .debug(&format!("Cart storage: {} ({})", dir.display(), key));

        Ok(CartStore::open(KvCartPersistence::with_key(store, key)))
    }

    /// Build the order gateway for the configured API.
    pub fn gateway(&self) -> Result<HttpOrderGateway> {
        HttpOrderGateway::with_timeout(
            self.config.api.base_url.clone(),
            Duration::from_secs(self.config.api.timeout_secs),
        )
        .context("Failed to build HTTP client")
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                    return Some((config, config_path));
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(config: CliConfig, cwd: &Path) -> Context {
        Context {
            config,
            config_path: None,
            output: Output::new(false, true),
            cwd: cwd.to_path_buf(),
        }
    }

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join(".boutique.toml"),
            "[storage]\nkey = \"found\"\n",
        )
        .unwrap();

        let (config, path) = find_config(&nested).unwrap();
        assert_eq!(config.storage.key, "found");
        assert_eq!(path, dir.path().join(".boutique.toml"));
    }

    #[test]
    fn test_cart_key_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(CliConfig::default(), dir.path());

        assert_eq!(ctx.cart_key(None), "cart-storage");
        assert_eq!(ctx.cart_key(Some("gift")), "cart-storage:gift");
    }

    #[test]
    fn test_relative_storage_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.storage.dir = Some(PathBuf::from("carts"));
        let ctx = context(config, dir.path());

        assert_eq!(ctx.storage_dir(), dir.path().join("carts"));
    }

    #[test]
    fn test_open_cart_persists_between_opens() {
        use boutique_commerce::cart::CartLine;
        use boutique_commerce::VariantId;

        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.storage.dir = Some(dir.path().to_path_buf());
        let ctx = context(config, dir.path());

        let mut cart = ctx.open_cart(None).unwrap();
        cart.add_item(CartLine::new(VariantId::new(3), 2).with_price("10.00"));

        let reopened = ctx.open_cart(None).unwrap();
        assert_eq!(reopened.total_items(), 2);

        let other = ctx.open_cart(Some("gift")).unwrap();
        assert!(other.cart().is_empty());
    }
}
