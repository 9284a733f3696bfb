use anyhow::Result;
use rolodex_client::HttpApi;
use rolodex_runtime::{Config, resolve_data_dir};
use std::path::PathBuf;
use std::sync::Arc;

/// Resolved environment for one CLI invocation: data directory,
/// config, and the API handle every handler talks through.
pub struct CliContext {
    pub data_dir: PathBuf,
    pub config: Config,
    pub api: Arc<HttpApi>,
}

impl CliContext {
    pub fn build(data_dir: Option<&str>, base_url_override: Option<&str>) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir)?;
        let mut config = Config::load(&data_dir)?;
        if let Some(base_url) = base_url_override {
            config.base_url = base_url.to_string();
        }
        let api = Arc::new(HttpApi::new(config.base_url.clone())?);
        Ok(CliContext {
            data_dir,
            config,
            api,
        })
    }
}
