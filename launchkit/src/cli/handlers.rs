//! Action handlers

use anyhow::Result;
use launchkit_core::{render_pretty, Endpoint, LaunchError, RenderOptions, TransformKind};
use tracing::debug;

use crate::client::FetchClient;
use crate::clipboard::{transform_clipboard, ClipboardProvider};
use crate::config::{ConfigBuilder, LaunchConfig};

use super::commands::*;

/// Apply the env and file layers beneath the CLI values already in `builder`.
fn finish_config(builder: ConfigBuilder, common: &CommonArgs) -> Result<LaunchConfig> {
    let builder = if common.verbose {
        builder.with_verbose(true)
    } else {
        builder
    };

    let config = builder
        .with_env_overrides()
        .with_config_file(!common.no_config, common.config.as_deref())
        .build()?;

    Ok(config)
}

/// Resolve configuration for `fetch-json`
pub fn fetch_config(cli: &FetchCli) -> Result<LaunchConfig> {
    let mut builder = LaunchConfig::builder();

    if let Some(timeout) = cli.timeout {
        builder = builder.with_timeout(timeout)?;
    }
    if cli.unicode {
        builder = builder.with_escape_unicode(false);
    }

    finish_config(builder, &cli.common)
}

/// Resolve configuration for `clipboard-transform`
pub fn clipboard_config(cli: &ClipboardCli) -> Result<LaunchConfig> {
    let mut builder = LaunchConfig::builder();

    if let Some(ref transform) = cli.transform {
        builder = builder.with_transform(transform.into());
    }

    finish_config(builder, &cli.common)
}

/// Fetch one endpoint and return its pretty-printed payload.
pub async fn handle_fetch(
    endpoint: Option<String>,
    config: &LaunchConfig,
) -> Result<String, LaunchError> {
    let endpoint = Endpoint::resolve(endpoint, &config.default_endpoint);
    debug!(endpoint = %endpoint, "Resolved endpoint");

    let client = FetchClient::with_timeout(config.timeout)?;
    let value = client.fetch_json(&endpoint).await?;

    render_pretty(
        &value,
        RenderOptions {
            escape_unicode: config.escape_unicode,
        },
    )
}

/// Transform the clipboard in place and return the summary line.
pub fn handle_clipboard<C>(clipboard: &mut C, transform: TransformKind) -> Result<String, LaunchError>
where
    C: ClipboardProvider + ?Sized,
{
    debug!(transform = %transform, "Transforming clipboard");
    let result = transform_clipboard(clipboard, transform.as_fn())?;
    Ok(transform.summary(&result))
}
