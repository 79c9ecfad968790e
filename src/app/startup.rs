// SPDX-License-Identifier: MPL-2.0
//! Resolves CLI flags and the persisted config into what the gallery needs
//! before the window opens.
//!
//! A directory argument serves images from disk and, without a manifest,
//! scans that directory. Otherwise images come from the configured server
//! and the identifiers from the manifest file.

use super::Flags;
use crate::config::{self, Config};
use crate::error::Result;
use crate::resource::{Manifest, ResourceClient, ResourceSource};
use std::path::Path;

/// Everything resolved before the event loop starts.
#[derive(Debug, Clone)]
pub struct Startup {
    pub config: Config,
    pub client: ResourceClient,
    pub manifest: Manifest,
    pub page: usize,
}

impl Startup {
    /// Loads the config from its default location and applies `flags`.
    pub fn prepare(flags: Flags) -> Result<Self> {
        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not read settings, using defaults");
            Config::default()
        });
        Self::with_config(config, flags)
    }

    /// Applies `flags` over `config` and opens the image source.
    pub fn with_config(mut config: Config, flags: Flags) -> Result<Self> {
        apply_overrides(&mut config, &flags);

        let (source, manifest) = match &flags.directory {
            Some(directory) => {
                let directory = Path::new(directory);
                let manifest = match &flags.manifest {
                    Some(path) => Manifest::load(Path::new(path))?,
                    None => Manifest::scan_directory(directory)?,
                };
                (ResourceSource::directory(directory), manifest)
            }
            None => {
                let source = ResourceSource::http(config.server_url())?;
                let manifest = match &flags.manifest {
                    Some(path) => Manifest::load(Path::new(path))?,
                    None => {
                        tracing::warn!("no manifest or directory given, gallery is empty");
                        Manifest::default()
                    }
                };
                (source, manifest)
            }
        };

        tracing::info!(
            source = %source,
            images = manifest.len(),
            "gallery source opened"
        );

        Ok(Self {
            client: ResourceClient::new(source)?,
            page: flags.page.unwrap_or(1),
            config,
            manifest,
        })
    }
}

/// CLI values win over the persisted config.
pub fn apply_overrides(config: &mut Config, flags: &Flags) {
    if let Some(server) = &flags.server {
        config.server_url = Some(server.clone());
    }
    if let Some(group_size) = flags.group_size {
        config.group_size = Some(group_size);
    }
    if flags.eager {
        config.eager_loading = Some(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn overrides_replace_config_values() {
        let mut config = Config::default();
        let flags = Flags {
            server: Some("http://example.test".to_string()),
            group_size: Some(7),
            eager: true,
            ..Flags::default()
        };
        apply_overrides(&mut config, &flags);
        assert_eq!(config.server_url(), "http://example.test");
        assert_eq!(config.group_size, Some(7));
        assert_eq!(config.eager_loading, Some(true));
    }

    #[test]
    fn absent_flags_keep_config() {
        let mut config = Config {
            group_size: Some(30),
            eager_loading: Some(true),
            ..Config::default()
        };
        apply_overrides(&mut config, &Flags::default());
        assert_eq!(config.group_size, Some(30));
        assert_eq!(config.eager_loading, Some(true));
    }

    #[test]
    fn directory_without_manifest_is_scanned() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("b.png"), b"x").expect("write");
        fs::write(dir.path().join("a.jpg"), b"x").expect("write");
        fs::write(dir.path().join("notes.txt"), b"x").expect("write");

        let flags = Flags {
            directory: Some(dir.path().to_string_lossy().into_owned()),
            page: Some(2),
            ..Flags::default()
        };
        let startup = Startup::with_config(Config::default(), flags).expect("startup");

        let names: Vec<&str> = startup.manifest.ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(names, ["a.jpg", "b.png"]);
        assert_eq!(startup.page, 2);
        assert!(matches!(
            startup.client.source(),
            ResourceSource::Directory(_)
        ));
    }

    #[test]
    fn server_mode_reads_manifest_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let manifest = dir.path().join("manifest.txt");
        fs::write(&manifest, "one.png\n# skipped\n\ntwo.webp\n").expect("write");

        let flags = Flags {
            manifest: Some(manifest.to_string_lossy().into_owned()),
            server: Some("http://127.0.0.1:9999".to_string()),
            ..Flags::default()
        };
        let startup = Startup::with_config(Config::default(), flags).expect("startup");

        assert_eq!(startup.manifest.len(), 2);
        assert_eq!(startup.page, 1);
        assert!(matches!(startup.client.source(), ResourceSource::Http(_)));
    }

    #[test]
    fn server_mode_without_manifest_is_empty() {
        let startup =
            Startup::with_config(Config::default(), Flags::default()).expect("startup");
        assert!(startup.manifest.is_empty());
    }

    #[test]
    fn invalid_server_url_fails() {
        let flags = Flags {
            server: Some("::not a url::".to_string()),
            ..Flags::default()
        };
        let result = Startup::with_config(Config::default(), flags);
        assert!(matches!(result, Err(Error::Network(_))));
    }
}
