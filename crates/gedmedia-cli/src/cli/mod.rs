//! CLI for inspecting how media filenames resolve.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use gedmedia_core::config::{self, MediaLocatorConfig};
use gedmedia_core::{AccessContext, AccessLevel, MediaLocator, MediaRecord, TreeRef, Variant};
use std::path::PathBuf;

use commands::{run_etag, run_info, run_locate, run_mime, run_url};

/// Top-level CLI for the gedmedia tool.
#[derive(Debug, Parser)]
#[command(name = "gedmedia")]
#[command(about = "Resolve genealogy media files, thumbnails and firewall URLs", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/gedmedia/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the unprotected media root.
    #[arg(long, global = true, value_name = "DIR")]
    pub media_root: Option<PathBuf>,

    /// Override the protected (firewalled) media root.
    #[arg(long, global = true, value_name = "DIR")]
    pub protected_root: Option<PathBuf>,

    /// Override the web path of the unprotected media root used in links.
    #[arg(long, global = true, value_name = "PREFIX")]
    pub media_url: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Viewer access level accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AccessArg {
    Public,
    Member,
    Manager,
}

impl From<AccessArg> for AccessLevel {
    fn from(arg: AccessArg) -> Self {
        match arg {
            AccessArg::Public => AccessLevel::Public,
            AccessArg::Member => AccessLevel::Member,
            AccessArg::Manager => AccessLevel::Manager,
        }
    }
}

/// A media file as seen by one viewer.
#[derive(Debug, Clone, Args)]
pub struct Target {
    /// Media filename (relative path or URL).
    pub file: String,

    /// Resolve the thumbnail instead of the main file.
    #[arg(long)]
    pub thumb: bool,

    /// Record identifier; without it the file is treated as unowned.
    #[arg(long)]
    pub xref: Option<String>,

    /// Name of the tree the record belongs to.
    #[arg(long)]
    pub tree: Option<String>,

    /// Access level of the viewer.
    #[arg(long, value_enum, default_value_t = AccessArg::Public)]
    pub access: AccessArg,
}

impl Target {
    pub fn variant(&self) -> Variant {
        variant(self.thumb)
    }

    pub fn record(&self) -> MediaRecord {
        let record = MediaRecord::new(self.xref.clone().unwrap_or_default(), self.file.clone());
        match &self.tree {
            Some(name) => record.with_tree(TreeRef::new(0, name.clone())),
            None => record,
        }
    }

    pub fn access(&self) -> AccessContext {
        AccessContext::new(self.tree.clone().unwrap_or_default(), self.access.into())
    }
}

pub(crate) fn variant(thumb: bool) -> Variant {
    if thumb {
        Variant::Thumb
    } else {
        Variant::Main
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show where a media file resolves to.
    Locate {
        /// Media filename (relative path or URL).
        file: String,
        /// Resolve the thumbnail instead of the main file.
        #[arg(long)]
        thumb: bool,
        /// Do not generate a missing thumbnail.
        #[arg(long)]
        no_generate: bool,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the cache-busting etag for a viewer.
    Etag {
        #[command(flatten)]
        target: Target,
    },

    /// Detect the MIME type (and image size) of a media file.
    Mime {
        /// Media filename (relative path or URL).
        file: String,
        /// Inspect the thumbnail instead of the main file.
        #[arg(long)]
        thumb: bool,
    },

    /// Build the URL a viewer should use to fetch a media file.
    Url {
        #[command(flatten)]
        target: Target,
        /// Ask the gateway to serve the file as a download.
        #[arg(long)]
        download: bool,
        /// Emit a raw URL (headers, JavaScript) instead of an HTML attribute value.
        #[arg(long)]
        raw: bool,
    },

    /// Summarize a media file: kind, size, modification time, title fallback.
    Info {
        /// Media filename (relative path or URL).
        file: String,
    },
}

impl Cli {
    /// Resolve the effective config: file (explicit or XDG default), then flag overrides.
    pub fn load_config(&self) -> Result<MediaLocatorConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        if let Some(root) = &self.media_root {
            cfg.unprotected_root = root.clone();
        }
        if let Some(root) = &self.protected_root {
            cfg.protected_root = root.clone();
        }
        if let Some(prefix) = &self.media_url {
            cfg.media_url_prefix = prefix.clone();
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let locator = MediaLocator::new(cfg);

        match cli.command {
            CliCommand::Locate {
                file,
                thumb,
                no_generate,
                json,
            } => run_locate(&locator, &file, variant(thumb), !no_generate, json)?,
            CliCommand::Etag { target } => run_etag(&locator, &target)?,
            CliCommand::Mime { file, thumb } => run_mime(&locator, &file, variant(thumb))?,
            CliCommand::Url {
                target,
                download,
                raw,
            } => run_url(&locator, &target, download, raw)?,
            CliCommand::Info { file } => run_info(&locator, &file)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
