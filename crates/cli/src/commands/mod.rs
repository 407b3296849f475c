use beeutil_core::CredentialsRecord;
use clap::Subcommand;
use eyre::WrapErr;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

pub mod decrypt;
pub mod encrypt;
pub mod load;

const REDACTED: &str = "********";

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a JSON credentials object for a plugin
    Encrypt {
        /// Plugin identifier the key is derived from
        #[arg(long, value_name = "ID")]
        plugin_id: String,

        /// JSON file with the credentials (reads stdin when omitted)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Decrypt and validate an encrypted secrets blob
    Decrypt {
        /// Plugin identifier the key is derived from
        #[arg(long, value_name = "ID")]
        plugin_id: String,

        /// Encrypted blob (reads stdin when omitted)
        #[arg(short, long, value_name = "BLOB")]
        blob: Option<String>,

        /// Print credential values instead of redacting them
        #[arg(long)]
        show_values: bool,
    },

    /// Resolve plugin secrets from the environment, a config file or the plugin API
    Load {
        /// Plugin name used for the API lookup
        #[arg(short, long, value_name = "NAME")]
        plugin: Option<String>,

        /// Base URL of the plugin API
        #[arg(long, value_name = "URL")]
        api_base: Option<String>,

        /// Local JSON secrets file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Skip environment variables and the config file
        #[arg(long)]
        remote_only: bool,

        /// Print credential values instead of redacting them
        #[arg(long)]
        show_values: bool,
    },
}

impl Commands {
    pub fn execute(self) -> eyre::Result<()> {
        match self {
            Commands::Encrypt { plugin_id, input } => {
                encrypt::execute(&plugin_id, input.as_deref())
            }
            Commands::Decrypt {
                plugin_id,
                blob,
                show_values,
            } => decrypt::execute(&plugin_id, blob, show_values),
            Commands::Load {
                plugin,
                api_base,
                config,
                remote_only,
                show_values,
            } => load::execute(plugin, api_base, config, remote_only, show_values),
        }
    }
}

/// Read `path`, or all of stdin when no path is given
fn read_input(path: Option<&Path>) -> eyre::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Write one `field: value` line per credential, redacting values unless asked
fn print_record(
    out: &mut impl Write,
    record: &CredentialsRecord,
    show_values: bool,
) -> io::Result<()> {
    for (field, value) in record.iter() {
        let shown = if show_values { value } else { REDACTED };
        writeln!(out, "{field}: {shown}")?;
    }
    Ok(())
}
