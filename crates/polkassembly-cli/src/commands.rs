//! Subcommands of `pa-schema`.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
///
/// Payload inputs accept a file path or `-` for standard input.
#[derive(Subcommand)]
pub enum Commands {
    /// List every schema kind
    Types {
        /// Only list kinds of one API area (e.g. "posts", "votes")
        #[arg(long)]
        area: Option<String>,
    },

    /// Round-trip one payload and report what did not survive
    Check {
        /// Schema kind (e.g. "post", "post_listing_response", "PostListingResponse")
        kind: String,
        /// JSON file, or "-" for stdin
        input: PathBuf,
    },

    /// Check every `<kind>[.<label>].json` file in a directory
    CheckDir {
        /// Directory holding the payloads
        dir: PathBuf,
    },

    /// Decode a payload and print its canonical encoding
    Normalize {
        /// Schema kind
        kind: String,
        /// JSON file, or "-" for stdin
        input: PathBuf,
    },

    /// Show the effective check configuration
    Config,
}
