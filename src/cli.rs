use std::path::PathBuf;

use clap::{Parser, Subcommand};
use humantext::{Language, TimeUnit};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Config file to use instead of the per-user one
    #[arg(long, global = true, env = "HUMANTEXT_CONFIG")]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Describe a moment relative to another ("5 minutes ago", "in a day")
    Ago {
        /// RFC 3339 timestamp or "now"
        reference: String,

        /// Moment to compare against, defaults to now
        #[arg(short, long)]
        target: Option<String>,

        #[arg(short, long)]
        lang: Option<Language>,

        /// Also print the exact distance
        #[arg(long)]
        precise: bool,
    },

    /// Pluralize a count of time units
    Plural {
        count: u64,
        unit: TimeUnit,

        #[arg(short, long)]
        lang: Option<Language>,
    },

    /// Transliterate Cyrillic text to Latin script
    Translit {
        text: String,

        /// Replacement for spaces
        #[arg(short, long)]
        divider: Option<String>,
    },

    /// Split a full name and print its initials
    Name { full_name: Option<String> },

    /// Build initials from first and last name
    Initials {
        #[arg(short, long)]
        first: Option<String>,

        #[arg(short, long)]
        last: Option<String>,
    },

    /// Shift a moment by a number of units and format it
    Shift {
        #[arg(allow_negative_numbers = true)]
        value: i64,

        #[arg(short, long, default_value = "second")]
        unit: TimeUnit,

        /// RFC 3339 timestamp or "now"
        #[arg(long)]
        from: Option<String>,

        /// strftime pattern
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Convert density-independent pixels to pixels
    Dp {
        dp: f32,

        #[arg(long, default_value_t = 1.0)]
        density: f32,
    },

    /// Tell whether the soft keyboard covers the window
    Keyboard {
        #[arg(long)]
        root_height: i32,

        #[arg(long)]
        visible_height: i32,

        #[arg(long, default_value_t = 1.0)]
        density: f32,

        #[arg(long)]
        margin_dp: Option<f32>,
    },

    /// Local configuration
    #[clap(subcommand)]
    Config(Config),
}

#[derive(Subcommand, Debug)]
pub enum Config {
    /// Print the effective config file
    Show,

    /// Write a config file with every default filled in
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
