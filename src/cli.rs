//! CLI option parsing with clap for the tally file counter.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Count, search and preview files by extension",
    long_about = "Count files grouped by extension in a directory, or search for files \
with a given extension. By default the scan is recursive, hidden files and \
directories are ignored, and extensions are compared case-insensitively."
)]
pub struct Opts {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Include hidden files and directories
    /// (Windows: FILE_ATTRIBUTE_HIDDEN; Unix-likes: names starting with '.')
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Don't recurse through subdirectories
    #[arg(long)]
    pub no_recursion: bool,

    /// Treat file extensions with case sensitiveness
    #[arg(long, short = 'c')]
    pub case_sensitive: bool,

    /// Search files by extension instead of counting. Use '.' for files
    /// without any extension, '..' for all files with or without one
    #[arg(long, short = 'e', value_name = "EXTENSION")]
    pub file_extension: Option<String>,

    /// Display a short preview for each found text file (search mode)
    #[arg(long, short = 'p')]
    pub preview: bool,

    /// Number of characters shown per preview
    /// [default: five terminal lines' worth]
    #[arg(long, value_name = "CHARS")]
    pub preview_size: Option<usize>,

    /// Only the total number of files and size info, no per-file listing
    #[arg(long)]
    pub no_list: bool,

    /// Show the byte size of each found file plus a size summary
    #[arg(long, short = 's')]
    pub file_sizes: bool,

    /// Sort the count table alphabetically by extension
    #[arg(long)]
    pub sort_alpha: bool,

    /// Don't show the count table, only the total number of files
    #[arg(long)]
    pub no_table: bool,

    /// Show counts grouped into coarse categories (images, documents, ...)
    #[arg(long, short = 'g')]
    pub group: bool,

    /// Don't print the operating indicator (processed file names in one line)
    #[arg(long)]
    pub no_feedback: bool,

    /// Output machine-readable JSON instead of human text
    #[arg(long)]
    pub json: bool,

    /// List the file types currently supported for preview and exit
    #[arg(long)]
    pub supported_types: bool,
}
