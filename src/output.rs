//! Viewing modes: count table, grouped table, search listing, JSON printers.

use bytesize::ByteSize;
use std::io::Write;
use std::path::Path;

use crate::ext::Spec;
use crate::groups::GroupedCounts;
use crate::preview;
use crate::search::SearchResult;

const MIN_EXT_COL_WIDTH: usize = 9;
const MIN_FREQ_COL_WIDTH: usize = 5;
const PREVIEW_SEP: &str = "–––––––––––––––––––––––––––––––––––";

/// Width of the attached terminal, with the classic 80-column fallback.
pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// One-line operating indicator: basename of the most recently visited file,
/// overwriting itself via carriage return.
pub fn feedback_line(path: &Path, width: usize) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let trimmed: String = name.chars().take(width.saturating_sub(1)).collect();
    print!("\r{:<1$}", trimmed, width.saturating_sub(1));
    let _ = std::io::stdout().flush();
}

/// Blank out the feedback line before printing real results.
pub fn clear_feedback(width: usize) {
    println!("\r{:<1$}", "", width.saturating_sub(1));
}

/// Describe the selected mode before doing any work, mirroring the flags.
pub fn start_message(
    spec: Option<&Spec>,
    case_sensitive: bool,
    recursive: bool,
    include_hidden: bool,
    location: &Path,
) -> String {
    let action = if spec.is_some() { "searching" } else { "counting" };
    let verb = if recursive {
        format!("Recursively {action} all files")
    } else {
        // "Searching files" / "Counting files"
        let mut v = action.to_string();
        v[..1].make_ascii_uppercase();
        format!("{v} files")
    };
    let case = if case_sensitive {
        "case-sensitive"
    } else {
        "case-insensitive"
    };
    let what = match spec {
        None => String::new(),
        Some(Spec::Any) => " with extension or without it".to_string(),
        Some(Spec::NoExtension) => " without any extension".to_string(),
        Some(Spec::Literal(ext)) => format!(" with ({case}) extension .{ext}"),
    };
    let hidden = if include_hidden {
        "including hidden files and directories"
    } else {
        "ignoring hidden files and directories"
    };
    format!("{verb}{what}, {hidden}, in {}", location.display())
}

/// Two-column EXTENSION | FREQ. table with a TOTAL row.
pub fn print_table(pairs: &[(String, u64)], total: u64) {
    if pairs.is_empty() {
        println!("Oops! We have no data to show...\n");
        return;
    }
    let ext_width = pairs
        .iter()
        .map(|(w, _)| w.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_EXT_COL_WIDTH);
    let freq_width = total.to_string().len().max(MIN_FREQ_COL_WIDTH);

    let sep = format!(
        "{}+{}",
        "-".repeat(ext_width + 2),
        "-".repeat(freq_width + 2)
    );
    println!(" {:<ext_width$} | {:<freq_width$} ", "EXTENSION", "FREQ.");
    println!("{sep}");
    for (word, freq) in pairs {
        println!(" {word:<ext_width$} | {freq:>freq_width$} ");
    }
    println!("{sep}");
    println!(" {:<ext_width$} | {total:>freq_width$} ", "TOTAL:");
    println!("{sep}\n");
}

/// Grouped rendering: every category header appears (stable section set),
/// with its pairs beneath it, then a grand total.
pub fn print_grouped(grouped: &GroupedCounts) {
    for (category, pairs) in &grouped.sections {
        println!("{category}:");
        if pairs.is_empty() {
            println!("  (none)");
        }
        for (word, freq) in pairs {
            println!("  {word}: {freq}");
        }
        println!();
    }
    println!("TOTAL: {}\n", grouped.total());
}

/// Pairs as a stable JSON document, row order exactly as given.
pub fn print_counts_json(pairs: &[(String, u64)], total: u64) {
    let rows: Vec<serde_json::Value> = pairs
        .iter()
        .map(|(ext, n)| serde_json::json!({ "extension": ext, "count": n }))
        .collect();
    let doc = serde_json::json!({ "extensions": rows, "total": total });
    println!("{}", serde_json::to_string_pretty(&doc).unwrap());
}

/// Search listing: one path per line with optional size, optional preview
/// block, then the found/size summary. Returns the number of files listed.
pub fn print_search(
    result: &SearchResult,
    list: bool,
    with_preview: bool,
    preview_size: usize,
) -> usize {
    if result.is_empty() {
        println!("\nNo files were found in the specified directory.\n");
        return 0;
    }
    if list {
        for (i, path) in result.files.iter().enumerate() {
            match result.sizes.as_ref() {
                Some(sizes) => println!("{} ({})", path.display(), ByteSize(sizes[i])),
                None => println!("{}", path.display()),
            }
            if with_preview {
                println!("{PREVIEW_SEP}");
                println!("{}", preview::generate(path, preview_size));
                println!("{PREVIEW_SEP}\n");
            }
        }
    }
    println!("\n   Found {} file(s).", result.count());
    if let Some(s) = result.size_summary() {
        println!("   Total combined size: {}.", ByteSize(s.total));
        println!(
            "   Average file size: {} (max: {}, min: {}).\n",
            ByteSize(s.average as u64),
            ByteSize(s.max),
            ByteSize(s.min)
        );
    } else {
        println!();
    }
    result.count()
}

/// Machine-readable search output.
pub fn print_search_json(result: &SearchResult) {
    let doc = serde_json::json!({
        "files": result.files,
        "sizes": result.sizes,
        "found": result.count(),
        "summary": result.size_summary(),
    });
    println!("{}", serde_json::to_string_pretty(&doc).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_message_counting() {
        let msg = start_message(None, false, true, false, Path::new("/tmp/x"));
        assert_eq!(
            msg,
            "Recursively counting all files, ignoring hidden files and directories, in /tmp/x"
        );
    }

    #[test]
    fn start_message_search_literal_non_recursive() {
        let spec = Spec::Literal("txt".into());
        let msg = start_message(Some(&spec), true, false, true, Path::new("/d"));
        assert_eq!(
            msg,
            "Searching files with (case-sensitive) extension .txt, including hidden files and directories, in /d"
        );
    }

    #[test]
    fn start_message_sentinels() {
        let msg = start_message(Some(&Spec::NoExtension), false, true, false, Path::new("."));
        assert!(msg.contains("without any extension"));
        let msg = start_message(Some(&Spec::Any), false, true, false, Path::new("."));
        assert!(msg.contains("with extension or without it"));
    }
}
