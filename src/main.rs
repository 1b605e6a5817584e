//! Orchestration of the counting pipeline: parse → check preconditions →
//! walk → count or search → render.

mod cli;
mod count;
mod ext;
mod groups;
mod hidden;
mod output;
mod preview;
mod search;
mod walk;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::exit;

use cli::Opts;
use ext::Spec;
use hidden::HiddenDetector;

fn supported_types_message() -> String {
    let mut types: Vec<&str> = preview::SUPPORTED_TEXT.to_vec();
    types.sort_unstable();
    format!(
        "This is the list of currently supported file types for preview: {}.\n\
         Previewing files without extension is not supported. You can use the \
         '--preview' argument together with the search for all files regardless \
         of the extension ('--file-extension ..'). In this case, the preview will \
         only be displayed for files with a supported extension.",
        types.join(", ")
    )
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    if opts.supported_types {
        println!("{}", supported_types_message());
        return Ok(());
    }

    if !opts.path.exists() {
        eprintln!(
            "The path {} does not exist, or there may be a typo in it.",
            opts.path.display()
        );
        exit(1);
    }
    let location = std::fs::canonicalize(&opts.path)
        .with_context(|| format!("resolving {}", opts.path.display()))?;

    let detector = HiddenDetector::current();
    let include_hidden = opts.all;
    if !include_hidden && detector.is_hidden(&location) {
        eprintln!(
            "Not counting any files, because {} has hidden folders.\n\
             Use the --all argument to include them.",
            location.display()
        );
        exit(1);
    }

    let recursive = !opts.no_recursion;
    let width = output::term_width();
    // default preview budget: five lines of the current terminal
    let preview_size = opts.preview_size.unwrap_or(5 * width);

    match opts.file_extension.as_deref() {
        Some(raw) => {
            let spec = Spec::parse(raw);
            if opts.preview && !preview::spec_supports_preview(&spec) {
                eprintln!(
                    "Sorry, there is no preview available for this file type. \
                     You may want to try again without preview.\n{}",
                    supported_types_message()
                );
                exit(1);
            }
            if !opts.json {
                println!(
                    "\n{}\n",
                    output::start_message(
                        Some(&spec),
                        opts.case_sensitive,
                        recursive,
                        include_hidden,
                        &location
                    )
                );
            }

            let case_sensitive = opts.case_sensitive;
            let stream = walk::walk(&location, recursive, include_hidden, detector)
                .filter(move |p| spec.matches(p, case_sensitive));
            // feedback only makes sense when there is no per-file listing
            let feedback = opts.no_list && !opts.no_feedback && !opts.json;
            let stream = with_feedback(stream, feedback, width);

            let result = search::collect(stream, opts.file_sizes);
            if feedback {
                output::clear_feedback(width);
            }
            if opts.json {
                output::print_search_json(&result);
            } else {
                output::print_search(
                    &result,
                    !opts.no_list,
                    opts.preview && !opts.no_list,
                    preview_size,
                );
            }
        }
        None => {
            if !opts.json {
                println!(
                    "\n{}\n",
                    output::start_message(
                        None,
                        opts.case_sensitive,
                        recursive,
                        include_hidden,
                        &location
                    )
                );
            }

            let feedback = !opts.no_feedback && !opts.json;
            let stream = with_feedback(
                walk::walk(&location, recursive, include_hidden, detector),
                feedback,
                width,
            );
            let map = count::count_extensions(stream, opts.case_sensitive);
            if feedback {
                output::clear_feedback(width);
            }

            let pairs = if opts.sort_alpha {
                map.sorted_alpha()
            } else {
                map.most_common()
            };
            let total = map.total();

            if opts.json {
                output::print_counts_json(&pairs, total);
            } else if opts.group {
                output::print_grouped(&groups::group(&pairs));
            } else if opts.no_table {
                if total == 0 {
                    println!("No files were found in the specified directory.\n");
                } else {
                    println!("   Found {total} file(s).\n");
                }
            } else {
                output::print_table(&pairs, total);
            }
        }
    }

    Ok(())
}

/// Wrap the walk stream with the one-line operating indicator when wanted.
fn with_feedback(
    stream: impl Iterator<Item = PathBuf> + 'static,
    enabled: bool,
    width: usize,
) -> Box<dyn Iterator<Item = PathBuf>> {
    if enabled {
        Box::new(stream.inspect(move |p| output::feedback_line(p, width)))
    } else {
        Box::new(stream)
    }
}
