//! Coarse classification of extensions into categories for grouped reports.

/// Category names in rendering order. `other` is reserved for unmatched
/// extensions and only appears in a result when at least one exists.
pub const CATEGORIES: &[&str] = &[
    "archives",
    "audio",
    "audio/video",
    "data",
    "documents",
    "executables",
    "fonts",
    "images",
    "python",
    "videos",
];

pub const OTHER: &str = "other";

/// Static lookup: lowercased extension name → category.
pub fn category_for(ext: &str) -> Option<&'static str> {
    let lower = ext.to_ascii_lowercase();
    let cat = match lower.as_str() {
        "7z" | "arc" | "arj" | "bz" | "bz2" | "bzip2" | "cab" | "dar" | "gz" | "gzip"
        | "jar" | "lz" | "lzma" | "rar" | "shar" | "shr" | "tar" | "tbz" | "tbz2" | "tg"
        | "tgz" | "txz" | "xz" | "zip" | "zipx" => "archives",

        "aac" | "aif" | "aiff" | "amr" | "cda" | "flac" | "mp1" | "mp2" | "mp3" | "m4a"
        | "mid" | "midi" | "mka" | "mpa" | "oga" | "wav" | "wave" | "wma" => "audio",

        // container formats that can hold either
        "3gp" | "3gp2" | "3gpp" | "3gpp2" | "mp4" | "mpeg" | "mpg" | "ogg" | "webm" => {
            "audio/video"
        }

        "accdb" | "accdc" | "accde" | "csv" | "dat" | "data" | "database" | "db" | "dbf"
        | "ini" | "cfg" | "conf" | "geojson" | "json" | "log" | "mdb" | "mysql" | "numbers"
        | "odb" | "ods" | "pdb" | "sqlite" | "sqlite3" | "sqlitedb" | "topojson" | "torrent"
        | "tsv" | "wndb" | "xls" | "xlsx" | "xml" | "yaml" | "yml" => "data",

        "abw" | "bib" | "bibtex" | "epub" | "latex" | "ltx" | "markdn" | "markdown" | "md"
        | "mdown" | "pdf" | "pub" | "rst" | "rtf" | "tex" | "text" | "txt" | "doc" | "docx"
        | "odp" | "ott" | "ppt" | "pptx" => "documents",

        "action" | "apk" | "app" | "applescript" | "application" | "appref-ms" | "ba_"
        | "bash" | "bat" | "bin" | "bsh" | "cmd" | "com" | "command" | "csh" | "deb" | "elf"
        | "ex_" | "exe" | "ipa" | "ksh" | "mpkg" | "msi" | "ps1" | "ps2" | "psc1" | "psc2"
        | "run" | "sh" | "tcsh" | "vbe" | "vbs" | "workflow" | "wsf" | "zsh" | "a" | "dll"
        | "lib" | "o" | "so" => "executables",

        "fon" | "font" | "ttf" | "woff" | "woff2" => "fonts",

        "apng" | "bmp" | "dib" | "djv" | "djvu" | "gif" | "ico" | "icon" | "jfif" | "jpeg"
        | "jpg" | "pic" | "pict" | "pjp" | "pjpeg" | "pjpg" | "png" | "raw" | "svg" | "svgz"
        | "tif" | "tiff" => "images",

        "egg" | "egg-info" | "egg-link" | "epp" | "ipy" | "ipynb" | "npy" | "npz" | "oog"
        | "p4a" | "pck" | "pcl" | "pickle" | "pil" | "pth" | "pxd" | "pxi" | "py" | "py2"
        | "py3" | "py3tb" | "pyc" | "pyd" | "pyde" | "pyi" | "pym" | "pyo" | "pyp"
        | "pyproj" | "pyt" | "pytb" | "pyw" | "pyx" | "pyz" | "pyzw" | "rpy" | "whl" => {
            "python"
        }

        "asf" | "avchd" | "avi" | "flv" | "h264" | "m4v" | "mkv" | "mov" | "mpv" | "ogm"
        | "ogv" | "ogx" | "rm" | "rmvb" | "qt" | "qtff" | "swf" | "vob" | "wmv" => "videos",

        _ => return None,
    };
    Some(cat)
}

/// Category sections in a stable order, each holding its (token, count)
/// pairs in the order they appeared in the input.
#[derive(Debug)]
pub struct GroupedCounts {
    pub sections: Vec<(String, Vec<(String, u64)>)>,
}

impl GroupedCounts {
    /// Sum of all counts across every section.
    pub fn total(&self) -> u64 {
        self.sections
            .iter()
            .flat_map(|(_, pairs)| pairs.iter().map(|(_, n)| n))
            .sum()
    }
}

/// Assign each pair to its category. Every category from the table is present
/// even when empty so consumers can render a stable set of section headers;
/// `other` is appended last only if something fell through the table.
pub fn group(pairs: &[(String, u64)]) -> GroupedCounts {
    let mut sections: Vec<(String, Vec<(String, u64)>)> = CATEGORIES
        .iter()
        .map(|c| (c.to_string(), Vec::new()))
        .collect();
    let mut other: Vec<(String, u64)> = Vec::new();

    for (token, count) in pairs {
        match category_for(token) {
            Some(cat) => {
                let slot = sections
                    .iter_mut()
                    .find(|(name, _)| name == cat)
                    .expect("category_for only returns names from CATEGORIES");
                slot.1.push((token.clone(), *count));
            }
            None => other.push((token.clone(), *count)),
        }
    }

    if !other.is_empty() {
        sections.push((OTHER.to_string(), other));
    }
    GroupedCounts { sections }
}
