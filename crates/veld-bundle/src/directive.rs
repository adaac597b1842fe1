//! `<EXCLUSIVE>` directive filtering for UI component sources.
//!
//! A component file may wrap a region in `<EXCLUSIVE OF="...">` and
//! `</EXCLUSIVE>` delimiters to restrict it to certain platforms. The
//! `OF` attribute lists whitespace-separated raw platform names (`*`
//! included); each is run through [`PlatformTag::normalize`] and the
//! region survives a build when any resulting tag accepts the target.
//! Delimiter lines never reach the output. Regions are flat: an opening
//! delimiter inside a region is given no meaning.

use std::path::Path;

use veld_platform::PlatformTag;

use crate::error::{BundleError, Result};

const OPEN_MARKER: &str = "<EXCLUSIVE";
const CLOSE_MARKER: &str = "</EXCLUSIVE";

/// File extensions of UI component sources subject to filtering.
const COMPONENT_EXTENSIONS: [&str; 4] = ["jsx", "tsx", "astro", "svelte"];

/// Whether `path` is a UI component source that may carry directives.
pub fn is_component_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| COMPONENT_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Filter the platform-exclusive regions of `source` for a build target.
///
/// Lines outside directives pass through untouched. `path` is used only
/// for error reporting. Fails with [`BundleError::UnclosedDirective`]
/// when an opening delimiter has no matching `</EXCLUSIVE>`.
pub fn filter_source(source: &str, target: PlatformTag, path: &Path) -> Result<String> {
    let mut out = String::with_capacity(source.len());
    let mut lines = source.split_inclusive('\n').enumerate();

    while let Some((index, line)) = lines.next() {
        let Some(open_at) = line.find(OPEN_MARKER) else {
            out.push_str(line);
            continue;
        };
        let opened_line = index + 1;

        // Gather the opening tag text, which may span lines up to its '>'.
        let mut opener = String::new();
        let mut tail = String::new();
        let rest = &line[open_at + OPEN_MARKER.len()..];
        match rest.find('>') {
            Some(gt) => {
                opener.push_str(&rest[..gt]);
                tail.push_str(&rest[gt + 1..]);
            }
            None => {
                opener.push_str(rest);
                loop {
                    let Some((_, next)) = lines.next() else {
                        return Err(BundleError::UnclosedDirective {
                            path: path.to_path_buf(),
                            line: opened_line,
                        });
                    };
                    if let Some(gt) = next.find('>') {
                        opener.push_str(&next[..gt]);
                        tail.push_str(&next[gt + 1..]);
                        break;
                    }
                    opener.push_str(next);
                }
            }
        }

        let keep = directive_accepts(&opener, target);

        // Region opened and closed on the same line.
        if let Some(close) = tail.find(CLOSE_MARKER) {
            if keep {
                out.push_str(&tail[..close]);
                if tail.ends_with('\n') {
                    out.push('\n');
                }
            }
            continue;
        }

        // Body runs until the line carrying the closing delimiter.
        let mut closed = false;
        for (_, body_line) in lines.by_ref() {
            if body_line.contains(CLOSE_MARKER) {
                closed = true;
                break;
            }
            if keep {
                out.push_str(body_line);
            }
        }
        if !closed {
            return Err(BundleError::UnclosedDirective {
                path: path.to_path_buf(),
                line: opened_line,
            });
        }
    }

    Ok(out)
}

/// Whether the opening tag's platform list accepts the target.
///
/// A directive with no `OF` attribute accepts every target.
fn directive_accepts(opener: &str, target: PlatformTag) -> bool {
    let Some(list) = attribute_value(opener, "OF") else {
        return true;
    };
    list.split_whitespace()
        .map(PlatformTag::normalize)
        .any(|tag| tag.matches(target))
}

/// Extract a double-quoted attribute value from tag text.
fn attribute_value<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let at = text.find(name)?;
    let rest = text[at + name.len()..].trim_start().strip_prefix('=')?;
    let rest = rest.trim_start().strip_prefix('"')?;
    let end = rest.find('"')?;
    Some(&rest[..end])
}
