// src/utils/report_debug.rs
use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::extractors::grammar::grammar_patterns;
use crate::utils::error::AppError;

/// A matched span of the report: byte range plus section kind.
pub type Highlight<'a> = (usize, usize, &'a str);

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Finds every span of `text` that a section pattern matches, sorted by position.
pub fn find_highlights(text: &str) -> Vec<Highlight<'static>> {
    let mut highlights = Vec::new();
    for (kind, re) in grammar_patterns() {
        for mat in re.find_iter(text) {
            highlights.push((mat.start(), mat.end(), kind));
        }
    }
    highlights.sort_by_key(|h| h.0);
    highlights
}

/// Renders the report as HTML with each highlight wrapped in a colored span.
/// Spans overlapping an earlier highlight are dropped.
pub fn render_debug_html(text: &str, highlights: &[Highlight]) -> String {
    let mut debug_html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<style>\n");

    // CSS for highlight colors
    debug_html.push_str("body { white-space: pre-wrap; font-family: monospace; }\n");
    debug_html.push_str(".highlight-structural { background-color: #FFFF00; }\n");
    debug_html.push_str(".highlight-sector { background-color: #90EE90; }\n");
    debug_html.push_str(".highlight-collarette { background-color: #ADD8E6; }\n");
    debug_html.push_str(".highlight-interpretation { background-color: #FFA500; }\n");
    debug_html.push_str(".highlight-custom { background-color: #FFC0CB; }\n");
    debug_html.push_str("</style>\n</head>\n<body>\n");

    let mut last_pos = 0;
    for &(start, end, kind) in highlights {
        if start < last_pos {
            tracing::trace!("Dropping overlapping {} highlight at {}-{}", kind, start, end);
            continue;
        }

        debug_html.push_str(&escape_html(&text[last_pos..start]));

        let css_class = match kind {
            "structural" => "highlight-structural",
            "sector" => "highlight-sector",
            "collarette" => "highlight-collarette",
            "interpretation" => "highlight-interpretation",
            _ => "highlight-custom",
        };

        debug_html.push_str(&format!(
            "<span class=\"{}\" title=\"Position: {}-{}, Type: {}\">",
            css_class, start, end, kind
        ));
        debug_html.push_str(&escape_html(&text[start..end]));
        debug_html.push_str("</span>");

        last_pos = end;
    }

    if last_pos < text.len() {
        debug_html.push_str(&escape_html(&text[last_pos..]));
    }

    debug_html.push_str("\n</body>\n</html>");
    debug_html
}

/// Writes an annotated copy of the report showing what each section pattern matched
pub fn create_debug_html<P: AsRef<Path>>(text: &str, filename: P) -> Result<(), AppError> {
    let path = filename.as_ref();
    let highlights = find_highlights(text);
    tracing::debug!("Annotating {} grammar matches", highlights.len());

    let mut file = File::create(path)?;
    file.write_all(render_debug_html(text, &highlights).as_bytes())?;

    tracing::info!("Saved debug HTML to {}", path.display());
    Ok(())
}
