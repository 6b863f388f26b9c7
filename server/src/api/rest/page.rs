//! HTML rendering for the listing page.

use crate::disk::{FileEntry, ResourceKind};
use axum::response::Html;
use std::fmt::Write;

/// Render the form, then either the error, the file list, or nothing.
pub fn render_listing(
    title: &str,
    submitted: &str,
    files: &[FileEntry],
    error: Option<&str>,
) -> Html<String> {
    let mut html = String::with_capacity(2048);
    let title = escape_html(title);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<h1>{title}</h1>
<form method="post" action="/">
<label for="id_public_key">Public link</label>
<input type="text" name="public_key" id="id_public_key" maxlength="{max}" required placeholder="Enter a public link" value="{value}">
<button type="submit">Show files</button>
</form>
"#,
        max = super::types::PUBLIC_KEY_MAX_LEN,
        value = escape_html(submitted),
    );

    if let Some(error) = error {
        let _ = writeln!(html, r#"<p class="error">{}</p>"#, escape_html(error));
    }

    if !files.is_empty() {
        html.push_str("<ul class=\"files\">\n");
        for file in files {
            let name = escape_html(&file.name);
            let class = file.kind.as_str();
            match file.kind {
                ResourceKind::File => {
                    let _ = writeln!(
                        html,
                        r#"<li class="{}"><a href="{}">{}</a></li>"#,
                        class,
                        escape_html(&download_href(&file.path)),
                        name
                    );
                }
                ResourceKind::Dir => {
                    let _ = writeln!(html, r#"<li class="{}">{}/</li>"#, class, name);
                }
            }
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</body>\n</html>\n");
    Html(html)
}

/// Link to the download proxy for a disk path
pub fn download_href(path: &str) -> String {
    // Keep separators readable; everything else outside the unreserved set is encoded
    let encoded = percent_encode(path, |b| {
        b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~' | b'/' | b':')
    });
    format!("/download/{}/", encoded)
}

pub fn percent_encode(input: &str, keep: impl Fn(u8) -> bool) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        if keep(b) {
            out.push(b as char);
        } else {
            let _ = write!(out, "%{:02X}", b);
        }
    }
    out
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
