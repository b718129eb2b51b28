//! Directory listing module
//!
//! Renders the fallback HTML index shown when a directory has no index
//! file: a title line, one link per entry, directories marked with a
//! trailing slash.

use crate::http::percent;
use std::io;
use std::path::Path;
use tokio::fs;

/// One row in a directory listing
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Read directory entries, sorted by name
pub async fn collect_entries(dir: &Path) -> io::Result<Vec<ListingEntry>> {
    let mut read_dir = fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = read_dir.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false);
        entries.push(ListingEntry { name, is_dir });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Render the listing page for `display_path` (the decoded request path)
pub fn render(display_path: &str, entries: &[ListingEntry]) -> String {
    let title = format!("Directory listing for {}", escape_html(display_path));

    let mut items = String::new();
    for entry in entries {
        let slash = if entry.is_dir { "/" } else { "" };
        items.push_str(&format!(
            "        <li><a href=\"{}{slash}\">{}{slash}</a></li>\n",
            percent::encode(&entry.name),
            escape_html(&entry.name),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
</head>
<body>
    <h1>{title}</h1>
    <hr>
    <ul>
{items}    </ul>
    <hr>
</body>
</html>
"#
    )
}

/// Escape special characters for HTML text and attribute values
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_title_and_entries() {
        let entries = vec![
            ListingEntry {
                name: "app.js".to_string(),
                is_dir: false,
            },
            ListingEntry {
                name: "css".to_string(),
                is_dir: true,
            },
        ];

        let html = render("/assets/", &entries);
        assert!(html.contains("<title>Directory listing for /assets/</title>"));
        assert!(html.contains(r#"<a href="app.js">app.js</a>"#));
        assert!(html.contains(r#"<a href="css/">css/</a>"#));
    }

    #[test]
    fn test_render_escapes_names() {
        let entries = vec![ListingEntry {
            name: "<b>&.txt".to_string(),
            is_dir: false,
        }];

        let html = render("/", &entries);
        assert!(html.contains("&lt;b&gt;&amp;.txt"));
        assert!(!html.contains("<b>&.txt"));
    }

    #[test]
    fn test_render_encodes_hrefs() {
        let entries = vec![ListingEntry {
            name: "my file.txt".to_string(),
            is_dir: false,
        }];

        let html = render("/", &entries);
        assert!(html.contains(r#"href="my%20file.txt""#));
    }

    #[test]
    fn test_render_empty_directory() {
        let html = render("/empty/", &[]);
        assert!(html.contains("Directory listing for /empty/"));
        assert!(html.contains("<ul>"));
    }
}
