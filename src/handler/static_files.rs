//! Static file serving module
//!
//! Maps request paths onto the serving root: percent-decoding, traversal
//! protection, index file lookup, directory listings and error mapping.

use crate::config::ServerState;
use crate::handler::listing;
use crate::http::{self, mime, percent};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

/// Outcome of resolving a request path against the serving root
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Serve this file
    File(PathBuf),
    /// Render a listing of this directory
    Listing(PathBuf),
    /// Directory requested without a trailing slash
    DirectoryRedirect,
    NotFound,
    Forbidden,
}

/// Serve a GET/HEAD request for `request_path`
pub async fn serve(
    state: &Arc<ServerState>,
    request_path: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let decoded = percent::decode(request_path);

    match resolve(&state.root, &decoded, &state.config.files.index_files) {
        Resolution::File(file_path) => match fs::read(&file_path).await {
            Ok(content) => {
                let content_type =
                    mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
                http::build_file_response(&content, content_type, is_head)
            }
            Err(e) => error_response(&e, &file_path),
        },
        Resolution::Listing(dir_path) => match listing::collect_entries(&dir_path).await {
            Ok(entries) => http::build_html_response(listing::render(&decoded, &entries), is_head),
            Err(e) => error_response(&e, &dir_path),
        },
        // Location keeps the path as the client sent it, still encoded
        Resolution::DirectoryRedirect => {
            http::build_directory_redirect(&format!("{request_path}/"))
        }
        Resolution::NotFound => http::build_404_response(),
        Resolution::Forbidden => http::build_403_response(),
    }
}

/// Resolve a decoded request path to a filesystem target.
///
/// `root` must already be canonicalized. Canonicalizing the target resolves
/// symlinks, so links pointing outside the root are caught by the
/// containment check.
pub fn resolve(root: &Path, decoded_path: &str, index_files: &[String]) -> Resolution {
    let Some(relative) = sanitize(decoded_path) else {
        logger::log_warning(&format!("Path traversal attempt blocked: {decoded_path}"));
        return Resolution::NotFound;
    };

    let target = root.join(relative);
    let canonical = match target.canonicalize() {
        Ok(p) => p,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => return Resolution::Forbidden,
        // Missing file is the common case (404), not worth logging
        Err(_) => return Resolution::NotFound,
    };

    if !canonical.starts_with(root) {
        logger::log_warning(&format!(
            "Path escapes serving root: {} -> {}",
            decoded_path,
            canonical.display()
        ));
        return Resolution::NotFound;
    }

    if canonical.is_dir() {
        // /dir redirects to /dir/ so relative links inside the served
        // pages resolve correctly.
        if !decoded_path.ends_with('/') {
            return Resolution::DirectoryRedirect;
        }

        for index_file in index_files {
            let index_path = canonical.join(index_file);
            if index_path.is_file() {
                return Resolution::File(index_path);
            }
        }

        return Resolution::Listing(canonical);
    }

    // A trailing slash promises a directory; a file there is a miss.
    if decoded_path.ends_with('/') {
        return Resolution::NotFound;
    }

    Resolution::File(canonical)
}

/// Turn a decoded request path into a safe relative path.
///
/// Empty and `.` components collapse; any `..` component rejects the whole
/// path rather than trying to normalize it.
fn sanitize(path: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();

    for component in path.split('/') {
        match component {
            "" | "." => {}
            ".." => return None,
            c if c.contains('\0') => return None,
            c => relative.push(c),
        }
    }

    Some(relative)
}

/// Map a filesystem error onto an HTTP error response
fn error_response(error: &io::Error, path: &Path) -> Response<Full<Bytes>> {
    match error.kind() {
        io::ErrorKind::NotFound => http::build_404_response(),
        io::ErrorKind::PermissionDenied => {
            logger::log_warning(&format!("Permission denied: {}", path.display()));
            http::build_403_response()
        }
        _ => {
            logger::log_error(&format!("Failed to read '{}': {}", path.display(), error));
            http::build_500_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_plain_paths() {
        assert_eq!(sanitize("/index.html"), Some(PathBuf::from("index.html")));
        assert_eq!(sanitize("/a/b/c.txt"), Some(PathBuf::from("a/b/c.txt")));
        assert_eq!(sanitize("/"), Some(PathBuf::new()));
    }

    #[test]
    fn test_sanitize_collapses_noise() {
        assert_eq!(sanitize("//a///b/"), Some(PathBuf::from("a/b")));
        assert_eq!(sanitize("/./a/./b"), Some(PathBuf::from("a/b")));
    }

    #[test]
    fn test_sanitize_rejects_traversal() {
        assert_eq!(sanitize("/../etc/passwd"), None);
        assert_eq!(sanitize("/a/../../b"), None);
        assert_eq!(sanitize("/a/\0"), None);
    }

    mod resolve_tests {
        use super::*;
        use std::fs as std_fs;

        /// Scratch directory under the system temp dir, removed on drop
        struct Scratch {
            root: PathBuf,
        }

        impl Scratch {
            fn new(tag: &str) -> Self {
                let root = std::env::temp_dir().join(format!(
                    "nocache-server-test-{tag}-{}",
                    std::process::id()
                ));
                let _ = std_fs::remove_dir_all(&root);
                std_fs::create_dir_all(root.join("assets")).unwrap();
                std_fs::write(root.join("index.html"), "<h1>Hi</h1>").unwrap();
                std_fs::write(root.join("assets/app.js"), "console.log(1)").unwrap();
                let root = root.canonicalize().unwrap();
                Self { root }
            }
        }

        impl Drop for Scratch {
            fn drop(&mut self) {
                let _ = std_fs::remove_dir_all(&self.root);
            }
        }

        fn index_files() -> Vec<String> {
            vec!["index.html".to_string(), "index.htm".to_string()]
        }

        #[test]
        fn test_existing_file() {
            let scratch = Scratch::new("file");
            let resolution = resolve(&scratch.root, "/assets/app.js", &index_files());
            assert_eq!(
                resolution,
                Resolution::File(scratch.root.join("assets/app.js"))
            );
        }

        #[test]
        fn test_root_uses_index_file() {
            let scratch = Scratch::new("index");
            let resolution = resolve(&scratch.root, "/", &index_files());
            assert_eq!(resolution, Resolution::File(scratch.root.join("index.html")));
        }

        #[test]
        fn test_directory_without_index_lists() {
            let scratch = Scratch::new("listing");
            let resolution = resolve(&scratch.root, "/assets/", &index_files());
            assert_eq!(resolution, Resolution::Listing(scratch.root.join("assets")));
        }

        #[test]
        fn test_directory_without_slash_redirects() {
            let scratch = Scratch::new("redirect");
            let resolution = resolve(&scratch.root, "/assets", &index_files());
            assert_eq!(resolution, Resolution::DirectoryRedirect);
        }

        #[test]
        fn test_missing_path() {
            let scratch = Scratch::new("missing");
            let resolution = resolve(&scratch.root, "/nope.txt", &index_files());
            assert_eq!(resolution, Resolution::NotFound);
        }

        #[test]
        fn test_traversal_blocked() {
            let scratch = Scratch::new("traversal");
            let resolution = resolve(&scratch.root, "/../outside", &index_files());
            assert_eq!(resolution, Resolution::NotFound);
        }

        #[test]
        fn test_file_with_trailing_slash_not_found() {
            let scratch = Scratch::new("slashfile");
            let resolution = resolve(&scratch.root, "/index.html/", &index_files());
            assert_eq!(resolution, Resolution::NotFound);
        }

        #[cfg(unix)]
        #[test]
        fn test_symlink_escaping_root_blocked() {
            let scratch = Scratch::new("symlink");

            let outside = std::env::temp_dir().join(format!(
                "nocache-server-test-symlink-outside-{}",
                std::process::id()
            ));
            let _ = std_fs::remove_dir_all(&outside);
            std_fs::create_dir_all(&outside).unwrap();
            std_fs::write(outside.join("secret.txt"), "secret").unwrap();

            std::os::unix::fs::symlink(
                outside.join("secret.txt"),
                scratch.root.join("link.txt"),
            )
            .unwrap();
            std::os::unix::fs::symlink(&outside, scratch.root.join("linkdir")).unwrap();

            assert_eq!(
                resolve(&scratch.root, "/link.txt", &index_files()),
                Resolution::NotFound
            );
            assert_eq!(
                resolve(&scratch.root, "/linkdir/secret.txt", &index_files()),
                Resolution::NotFound
            );

            let _ = std_fs::remove_dir_all(&outside);
        }
    }
}
