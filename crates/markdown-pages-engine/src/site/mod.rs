//! # Site Generation
//!
//! Everything around the conversion core that touches the filesystem: page
//! templates, base-path rewriting, walking the content tree, and syncing the
//! static asset directory. The parsing modules never call into this one.

pub mod assets;

use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MarkdownError;
use crate::html::{extract_title, serialize};
use crate::parsing::convert;

pub use assets::{AssetSync, FsAssetSync};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to render {path}: {source}")]
    Markdown {
        path: PathBuf,
        source: MarkdownError,
    },
    #[error("Source directory not found: {0}")]
    MissingSource(PathBuf),
    #[error("Path is not relative to its root: {0}")]
    InvalidPath(PathBuf),
}

impl SiteError {
    fn io(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
        move |source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Fills the title and content placeholders of a page template.
pub fn render_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Prefixes root-relative `href` and `src` attributes with `base_path`.
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    html.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}

/// Renders Markdown pages into a fixed HTML template.
#[derive(Debug, Clone)]
pub struct PageGenerator {
    template: String,
    base_path: String,
}

impl PageGenerator {
    pub fn new(template: impl Into<String>, base_path: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            base_path: base_path.into(),
        }
    }

    pub fn from_template_file(
        template_path: &Path,
        base_path: impl Into<String>,
    ) -> Result<Self, SiteError> {
        let template = fs::read_to_string(template_path).map_err(SiteError::io(template_path))?;
        Ok(Self::new(template, base_path))
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Converts one Markdown document into a complete page.
    ///
    /// The document must contain an `h1`; its text becomes the page title.
    pub fn render(&self, markdown: &str) -> Result<String, MarkdownError> {
        let html = serialize(&convert(markdown)?)?;
        let html = rewrite_base_path(&html, &self.base_path);
        let title = extract_title(&html)?;
        Ok(render_template(&self.template, &title, &html))
    }

    /// Renders `from` and writes the page to `dest`, creating parent
    /// directories as needed.
    pub fn generate_page(&self, from: &Path, dest: &Path) -> Result<(), SiteError> {
        log::info!(
            "Generating page from {} to {}",
            from.display(),
            dest.display()
        );
        let markdown = fs::read_to_string(from).map_err(SiteError::io(from))?;
        let page = self.render(&markdown).map_err(|source| SiteError::Markdown {
            path: from.to_path_buf(),
            source,
        })?;

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(SiteError::io(parent))?;
        }
        fs::write(dest, page).map_err(SiteError::io(dest))
    }

    /// Generates one `.html` page per Markdown file under `content_root`,
    /// mirroring the directory layout under `output_root`.
    ///
    /// Returns the number of pages written. Stops at the first failure.
    pub fn generate_tree(&self, content_root: &Path, output_root: &Path) -> Result<usize, SiteError> {
        let pages = scan_pages(content_root)?;
        for page in &pages {
            let from = page.to_path(content_root);
            let dest = page.with_extension("html").to_path(output_root);
            self.generate_page(&from, &dest)?;
        }
        Ok(pages.len())
    }
}

/// Scan for markdown files under `content_root`, as sorted relative paths.
pub fn scan_pages(content_root: &Path) -> Result<Vec<RelativePathBuf>, SiteError> {
    if !content_root.is_dir() {
        return Err(SiteError::MissingSource(content_root.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();

    files
        .into_iter()
        .map(|path| {
            let relative = path
                .strip_prefix(content_root)
                .map_err(|_| SiteError::InvalidPath(path.clone()))?;
            RelativePathBuf::from_path(relative).map_err(|_| SiteError::InvalidPath(path.clone()))
        })
        .collect()
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    let entries = fs::read_dir(dir).map_err(SiteError::io(dir))?;

    for entry in entries {
        let entry = entry.map_err(SiteError::io(dir))?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        } else {
            log::debug!("Skipping non-markdown file {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str = "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

    #[test]
    fn test_template_placeholders_are_replaced() {
        assert_eq!(
            render_template("{{ Title }}|{{ Content }}|{{ Title }}", "T", "C"),
            "T|C|T"
        );
    }

    #[test]
    fn test_base_path_prefixes_root_relative_urls() {
        // Given HTML with root-relative and absolute URLs
        let html = r#"<a href="/blog">b</a><img src="/a.png" alt=""></img><a href="https://x.org">x</a>"#;

        // When rewriting for a sub-path deployment
        let rewritten = rewrite_base_path(html, "/docs/");

        // Then only the root-relative URLs change
        assert_eq!(
            rewritten,
            r#"<a href="/docs/blog">b</a><img src="/docs/a.png" alt=""></img><a href="https://x.org">x</a>"#
        );
    }

    #[test]
    fn test_base_path_root_is_identity() {
        let html = r#"<a href="/blog">b</a>"#;
        assert_eq!(rewrite_base_path(html, "/"), html);
    }

    #[test]
    fn test_render_page() {
        // Given a generator with a base path
        let generator = PageGenerator::new(TEMPLATE, "/site/");

        // When rendering a document with a title and a link
        let page = generator.render("# Hello\n\n[home](/)").unwrap();

        // Then the title, body and rewritten link land in the template
        assert_eq!(
            page,
            "<html><head><title>Hello</title></head><body><div><h1>Hello</h1>\n<p><a href=\"/site/\">home</a></p>\n</div>\n</body></html>"
        );
    }

    #[test]
    fn test_render_without_title_fails() {
        let generator = PageGenerator::new(TEMPLATE, "/");
        let err = generator.render("no heading here").unwrap_err();
        assert!(matches!(err, MarkdownError::Title(_)));
    }

    #[test]
    fn test_render_propagates_inline_errors() {
        let generator = PageGenerator::new(TEMPLATE, "/");
        let err = generator.render("# Title\n\n**open").unwrap_err();
        assert!(matches!(err, MarkdownError::Inline(_)));
    }

    #[test]
    fn test_scan_finds_nested_markdown_only() {
        // Given a content directory with nested pages and a non-markdown file
        let dir = create_test_dir();
        create_test_file(&dir, "index.md", "# Root");
        create_test_file(&dir, "blog/post.md", "# Post");
        create_test_file(&dir, "blog/image.png", "not markdown");

        // When scanning for pages
        let pages = scan_pages(dir.path()).unwrap();

        // Then only the markdown files are found, sorted
        assert_eq!(
            pages,
            vec![
                RelativePathBuf::from("blog/post.md"),
                RelativePathBuf::from("index.md"),
            ]
        );
    }

    #[test]
    fn test_scan_missing_directory() {
        let result = scan_pages(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(SiteError::MissingSource(_))));
    }

    #[test]
    fn test_generate_tree_mirrors_layout() {
        // Given a content tree two levels deep
        let content = create_test_dir();
        let output = create_test_dir();
        create_test_file(&content, "index.md", "# Home\n\n![logo](/logo.png)");
        create_test_file(&content, "blog/first/index.md", "# First post");

        // When generating the whole tree
        let generator = PageGenerator::new(TEMPLATE, "/");
        let count = generator.generate_tree(content.path(), output.path()).unwrap();

        // Then every page is written at the mirrored path
        assert_eq!(count, 2);
        let index = fs::read_to_string(output.path().join("index.html")).unwrap();
        assert!(index.contains("<title>Home</title>"));
        assert!(index.contains(r#"<img src="/logo.png" alt="logo"></img>"#));

        let post = fs::read_to_string(output.path().join("blog/first/index.html")).unwrap();
        assert!(post.contains("<title>First post</title>"));
    }

    #[test]
    fn test_generate_page_reports_failing_file() {
        // Given a page without a title
        let content = create_test_dir();
        let output = create_test_dir();
        let from = create_test_file(&content, "broken.md", "no title");

        // When generating it
        let generator = PageGenerator::new(TEMPLATE, "/");
        let err = generator
            .generate_page(&from, &output.path().join("broken.html"))
            .unwrap_err();

        // Then the error names the source file
        match err {
            SiteError::Markdown { path, .. } => assert_eq!(path, from),
            other => panic!("expected Markdown error, got {other:?}"),
        }
    }

    #[test]
    fn test_template_file_is_read() {
        let dir = create_test_dir();
        let template = create_test_file(&dir, "template.html", TEMPLATE);
        let generator = PageGenerator::from_template_file(&template, "/").unwrap();
        assert_eq!(generator.base_path(), "/");
        assert!(generator.render("# T").unwrap().starts_with("<html>"));
    }

    #[test]
    fn test_missing_template_file() {
        let result = PageGenerator::from_template_file(Path::new("/nope/template.html"), "/");
        assert!(matches!(result, Err(SiteError::Io { .. })));
    }
}
