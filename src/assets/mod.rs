//! Read-only asset bundles addressed by relative path.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::{Component, Path, PathBuf};

pub trait AssetReader {
    fn open(&self, path: &str) -> io::Result<Box<dyn BufRead + '_>>;

    /// Reads an asset line by line, appending `'\n'` after every line.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line. The result ends with a
    /// newline whenever the asset is non-empty, even if the stored text did not.
    fn read_text(&self, path: &str) -> io::Result<String> {
        let mut raw = String::new();
        self.open(path)?.read_to_string(&mut raw)?;

        let mut text = String::with_capacity(raw.len() + 1);
        let mut rest = raw.as_str();
        while !rest.is_empty() {
            match rest.find(|c: char| c == '\r' || c == '\n') {
                Some(end) => {
                    text.push_str(&rest[..end]);
                    text.push('\n');
                    let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                    rest = &rest[end + terminator..];
                }
                None => {
                    text.push_str(rest);
                    text.push('\n');
                    break;
                }
            }
        }
        Ok(text)
    }
}

impl<A: AssetReader + ?Sized> AssetReader for &A {
    fn open(&self, path: &str) -> io::Result<Box<dyn BufRead + '_>> {
        (**self).open(path)
    }
}

/// Assets stored under a directory on disk.
#[derive(Debug, Clone)]
pub struct DirAssetBundle {
    root: PathBuf,
}

impl DirAssetBundle {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a bundle path onto the filesystem; paths may not leave the root.
    pub fn resolve(&self, path: &str) -> io::Result<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || path.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Asset path must be relative to the bundle: {:?}", path),
            ));
        }
        Ok(self.root.join(relative))
    }
}

impl AssetReader for DirAssetBundle {
    fn open(&self, path: &str) -> io::Result<Box<dyn BufRead + '_>> {
        let file = File::open(self.resolve(path)?)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Assets held in memory, e.g. sources embedded with `include_str!`.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetBundle {
    assets: HashMap<String, String>,
}

impl MemoryAssetBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.assets.insert(path.into(), text.into());
    }
}

impl AssetReader for MemoryAssetBundle {
    fn open(&self, path: &str) -> io::Result<Box<dyn BufRead + '_>> {
        match self.assets.get(path) {
            Some(text) => Ok(Box::new(Cursor::new(text.as_bytes()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Asset not found: {}", path),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_text_appends_newlines() {
        let bundle = MemoryAssetBundle::new()
            .with("a.vert", "line one\nline two")
            .with("b.frag", "line one\r\nline two\n")
            .with("empty.frag", "");

        assert_eq!(bundle.read_text("a.vert").unwrap(), "line one\nline two\n");
        assert_eq!(bundle.read_text("b.frag").unwrap(), "line one\nline two\n");
        assert_eq!(bundle.read_text("empty.frag").unwrap(), "");
    }

    #[test]
    fn test_read_text_splits_on_carriage_returns() {
        let bundle = MemoryAssetBundle::new()
            .with("old_mac.vert", "x\ry")
            .with("mixed.frag", "a\r\n\r\nb\rc\n\n");

        assert_eq!(bundle.read_text("old_mac.vert").unwrap(), "x\ny\n");
        assert_eq!(bundle.read_text("mixed.frag").unwrap(), "a\n\nb\nc\n\n");
    }

    #[test]
    fn test_missing_asset_is_not_found() {
        let bundle = MemoryAssetBundle::new();
        let err = bundle.read_text("missing.vert").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_dir_bundle_reads_nested_assets() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("shaders")).unwrap();
        fs::write(dir.path().join("shaders/basic.vert"), "attribute vec4 pos;").unwrap();

        let bundle = DirAssetBundle::new(dir.path());
        assert_eq!(bundle.read_text("shaders/basic.vert").unwrap(), "attribute vec4 pos;\n");
        assert_eq!(
            bundle.read_text("shaders/other.vert").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }

    #[test]
    fn test_dir_bundle_rejects_escaping_paths() {
        let bundle = DirAssetBundle::new("assets");
        for path in ["../secret.vert", "/etc/passwd", "shaders/../../x.frag", ""] {
            assert_eq!(
                bundle.resolve(path).unwrap_err().kind(),
                io::ErrorKind::InvalidInput,
                "{}",
                path
            );
        }
        assert_eq!(
            bundle.resolve("./shaders/basic.vert").unwrap(),
            Path::new("assets").join("./shaders/basic.vert")
        );
    }
}
