//! Filesystem capability for fontcopy-core (made by FontLab https://www.fontlab.com/)

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

/// One item found directly inside a listed directory.
#[derive(Debug)]
pub struct FontEntry {
    pub path: PathBuf,
    pub file_name: OsString,
    pub is_file: bool,
    /// Set when the entry could not be inspected, e.g. a dangling symlink.
    pub error: Option<io::Error>,
}

/// The filesystem operations a copy run needs.
///
/// [`DiskFs`] talks to the real filesystem; [`MemoryFs`] keeps everything in
/// memory so the copier can be exercised without touching disk.
pub trait FontFs {
    fn is_dir(&self, path: &Path) -> bool;

    fn exists(&self, path: &Path) -> bool;

    /// Entries directly under `path`, sorted by file name. Never recurses.
    fn list_dir(&self, path: &Path, follow_symlinks: bool) -> io::Result<Vec<FontEntry>>;

    /// Copy `src` to `dst`, returning the number of bytes written.
    fn copy_file(&self, src: &Path, dst: &Path, overwrite: bool) -> io::Result<u64>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFs;

impl FontFs for DiskFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &Path, follow_symlinks: bool) -> io::Result<Vec<FontEntry>> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(follow_symlinks)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // A dangling symlink is handed on so the copier decides its fate.
                Err(err) if err.depth() > 0 => {
                    let path = match err.path() {
                        Some(path) => path.to_path_buf(),
                        None => return Err(err.into()),
                    };
                    warn!("unreadable entry: {err}");
                    entries.push(FontEntry {
                        file_name: path.file_name().map(OsStr::to_os_string).unwrap_or_default(),
                        path,
                        is_file: false,
                        error: Some(err.into()),
                    });
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            entries.push(FontEntry {
                path: entry.path().to_path_buf(),
                file_name: entry.file_name().to_os_string(),
                is_file: entry.file_type().is_file(),
                error: None,
            });
        }

        Ok(entries)
    }

    fn copy_file(&self, src: &Path, dst: &Path, overwrite: bool) -> io::Result<u64> {
        if !overwrite && dst.exists() {
            return Err(already_exists(dst));
        }
        std::fs::copy(src, dst)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Dir,
    File(Vec<u8>),
    Broken,
}

/// In-memory filesystem for tests.
///
/// Adding a file registers its ancestors as directories. Copies of paths
/// passed to [`MemoryFs::fail_copy_of`] fail with `PermissionDenied`, and
/// [`MemoryFs::with_broken_link`] entries list with a `NotFound` error.
#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
    failing: BTreeSet<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.add_ancestors(&path);
        self.nodes.borrow_mut().insert(path, Node::Dir);
        self
    }

    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        let path = path.into();
        self.add_ancestors(&path);
        self.nodes
            .borrow_mut()
            .insert(path, Node::File(contents.into()));
        self
    }

    /// An entry that shows up in listings but cannot be read, like a dangling symlink.
    pub fn with_broken_link(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.add_ancestors(&path);
        self.nodes.borrow_mut().insert(path, Node::Broken);
        self
    }

    pub fn fail_copy_of(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    /// Contents of the file at `path`, if there is one.
    pub fn read(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.nodes.borrow().get(path.as_ref()) {
            Some(Node::File(bytes)) => Some(bytes.clone()),
            _ => None,
        }
    }

    /// File names directly under `dir`, sorted.
    pub fn file_names(&self, dir: impl AsRef<Path>) -> Vec<String> {
        let dir = dir.as_ref();
        self.nodes
            .borrow()
            .iter()
            .filter(|(path, node)| matches!(node, Node::File(_)) && path.parent() == Some(dir))
            .filter_map(|(path, _)| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }

    fn add_ancestors(&self, path: &Path) {
        let mut nodes = self.nodes.borrow_mut();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }
}

impl FontFs for MemoryFs {
    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.nodes.borrow().get(path), Some(Node::Dir))
    }

    fn exists(&self, path: &Path) -> bool {
        matches!(
            self.nodes.borrow().get(path),
            Some(Node::Dir | Node::File(_))
        )
    }

    fn list_dir(&self, path: &Path, _follow_symlinks: bool) -> io::Result<Vec<FontEntry>> {
        if !self.is_dir(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a directory", path.display()),
            ));
        }

        // BTreeMap iteration keeps siblings in file-name order.
        let entries = self
            .nodes
            .borrow()
            .iter()
            .filter(|(child, _)| child.parent() == Some(path))
            .filter_map(|(child, node)| {
                child.file_name().map(|name| FontEntry {
                    path: child.clone(),
                    file_name: name.to_os_string(),
                    is_file: matches!(node, Node::File(_)),
                    error: matches!(node, Node::Broken).then(|| {
                        io::Error::new(
                            io::ErrorKind::NotFound,
                            format!("dangling entry: {}", child.display()),
                        )
                    }),
                })
            })
            .collect();

        Ok(entries)
    }

    fn copy_file(&self, src: &Path, dst: &Path, overwrite: bool) -> io::Result<u64> {
        if self.failing.contains(src) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", src.display()),
            ));
        }

        let contents = self.read(src).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", src.display()),
            )
        })?;

        let parent_is_dir = dst.parent().map(|p| self.is_dir(p)).unwrap_or(false);
        if !parent_is_dir {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory for {}", dst.display()),
            ));
        }

        let mut nodes = self.nodes.borrow_mut();
        match nodes.get(dst) {
            Some(Node::Dir) => {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    format!("{} is a directory", dst.display()),
                ))
            }
            Some(Node::File(_)) if !overwrite => return Err(already_exists(dst)),
            _ => {}
        }

        let len = contents.len() as u64;
        nodes.insert(dst.to_path_buf(), Node::File(contents));
        Ok(len)
    }
}

pub(crate) fn already_exists(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("{} already exists", path.display()),
    )
}
