use std::path::{Path, PathBuf};

use crate::errors::{Error, Result};
use crate::structs::{QuestionItem, Reply};

pub const SNAPSHOT_EXTENSION: &str = ".json";

pub fn tag_dir(base_dir: &Path, tag: &str) -> PathBuf {
  return base_dir.join(tag);
}

/// Lists the `*.json` page files of one tag directory, sorted by name.
pub fn list_snapshot_files(dir: &Path) -> Result<Vec<PathBuf>> {
  let entries = std::fs::read_dir(dir).map_err(|err| Error::io(dir, err))?;
  let mut files = vec![];
  for entry in entries {
    let entry = entry.map_err(|err| Error::io(dir, err))?;
    let file_name = entry.file_name();
    let is_snapshot = file_name.to_string_lossy().ends_with(SNAPSHOT_EXTENSION);
    if !is_snapshot {
      continue;
    }
    let file_type = entry.file_type().map_err(|err| Error::io(entry.path(), err))?;
    if file_type.is_dir() {
      continue;
    }
    files.push(entry.path());
  }
  files.sort();
  return Ok(files);
}

pub fn read_snapshot(path: &Path) -> Result<Reply> {
  let stringified_value = std::fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
  let reply: Reply = serde_json::from_str(&stringified_value).map_err(|err| Error::parse(path, err))?;
  return Ok(reply);
}

/// Questions of every page under `base_dir/tag`, read one page at a time.
///
/// The first failure is yielded as an `Err` and ends the sequence.
pub struct SnapshotRecords {
  files: std::vec::IntoIter<PathBuf>,
  current: std::vec::IntoIter<QuestionItem>,
  failed: bool,
}

impl SnapshotRecords {
  pub fn open(base_dir: &Path, tag: &str) -> Result<SnapshotRecords> {
    let dir = tag_dir(base_dir, tag);
    let files = list_snapshot_files(&dir)?;
    log::debug!("tag = {} dir = {} num_files = {}", tag, dir.display(), files.len());
    return Ok(SnapshotRecords {
      files: files.into_iter(),
      current: vec![].into_iter(),
      failed: false,
    });
  }
}

impl Iterator for SnapshotRecords {
  type Item = Result<QuestionItem>;

  fn next(&mut self) -> Option<Result<QuestionItem>> {
    if self.failed {
      return None;
    }
    loop {
      if let Some(item) = self.current.next() {
        return Some(Ok(item));
      }
      let path = self.files.next()?;
      match read_snapshot(&path) {
        Ok(reply) => {
          log::trace!("path = {} num_items = {} has_more = {}", path.display(), reply.items.len(), reply.has_more);
          self.current = reply.items.into_iter();
        }
        Err(err) => {
          self.failed = true;
          return Some(Err(err));
        }
      }
    }
  }
}
