use std::path::Path;

use crate::errors::{Error, Result};

/// Every immediate subdirectory of `base_dir` is a tag, sorted by name.
pub fn discover_tags(base_dir: &Path) -> Result<Vec<String>> {
  let entries = std::fs::read_dir(base_dir).map_err(|err| Error::io(base_dir, err))?;
  let mut tags = vec![];
  for entry in entries {
    let entry = entry.map_err(|err| Error::io(base_dir, err))?;
    let file_type = entry.file_type().map_err(|err| Error::io(entry.path(), err))?;
    if !file_type.is_dir() {
      continue;
    }
    tags.push(entry.file_name().to_string_lossy().into_owned());
  }
  tags.sort();
  log::info!("discovered {} tags in {}", tags.len(), base_dir.display());
  return Ok(tags);
}

/// Trims the pieces of `-tags go,rust` and drops empty ones.
pub fn clean_tag_list(tags: &[String]) -> Vec<String> {
  return tags
    .iter()
    .map(|tag| tag.trim())
    .filter(|tag| !tag.is_empty())
    .map(String::from)
    .collect();
}
