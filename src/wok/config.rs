//! Project file parsing
//!
//! The document is walked as YAML values so that every error names the offending section
//! (`wok.files.<file>.spyces.<name>`); single spyce entries are then deserialized into
//! [`SpyceEntry`].

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use super::{Wok, WokFile};
use crate::error::{Result, wok::invalid, wok::parse_failed};
use crate::flavor::{Category, Flavor, Origin};
use crate::format::{Section, SpyceType};

/// One entry under `spyces:`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpyceEntry {
    #[serde(default)]
    pub category: Category,
    pub path: Option<PathBuf>,
    pub url: Option<String>,
    pub name: Option<String>,
    pub section: Option<Section>,
    #[serde(rename = "type")]
    pub spyce_type: Option<SpyceType>,
}

/// Parse project file text; relative paths resolve against `base_dir`
pub fn parse_wok(base_dir: &Path, filename: &Path, text: &str) -> Result<Wok> {
    let data: Value = serde_yaml::from_str(text).map_err(|e| parse_failed(filename, e))?;
    let Value::Mapping(root) = data else {
        return Err(invalid(filename, None, "not a mapping"));
    };
    let wok = root
        .get("wok")
        .ok_or_else(|| invalid(filename, None, "missing wok section"))?;
    let wok = as_mapping(filename, "wok", wok)?;

    let mut files = Vec::new();
    if let Some(file_data) = wok.get("files") {
        let file_data = as_mapping(filename, "wok.files", file_data)?;
        for (file, data) in file_data {
            let file = key_str(filename, "wok.files", file)?;
            files.push(parse_file(base_dir, filename, file, data)?);
        }
    }
    Ok(Wok::new(files))
}

fn parse_file(base_dir: &Path, filename: &Path, file: &str, data: &Value) -> Result<WokFile> {
    let section = format!("wok.files.{}", file);
    // A bare `file:` entry builds the file from itself with no spyces
    let empty = Mapping::new();
    let data = match data {
        Value::Null => &empty,
        other => as_mapping(filename, &section, other)?,
    };
    let source = match data.get("source") {
        Some(Value::String(source)) => Some(resolve(base_dir, Path::new(source))),
        Some(Value::Null) | None => None,
        Some(_) => {
            return Err(invalid(filename, Some(&section), "source is not a string"));
        }
    };

    let mut spyces = Vec::new();
    if let Some(spyce_data) = data.get("spyces") {
        let spyces_section = format!("{}.spyces", section);
        let spyce_data = as_mapping(filename, &spyces_section, spyce_data)?;
        for (name, entry) in spyce_data {
            let name = key_str(filename, &spyces_section, name)?;
            let entry_section = format!("{}.{}", spyces_section, name);
            let flavor = parse_spyce(base_dir, filename, &entry_section, name, entry)?;
            spyces.push((name.to_string(), flavor));
        }
    }
    Ok(WokFile::new(resolve(base_dir, Path::new(file)), source, spyces))
}

fn parse_spyce(
    base_dir: &Path,
    filename: &Path,
    section: &str,
    name: &str,
    data: &Value,
) -> Result<Flavor> {
    as_mapping(filename, section, data)?;
    let entry: SpyceEntry = serde_yaml::from_value(data.clone())
        .map_err(|e| invalid(filename, Some(section), e.to_string()))?;
    let origin = match entry.category {
        Category::Url => {
            let url = entry
                .url
                .ok_or_else(|| invalid(filename, Some(section), "missing key url"))?;
            Origin::Url(url)
        }
        category => {
            let path = entry
                .path
                .ok_or_else(|| invalid(filename, Some(section), "missing key path"))?;
            let path = resolve(base_dir, &path);
            Origin::from_category(category, path.to_string_lossy())
        }
    };
    let spyce_name = entry.name.unwrap_or_else(|| name.to_string());
    Flavor::new(origin, entry.section, Some(spyce_name), entry.spyce_type)
        .map_err(|e| invalid(filename, Some(section), e.to_string()))
}

fn as_mapping<'a>(filename: &Path, section: &str, value: &'a Value) -> Result<&'a Mapping> {
    value
        .as_mapping()
        .ok_or_else(|| invalid(filename, Some(section), "not a mapping"))
}

fn key_str<'a>(filename: &Path, section: &str, key: &'a Value) -> Result<&'a str> {
    key.as_str()
        .ok_or_else(|| invalid(filename, Some(section), format!("key {:?} is not a string", key)))
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
