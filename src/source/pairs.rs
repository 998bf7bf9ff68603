// Fri Oct 16 2026 - Alex

use super::walker::FileKind;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PairKind {
    /// `<stem>.cppm` + `<stem>.h`
    Interface,
    /// The aggregator pair, `impl.cppm` + `impl.h`.
    ImplAggregate,
    /// `<stem>.module.cpp` + `<stem>.default.cpp`
    TranslationUnit,
}

/// Two files sharing a directory and a stem. `module` holds the `import` side,
/// `header` the `#include` side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub module: PathBuf,
    pub header: PathBuf,
    pub kind: PairKind,
}

#[derive(Default)]
struct Slot {
    module: Option<PathBuf>,
    header: Option<PathBuf>,
}

fn split_name<'a>(path: &'a Path, suffix: &str) -> Option<(&'a Path, &'a str)> {
    let dir = path.parent()?;
    let name = path.file_name()?.to_str()?;
    Some((dir, name.strip_suffix(suffix)?))
}

fn collect(slots: BTreeMap<(PathBuf, String), Slot>, kind_of: impl Fn(&str) -> PairKind) -> Vec<FilePair> {
    slots
        .into_iter()
        .filter_map(|((_, stem), slot)| match (slot.module, slot.header) {
            (Some(module), Some(header)) => Some(FilePair {
                module,
                header,
                kind: kind_of(&stem),
            }),
            _ => None,
        })
        .collect()
}

/// `.cppm`/`.h` pairs. The pair whose stem is `aggregate_stem` on both sides is
/// an [`PairKind::ImplAggregate`].
pub fn find_interface_pairs(files: &[PathBuf], aggregate_stem: &str) -> Vec<FilePair> {
    let mut slots: BTreeMap<(PathBuf, String), Slot> = BTreeMap::new();

    for path in files {
        let (suffix, is_module) = match FileKind::of(path) {
            FileKind::Interface => (".cppm", true),
            FileKind::Header => (".h", false),
            _ => continue,
        };
        let Some((dir, stem)) = split_name(path, suffix) else {
            continue;
        };

        let slot = slots.entry((dir.to_path_buf(), stem.to_string())).or_default();
        if is_module {
            slot.module = Some(path.clone());
        } else {
            slot.header = Some(path.clone());
        }
    }

    collect(slots, |stem| {
        if stem == aggregate_stem {
            PairKind::ImplAggregate
        } else {
            PairKind::Interface
        }
    })
}

/// `.module.cpp`/`.default.cpp` pairs.
pub fn find_translation_unit_pairs(files: &[PathBuf]) -> Vec<FilePair> {
    let mut slots: BTreeMap<(PathBuf, String), Slot> = BTreeMap::new();

    for path in files {
        let (suffix, is_module) = match FileKind::of(path) {
            FileKind::ModuleUnit => (".module.cpp", true),
            FileKind::DefaultUnit => (".default.cpp", false),
            _ => continue,
        };
        let Some((dir, stem)) = split_name(path, suffix) else {
            continue;
        };

        let slot = slots.entry((dir.to_path_buf(), stem.to_string())).or_default();
        if is_module {
            slot.module = Some(path.clone());
        } else {
            slot.header = Some(path.clone());
        }
    }

    collect(slots, |_| PairKind::TranslationUnit)
}
