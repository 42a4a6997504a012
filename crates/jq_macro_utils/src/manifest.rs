use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;
use std::{env, fs};

use toml_edit::{Document, Item, Table};

/// Crates that re-export every `jq_*` crate as a module, in lookup order.
const UMBRELLAS: [&str; 2] = ["jq_core", "jq"];
const CRATE_PREFIX: &str = "jq_";
const DEPENDENCY_TABLES: [&str; 2] = ["dependencies", "dev-dependencies"];

/// The parsed `Cargo.toml` of the crate that invokes a derive macro.
///
/// Generated code must name `jq_reflect` items, but the invoking crate may
/// depend on `jq_reflect` directly, or only on an umbrella crate.
///
/// # Example
///
/// ```rust
/// # use jq_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("jq_reflect"));
/// ```
///
/// # Resolution rules
///
/// For `dependencies`, then `dev-dependencies`:
///
/// 1. `name` is listed: `::name`.
/// 2. `name` starts with `jq_` and an umbrella (`jq_core`, then `jq`) is
///    listed: `::umbrella::short_name` (e.g. `jq_reflect` -> `::jq_core::reflect`).
///
/// Otherwise `::name`. `jq_reflect` names itself through
/// `extern crate self as jq_reflect;`, so derives used inside its own tests
/// resolve through the fallback.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

impl Manifest {
    /// Parses manifest text, `None` if it is not valid TOML.
    pub fn from_toml(text: &str, modified_time: SystemTime) -> Option<Self> {
        let manifest = Document::parse(Box::<str>::from(text)).ok()?;
        Some(Self {
            manifest,
            modified_time,
        })
    }

    /// Returns the path under which the package `name` is reachable.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        DEPENDENCY_TABLES
            .iter()
            .filter_map(|table| match self.manifest.get(table) {
                Some(Item::Table(deps)) => Some(deps),
                _ => None,
            })
            .find_map(|deps| lookup(deps, name))
            .unwrap_or_else(|| absolute_path(&[name]))
    }

    /// Runs `func` with the manifest of the crate being compiled.
    ///
    /// Manifests are cached per path and parsed again only when the file's
    /// modification time changes. Resolve once per macro invocation.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = manifest_path();
        let modified_time = fs::metadata(&path)
            .and_then(|metadata| metadata.modified())
            .unwrap_or_else(|err| panic!("cannot stat {}: {err}", path.display()));

        {
            let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            let cached = manifests.get(&path).filter(|m| m.modified_time == modified_time);
            if let Some(manifest) = cached {
                return func(manifest);
            }
        }

        let text = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
        let manifest = Self::from_toml(&text, modified_time)
            .unwrap_or_else(|| panic!("cannot parse {}", path.display()));

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

fn lookup(deps: &Table, name: &str) -> Option<syn::Path> {
    if deps.contains_key(name) {
        return Some(absolute_path(&[name]));
    }
    let module = name.strip_prefix(CRATE_PREFIX)?;
    UMBRELLAS
        .into_iter()
        .find(|umbrella| deps.contains_key(umbrella))
        .map(|umbrella| absolute_path(&[umbrella, module]))
}

fn manifest_path() -> PathBuf {
    let dir = env::var_os("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo");
    PathBuf::from(dir).join("Cargo.toml")
}

fn absolute_path(segments: &[&str]) -> syn::Path {
    let text = format!("::{}", segments.join("::"));
    syn::parse_str(&text).unwrap_or_else(|err| panic!("invalid crate path `{text}`: {err}"))
}
