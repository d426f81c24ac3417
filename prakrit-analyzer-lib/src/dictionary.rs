use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::script;
use crate::types::EmbeddedData;

const EMBEDDED_JSON: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/reference.json"));

/// File holding the known roots, keyed by an arbitrary lemma id.
pub const VERBS_FILE: &str = "verbs.json";
/// File mapping each root to its attested surface forms.
pub const FORMS_FILE: &str = "all_verb_forms.json";

/// Known Prakrit verb roots and their attested forms.
///
/// Built once at startup and read-only afterwards; analysis only ever
/// borrows it, so one instance can serve any number of threads.
///
/// Lookups compare folded spellings (see [`script::fold`]), so `jAṇAmi`
/// finds the form listed as `jāṇāmi`. Results keep the data's spelling.
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Folded root → root as listed.
    roots: HashMap<String, String>,
    /// Folded attested form → the first root (in root order) listing it.
    form_index: HashMap<String, String>,
}

impl Dictionary {
    /// Load the dictionary from the data embedded at compile time.
    pub fn new() -> Self {
        let data: EmbeddedData =
            serde_json::from_slice(EMBEDDED_JSON).expect("embedded reference JSON is invalid");
        Self::from_parts(data.roots, data.forms)
    }

    /// Load `verbs.json` and `all_verb_forms.json` from a directory.
    pub fn load(dir: &Path) -> Result<Self, LoadError> {
        let verbs: BTreeMap<String, String> = read_json(&dir.join(VERBS_FILE))?;
        let forms: BTreeMap<String, Vec<String>> = read_json(&dir.join(FORMS_FILE))?;
        Ok(Self::from_parts(verbs.into_values(), forms))
    }

    /// Build a dictionary from in-memory roots and root → forms pairs.
    pub fn from_parts<R, F, S, I>(roots: R, forms: F) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        F: IntoIterator<Item = (S, I)>,
        S: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut root_index = HashMap::new();
        for root in roots {
            let root: String = root.into();
            root_index.entry(script::fold(&root)).or_insert(root);
        }

        let mut by_root: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (root, attested) in forms {
            by_root
                .entry(root.into())
                .or_default()
                .extend(attested.into_iter().map(Into::into));
        }

        let mut form_index = HashMap::new();
        for (root, attested) in &by_root {
            for form in attested {
                form_index
                    .entry(script::fold(form))
                    .or_insert_with(|| root.clone());
            }
        }

        tracing::info!(
            roots = root_index.len(),
            attested_roots = by_root.len(),
            attested_forms = form_index.len(),
            "reference data loaded"
        );

        Self {
            roots: root_index,
            form_index,
        }
    }

    /// Check whether a string is a known root.
    pub fn contains_root(&self, root: &str) -> bool {
        self.roots.contains_key(&script::fold(root))
    }

    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Find the root whose attested forms contain `form` verbatim.
    ///
    /// If a form is listed under several roots the alphabetically first
    /// root is returned.
    pub fn lookup_attested(&self, form: &str) -> Option<&str> {
        self.form_index.get(&script::fold(form)).map(String::as_str)
    }

    /// Find the longest known root that starts `stem`.
    ///
    /// Tries `stem` itself, then shorter and shorter leading substrings. If
    /// nothing matches and the stem ends in a thematic `e` or `i`, the scan
    /// is repeated without it.
    pub fn longest_known_root(&self, stem: &str) -> Option<&str> {
        if let Some(root) = self.longest_root_prefix(stem) {
            return Some(root);
        }
        let trimmed = stem.strip_suffix(['e', 'i'])?;
        self.longest_root_prefix(trimmed)
    }

    fn longest_root_prefix(&self, s: &str) -> Option<&str> {
        let folded = script::fold(s);
        let ends: Vec<usize> = folded
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        ends.into_iter()
            .rev()
            .find_map(|end| self.roots.get(&folded[..end]))
            .map(String::as_str)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
