// Validates the Prakrit reference data files and embeds them as one JSON blob at compile time.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct EmbeddedData {
    roots: Vec<String>,
    forms: BTreeMap<String, Vec<String>>,
}

fn main() {
    let data_dir = Path::new("../data");
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("reference.json");

    let verbs_path = data_dir.join("verbs.json");
    let forms_path = data_dir.join("all_verb_forms.json");
    println!("cargo:rerun-if-changed={}", verbs_path.display());
    println!("cargo:rerun-if-changed={}", forms_path.display());

    // verbs.json maps an arbitrary key to a root; only the values matter.
    let verbs: BTreeMap<String, String> = read_json(&verbs_path);
    let mut roots: Vec<String> = verbs
        .into_values()
        .map(|root| root.trim().to_string())
        .collect();
    for root in &roots {
        assert!(!root.is_empty(), "empty root in {}", verbs_path.display());
    }
    roots.sort();
    roots.dedup();

    let forms: BTreeMap<String, Vec<String>> = read_json(&forms_path);
    for (root, attested) in &forms {
        assert!(!root.is_empty(), "empty root key in {}", forms_path.display());
        for form in attested {
            assert!(
                !form.is_empty(),
                "empty attested form for root {root} in {}",
                forms_path.display()
            );
        }
    }

    let data = EmbeddedData { roots, forms };
    let json = serde_json::to_string(&data).expect("JSON serialization failed");
    fs::write(&out_path, json).expect("cannot write reference.json");

    println!("cargo:rerun-if-changed=build.rs");
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> T {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("malformed JSON in {}: {e}", path.display()))
}
