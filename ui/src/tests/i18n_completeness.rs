//! Catalogue guards: every `t!` key exists in the fallback catalogue, every
//! supported locale defines the same messages with the same `$variables`,
//! and the `i18n/` folders line up with [`Locale::ALL`].

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::locale::Locale;

const FTL_FILENAME: &str = "wiktok-ui.ftl";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn i18n_root() -> PathBuf {
    crate_root().join("i18n")
}

/// Message ids of one `.ftl` file, each with the variables its value uses.
#[derive(Debug, Default)]
struct Catalogue {
    messages: BTreeMap<String, BTreeSet<String>>,
    duplicates: Vec<String>,
}

impl Catalogue {
    /// Line-based reading is enough for our files: one `id = value` per
    /// line, `#` comments, no terms or attributes.
    fn parse(content: &str) -> Self {
        let mut catalogue = Self::default();
        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((id, value)) = line.split_once('=') else {
                continue;
            };
            let id = id.trim();
            if id.is_empty() || !id.chars().all(is_id_char) {
                continue;
            }
            if catalogue
                .messages
                .insert(id.to_string(), variables(value))
                .is_some()
            {
                catalogue.duplicates.push(id.to_string());
            }
        }
        catalogue
    }

    fn load(locale: Locale) -> Self {
        let path = i18n_root().join(locale.code()).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("{locale}: cannot read {}: {err}", path.display()));
        Self::parse(&content)
    }

    fn ids(&self) -> BTreeSet<&str> {
        self.messages.keys().map(String::as_str).collect()
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

/// `$name` references inside a message value.
fn variables(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Literal first arguments of every translation macro call under `dir`.
fn referenced_keys(dir: &Path) -> BTreeSet<String> {
    // Spelled as bytes so this file does not match itself.
    const CALL: [u8; 4] = [b't', b'!', b'(', b'"'];

    let mut keys = BTreeSet::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(path) = pending.pop() {
        if path.is_dir() {
            let entries = fs::read_dir(&path).expect("readable source dir");
            pending.extend(entries.flatten().map(|entry| entry.path()));
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let source = fs::read_to_string(&path).expect("readable source file");
        let bytes = source.as_bytes();
        let mut at = 0;
        while let Some(offset) = bytes[at..].windows(CALL.len()).position(|w| w == CALL) {
            let start = at + offset + CALL.len();
            let len = bytes[start..]
                .iter()
                .position(|&b| b == b'"')
                .unwrap_or(bytes.len() - start);
            let key = &source[start..start + len];
            if !key.is_empty() && key.chars().all(is_id_char) {
                keys.insert(key.to_string());
            }
            at = start + len;
        }
    }
    keys
}

#[test]
fn every_referenced_key_is_defined_and_used() {
    let fallback = Catalogue::load(Locale::default());
    let referenced = referenced_keys(&crate_root().join("src"));
    assert!(!referenced.is_empty(), "no translation calls found");

    let defined = fallback.ids();
    let undefined: Vec<_> = referenced
        .iter()
        .filter(|key| !defined.contains(key.as_str()))
        .collect();
    assert!(undefined.is_empty(), "keys used but not defined: {undefined:?}");

    let unused: Vec<_> = defined
        .iter()
        .filter(|id| !referenced.contains(**id))
        .collect();
    assert!(unused.is_empty(), "keys defined but never used: {unused:?}");
}

#[test]
fn every_locale_defines_the_fallback_messages() {
    let fallback = Catalogue::load(Locale::default());
    for locale in Locale::ALL {
        let catalogue = Catalogue::load(locale);
        assert!(
            catalogue.duplicates.is_empty(),
            "{locale}: duplicate ids {:?}",
            catalogue.duplicates
        );
        let missing: Vec<_> = fallback.ids().difference(&catalogue.ids()).copied().collect();
        let extra: Vec<_> = catalogue.ids().difference(&fallback.ids()).copied().collect();
        assert!(missing.is_empty(), "{locale}: missing {missing:?}");
        assert!(extra.is_empty(), "{locale}: not in fallback {extra:?}");
    }
}

#[test]
fn every_locale_keeps_the_same_variables() {
    let fallback = Catalogue::load(Locale::default());
    for locale in Locale::ALL {
        let catalogue = Catalogue::load(locale);
        for (id, vars) in &fallback.messages {
            if let Some(translated) = catalogue.messages.get(id) {
                assert_eq!(vars, translated, "{locale}: variables differ for `{id}`");
            }
        }
    }
}

#[test]
fn locale_folders_match_supported_locales() {
    let mut folders: Vec<String> = fs::read_dir(i18n_root())
        .expect("i18n dir")
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    folders.sort();

    let mut supported: Vec<String> = Locale::ALL.iter().map(|l| l.code().to_string()).collect();
    supported.sort();
    assert_eq!(folders, supported);
}

#[test]
fn parser_reads_ids_variables_and_duplicates() {
    let catalogue = Catalogue::parse(
        "# comment\n\
         ## Section\n\
         greeting = Hello { $name } from { $home-town }\n\
         greeting = again\n\
         \n\
         plain = No variables\n",
    );
    assert_eq!(catalogue.ids(), BTreeSet::from(["greeting", "plain"]));
    assert_eq!(catalogue.duplicates, ["greeting"]);
    assert!(catalogue.messages["plain"].is_empty());
    assert_eq!(
        variables("Loading articles about { $title }..."),
        BTreeSet::from(["title".to_string()])
    );
}
