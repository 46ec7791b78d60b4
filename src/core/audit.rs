//! Localization completeness audit.
//!
//! Compares every locale file (and the defaults file) against the reference
//! locale's key set, reporting missing and extra keys per file. The audit
//! never mutates any locale file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use crate::core::keyset::{LocaleKeySet, extract_locale};

/// Missing/extra keys of one compared file vs the reference locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleReport {
    /// Locale code, or "defaults" for the defaults file.
    pub locale: String,
    /// Keys present in the reference but absent here (sorted).
    pub missing: Vec<String>,
    /// Keys present here but absent in the reference (sorted).
    pub extra: Vec<String>,
}

impl LocaleReport {
    /// A file carrying exactly the reference key set is complete.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// A warning from loading one audited file. The file is skipped; the audit
/// continues with the remaining files.
#[derive(Debug, Clone)]
pub struct AuditWarning {
    pub file_path: String,
    pub error: String,
}

/// Aggregated result of one audit run.
#[derive(Debug)]
pub struct AuditReport {
    /// Reference locale code the comparison is anchored on.
    pub reference_locale: String,
    /// Number of keys in the reference set.
    pub reference_key_count: usize,
    /// One report per discovered non-reference locale, sorted by locale.
    pub locales: Vec<LocaleReport>,
    /// Report for the defaults file, if it loaded.
    pub defaults: Option<LocaleReport>,
    /// Files that could not be loaded.
    pub warnings: Vec<AuditWarning>,
}

impl AuditReport {
    /// True if any locale or the defaults is missing reference keys.
    pub fn any_missing(&self) -> bool {
        self.compared().any(|r| !r.missing.is_empty())
    }

    /// True if any locale or the defaults carries keys the reference lacks.
    pub fn any_extra(&self) -> bool {
        self.compared().any(|r| !r.extra.is_empty())
    }

    /// True when every compared file carries exactly the reference key set.
    pub fn is_clean(&self) -> bool {
        !self.any_missing() && !self.any_extra()
    }

    fn compared(&self) -> impl Iterator<Item = &LocaleReport> {
        self.locales.iter().chain(self.defaults.as_ref())
    }
}

/// Compute the missing/extra pair for one key set against the reference.
pub fn compare(reference: &LocaleKeySet, other: &LocaleKeySet) -> LocaleReport {
    LocaleReport {
        locale: other.locale.clone(),
        missing: reference.keys.difference(&other.keys).cloned().collect(),
        extra: other.keys.difference(&reference.keys).cloned().collect(),
    }
}

/// Audit every locale file in `languages_root` plus the defaults file
/// against the reference locale.
///
/// A missing or unparseable reference locale fails the whole audit; any
/// other file that fails to load is recorded as a warning and skipped.
pub fn audit_languages(
    languages_root: &Path,
    defaults_file: &Path,
    reference_locale: &str,
) -> Result<AuditReport> {
    if !languages_root.is_dir() {
        bail!(
            "Languages directory '{}' does not exist.\n\
             Hint: Check your .elgrc.json 'languagesRoot' setting.",
            languages_root.display()
        );
    }

    let reference_path = languages_root.join(format!("{}.json", reference_locale));
    let reference = LocaleKeySet::load(&reference_path, reference_locale)
        .with_context(|| format!("Failed to load reference locale '{}'", reference_locale))?;

    let mut report = AuditReport {
        reference_locale: reference_locale.to_string(),
        reference_key_count: reference.len(),
        locales: Vec::new(),
        defaults: None,
        warnings: Vec::new(),
    };

    let mut candidates: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(languages_root)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(locale) = extract_locale(&path)
            && locale != reference_locale
        {
            candidates.push((locale, path));
        }
    }
    candidates.sort();

    for (locale, path) in candidates {
        match LocaleKeySet::load(&path, locale) {
            Ok(set) => report.locales.push(compare(&reference, &set)),
            Err(e) => report.warnings.push(AuditWarning {
                file_path: path.to_string_lossy().to_string(),
                error: format!("{:#}", e),
            }),
        }
    }

    match LocaleKeySet::load(defaults_file, "defaults") {
        Ok(set) => report.defaults = Some(compare(&reference, &set)),
        Err(e) => report.warnings.push(AuditWarning {
            file_path: defaults_file.to_string_lossy().to_string(),
            error: format!("{:#}", e),
        }),
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::core::audit::*;

    fn keyset(locale: &str, keys: &[&str]) -> LocaleKeySet {
        LocaleKeySet {
            locale: locale.to_string(),
            file_path: format!("{}.json", locale),
            keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_compare_equal_sets_is_complete() {
        let reference = keyset("en", &["a", "b", "c"]);
        let other = keyset("de", &["a", "b", "c"]);

        let report = compare(&reference, &other);
        assert!(report.is_complete());
        assert!(report.missing.is_empty());
        assert!(report.extra.is_empty());
    }

    #[test]
    fn test_compare_missing_keys() {
        let reference = keyset("en", &["a", "b", "c"]);
        let other = keyset("de", &["a", "b"]);

        let report = compare(&reference, &other);
        assert_eq!(report.missing, vec!["c"]);
        assert!(report.extra.is_empty());
    }

    #[test]
    fn test_compare_extra_keys() {
        let reference = keyset("en", &["a", "b"]);
        let other = keyset("de", &["a", "b", "d"]);

        let report = compare(&reference, &other);
        assert!(report.missing.is_empty());
        assert_eq!(report.extra, vec!["d"]);
    }

    #[test]
    fn test_compare_set_identities() {
        // missing and extra are disjoint; their union with the intersection
        // equals the union of both key sets.
        let reference = keyset("en", &["a", "b", "c", "e"]);
        let other = keyset("de", &["b", "c", "d", "f"]);

        let report = compare(&reference, &other);

        let missing: BTreeSet<_> = report.missing.iter().cloned().collect();
        let extra: BTreeSet<_> = report.extra.iter().cloned().collect();
        assert!(missing.is_disjoint(&extra));

        let intersection: BTreeSet<_> =
            reference.keys.intersection(&other.keys).cloned().collect();
        let union: BTreeSet<_> = reference.keys.union(&other.keys).cloned().collect();

        let mut rebuilt = BTreeSet::new();
        rebuilt.extend(missing);
        rebuilt.extend(extra);
        rebuilt.extend(intersection);
        assert_eq!(rebuilt, union);
    }

    #[test]
    fn test_audit_reports_all_locales_and_defaults() {
        let dir = tempdir().unwrap();
        let languages = dir.path().join("languages");
        fs::create_dir(&languages).unwrap();

        fs::write(
            languages.join("en.json"),
            r#"{ "a": "A", "b": "B", "c": "C" }"#,
        )
        .unwrap();
        fs::write(languages.join("de.json"), r#"{ "a": "A", "b": "B" }"#).unwrap();
        fs::write(
            languages.join("fr.json"),
            r#"{ "a": "A", "b": "B", "c": "C", "d": "D" }"#,
        )
        .unwrap();

        let defaults = dir.path().join("defaults.json");
        fs::write(&defaults, r#"{ "a": "A", "b": "B", "c": "C" }"#).unwrap();

        let report = audit_languages(&languages, &defaults, "en").unwrap();

        assert_eq!(report.reference_locale, "en");
        assert_eq!(report.reference_key_count, 3);
        assert_eq!(report.locales.len(), 2);

        // Sorted by locale: de before fr.
        assert_eq!(report.locales[0].locale, "de");
        assert_eq!(report.locales[0].missing, vec!["c"]);
        assert!(report.locales[0].extra.is_empty());

        assert_eq!(report.locales[1].locale, "fr");
        assert!(report.locales[1].missing.is_empty());
        assert_eq!(report.locales[1].extra, vec!["d"]);

        let defaults_report = report.defaults.as_ref().unwrap();
        assert!(defaults_report.is_complete());

        assert!(report.any_missing());
        assert!(report.any_extra());
        assert!(!report.is_clean());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_audit_clean_when_all_complete() {
        let dir = tempdir().unwrap();
        let languages = dir.path().join("languages");
        fs::create_dir(&languages).unwrap();

        fs::write(languages.join("en.json"), r#"{ "a": "A", "b": "B" }"#).unwrap();
        fs::write(languages.join("de.json"), r#"{ "a": "A", "b": "B" }"#).unwrap();

        let defaults = dir.path().join("defaults.json");
        fs::write(&defaults, r#"{ "a": "A", "b": "B" }"#).unwrap();

        let report = audit_languages(&languages, &defaults, "en").unwrap();
        assert!(report.is_clean());
        assert!(!report.any_missing());
        assert!(!report.any_extra());
    }

    #[test]
    fn test_audit_missing_reference_is_fatal() {
        let dir = tempdir().unwrap();
        let languages = dir.path().join("languages");
        fs::create_dir(&languages).unwrap();
        fs::write(languages.join("de.json"), r#"{ "a": "A" }"#).unwrap();

        let defaults = dir.path().join("defaults.json");
        fs::write(&defaults, r#"{ "a": "A" }"#).unwrap();

        let result = audit_languages(&languages, &defaults, "en");
        assert!(result.is_err());
    }

    #[test]
    fn test_audit_missing_languages_dir_is_fatal() {
        let dir = tempdir().unwrap();
        let result = audit_languages(
            &dir.path().join("nope"),
            &dir.path().join("defaults.json"),
            "en",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_audit_bad_locale_file_is_a_warning() {
        let dir = tempdir().unwrap();
        let languages = dir.path().join("languages");
        fs::create_dir(&languages).unwrap();

        fs::write(languages.join("en.json"), r#"{ "a": "A" }"#).unwrap();
        fs::write(languages.join("de.json"), "{ not json").unwrap();
        fs::write(languages.join("fr.json"), r#"{ "a": "A" }"#).unwrap();

        let defaults = dir.path().join("defaults.json");
        fs::write(&defaults, r#"{ "a": "A" }"#).unwrap();

        let report = audit_languages(&languages, &defaults, "en").unwrap();

        // de is skipped with a warning; fr is still compared.
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].file_path.ends_with("de.json"));
        assert_eq!(report.locales.len(), 1);
        assert_eq!(report.locales[0].locale, "fr");
    }

    #[test]
    fn test_audit_missing_defaults_is_a_warning() {
        let dir = tempdir().unwrap();
        let languages = dir.path().join("languages");
        fs::create_dir(&languages).unwrap();
        fs::write(languages.join("en.json"), r#"{ "a": "A" }"#).unwrap();

        let report =
            audit_languages(&languages, &dir.path().join("defaults.json"), "en").unwrap();

        assert!(report.defaults.is_none());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_audit_excludes_reference_and_non_json() {
        let dir = tempdir().unwrap();
        let languages = dir.path().join("languages");
        fs::create_dir(&languages).unwrap();

        fs::write(languages.join("en.json"), r#"{ "a": "A" }"#).unwrap();
        fs::write(languages.join("notes.txt"), "not a locale").unwrap();

        let defaults = dir.path().join("defaults.json");
        fs::write(&defaults, r#"{ "a": "A" }"#).unwrap();

        let report = audit_languages(&languages, &defaults, "en").unwrap();
        assert!(report.locales.is_empty());
        assert!(report.warnings.is_empty());
    }
}
