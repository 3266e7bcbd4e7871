//! Ordered whole-text replacement rules.
//!
//! Rules run in sequence over the full buffer. Each rule sees the output of
//! the previous one and replaces *every* occurrence of its pattern, so a rule
//! written with one line in mind also matches identical text anywhere else
//! (header, substituted recommendation lists, comments).

use std::fmt;

// ---------------------------------------------------------------------------
// ReplacementRule
// ---------------------------------------------------------------------------

/// What a rule does to the control file. Only used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Map one distribution package name onto another.
    Rename,
    /// Append an architecture qualifier to a dependency.
    RestrictArch,
    /// Drop a `name, ` entry entirely.
    Remove,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Rename => write!(f, "rename"),
            RuleKind::RestrictArch => write!(f, "restrict-arch"),
            RuleKind::Remove => write!(f, "remove"),
        }
    }
}

/// A literal `(pattern, replacement)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRule {
    pub kind: RuleKind,
    pub pattern: String,
    pub replacement: String,
}

impl ReplacementRule {
    pub fn rename(from: &str, to: &str) -> Self {
        Self {
            kind: RuleKind::Rename,
            pattern: from.to_owned(),
            replacement: to.to_owned(),
        }
    }

    /// `name, ` becomes `name [archs], `.
    pub fn restrict_arch(name: &str, archs: &[&str]) -> Self {
        Self {
            kind: RuleKind::RestrictArch,
            pattern: format!("{name}, "),
            replacement: format!("{name} [{}], ", archs.join(" ")),
        }
    }

    /// `name, ` becomes the empty string.
    pub fn remove(name: &str) -> Self {
        Self {
            kind: RuleKind::Remove,
            pattern: format!("{name}, "),
            replacement: String::new(),
        }
    }

    /// Replace every occurrence of the pattern in `text`.
    pub fn apply(&self, text: &str) -> String {
        text.replace(&self.pattern, &self.replacement)
    }
}

// ---------------------------------------------------------------------------
// RuleSet
// ---------------------------------------------------------------------------

/// Rules in application order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSet {
    rules: Vec<ReplacementRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<ReplacementRule>) -> Self {
        Self { rules }
    }

    /// The fixed rule list for the Debian autopkgtest control file.
    ///
    /// Renames run first so that the restriction and removal rules match
    /// distribution names rather than upstream ones.
    pub fn debian() -> Self {
        Self::new(vec![
            ReplacementRule::rename("python3-python-magic", "python3-magic"),
            ReplacementRule::rename("python3-rpm-python", "python3-rpm"),
            ReplacementRule::rename("python3-pyxattr", "python3-xattr"),
            ReplacementRule::restrict_arch(
                "dexdump",
                &["amd64", "arm64", "armel", "armhf", "i386", "mips64el", "mipsel"],
            ),
            ReplacementRule::restrict_arch("fp-utils", &["!ppc64el", "!s390x"]),
            ReplacementRule::restrict_arch("oggvideotools", &["!s390x"]),
            ReplacementRule::restrict_arch("procyon-decompiler", &["amd64", "arm64", "i386"]),
            ReplacementRule::remove("aapt"),
            ReplacementRule::remove("python3-androguard"),
            ReplacementRule::remove("radare2"),
        ])
    }

    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Fold every rule over `text` in order.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_owned();
        for rule in &self.rules {
            let hits = out.matches(rule.pattern.as_str()).count();
            if hits > 0 {
                tracing::debug!(
                    "{} {:?} -> {:?} ({hits} hit(s))",
                    rule.kind,
                    rule.pattern,
                    rule.replacement
                );
                out = rule.apply(&out);
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restrict_arch_formats_debian_qualifier() {
        let rule = ReplacementRule::restrict_arch("fp-utils", &["!ppc64el", "!s390x"]);
        assert_eq!(rule.pattern, "fp-utils, ");
        assert_eq!(rule.replacement, "fp-utils [!ppc64el !s390x], ");
    }

    #[test]
    fn remove_replaces_with_empty() {
        let rule = ReplacementRule::remove("aapt");
        assert_eq!(rule.apply("a, aapt, b"), "a, b");
    }

    #[test]
    fn replaces_every_occurrence_across_lines() {
        let rule = ReplacementRule::remove("radare2");
        let text = "Depends: radare2, zstd\n# radare2, again\nDepends: radare2, xz\n";
        assert_eq!(rule.apply(text), "Depends: zstd\n# again\nDepends: xz\n");
    }

    #[test]
    fn later_rules_see_earlier_output() {
        let set = RuleSet::new(vec![
            ReplacementRule::rename("old-name", "new-name"),
            ReplacementRule::remove("new-name"),
        ]);
        assert_eq!(set.apply("x, old-name, y"), "x, y");
    }

    #[test]
    fn order_is_significant() {
        let forward = RuleSet::new(vec![
            ReplacementRule::remove("new-name"),
            ReplacementRule::rename("old-name", "new-name"),
        ]);
        assert_eq!(forward.apply("x, old-name, y"), "x, new-name, y");
    }

    #[test]
    fn debian_set_renames_before_removing() {
        let set = RuleSet::debian();
        let kinds: Vec<_> = set.rules().iter().map(|r| r.kind).collect();
        let first_remove = kinds.iter().position(|k| *k == RuleKind::Remove).unwrap();
        assert!(kinds[..first_remove].iter().all(|k| *k != RuleKind::Remove));
        assert!(kinds[first_remove..].iter().all(|k| *k == RuleKind::Remove));
    }

    #[test]
    fn debian_set_applied_to_dependency_line() {
        let line = "Depends: aapt, dexdump, fp-utils, python3-python-magic, radare2, zstd\n";
        let out = RuleSet::debian().apply(line);
        assert_eq!(
            out,
            "Depends: dexdump [amd64 arm64 armel armhf i386 mips64el mipsel], \
             fp-utils [!ppc64el !s390x], python3-magic, zstd\n"
        );
    }

    #[test]
    fn removal_matches_inside_longer_names() {
        // Whole-text literal matching: "libaapt, " contains "aapt, ".
        let out = RuleSet::debian().apply("Depends: libaapt, zstd\n");
        assert_eq!(out, "Depends: libzstd\n");
    }

    #[test]
    fn empty_set_is_identity() {
        let set = RuleSet::default();
        assert!(set.is_empty());
        assert_eq!(set.apply("unchanged"), "unchanged");
    }
}
