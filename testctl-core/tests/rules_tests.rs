//! Fixed rule list behaviour over realistic control-file text.
//!
//! Each `#[case]` is isolated — no shared state.

use rstest::rstest;
use testctl_core::{ReplacementRule, RuleKind, RuleSet};

const CONTROL: &str = "\
Tests: pytest-with-recommends
Depends: aapt, dexdump, fp-utils, oggvideotools, procyon-decompiler, radare2, zstd, python3-python-magic, python3-androguard, python3-pytest
Restrictions: allow-stderr
";

#[rstest]
#[case::aapt_removed("aapt, ")]
#[case::radare2_removed("radare2, ")]
#[case::androguard_removed("python3-androguard, ")]
#[case::upstream_magic_name_gone("python3-python-magic")]
fn removed_text_is_absent(#[case] needle: &str) {
    let out = RuleSet::debian().apply(CONTROL);
    assert!(!out.contains(needle), "{needle:?} still present in:\n{out}");
}

#[rstest]
#[case::dexdump("dexdump [amd64 arm64 armel armhf i386 mips64el mipsel], ")]
#[case::fp_utils("fp-utils [!ppc64el !s390x], ")]
#[case::oggvideotools("oggvideotools [!s390x], ")]
#[case::procyon("procyon-decompiler [amd64 arm64 i386], ")]
#[case::magic("python3-magic, ")]
fn expected_text_is_present(#[case] needle: &str) {
    let out = RuleSet::debian().apply(CONTROL);
    assert!(out.contains(needle), "{needle:?} missing from:\n{out}");
}

#[test]
fn rules_do_not_delete_lines() {
    let out = RuleSet::debian().apply(CONTROL);
    assert_eq!(out.lines().count(), CONTROL.lines().count());
}

#[test]
fn applying_twice_is_stable_for_removals() {
    let once = RuleSet::debian().apply(CONTROL);
    let removals = RuleSet::new(
        RuleSet::debian()
            .rules()
            .iter()
            .filter(|r| r.kind == RuleKind::Remove)
            .cloned()
            .collect(),
    );
    assert_eq!(removals.apply(&once), once);
}

#[test]
fn custom_rule_set_runs_in_given_order() {
    let set = RuleSet::new(vec![
        ReplacementRule::rename("a", "b"),
        ReplacementRule::rename("b", "c"),
    ]);
    assert_eq!(set.len(), 2);
    assert_eq!(set.apply("a b"), "c c");
}
