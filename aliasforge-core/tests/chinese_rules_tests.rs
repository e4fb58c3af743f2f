//! End-to-end tests for the surname-first style

use aliasforge_core::{generate, Generator, Mode, NameProfile, Style, ValidationError};

fn chan_tai_man() -> NameProfile {
    NameProfile::builder()
        .first("Tai Man")
        .last("Chan")
        .alias("Tommy")
        .dob("2001/10/15")
        .build()
}

#[test]
fn test_default_mode_contains_expected_handles() {
    let wordlist = generate(Style::Chinese, Mode::Default, &chan_tai_man()).unwrap();

    for expected in ["tommy2001", "tommyctm", "taimanc1015", "chantaiman"] {
        assert!(wordlist.contains(expected), "missing {expected}");
    }
}

#[test]
fn test_default_mode_excludes_bad_shapes() {
    let wordlist = generate(Style::Chinese, Mode::Default, &chan_tai_man()).unwrap();

    // bare month suffix, leading date, reversed surname
    for unexpected in ["tommy10", "1015tommy", "nahc"] {
        assert!(!wordlist.contains(unexpected), "unexpected {unexpected}");
    }
}

#[test]
fn test_full_mode_is_superset() {
    let default = generate(Style::Chinese, Mode::Default, &chan_tai_man()).unwrap();
    let full = generate(Style::Chinese, Mode::Full, &chan_tai_man()).unwrap();

    assert!(full.len() > default.len());
    for username in default.usernames() {
        assert!(full.contains(username), "full mode lost {username}");
    }
    assert!(full.contains("tommy.chan"));
    assert!(full.contains("tommy1501"));
}

#[test]
fn test_length_window() {
    let full = generate(Style::Chinese, Mode::Full, &chan_tai_man()).unwrap();
    assert!(full
        .usernames()
        .iter()
        .all(|u| (6..=16).contains(&u.chars().count())));
}

#[test]
fn test_alias_candidates_come_first() {
    let wordlist = generate(Style::Chinese, Mode::Default, &chan_tai_man()).unwrap();
    let usernames = wordlist.usernames();

    let first_non_alias = usernames
        .iter()
        .position(|u| !u.contains("tommy"))
        .unwrap();
    assert!(usernames[..first_non_alias]
        .iter()
        .all(|u| u.starts_with("tommy")));
    assert!(usernames[first_non_alias..]
        .iter()
        .all(|u| !u.starts_with("tommy")));
}

#[test]
fn test_without_alias_or_dates() {
    let profile = NameProfile::builder().first("Tai Man").last("Chan").build();
    let wordlist = generate(Style::Chinese, Mode::Full, &profile).unwrap();

    assert!(!wordlist.is_empty());
    assert!(wordlist.contains("chantaiman"));
    assert!(wordlist.contains("taimanchan"));
    assert!(wordlist
        .usernames()
        .iter()
        .all(|u| !u.chars().any(|c| c.is_ascii_digit())));
}

#[test]
fn test_single_word_given_name_has_no_g2_tier() {
    let profile = NameProfile::builder()
        .first("Wei")
        .last("Zhang")
        .year("1995")
        .build();
    let wordlist = generate(Style::Chinese, Mode::Default, &profile).unwrap();

    assert!(wordlist.contains("zhangwei"));
    assert!(wordlist.contains("weizhang"));
    assert!(wordlist.contains("weiz1995"));
}

#[test]
fn test_year_overrides_dob_year() {
    let profile = NameProfile::builder()
        .first("Tai Man")
        .last("Chan")
        .alias("Tommy")
        .year("1999")
        .dob("2001/10/15")
        .build();
    let wordlist = generate(Style::Chinese, Mode::Default, &profile).unwrap();

    assert!(wordlist.contains("tommy1999"));
    assert!(!wordlist.contains("tommy2001"));
    assert!(wordlist.contains("tommy1015"));
}

#[test]
fn test_second_alias_tier_is_last() {
    let profile = NameProfile::builder()
        .first("Tai Man")
        .last("Chan")
        .alias("Tommy")
        .alias2("Ace")
        .build();
    let wordlist = generate(Style::Chinese, Mode::Default, &profile).unwrap();

    assert!(wordlist.contains("acetaiman"));
    assert!(wordlist.contains("acechan"));
    assert_eq!(wordlist.usernames().last().unwrap(), "acechan");
}

#[test]
fn test_missing_given_name_fails() {
    let profile = NameProfile::builder().last("Chan").build();
    let err = Generator::new(Style::Chinese).generate(&profile).unwrap_err();

    assert!(matches!(
        err,
        aliasforge_core::Error::Validation(ValidationError::MissingField {
            field: "given name",
            ..
        })
    ));
}

#[test]
fn test_deterministic() {
    let first = generate(Style::Chinese, Mode::Full, &chan_tai_man()).unwrap();
    let second = generate(Style::Chinese, Mode::Full, &chan_tai_man()).unwrap();
    assert_eq!(first, second);
}
