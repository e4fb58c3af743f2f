//! Given-name-first (Western) combination rules
//!
//! Structure: `[first] [middle] [last]`, e.g. `charlie monroe brown` with
//! nickname `tommy`. Groups are ordered by how often real accounts follow
//! the pattern: plain name combinations first, nickname combinations next,
//! dotted forms and the second nickname last.

use super::{cat, dot, StyleRules};
use crate::api::{Mode, Style};
use crate::domain::candidate::{Candidate, Emitter};
use crate::domain::date::DateKind::{Year2, Year4};
use crate::domain::date::{DateInfo, DateToken};
use crate::domain::tokens::{Token, WesternTokens};

const GROUP_NAMES: &[&str] = &[
    "full name",
    "name + initial",
    "nickname + name",
    "first + nickname + date",
    "nickname + initials",
    "nickname + last + date",
    "nickname + date",
    "initials/name + date",
    "dotted name",
    "second nickname",
];

/// Rules for the given-name-first naming convention
#[derive(Debug, Clone, Copy, Default)]
pub struct WesternRules;

impl StyleRules for WesternRules {
    type Tokens = WesternTokens;

    fn style(&self) -> Style {
        Style::Western
    }

    fn tier_names(&self) -> &'static [&'static str] {
        GROUP_NAMES
    }

    fn generate(&self, tokens: &WesternTokens, dates: &DateInfo, mode: Mode) -> Vec<Candidate> {
        let primary = dates.suffixes();
        let extended = dates.extended_suffixes();
        let mut out = Emitter::new(mode);

        name_groups(&mut out, tokens);
        if let Some(alias) = &tokens.alias {
            nickname_groups(&mut out, tokens, alias, &primary, &extended);
        }
        dated_name_group(&mut out, tokens, &primary);
        dotted_group(&mut out, tokens);
        if let Some(alias2) = &tokens.alias2 {
            second_nickname_group(&mut out, tokens, alias2, &primary);
        }

        out.finish()
    }
}

/// Groups 1-2, the name alone
fn name_groups(out: &mut Emitter, t: &WesternTokens) {
    let (f, fi) = (t.first.word(), t.first.initial());
    let (l, li) = (t.last.word(), t.last.initial());

    // charliebrown charliemonroebrown
    out.tier(1);
    out.always(cat(&[f, l]));
    if let Some(middle) = &t.middle {
        out.always(cat(&[f, middle.word(), l]));
        out.full(cat(&[f, middle.initial(), l]));
    }
    out.full(cat(&[l, f]));
    if let Some(middle_last) = &t.middle_last {
        out.full(middle_last.clone());
    }

    // charlieb cbrown
    out.tier(2);
    out.always(cat(&[f, li]));
    out.always(cat(&[fi, l]));
    out.full(dot(&[f, li]));
    out.full(dot(&[fi, l]));
    out.full(dot(&[li, f]));
    if let Some(middle) = &t.middle {
        let mi = middle.initial();
        let f_mi = cat(&[f, mi]);
        let fi_mi = cat(&[fi, mi]);
        out.full(f_mi.clone());
        out.full(dot(&[f, mi]));
        out.full(dot(&[&fi_mi, l]));
        out.full(dot(&[&f_mi, li]));
        out.full(cat(&[&fi_mi, l]));
    }
}

/// Groups 3-7, anchored on the nickname
fn nickname_groups(
    out: &mut Emitter,
    t: &WesternTokens,
    alias: &Token,
    primary: &[DateToken],
    extended: &[DateToken],
) {
    let (a, ai) = (alias.word(), alias.initial());
    let (f, fi) = (t.first.word(), t.first.initial());
    let (l, li) = (t.last.word(), t.last.initial());
    let (fl, fml) = (t.init_fl.as_str(), t.init_fml.as_str());

    // charlietommybrown charlietommy
    let a_li = cat(&[a, li]);
    out.tier(3);
    out.always(cat(&[f, a, l]));
    out.always(cat(&[f, a]));
    out.full(dot(&[f, a]));
    out.full(cat(&[a, f]));
    out.full(dot(&[a, f]));
    out.full(dot(&[f, a, l]));
    out.full(cat(&[f, &a_li]));
    out.full(dot(&[f, &a_li]));
    out.full(cat(&[f, ai]));
    out.full(dot(&[f, ai]));
    out.full(cat(&[a, l]));
    out.full(cat(&[l, a]));
    out.full(dot(&[a, l]));
    out.full(dot(&[l, a]));
    out.full(cat(&[a, fi]));
    out.full(cat(&[ai, f]));
    out.full(a_li.clone());
    out.full(cat(&[ai, l]));
    out.full(dot(&[a, fi]));
    out.full(dot(&[ai, f]));
    out.full(dot(&[a, li]));
    out.full(dot(&[ai, l]));
    out.full(dot(&[li, a]));
    out.full(dot(&[fi, a]));

    // charlietommy1990 charlietommy90
    let f_a = cat(&[f, a]);
    let f_dot_a = dot(&[f, a]);
    out.tier(4);
    out.dated(&f_a, primary, &[Year4, Year2]);
    out.dated(&f_dot_a, primary, &[]);
    out.dated(&cat(&[f, &a_li]), primary, &[]);
    out.dated(&cat(&[f, ai]), primary, &[]);
    out.dated(&dot(&[f, ai]), primary, &[]);
    out.dated(&format!("{f_dot_a}."), primary, &[]);
    out.dated(&cat(&[f, a, fl]), primary, &[]);

    // tommycb tommycmb tommycb1990
    let a_fl = cat(&[a, fl]);
    let a_fml = cat(&[a, fml]);
    let a_dot_fml = dot(&[a, fml]);
    out.tier(5);
    out.always(a_fl.clone());
    out.always(a_fml.clone());
    out.dated(&a_fl, primary, &[Year4, Year2]);
    out.full(dot(&[a, fl]));
    out.full(dot(&[fl, a]));
    out.dated(&dot(&[a, fl]), primary, &[]);
    out.full(a_dot_fml.clone());
    out.full(dot(&[fml, a]));
    out.dated(&a_fml, primary, &[]);
    out.dated(&a_dot_fml, primary, &[]);
    out.full(cat(&[ai, fml]));

    // tommybrown90
    out.tier(6);
    out.dated(&cat(&[a, l]), primary, &[Year2]);
    out.dated(&dot(&[a, l]), primary, &[]);

    // tommy1990 tommycharlie90
    out.tier(7);
    out.dated(a, primary, &[Year4]);
    out.dated(a, extended, &[]);
    out.dated(&format!("{a}."), primary, &[]);
    out.dated(&cat(&[a, f]), primary, &[Year2]);
    out.dated(&dot(&[a, f]), primary, &[]);
}

/// Group 8, name parts and initials with a date
fn dated_name_group(out: &mut Emitter, t: &WesternTokens, primary: &[DateToken]) {
    let (f, fi) = (t.first.word(), t.first.initial());
    let l = t.last.word();
    let (fl, fml) = (t.init_fl.as_str(), t.init_fml.as_str());

    // cmb1990 charlie1990 cbrown90
    out.tier(8);
    out.dated(fml, primary, &[Year4]);
    out.dated(f, primary, &[Year4]);
    out.dated(&cat(&[fi, l]), primary, &[Year2]);
    out.full(fml.to_string());
    out.full(dot(&[fml, l]));
    out.full(dot(&[f, fml]));
    out.dated(fl, primary, &[]);
    out.dated(l, primary, &[]);
    if let Some(middle_last) = &t.middle_last {
        out.dated(middle_last, primary, &[]);
        out.dated(&format!("{middle_last}."), primary, &[]);
    }
    out.dated(&format!("{f}."), primary, &[]);
    out.dated(&format!("{l}."), primary, &[]);
    out.dated(&format!("{fl}."), primary, &[]);
    out.dated(&format!("{fml}."), primary, &[]);
    if let Some(alias) = &t.alias {
        out.full(cat(&[alias.initial(), fml]));
    }
}

/// Group 9, dotted forms of the full name
fn dotted_group(out: &mut Emitter, t: &WesternTokens) {
    let (f, fi) = (t.first.word(), t.first.initial());
    let (l, li) = (t.last.word(), t.last.initial());
    let f_l = cat(&[f, l]);

    // charlie.brown charlie.m.brown
    out.tier(9);
    out.always(dot(&[f, l]));
    out.full(dot(&[l, f]));
    if let Some(middle) = &t.middle {
        let mi = middle.initial();
        out.always(dot(&[f, mi, l]));
        out.full(dot(&[fi, mi, l]));
        out.full(dot(&[f, middle.word(), l]));
        out.full(dot(&[f, &cat(&[mi, li])]));
        out.full(dot(&[&cat(&[fi, mi]), l]));
    }
    if let Some(alias) = &t.alias {
        let (a, ai) = (alias.word(), alias.initial());
        out.full(dot(&[ai, &f_l]));
        out.full(dot(&[a, &f_l]));
        out.full(dot(&[&cat(&[ai, f]), l]));
        if let Some(middle) = &t.middle {
            out.full(cat(&[a, f, middle.initial(), li]));
            out.full(cat(&[a, fi, li, f]));
        }
    }
}

/// Group 10, the second nickname
fn second_nickname_group(
    out: &mut Emitter,
    t: &WesternTokens,
    alias2: &Token,
    primary: &[DateToken],
) {
    let a2 = alias2.word();
    let f = t.first.word();
    let l = t.last.word();
    let fml = t.init_fml.as_str();

    // frostycharlie charliefrosty frostybrown
    out.tier(10);
    out.always(cat(&[a2, f]));
    out.always(cat(&[f, a2]));
    out.always(cat(&[a2, l]));
    for sep in ["", "."] {
        let join = |left: &str, right: &str| [left, right].join(sep);
        out.full(join(a2, f));
        out.full(join(a2, l));
        out.full(join(f, a2));
        if let Some(alias) = &t.alias {
            out.full(join(a2, alias.word()));
            out.full(join(alias.word(), a2));
        }
        out.full(join(a2, fml));
    }
    out.dated(a2, primary, &[]);
    out.dated(&format!("{a2}."), primary, &[]);
}
