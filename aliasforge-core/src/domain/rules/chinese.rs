//! Surname-first (Chinese) combination rules
//!
//! Structure: `[surname] [given1] [given2]`, e.g. `chan tai man` with alias
//! `tommy`. The given name is used as one unit (`taiman`) and never split
//! into syllables; its last word (`man`) is a second anchor of its own.
//! Three tokens carry full date/initial treatment: the alias, the given
//! unit and the last given word.

use super::{cat, dot, StyleRules};
use crate::api::{Mode, Style};
use crate::domain::candidate::{Candidate, Emitter};
use crate::domain::date::DateKind::{Day, MonthDay, Year2, Year4};
use crate::domain::date::{DateInfo, DateToken};
use crate::domain::tokens::{ChineseTokens, Token};

const TIER_NAMES: &[&str] = &[
    "alias + date/initial",
    "alias + given",
    "alias + initials",
    "alias + surname",
    "last given word + date/initial",
    "last given word + given/initials/surname",
    "given + surname initial",
    "given + date",
    "surname + given initials",
    "surname/given order",
    "second alias",
];

/// Rules for the surname-first naming convention
#[derive(Debug, Clone, Copy, Default)]
pub struct ChineseRules;

impl StyleRules for ChineseRules {
    type Tokens = ChineseTokens;

    fn style(&self) -> Style {
        Style::Chinese
    }

    fn tier_names(&self) -> &'static [&'static str] {
        TIER_NAMES
    }

    fn generate(&self, tokens: &ChineseTokens, dates: &DateInfo, mode: Mode) -> Vec<Candidate> {
        let primary = dates.suffixes();
        let extended = dates.extended_suffixes();
        let mut out = Emitter::new(mode);

        if let Some(alias) = &tokens.alias {
            alias_tiers(&mut out, tokens, alias, &primary, &extended);
        }
        if let Some(g2) = &tokens.g2 {
            last_given_tiers(&mut out, tokens, g2, &primary, &extended);
        }
        given_tiers(&mut out, tokens, &primary, &extended);
        surname_tiers(&mut out, tokens, &primary);
        if let Some(alias2) = &tokens.alias2 {
            second_alias_tier(&mut out, tokens, alias2, &primary);
        }

        out.finish()
    }
}

/// Tiers 1-4, anchored on the alias
fn alias_tiers(
    out: &mut Emitter,
    t: &ChineseTokens,
    alias: &Token,
    primary: &[DateToken],
    extended: &[DateToken],
) {
    let (a, ai) = (alias.word(), alias.initial());
    let (s, si) = (t.surname.word(), t.surname.initial());
    let g = t.given.word();
    let (gi, sg) = (t.given_initials.as_str(), t.init_sg.as_str());

    // tommy2001 tommy01 tommy1015 tommyctm
    out.tier(1);
    out.dated(a, primary, &[Year4, Year2, MonthDay]);
    out.dated(a, extended, &[]);
    out.always(cat(&[a, sg]));
    out.full(cat(&[a, si]));
    out.full(dot(&[a, si]));
    out.full(dot(&[si, a]));
    out.full(cat(&[ai, si]));
    out.full(cat(&[ai, sg]));
    out.full(dot(&[ai, s]));

    // tommytaiman tommy.taiman tommytaiman01
    let a_g = cat(&[a, g]);
    let a_dot_g = dot(&[a, g]);
    let ai_g = cat(&[ai, g]);
    let ai_dot_g = dot(&[ai, g]);
    out.tier(2);
    out.always(a_g.clone());
    out.always(a_dot_g.clone());
    out.full(dot(&[g, a]));
    out.dated(&a_g, primary, &[Year2, MonthDay]);
    out.dated(&a_dot_g, primary, &[Year2]);
    out.dated(&cat(&[a, g, si]), primary, &[]);
    out.dated(&dot(&[a, g, si]), primary, &[]);
    out.full(ai_g.clone());
    out.full(ai_dot_g.clone());
    out.dated(&ai_g, primary, &[]);
    out.dated(&ai_dot_g, primary, &[]);

    // tommyctm tommy.ctm tommyctm2001
    let a_sg = cat(&[a, sg]);
    let a_dot_sg = dot(&[a, sg]);
    out.tier(3);
    out.always(a_sg.clone());
    out.always(a_dot_sg.clone());
    out.full(dot(&[sg, a]));
    out.dated(&a_sg, primary, &[Year4, Year2, MonthDay]);
    out.dated(&a_dot_sg, primary, &[Year2]);
    out.dated(&cat(&[ai, sg]), primary, &[]);
    out.full(cat(&[a, gi]));
    out.full(dot(&[a, gi]));

    // tommychan tommy.chan tommychan01
    let a_s = cat(&[a, s]);
    let a_dot_s = dot(&[a, s]);
    out.tier(4);
    out.always(a_s.clone());
    out.always(a_dot_s.clone());
    out.full(dot(&[s, a]));
    out.dated(&a_s, primary, &[Year2]);
    out.dated(&a_dot_s, primary, &[]);
    out.full(dot(&[a, s, g]));
}

/// Tiers 5-6, anchored on the last given word
fn last_given_tiers(
    out: &mut Emitter,
    t: &ChineseTokens,
    g2: &Token,
    primary: &[DateToken],
    extended: &[DateToken],
) {
    let w = g2.word();
    let (s, si) = (t.surname.word(), t.surname.initial());
    let g = t.given.word();
    let (gi, sg) = (t.given_initials.as_str(), t.init_sg.as_str());

    // man2001 man1015 manctm
    let w_si = cat(&[w, si]);
    let w_dot_si = dot(&[w, si]);
    out.tier(5);
    out.dated(w, primary, &[Year4, Year2, MonthDay]);
    out.dated(w, extended, &[]);
    out.always(cat(&[w, sg]));
    out.full(w_si.clone());
    out.full(w_dot_si.clone());
    out.full(dot(&[si, w]));
    out.dated(&w_si, primary, &[]);
    out.dated(&w_dot_si, primary, &[]);

    // mantaiman manchan manctm01
    let w_g = cat(&[w, g]);
    let w_dot_g = dot(&[w, g]);
    let w_sg = cat(&[w, sg]);
    let w_dot_sg = dot(&[w, sg]);
    let w_s = cat(&[w, s]);
    let w_dot_s = dot(&[w, s]);
    let g_si = cat(&[g, si]);
    out.tier(6);
    out.always(w_g.clone());
    out.full(w_dot_g.clone());
    out.dated(&w_g, primary, &[]);
    out.dated(&w_dot_g, primary, &[]);
    out.full(w_dot_sg.clone());
    out.full(dot(&[sg, w]));
    out.dated(&w_sg, primary, &[Year2]);
    out.dated(&w_dot_sg, primary, &[]);
    out.always(w_s.clone());
    out.full(w_dot_s.clone());
    out.full(dot(&[s, w]));
    out.dated(&w_s, primary, &[]);
    out.dated(&w_dot_s, primary, &[]);
    out.dated(&cat(&[w, &g_si]), primary, &[]);
    out.full(dot(&[w, &g_si]));
    out.full(dot(&[w, g, si]));
    out.full(cat(&[w, gi]));
    out.full(dot(&[w, gi]));

    if let Some(alias) = &t.alias {
        let (a, ai) = (alias.word(), alias.initial());
        let ai_w = cat(&[ai, w]);
        let a_w = cat(&[a, w]);
        let a_dot_w = dot(&[a, w]);
        out.full(ai_w.clone());
        out.full(dot(&[ai, w]));
        out.dated(&ai_w, primary, &[]);
        out.full(a_w.clone());
        out.full(a_dot_w.clone());
        out.dated(&a_w, primary, &[]);
        out.dated(&a_dot_w, primary, &[]);
        out.dated(&cat(&[a, w, si]), primary, &[]);
    }
}

/// Tiers 7-8, anchored on the given-name unit
fn given_tiers(out: &mut Emitter, t: &ChineseTokens, primary: &[DateToken], extended: &[DateToken]) {
    let g = t.given.word();
    let si = t.surname.initial();

    // taimanc taimanc1015 taiman.c01
    let g_si = cat(&[g, si]);
    let g_dot_si = dot(&[g, si]);
    out.tier(7);
    out.always(g_si.clone());
    out.full(g_dot_si.clone());
    out.full(dot(&[si, g]));
    out.dated(&g_si, primary, &[Year4, Year2, MonthDay]);
    out.dated(&g_dot_si, primary, &[]);
    out.dated(&format!("{g_dot_si}."), primary, &[]);

    // taiman2001 taiman1015 taiman15
    out.tier(8);
    out.dated(g, primary, &[Year4, Year2, MonthDay, Day]);
    out.dated(g, extended, &[]);
    out.dated(&format!("{g}."), primary, &[]);
}

/// Tiers 9-10, surname combinations; a bare surname never takes a date
fn surname_tiers(out: &mut Emitter, t: &ChineseTokens, primary: &[DateToken]) {
    let s = t.surname.word();
    let g = t.given.word();
    let (gi, sg) = (t.given_initials.as_str(), t.init_sg.as_str());

    // chantm chantm01 ctm2001
    let s_gi = cat(&[s, gi]);
    out.tier(9);
    out.always(s_gi.clone());
    out.full(sg.to_string());
    out.full(dot(&[s, gi]));
    out.dated(&s_gi, primary, &[Year2]);
    out.dated(sg, primary, &[Year4]);
    out.full(dot(&[s, sg]));
    out.full(dot(&[sg, s]));

    // chantaiman taimanchan
    out.tier(10);
    out.always(cat(&[s, g]));
    out.always(cat(&[g, s]));
    out.full(dot(&[s, g]));
    out.full(dot(&[g, s]));
}

/// Tier 11, the second alias
fn second_alias_tier(out: &mut Emitter, t: &ChineseTokens, alias2: &Token, primary: &[DateToken]) {
    let a2 = alias2.word();
    let s = t.surname.word();
    let g = t.given.word();

    let a2_g = cat(&[a2, g]);
    out.tier(11);
    out.always(a2_g.clone());
    out.always(cat(&[a2, s]));
    out.full(dot(&[g, a2]));
    if let Some(alias) = &t.alias {
        out.full(dot(&[alias.word(), a2]));
    }
    out.dated(a2, primary, &[Year4]);
    out.dated(&a2_g, primary, &[]);
    out.dated(&format!("{a2}."), primary, &[]);
    out.full(dot(&[a2, g]));
    out.full(dot(&[a2, s]));
    out.full(cat(&[a2, &t.init_sg]));
}
