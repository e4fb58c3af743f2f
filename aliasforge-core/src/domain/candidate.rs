//! Generated candidates and the tier-aware emitter used by rule sets

use crate::api::Mode;
use crate::domain::date::{DateKind, DateToken};
use serde::Serialize;

/// Rank of the tier or group that produced a candidate; lower is more likely
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Tier(pub u8);

/// A generated, not yet filtered username
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The username text
    pub text: String,
    /// Producing tier
    pub tier: Tier,
    /// Shape of the trailing date suffix, if any
    pub suffix: Option<DateKind>,
}

impl Candidate {
    /// Candidate without a date suffix
    pub fn plain(text: impl Into<String>, tier: Tier) -> Self {
        Self {
            text: text.into(),
            tier,
            suffix: None,
        }
    }

    /// Candidate ending in a date suffix
    pub fn dated(text: impl Into<String>, tier: Tier, suffix: DateKind) -> Self {
        Self {
            text: text.into(),
            tier,
            suffix: Some(suffix),
        }
    }
}

/// Collects candidates in emission order, dropping patterns the mode excludes
pub(crate) struct Emitter {
    mode: Mode,
    tier: Tier,
    candidates: Vec<Candidate>,
}

impl Emitter {
    pub(crate) fn new(mode: Mode) -> Self {
        Self {
            mode,
            tier: Tier(1),
            candidates: Vec::new(),
        }
    }

    /// Start the tier with the given rank
    pub(crate) fn tier(&mut self, rank: u8) {
        self.tier = Tier(rank);
    }

    /// Emitted in every mode
    pub(crate) fn always(&mut self, text: String) {
        self.emit(Mode::Default, text, None);
    }

    /// Emitted in full mode only
    pub(crate) fn full(&mut self, text: String) {
        self.emit(Mode::Full, text, None);
    }

    /// `stem` followed by every suffix; kinds listed in `curated` are emitted
    /// in every mode, the rest only in full mode
    pub(crate) fn dated(&mut self, stem: &str, suffixes: &[DateToken], curated: &[DateKind]) {
        for date in suffixes {
            let required = if curated.contains(&date.kind) {
                Mode::Default
            } else {
                Mode::Full
            };
            self.emit(required, format!("{stem}{}", date.text), Some(date.kind));
        }
    }

    fn emit(&mut self, required: Mode, text: String, suffix: Option<DateKind>) {
        if self.mode.includes(required) {
            self.candidates.push(Candidate {
                text,
                tier: self.tier,
                suffix,
            });
        }
    }

    pub(crate) fn finish(self) -> Vec<Candidate> {
        self.candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::date::DateInfo;

    #[test]
    fn test_default_mode_skips_full_patterns() {
        let mut out = Emitter::new(Mode::Default);
        out.always("tommychan".to_string());
        out.full("chan.tommy".to_string());
        let texts: Vec<_> = out.finish().into_iter().map(|c| c.text).collect();
        assert_eq!(texts, vec!["tommychan"]);
    }

    #[test]
    fn test_dated_curates_by_kind() {
        let dates = DateInfo::parse(None, Some("2001/10/15")).unwrap();
        let suffixes = dates.suffixes();

        let mut out = Emitter::new(Mode::Default);
        out.tier(2);
        out.dated("tommy", &suffixes, &[DateKind::Year4, DateKind::MonthDay]);
        let candidates = out.finish();

        assert_eq!(
            candidates,
            vec![
                Candidate::dated("tommy2001", Tier(2), DateKind::Year4),
                Candidate::dated("tommy1015", Tier(2), DateKind::MonthDay),
            ]
        );
    }

    #[test]
    fn test_full_mode_emits_everything_in_order() {
        let dates = DateInfo::parse(Some("2001"), None).unwrap();
        let mut out = Emitter::new(Mode::Full);
        out.always("taiman".to_string());
        out.dated("taiman", &dates.suffixes(), &[]);
        out.full("taiman.c".to_string());
        let texts: Vec<_> = out.finish().into_iter().map(|c| c.text).collect();
        assert_eq!(texts, vec!["taiman", "taiman2001", "taiman01", "taiman.c"]);
    }
}
