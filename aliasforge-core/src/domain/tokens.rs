//! Token derivation for both naming styles
//!
//! Raw profile fields are reduced to lowercase ASCII words plus their
//! initials. A field that was not supplied stays `None` all the way through,
//! so rules that need it are skipped instead of producing half-built strings.

use crate::api::{NameProfile, Style};
use crate::domain::date::DateInfo;
use crate::error::ValidationError;
use smallvec::SmallVec;

/// A normalized word and its initial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    word: String,
    initial: String,
}

impl Token {
    /// Build a token from an already normalized, non-empty word
    fn from_word(word: String) -> Self {
        let initial = word.chars().take(1).collect();
        Self { word, initial }
    }

    /// Normalize a raw field; `None` when nothing usable remains
    pub fn parse(raw: &str) -> Option<Self> {
        normalize_word(raw).map(Self::from_word)
    }

    /// The lowercase word
    pub fn word(&self) -> &str {
        &self.word
    }

    /// First letter of the word
    pub fn initial(&self) -> &str {
        &self.initial
    }
}

/// Tokens for the surname-first style, e.g. `chan tai man` alias `tommy`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChineseTokens {
    /// `chan`
    pub surname: Token,
    /// `taiman`, every given word joined; its initial is the first word's
    pub given: Token,
    /// `man`, last given word when the given name has several words
    pub g2: Option<Token>,
    /// `tommy`
    pub alias: Option<Token>,
    /// Second alias
    pub alias2: Option<Token>,
    /// `tm`
    pub given_initials: String,
    /// `ctm`
    pub init_sg: String,
}

/// Tokens for the given-name-first style, e.g. `charlie monroe brown`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WesternTokens {
    /// `charlie`
    pub first: Token,
    /// `monroe`
    pub middle: Option<Token>,
    /// `brown`
    pub last: Token,
    /// Nickname
    pub alias: Option<Token>,
    /// Second nickname
    pub alias2: Option<Token>,
    /// `cb`
    pub init_fl: String,
    /// `cmb`, or `cb` without a middle name
    pub init_fml: String,
    /// `monroebrown`, only with a middle name
    pub middle_last: Option<String>,
}

/// Token bundle for the selected style
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tokens {
    /// Surname-first tokens
    Chinese(ChineseTokens),
    /// Given-name-first tokens
    Western(WesternTokens),
}

impl Tokens {
    /// Style these tokens were derived for
    pub fn style(&self) -> Style {
        match self {
            Tokens::Chinese(_) => Style::Chinese,
            Tokens::Western(_) => Style::Western,
        }
    }
}

/// Tokenize a profile for `style` and derive its date information
///
/// Name fields are validated before the date fields, and nothing is
/// generated until both succeed.
pub fn tokenize(style: Style, profile: &NameProfile) -> Result<(Tokens, DateInfo), ValidationError> {
    let tokens = match style {
        Style::Chinese => Tokens::Chinese(ChineseTokens::from_profile(profile)?),
        Style::Western => Tokens::Western(WesternTokens::from_profile(profile)?),
    };
    let dates = DateInfo::parse(profile.year(), profile.dob())?;
    Ok((tokens, dates))
}

impl ChineseTokens {
    /// Derive surname-first tokens; `first` holds the given name(s), `last` the surname
    pub fn from_profile(profile: &NameProfile) -> Result<Self, ValidationError> {
        let style = Style::Chinese;
        let surname = required(profile.last(), "surname", style)?;

        let raw_given = present(profile.first()).ok_or(ValidationError::MissingField {
            field: "given name",
            style,
        })?;
        warn_if_lossy(raw_given, "given name");
        let words: SmallVec<[String; 3]> =
            raw_given.split_whitespace().filter_map(normalize_word).collect();
        let Some(body) = words.first() else {
            return Err(ValidationError::EmptyField {
                field: "given name",
                value: raw_given.to_string(),
            });
        };

        let given = Token {
            initial: body.chars().take(1).collect(),
            word: words.concat(),
        };
        let g2 = match words.as_slice() {
            [_, .., last] => Some(Token::from_word(last.clone())),
            _ => None,
        };

        if present(profile.middle()).is_some() {
            log::warn!("Middle name is not used by the Chinese style and will be ignored");
        }

        let given_initials = format!(
            "{}{}",
            given.initial(),
            g2.as_ref().map_or("", Token::initial)
        );
        let init_sg = format!("{}{}", surname.initial(), given_initials);

        Ok(Self {
            surname,
            given,
            g2,
            alias: optional(profile.alias(), "alias")?,
            alias2: optional(profile.alias2(), "second alias")?,
            given_initials,
            init_sg,
        })
    }
}

impl WesternTokens {
    /// Derive given-name-first tokens
    pub fn from_profile(profile: &NameProfile) -> Result<Self, ValidationError> {
        let style = Style::Western;
        let first = required(profile.first(), "first name", style)?;
        let last = required(profile.last(), "last name", style)?;
        let middle = optional(profile.middle(), "middle name")?;

        let init_fl = format!("{}{}", first.initial(), last.initial());
        let init_fml = match &middle {
            Some(middle) => format!("{}{}{}", first.initial(), middle.initial(), last.initial()),
            None => init_fl.clone(),
        };
        let middle_last = middle
            .as_ref()
            .map(|middle| format!("{}{}", middle.word(), last.word()));

        Ok(Self {
            first,
            middle,
            last,
            alias: optional(profile.alias(), "alias")?,
            alias2: optional(profile.alias2(), "second alias")?,
            init_fl,
            init_fml,
            middle_last,
        })
    }
}

/// Lowercase ASCII letters and digits only; whitespace and punctuation vanish
fn normalize_word(raw: &str) -> Option<String> {
    let word: String = raw
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    (!word.is_empty()).then_some(word)
}

/// Letters outside ASCII are dropped rather than transliterated
fn drops_letters(raw: &str) -> bool {
    raw.chars().any(|c| c.is_alphanumeric() && !c.is_ascii())
}

fn warn_if_lossy(raw: &str, field: &'static str) {
    if drops_letters(raw) {
        log::warn!("Non-ASCII letters in {field} '{raw}' are dropped from usernames");
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|raw| !raw.is_empty())
}

fn required(value: Option<&str>, field: &'static str, style: Style) -> Result<Token, ValidationError> {
    let raw = present(value).ok_or(ValidationError::MissingField { field, style })?;
    warn_if_lossy(raw, field);
    Token::parse(raw).ok_or_else(|| ValidationError::EmptyField {
        field,
        value: raw.to_string(),
    })
}

fn optional(value: Option<&str>, field: &'static str) -> Result<Option<Token>, ValidationError> {
    match present(value) {
        None => Ok(None),
        Some(raw) => {
            warn_if_lossy(raw, field);
            Token::parse(raw)
                .map(Some)
                .ok_or_else(|| ValidationError::EmptyField {
                    field,
                    value: raw.to_string(),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chinese(first: &str, last: &str) -> ChineseTokens {
        let profile = NameProfile::builder().first(first).last(last).build();
        ChineseTokens::from_profile(&profile).unwrap()
    }

    #[test]
    fn test_chinese_two_word_given() {
        let tokens = chinese("Tai Man", "Chan");
        assert_eq!(tokens.surname.word(), "chan");
        assert_eq!(tokens.given.word(), "taiman");
        assert_eq!(tokens.given.initial(), "t");
        assert_eq!(tokens.g2.as_ref().map(Token::word), Some("man"));
        assert_eq!(tokens.given_initials, "tm");
        assert_eq!(tokens.init_sg, "ctm");
    }

    #[test]
    fn test_chinese_single_word_given_has_no_g2() {
        let tokens = chinese("  Wei ", "LI");
        assert_eq!(tokens.given.word(), "wei");
        assert!(tokens.g2.is_none());
        assert_eq!(tokens.given_initials, "w");
        assert_eq!(tokens.init_sg, "lw");
    }

    #[test]
    fn test_chinese_g2_is_last_word() {
        let tokens = chinese("Tai Man Wai", "Chan");
        assert_eq!(tokens.given.word(), "taimanwai");
        assert_eq!(tokens.g2.as_ref().map(Token::word), Some("wai"));
        assert_eq!(tokens.init_sg, "ctw");
    }

    #[test]
    fn test_chinese_missing_surname() {
        let profile = NameProfile::builder().first("Tai Man").build();
        let err = ChineseTokens::from_profile(&profile).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "surname",
                style: Style::Chinese
            }
        );
    }

    #[test]
    fn test_western_tokens_with_middle() {
        let profile = NameProfile::builder()
            .first("Charlie")
            .middle("Monroe")
            .last("Brown")
            .alias("Tommy")
            .build();
        let tokens = WesternTokens::from_profile(&profile).unwrap();
        assert_eq!(tokens.init_fl, "cb");
        assert_eq!(tokens.init_fml, "cmb");
        assert_eq!(tokens.middle_last.as_deref(), Some("monroebrown"));
        assert_eq!(tokens.alias.as_ref().map(Token::initial), Some("t"));
    }

    #[test]
    fn test_western_without_middle_falls_back_to_fl() {
        let profile = NameProfile::builder().first("Charlie").last("Brown").build();
        let tokens = WesternTokens::from_profile(&profile).unwrap();
        assert_eq!(tokens.init_fml, "cb");
        assert!(tokens.middle.is_none());
        assert!(tokens.middle_last.is_none());
    }

    #[test]
    fn test_punctuation_is_stripped() {
        let profile = NameProfile::builder().first("Mary-Ann").last("O'Brien").build();
        let tokens = WesternTokens::from_profile(&profile).unwrap();
        assert_eq!(tokens.first.word(), "maryann");
        assert_eq!(tokens.last.word(), "obrien");
    }

    #[test]
    fn test_unusable_alias_is_rejected() {
        let profile = NameProfile::builder()
            .first("Charlie")
            .last("Brown")
            .alias("__")
            .build();
        let err = WesternTokens::from_profile(&profile).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { field: "alias", .. }));
    }

    #[test]
    fn test_blank_optional_is_absent() {
        let profile = NameProfile::builder()
            .first("Charlie")
            .last("Brown")
            .middle("   ")
            .build();
        let tokens = WesternTokens::from_profile(&profile).unwrap();
        assert!(tokens.middle.is_none());
    }

    #[test]
    fn test_non_ascii_letters_are_dropped() {
        assert!(drops_letters("José"));
        assert!(drops_letters("陳"));
        assert!(!drops_letters("Mary-Ann O'Neil"));

        let profile = NameProfile::builder().first("José").last("Brown").build();
        let tokens = WesternTokens::from_profile(&profile).unwrap();
        assert_eq!(tokens.first.word(), "jos");
    }

    #[test]
    fn test_tokenize_checks_dates() {
        let profile = NameProfile::builder()
            .first("Charlie")
            .last("Brown")
            .dob("1990.03.22")
            .build();
        assert!(matches!(
            tokenize(Style::Western, &profile),
            Err(ValidationError::InvalidDate(_))
        ));
    }
}
