//! Generation pipeline: tokenize, apply rules, filter, deduplicate

use std::collections::BTreeMap;

use crate::api::{Config, Error, GenerationStats, Mode, NameProfile, Style, Wordlist};
use crate::domain::{
    dedup_preserving_order, tokenize, Candidate, CandidateFilter, ChineseRules, DateInfo,
    StyleRules, Tokens, WesternRules,
};

/// Username generator for one style and mode
#[derive(Debug, Clone)]
pub struct Generator {
    config: Config,
}

impl Generator {
    /// Generator for `style` in default mode with the style's length window
    pub fn new(style: Style) -> Self {
        Self {
            config: Config::new(style),
        }
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a generator for a style code such as `"chinese"` or `"en"`
    pub fn for_style(code: impl Into<String>) -> Result<Self, Error> {
        let config = Config::builder().style(code)?.build()?;
        Self::with_config(config)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate the word list for `profile`
    ///
    /// Fails only when the profile does not validate for the configured
    /// style. An empty result is reported through
    /// [`Wordlist::empty_warning`], not as an error.
    pub fn generate(&self, profile: &NameProfile) -> Result<Wordlist, Error> {
        let (tokens, dates) = tokenize(self.config.style, profile)?;
        log::debug!(
            "Generating {} usernames in {} mode (dates: {:?})",
            self.config.style,
            self.config.mode,
            dates
        );

        let candidates = match &tokens {
            Tokens::Chinese(tokens) => self.run_rules(&ChineseRules, tokens, &dates),
            Tokens::Western(tokens) => self.run_rules(&WesternRules, tokens, &dates),
        };

        Ok(self.collect(candidates))
    }

    fn run_rules<R: StyleRules>(
        &self,
        rules: &R,
        tokens: &R::Tokens,
        dates: &DateInfo,
    ) -> Vec<Candidate> {
        let candidates = rules.generate(tokens, dates, self.config.mode);

        if log::log_enabled!(log::Level::Debug) {
            let mut per_tier: BTreeMap<u8, usize> = BTreeMap::new();
            for candidate in &candidates {
                *per_tier.entry(candidate.tier.0).or_default() += 1;
            }
            let names = rules.tier_names();
            for (rank, count) in per_tier {
                let name = names
                    .get(usize::from(rank).saturating_sub(1))
                    .copied()
                    .unwrap_or("unnamed");
                log::debug!("Tier {rank} ({name}): {count} candidates");
            }
        }

        candidates
    }

    /// Filter, then deduplicate keeping first-seen order
    fn collect(&self, candidates: Vec<Candidate>) -> Wordlist {
        let filter = CandidateFilter::new(self.config.window);
        let generated = candidates.len();

        let accepted: Vec<String> = candidates
            .into_iter()
            .filter_map(|candidate| match filter.check(&candidate) {
                Ok(()) => Some(candidate.text),
                Err(reason) => {
                    log::trace!("Rejected '{}': {}", candidate.text, reason);
                    None
                }
            })
            .collect();

        let rejected = generated - accepted.len();
        let accepted_count = accepted.len();
        let usernames = dedup_preserving_order(accepted);

        let stats = GenerationStats {
            generated,
            rejected,
            duplicates: accepted_count - usernames.len(),
            emitted: usernames.len(),
        };
        log::info!(
            "{} candidates generated, {} rejected, {} duplicates, {} emitted",
            stats.generated,
            stats.rejected,
            stats.duplicates,
            stats.emitted
        );

        Wordlist::new(
            usernames,
            self.config.style,
            self.config.mode,
            self.config.window,
            stats,
        )
    }
}

/// Generate a word list with the style's default length window
pub fn generate(style: Style, mode: Mode, profile: &NameProfile) -> Result<Wordlist, Error> {
    let config = Config {
        mode,
        ..Config::new(style)
    };
    Generator::with_config(config)?.generate(profile)
}
