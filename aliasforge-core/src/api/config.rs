//! Configuration API for candidate generation

use crate::api::{Error, Mode, Style};
use crate::domain::LengthWindow;
use std::str::FromStr;

/// Default configuration constants
pub mod defaults {
    /// Shortest username kept by either style
    pub const MIN_LENGTH: usize = 6;

    /// Longest username kept for the Chinese style
    pub const MAX_LENGTH_CHINESE: usize = 16;

    /// Longest username kept for the Western style
    pub const MAX_LENGTH_WESTERN: usize = 18;
}

/// Generation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) style: Style,
    pub(crate) mode: Mode,
    pub(crate) window: LengthWindow,
}

impl Config {
    /// Configuration for `style` with its default window and mode
    pub fn new(style: Style) -> Self {
        Self {
            style,
            mode: Mode::default(),
            window: style.length_window(),
        }
    }

    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Selected style
    pub fn style(&self) -> Style {
        self.style
    }

    /// Selected mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Accepted username length
    pub fn window(&self) -> LengthWindow {
        self.window
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.window.min == 0 {
            return Err(Error::Configuration(
                "min_length must be greater than 0".into(),
            ));
        }

        if self.window.min > self.window.max {
            return Err(Error::Configuration(format!(
                "min_length ({}) must not exceed max_length ({})",
                self.window.min, self.window.max
            )));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    style: Option<String>,
    mode: Option<Mode>,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style by code
    pub fn style(mut self, code: impl Into<String>) -> Result<Self, Error> {
        self.style = Some(code.into());
        Ok(self)
    }

    /// Set the generation mode
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Shorthand for `mode(Mode::from_full_flag(full))`
    pub fn full(self, full: bool) -> Self {
        self.mode(Mode::from_full_flag(full))
    }

    /// Override the style's length window
    pub fn length_window(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    /// Override only the lower bound
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Override only the upper bound
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let code = self
            .style
            .ok_or_else(|| Error::Configuration("style must be set".into()))?;
        let mut config = Config::new(Style::from_str(&code)?);

        if let Some(mode) = self.mode {
            config.mode = mode;
        }

        if let Some(min) = self.min_length {
            config.window.min = min;
        }

        if let Some(max) = self.max_length {
            config.window.max = max;
        }

        config.validate()?;
        Ok(config)
    }
}
