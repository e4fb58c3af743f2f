//! Raw input fields describing the target

/// Name, aliases and dates of the target, exactly as supplied
///
/// Which fields are required depends on the [`Style`](crate::Style): the
/// Chinese style needs a surname (`last`) and given name (`first`), the
/// Western style a first and last name. Validation happens at generation
/// time, so a profile can be reused across styles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameProfile {
    first: Option<String>,
    last: Option<String>,
    middle: Option<String>,
    alias: Option<String>,
    alias2: Option<String>,
    year: Option<String>,
    dob: Option<String>,
}

impl NameProfile {
    /// Create a profile builder
    pub fn builder() -> NameProfileBuilder {
        NameProfileBuilder::default()
    }

    /// Western first name, or the Chinese given name(s)
    pub fn first(&self) -> Option<&str> {
        self.first.as_deref()
    }

    /// Surname
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Western middle name
    pub fn middle(&self) -> Option<&str> {
        self.middle.as_deref()
    }

    /// English alias or nickname
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Second alias
    pub fn alias2(&self) -> Option<&str> {
        self.alias2.as_deref()
    }

    /// Year of birth
    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    /// Date of birth
    pub fn dob(&self) -> Option<&str> {
        self.dob.as_deref()
    }
}

/// Fluent builder for [`NameProfile`]
#[derive(Debug, Default)]
pub struct NameProfileBuilder {
    profile: NameProfile,
}

impl NameProfileBuilder {
    /// Set the first (Western) or given (Chinese) name
    pub fn first(mut self, value: impl Into<String>) -> Self {
        self.profile.first = Some(value.into());
        self
    }

    /// Set the surname
    pub fn last(mut self, value: impl Into<String>) -> Self {
        self.profile.last = Some(value.into());
        self
    }

    /// Set the middle name
    pub fn middle(mut self, value: impl Into<String>) -> Self {
        self.profile.middle = Some(value.into());
        self
    }

    /// Set the alias
    pub fn alias(mut self, value: impl Into<String>) -> Self {
        self.profile.alias = Some(value.into());
        self
    }

    /// Set the second alias
    pub fn alias2(mut self, value: impl Into<String>) -> Self {
        self.profile.alias2 = Some(value.into());
        self
    }

    /// Set the year of birth
    pub fn year(mut self, value: impl Into<String>) -> Self {
        self.profile.year = Some(value.into());
        self
    }

    /// Set the date of birth, `YYYY/MM/DD` or `YYYY-MM-DD`
    pub fn dob(mut self, value: impl Into<String>) -> Self {
        self.profile.dob = Some(value.into());
        self
    }

    /// Build the profile
    pub fn build(self) -> NameProfile {
        self.profile
    }
}
