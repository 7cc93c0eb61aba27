use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use crate::flagpole::country_code::CountryCode;

/// A `FlagpoleUser` holds the attributes of a user browsing your site. The
/// only mandatory attribute is the `key`, which must uniquely identify each
/// user: a username or e-mail address for authenticated users, an IP address
/// or session ID for anonymous ones.
///
/// Besides the key there are two kinds of optional attributes: interpreted
/// attributes (`ip`, `country`) that the platform may attach meaning to, and
/// custom attributes, which are opaque to the SDK and only consulted by
/// caller-defined targeting rules.
///
/// Instances are immutable. They are assembled with [`UserBuilder`]:
///
/// ```
/// use flagpole::UserBuilder;
///
/// let user = UserBuilder::new("user@test.com")
///     .country("US")
///     .ip("192.168.0.1")
///     .build();
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlagpoleUser {
    key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<CountryCode>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    custom: HashMap<String, Value>,
}

impl FlagpoleUser {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn ip(&self) -> Option<&str> {
        self.ip.as_deref()
    }

    pub fn secondary(&self) -> Option<&str> {
        self.secondary.as_deref()
    }

    pub fn country(&self) -> Option<CountryCode> {
        self.country
    }

    /// The custom attribute stored under `name`, if any.
    pub fn custom(&self, name: &str) -> Option<&Value> {
        self.custom.get(name)
    }
}

/// Accumulates attributes for a [`FlagpoleUser`]. Setters can be chained and
/// never fail; the worst outcome of bad input is a logged warning. `build`
/// reads the current state, so one builder can produce several users.
pub struct UserBuilder {
    key: String,
    secondary: Option<String>,
    ip: Option<String>,
    country: Option<CountryCode>,
    custom: HashMap<String, Value>,
}

impl UserBuilder {
    /// Creates a builder for the user with the given key. The key is stored
    /// verbatim; uniqueness and non-emptiness are the caller's contract.
    pub fn new(key: impl Into<String>) -> Self {
        UserBuilder {
            key: key.into(),
            secondary: None,
            ip: None,
            country: None,
            custom: HashMap::new(),
        }
    }

    /// Sets the user's IP address. Stored verbatim, never validated.
    pub fn ip(&mut self, ip: impl Into<String>) -> &mut Self {
        self.ip = Some(ip.into());
        self
    }

    /// Sets the secondary key, used downstream for attribute-based
    /// partitioning of users that share a primary key.
    pub fn secondary(&mut self, secondary: impl Into<String>) -> &mut Self {
        self.secondary = Some(secondary.into());
        self
    }

    /// Sets the user's country from an already resolved code.
    pub fn country_code(&mut self, country: CountryCode) -> &mut Self {
        self.country = Some(country);
        self
    }

    /// Sets the user's country from free text. The text should be a valid
    /// ISO-3166-1 alpha-2 or alpha-3 code; failing that, it is matched as a
    /// prefix of the full country names. Unrecognized text logs a warning and
    /// leaves the country unset, ambiguous text logs a warning and keeps the
    /// first match. Resolution never fails the call.
    pub fn country(&mut self, text: &str) -> &mut Self {
        self.country = CountryCode::from_code(text);

        if self.country.is_none() {
            let pattern = format!("^{}.*", regex::escape(text));
            let codes = CountryCode::find_by_name(&pattern);

            if codes.is_empty() {
                warn!("Invalid country. Expected valid ISO-3166-1 code: {}", text);
            } else if codes.len() > 1 {
                // Prefix-ambiguous, but the text may still name one of the
                // candidates exactly.
                for code in &codes {
                    if code.name() == text {
                        self.country = Some(*code);
                        return self;
                    }
                }
                warn!(
                    "Ambiguous country. Provided code matches multiple countries: {}",
                    text
                );
                self.country = Some(codes[0]);
            } else {
                self.country = Some(codes[0]);
            }
        }
        self
    }

    /// Adds a string-valued custom attribute, replacing any previous value
    /// stored under the same name.
    pub fn custom_string(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.custom.insert(name.into(), json!(value.into()));
        self
    }

    /// Adds a number-valued custom attribute, replacing any previous value.
    pub fn custom_number(&mut self, name: impl Into<String>, value: f64) -> &mut Self {
        self.custom.insert(name.into(), json!(value));
        self
    }

    /// Adds a custom attribute holding an ordered list of strings, replacing
    /// any previous value.
    pub fn custom_string_list(&mut self, name: impl Into<String>, values: Vec<String>) -> &mut Self {
        self.custom.insert(name.into(), json!(values));
        self
    }

    /// Builds the configured [`FlagpoleUser`]. The custom attribute map is
    /// copied, so the builder and the built user never share state.
    pub fn build(&self) -> FlagpoleUser {
        FlagpoleUser {
            key: self.key.clone(),
            secondary: self.secondary.clone(),
            ip: self.ip.clone(),
            country: self.country,
            custom: self.custom.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn warnings(lines: &[&str]) -> usize {
        lines.iter().filter(|line| line.contains("WARN")).count()
    }

    #[test]
    fn build_keeps_the_key_verbatim() {
        assert_eq!(UserBuilder::new("user@test.com").build().key(), "user@test.com");
        assert_eq!(UserBuilder::new("").build().key(), "");
    }

    #[test]
    fn chained_setters_populate_every_field() {
        let user = UserBuilder::new("u1")
            .ip("192.168.0.1")
            .secondary("session-17")
            .country("USA")
            .custom_string("plan", "gold")
            .build();

        assert_eq!(user.key(), "u1");
        assert_eq!(user.ip(), Some("192.168.0.1"));
        assert_eq!(user.secondary(), Some("session-17"));
        assert_eq!(user.country(), Some(CountryCode::US));
        assert_eq!(user.custom("plan"), Some(&json!("gold")));
        assert_eq!(user.custom("missing"), None);
    }

    #[test]
    fn country_accepts_alpha2_and_alpha3_codes() {
        let user = UserBuilder::new("u1").country("US").build();
        assert_eq!(user.country(), Some(CountryCode::US));

        let user = UserBuilder::new("u1").country("nzl").build();
        assert_eq!(user.country(), Some(CountryCode::NZ));
    }

    #[test]
    fn country_code_stores_the_typed_value_directly() {
        let user = UserBuilder::new("u1").country_code(CountryCode::JP).build();
        assert_eq!(user.country(), Some(CountryCode::JP));
    }

    #[traced_test]
    #[test]
    fn country_resolves_a_unique_name_prefix() {
        let user = UserBuilder::new("u1").country("Switz").build();
        assert_eq!(user.country(), Some(CountryCode::CH));
        logs_assert(|lines: &[&str]| match warnings(lines) {
            0 => Ok(()),
            n => Err(format!("expected no warnings, got {}", n)),
        });
    }

    #[traced_test]
    #[test]
    fn country_prefers_an_exact_name_among_ambiguous_prefixes() {
        // "United States" also prefix-matches "United States Minor Outlying
        // Islands"; the exact name must win without a warning.
        let user = UserBuilder::new("u1").country("United States").build();
        assert_eq!(user.country(), Some(CountryCode::US));
        logs_assert(|lines: &[&str]| match warnings(lines) {
            0 => Ok(()),
            n => Err(format!("expected no warnings, got {}", n)),
        });
    }

    #[traced_test]
    #[test]
    fn ambiguous_country_falls_back_to_the_first_match_with_one_warning() {
        let user = UserBuilder::new("u1").country("United").build();
        assert_eq!(user.country(), Some(CountryCode::AE));
        assert!(logs_contain("Ambiguous country"));
        logs_assert(|lines: &[&str]| match warnings(lines) {
            1 => Ok(()),
            n => Err(format!("expected exactly one warning, got {}", n)),
        });
    }

    #[traced_test]
    #[test]
    fn unrecognized_country_is_left_unset_with_one_warning() {
        let user = UserBuilder::new("u2").country("Unitedstatesofxyz").build();
        assert_eq!(user.country(), None);
        assert!(logs_contain("Invalid country"));
        logs_assert(|lines: &[&str]| match warnings(lines) {
            1 => Ok(()),
            n => Err(format!("expected exactly one warning, got {}", n)),
        });
    }

    #[traced_test]
    #[test]
    fn failed_resolution_overwrites_a_previously_set_country() {
        let user = UserBuilder::new("u1")
            .country("US")
            .country("Unitedstatesofxyz")
            .build();
        assert_eq!(user.country(), None);
    }

    #[test]
    fn regex_metacharacters_in_country_text_are_literal() {
        let user = UserBuilder::new("u1").country(".*").build();
        assert_eq!(user.country(), None);
    }

    #[test]
    fn last_write_wins_for_custom_attributes() {
        let user = UserBuilder::new("u1")
            .custom_string("plan", "gold")
            .custom_string("plan", "silver")
            .build();
        assert_eq!(user.custom("plan"), Some(&json!("silver")));
    }

    #[test]
    fn custom_attributes_keep_their_types() {
        let user = UserBuilder::new("u1")
            .custom_number("ranking", 0.25)
            .custom_string_list("groups", vec!["beta".to_string(), "staff".to_string()])
            .build();
        assert_eq!(user.custom("ranking"), Some(&json!(0.25)));
        assert_eq!(user.custom("groups"), Some(&json!(["beta", "staff"])));
    }

    #[test]
    fn built_user_is_isolated_from_later_builder_mutation() {
        let mut builder = UserBuilder::new("u1");
        builder.custom_string("plan", "gold");
        let user = builder.build();

        builder.custom_string("plan", "silver");
        builder.custom_string("extra", "late");

        assert_eq!(user.custom("plan"), Some(&json!("gold")));
        assert_eq!(user.custom("extra"), None);
    }

    #[test]
    fn one_builder_can_produce_several_users() {
        let mut builder = UserBuilder::new("u1");
        let plain = builder.build();
        let tagged = builder.custom_string("plan", "gold").build();

        assert_eq!(plain.custom("plan"), None);
        assert_eq!(tagged.custom("plan"), Some(&json!("gold")));
    }

    #[test]
    fn serializes_to_a_camel_case_payload() {
        let user = UserBuilder::new("u1")
            .ip("10.0.0.1")
            .country("USA")
            .custom_number("ranking", 7.0)
            .build();

        let payload = serde_json::to_value(&user).unwrap();
        assert_eq!(payload["key"], json!("u1"));
        assert_eq!(payload["ip"], json!("10.0.0.1"));
        assert_eq!(payload["country"], json!("US"));
        assert_eq!(payload["custom"]["ranking"], json!(7.0));
        assert!(payload.get("secondary").is_none());
    }
}
