//! ShortLink entity and the schema rules the backing store enforces.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::error::StoreError;

/// Fully qualified kind used in store error messages.
pub const RESOURCE_KIND: &str = "ShortLink.urlshortener.cedi.dev";

/// Redirect status used when a spec omits `code`.
pub const DEFAULT_REDIRECT_CODE: i32 = 307;

/// Delay in seconds used when a spec omits `after`.
pub const DEFAULT_AFTER: i32 = 0;

/// Status codes a shortlink may be configured with.
pub const REDIRECT_CODES: [i32; 9] = [200, 300, 301, 302, 303, 304, 305, 307, 308];

const MAX_NAME_LEN: usize = 253;

/// DNS-1123 subdomain, the naming rule for namespaced custom resources.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$").unwrap()
});

/// A named redirect and its observed usage.
///
/// `name` is the resource key and the URL path segment the shortlink is
/// served under. It never changes after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLink {
    pub name: String,
    pub spec: ShortLinkSpec,
    #[serde(default)]
    pub status: ShortLinkStatus,
}

impl ShortLink {
    /// Creates a shortlink with an empty status.
    pub fn new(name: impl Into<String>, spec: ShortLinkSpec) -> Self {
        Self {
            name: name.into(),
            spec,
            status: ShortLinkStatus::default(),
        }
    }

    /// Renders the `name: target` line used by plain-text responses.
    pub fn to_text_line(&self) -> String {
        format!("{}: {}\n", self.name, self.spec.target)
    }
}

/// Desired redirect behaviour.
///
/// Every field has a default so a partial JSON body still parses; a `null`
/// field takes the same default as an absent one. An empty `target` is
/// rejected by the store, not by deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ShortLinkSpec {
    /// Destination URL.
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1))]
    pub target: String,

    /// HTTP status issued on redirect.
    #[serde(default = "default_code", deserialize_with = "null_as_default_code")]
    pub code: i32,

    /// Seconds to wait before redirecting (HTML redirect page only).
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(range(min = 0, max = 99))]
    pub after: i32,
}

fn default_code() -> i32 {
    DEFAULT_REDIRECT_CODE
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_code<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(DEFAULT_REDIRECT_CODE))
}

impl Default for ShortLinkSpec {
    fn default() -> Self {
        Self {
            target: String::new(),
            code: DEFAULT_REDIRECT_CODE,
            after: DEFAULT_AFTER,
        }
    }
}

impl ShortLinkSpec {
    /// Spec pointing at `target` with default code and delay.
    pub fn with_target(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    /// Checks the spec against the resource schema.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Internal`] listing every violated field, in the
    /// same shape the control plane uses for invalid objects.
    pub fn validate_schema(&self, name: &str) -> Result<(), StoreError> {
        let mut causes = Vec::new();

        if let Err(errors) = self.validate() {
            let mut fields: Vec<String> = errors
                .field_errors()
                .into_keys()
                .map(|field| field.to_string())
                .collect();
            fields.sort();

            for field in fields {
                causes.push(match field.as_str() {
                    "target" => "spec.target: Required value".to_string(),
                    "after" => format!(
                        "spec.after: Invalid value: {}: spec.after in body should be between 0 and 99",
                        self.after
                    ),
                    other => format!("spec.{other}: Invalid value"),
                });
            }
        }

        if !REDIRECT_CODES.contains(&self.code) {
            causes.push(format!(
                "spec.code: Unsupported value: {}: supported values: {}",
                self.code,
                REDIRECT_CODES.map(|c| format!("\"{c}\"")).join(", ")
            ));
        }

        if causes.is_empty() {
            Ok(())
        } else {
            Err(StoreError::Internal(format!(
                "{RESOURCE_KIND} \"{name}\" is invalid: {}",
                causes.join(", ")
            )))
        }
    }
}

/// Observed state, written only by the redirect path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLinkStatus {
    #[serde(default)]
    pub count: u64,
}

/// Checks that `name` is usable as a resource name.
///
/// # Errors
///
/// Returns [`StoreError::Internal`] if the name is empty, too long or not a
/// DNS-1123 subdomain.
pub fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.is_empty() {
        return Err(StoreError::Internal(format!(
            "{RESOURCE_KIND} \"\" is invalid: metadata.name: Required value: name or generateName is required"
        )));
    }

    if name.len() > MAX_NAME_LEN || !NAME_REGEX.is_match(name) {
        return Err(StoreError::Internal(format!(
            "{RESOURCE_KIND} \"{name}\" is invalid: metadata.name: Invalid value: \"{name}\": \
             a lowercase RFC 1123 subdomain must consist of lower case alphanumeric characters, \
             '-' or '.', and must start and end with an alphanumeric character"
        )));
    }

    Ok(())
}
