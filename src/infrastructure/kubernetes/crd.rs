//! `ShortLink` custom resource definition.
//!
//! ```yaml
//! apiVersion: urlshortener.cedi.dev/v1alpha1
//! kind: ShortLink
//! metadata:
//!   name: home
//! spec:
//!   target: https://example.com
//!   code: 307
//!   after: 0
//! status:
//!   count: 12
//! ```

use kube::{CustomResource, ResourceExt};
use schemars::JsonSchema;
use schemars::r#gen::SchemaGenerator;
use schemars::schema::{InstanceType, Metadata, Schema, SchemaObject};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::{
    DEFAULT_REDIRECT_CODE, REDIRECT_CODES, ShortLink as DomainShortLink, ShortLinkSpec,
    ShortLinkStatus,
};

/// Wire form of the shortlink spec as stored by the API server.
#[derive(CustomResource, Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "urlshortener.cedi.dev",
    version = "v1alpha1",
    kind = "ShortLink",
    plural = "shortlinks",
    shortname = "sl",
    namespaced,
    status = "ShortLinkResourceStatus"
)]
pub struct ShortLinkResourceSpec {
    /// Target URL to redirect to.
    #[schemars(length(min = 1))]
    pub target: String,

    /// Redirect status code.
    #[serde(default = "default_code")]
    #[schemars(schema_with = "redirect_code_schema")]
    pub code: i32,

    /// Seconds to wait before redirecting.
    #[serde(default)]
    #[schemars(range(min = 0, max = 99))]
    pub after: i32,
}

/// The `ShortLink` custom resource as stored by the API server.
pub type ShortLinkResource = ShortLink;

/// Wire form of the status subresource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ShortLinkResourceStatus {
    /// Number of times the shortlink has been resolved.
    #[serde(default)]
    pub count: u64,
}

fn default_code() -> i32 {
    DEFAULT_REDIRECT_CODE
}

fn redirect_code_schema(_: &mut SchemaGenerator) -> Schema {
    Schema::Object(SchemaObject {
        metadata: Some(Box::new(Metadata {
            description: Some("Redirect status code.".to_string()),
            default: Some(json!(DEFAULT_REDIRECT_CODE)),
            ..Default::default()
        })),
        instance_type: Some(InstanceType::Integer.into()),
        format: Some("int32".to_string()),
        enum_values: Some(REDIRECT_CODES.iter().map(|code| json!(code)).collect()),
        ..Default::default()
    })
}

impl From<&ShortLinkSpec> for ShortLinkResourceSpec {
    fn from(spec: &ShortLinkSpec) -> Self {
        Self {
            target: spec.target.clone(),
            code: spec.code,
            after: spec.after,
        }
    }
}

impl From<ShortLinkResource> for DomainShortLink {
    fn from(resource: ShortLinkResource) -> Self {
        let name = resource.name_any();
        let status = resource
            .status
            .map(|status| ShortLinkStatus {
                count: status.count,
            })
            .unwrap_or_default();

        Self {
            name,
            spec: ShortLinkSpec {
                target: resource.spec.target,
                code: resource.spec.code,
                after: resource.spec.after,
            },
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::CustomResourceExt;

    #[test]
    fn test_crd_identity() {
        let crd = ShortLinkResource::crd();

        assert_eq!(crd.spec.group, "urlshortener.cedi.dev");
        assert_eq!(crd.spec.names.kind, "ShortLink");
        assert_eq!(crd.spec.names.plural, "shortlinks");
        assert_eq!(crd.spec.scope, "Namespaced");
        assert_eq!(crd.spec.versions[0].name, "v1alpha1");
    }

    #[test]
    fn test_crd_schema_field_names() {
        let crd = serde_json::to_value(ShortLinkResource::crd()).unwrap();
        let schema = &crd["spec"]["versions"][0]["schema"]["openAPIV3Schema"]["properties"];

        let spec = &schema["spec"]["properties"];
        assert!(spec.get("target").is_some());
        assert_eq!(spec["code"]["default"], 307);
        assert_eq!(spec["code"]["enum"].as_array().unwrap().len(), 9);
        assert_eq!(spec["after"]["maximum"], 99.0);
        assert!(schema["status"]["properties"].get("count").is_some());
    }

    #[test]
    fn test_resource_to_domain() {
        let mut resource = ShortLinkResource::new(
            "home",
            ShortLinkResourceSpec {
                target: "https://example.com".to_string(),
                code: 301,
                after: 2,
            },
        );
        resource.status = Some(ShortLinkResourceStatus { count: 5 });

        let shortlink = DomainShortLink::from(resource);

        assert_eq!(shortlink.name, "home");
        assert_eq!(shortlink.spec.target, "https://example.com");
        assert_eq!(shortlink.spec.code, 301);
        assert_eq!(shortlink.spec.after, 2);
        assert_eq!(shortlink.status.count, 5);
    }

    #[test]
    fn test_resource_without_status() {
        let resource = ShortLinkResource::new(
            "home",
            ShortLinkResourceSpec::from(&ShortLinkSpec::with_target("https://example.com")),
        );

        let shortlink = DomainShortLink::from(resource);

        assert_eq!(shortlink.status, ShortLinkStatus::default());
        assert_eq!(shortlink.spec.code, 307);
    }
}
