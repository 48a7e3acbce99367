//! Kubernetes API server implementation of the shortlink repository.

use async_trait::async_trait;
use kube::api::{DeleteParams, ListParams, Patch, PatchParams, PostParams};
use kube::{Api, Client};
use serde_json::json;

use crate::domain::entities::ShortLink;
use crate::domain::error::StoreError;
use crate::domain::repositories::ShortlinkRepository;
use crate::infrastructure::kubernetes::crd::{ShortLinkResource, ShortLinkResourceSpec};

/// Repository over `ShortLink` custom resources in one namespace.
///
/// The API server owns persistence, defaulting and schema validation; this
/// type only translates between domain values and resource objects.
pub struct KubeShortlinkRepository {
    api: Api<ShortLinkResource>,
}

impl KubeShortlinkRepository {
    /// Creates a repository scoped to `namespace`.
    pub fn new(client: Client, namespace: &str) -> Self {
        Self {
            api: Api::namespaced(client, namespace),
        }
    }

    /// Creates a repository scoped to the client's default namespace.
    pub fn default_namespaced(client: Client) -> Self {
        Self {
            api: Api::default_namespaced(client),
        }
    }
}

/// Converts a client error into a [`StoreError`] by its message.
fn map_kube_error(err: kube::Error) -> StoreError {
    match err {
        kube::Error::Api(response) => StoreError::from_message(response.message),
        other => StoreError::from_message(other.to_string()),
    }
}

#[async_trait]
impl ShortlinkRepository for KubeShortlinkRepository {
    async fn list(&self) -> Result<Vec<ShortLink>, StoreError> {
        let list = self
            .api
            .list(&ListParams::default())
            .await
            .map_err(map_kube_error)?;

        Ok(list.items.into_iter().map(ShortLink::from).collect())
    }

    async fn get(&self, name: &str) -> Result<ShortLink, StoreError> {
        self.api
            .get(name)
            .await
            .map(ShortLink::from)
            .map_err(map_kube_error)
    }

    async fn create(&self, shortlink: &ShortLink) -> Result<ShortLink, StoreError> {
        let resource = ShortLinkResource::new(
            &shortlink.name,
            ShortLinkResourceSpec::from(&shortlink.spec),
        );

        self.api
            .create(&PostParams::default(), &resource)
            .await
            .map(ShortLink::from)
            .map_err(map_kube_error)
    }

    async fn update(&self, shortlink: &ShortLink) -> Result<(), StoreError> {
        // All spec fields are always serialized, so a merge patch replaces the spec.
        let patch = json!({ "spec": ShortLinkResourceSpec::from(&shortlink.spec) });

        self.api
            .patch(&shortlink.name, &PatchParams::default(), &Patch::Merge(&patch))
            .await
            .map(|_| ())
            .map_err(map_kube_error)
    }

    async fn delete(&self, shortlink: &ShortLink) -> Result<(), StoreError> {
        self.api
            .delete(&shortlink.name, &DeleteParams::default())
            .await
            .map(|_| ())
            .map_err(map_kube_error)
    }

    async fn update_status(&self, shortlink: &ShortLink) -> Result<(), StoreError> {
        let patch = json!({ "status": { "count": shortlink.status.count } });

        self.api
            .patch_status(&shortlink.name, &PatchParams::default(), &Patch::Merge(&patch))
            .await
            .map(|_| ())
            .map_err(map_kube_error)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.api
            .list(&ListParams::default().limit(1))
            .await
            .map(|_| ())
            .map_err(map_kube_error)
    }
}
