//! Resource paths built from tokens.
//!
//! The router's path prefixes are fixed: `/course/<token>`,
//! `/products/<token>` and `/instructors/<token>`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::{IdCodec, STANDARD};
use crate::IdError;

/// Kinds of resource addressed by token in the front-end router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Course,
    Product,
    Instructor,
}

impl ResourceKind {
    /// All kinds, in routing-table order.
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Course,
        ResourceKind::Product,
        ResourceKind::Instructor,
    ];

    /// The router path prefix, without a trailing slash.
    #[must_use]
    pub const fn path_prefix(self) -> &'static str {
        match self {
            ResourceKind::Course => "/course",
            ResourceKind::Product => "/products",
            ResourceKind::Instructor => "/instructors",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Course => "course",
            ResourceKind::Product => "product",
            ResourceKind::Instructor => "instructor",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "course" | "courses" => Ok(ResourceKind::Course),
            "product" | "products" => Ok(ResourceKind::Product),
            "instructor" | "instructors" => Ok(ResourceKind::Instructor),
            other => Err(IdError::UnknownResource {
                path: other.to_string(),
            }),
        }
    }
}

impl IdCodec {
    /// Builds `/<resource>/<token>` for an identifier.
    #[must_use]
    pub fn resource_path(&self, kind: ResourceKind, id: u64) -> String {
        format!("{}/{}", kind.path_prefix(), self.encode(id))
    }

    /// Decodes the last path segment of a path or URL.
    pub fn id_from_url(&self, url: &str) -> Result<u64, IdError> {
        let segment = last_segment(url);
        self.decode(segment).inspect_err(|err| {
            debug!(url, segment, error = %err, "rejected id segment");
        })
    }

    /// Splits a path into its resource kind and identifier.
    ///
    /// The path must be exactly `<prefix>/<token>`, optionally followed by a
    /// query string or fragment; a full URL is accepted if its path has that
    /// shape.
    pub fn resolve_path(&self, url: &str) -> Result<(ResourceKind, u64), IdError> {
        let path = strip_origin(strip_suffix(url));

        let kind = ResourceKind::ALL
            .into_iter()
            .find(|kind| {
                path.strip_prefix(kind.path_prefix())
                    .and_then(|rest| rest.strip_prefix('/'))
                    .is_some_and(|token| !token.contains('/'))
            })
            .ok_or_else(|| {
                debug!(url, "path matches no resource prefix");
                IdError::UnknownResource {
                    path: path.to_string(),
                }
            })?;

        Ok((kind, self.id_from_url(path)?))
    }
}

/// Drops a `?query` or `#fragment`.
fn strip_suffix(url: &str) -> &str {
    url.split(|c: char| c == '?' || c == '#').next().unwrap_or_default()
}

/// Drops `scheme://host` so only the path remains.
fn strip_origin(url: &str) -> &str {
    match url.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |idx| &rest[idx..]),
        None => url,
    }
}

/// The final `/`-separated segment, ignoring any query string or fragment.
#[must_use]
pub fn last_segment(url: &str) -> &str {
    strip_suffix(url).rsplit('/').next().unwrap_or_default()
}

/// `/<resource>/<token>` with the standard codec.
#[must_use]
pub fn resource_path(kind: ResourceKind, id: u64) -> String {
    STANDARD.resource_path(kind, id)
}

/// `/course/<token>`.
#[must_use]
pub fn course_detail_url(id: u64) -> String {
    resource_path(ResourceKind::Course, id)
}

/// `/products/<token>`.
#[must_use]
pub fn product_detail_url(id: u64) -> String {
    resource_path(ResourceKind::Product, id)
}

/// `/instructors/<token>`.
#[must_use]
pub fn instructor_profile_url(id: u64) -> String {
    resource_path(ResourceKind::Instructor, id)
}

/// Decodes the last segment of a path or URL with the standard codec.
pub fn id_from_url(url: &str) -> Result<u64, IdError> {
    STANDARD.id_from_url(url)
}

/// Resolves a resource path with the standard codec.
pub fn resolve_path(url: &str) -> Result<(ResourceKind, u64), IdError> {
    STANDARD.resolve_path(url)
}
