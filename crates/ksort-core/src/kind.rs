//! Resource kinds and the install precedence table
//!
//! Manifests are installed in the order their kind appears in
//! [`INSTALL_ORDER`]. The table follows the Helm 3 install order so that
//! cluster-wide prerequisites (namespaces, quotas, RBAC, storage) exist
//! before the workloads that reference them.
//!
//! Ranking rules:
//! - a kind listed in the table ranks at its position
//! - a named kind missing from the table ranks right after the table
//! - [`Kind::Unknown`] ranks after everything else

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Revision of [`INSTALL_ORDER`], bumped whenever the table changes
pub const INSTALL_ORDER_REVISION: u32 = 1;

/// Kinds in installation-safe order
pub const INSTALL_ORDER: &[&str] = &[
    "PriorityClass",
    "Namespace",
    "NetworkPolicy",
    "ResourceQuota",
    "LimitRange",
    "PodSecurityPolicy",
    "PodDisruptionBudget",
    "ServiceAccount",
    "Secret",
    "SecretList",
    "ConfigMap",
    "StorageClass",
    "PersistentVolume",
    "PersistentVolumeClaim",
    "CustomResourceDefinition",
    "ClusterRole",
    "ClusterRoleList",
    "ClusterRoleBinding",
    "ClusterRoleBindingList",
    "Role",
    "RoleList",
    "RoleBinding",
    "RoleBindingList",
    "Service",
    "DaemonSet",
    "Pod",
    "ReplicationController",
    "ReplicaSet",
    "Deployment",
    "HorizontalPodAutoscaler",
    "StatefulSet",
    "Job",
    "CronJob",
    "IngressClass",
    "Ingress",
    "APIService",
];

static INSTALL: Lazy<KindOrder> =
    Lazy::new(|| KindOrder::from_kinds(INSTALL_ORDER.iter().copied()));

/// Kind of a manifest document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A `kind:` value found in the document
    Named(String),
    /// No `kind:` line was found; the fragment is probably not a manifest
    Unknown,
}

impl Kind {
    /// Create a named kind
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Whether this is the [`Kind::Unknown`] sentinel
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Kind name, `"Unknown"` for the sentinel
    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Kind {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

/// A precedence table mapping kinds to ranks
///
/// The comparator only ever looks at ranks, so swapping the table never
/// touches the sort itself.
#[derive(Debug, Clone)]
pub struct KindOrder {
    positions: HashMap<String, usize>,
    len: usize,
}

impl KindOrder {
    /// Build a table from kinds listed in install order
    ///
    /// A kind listed twice keeps its first position.
    pub fn from_kinds<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut positions = HashMap::new();
        let mut len = 0;
        for kind in kinds {
            positions.entry(kind.into()).or_insert(len);
            len += 1;
        }
        Self { positions, len }
    }

    /// The shared [`INSTALL_ORDER`] table
    pub fn install() -> &'static KindOrder {
        &INSTALL
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `kind` is listed in the table
    pub fn contains(&self, kind: &Kind) -> bool {
        match kind {
            Kind::Named(name) => self.positions.contains_key(name),
            Kind::Unknown => false,
        }
    }

    /// Rank of a kind; lower ranks install first
    pub fn rank(&self, kind: &Kind) -> usize {
        match kind {
            Kind::Named(name) => self.positions.get(name).copied().unwrap_or(self.len),
            Kind::Unknown => self.len + 1,
        }
    }
}

impl Default for KindOrder {
    fn default() -> Self {
        INSTALL.clone()
    }
}
