use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Dependency name to version string, in declaration order
pub type DependencyMap = IndexMap<String, String>;

const NAME_FIELD: &str = "name";
const VERSION_FIELD: &str = "version";

/// The three dependency maps a manifest may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    Regular,
    Dev,
    Peer,
}

impl DependencyKind {
    /// Scan order used when indexing a manifest
    pub const ALL: [DependencyKind; 3] = [
        DependencyKind::Regular,
        DependencyKind::Dev,
        DependencyKind::Peer,
    ];

    /// JSON field holding this map in package.json
    pub fn field_name(self) -> &'static str {
        match self {
            DependencyKind::Regular => "dependencies",
            DependencyKind::Dev => "devDependencies",
            DependencyKind::Peer => "peerDependencies",
        }
    }

    pub fn from_field_name(field: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.field_name() == field)
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// NewType wrapper for the identifier of a manifest (usually its path)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ManifestId(String);

impl ManifestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ManifestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ManifestId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ManifestId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&Path> for ManifestId {
    fn from(path: &Path) -> Self {
        Self(path.display().to_string())
    }
}

/// Manifest value object modelled on package.json
///
/// Only `name`, `version` and the three dependency maps are typed. Every
/// other field of the source document is carried through untouched, and
/// rewriting keeps the original key order.
///
/// Dependency maps are reference counted: a patched manifest shares every
/// map it did not modify with the manifest it was derived from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    name: Option<String>,
    version: Option<String>,
    dependencies: Option<Arc<DependencyMap>>,
    dev_dependencies: Option<Arc<DependencyMap>>,
    peer_dependencies: Option<Arc<DependencyMap>>,
    /// Source document. Typed fields are stored as `Null` placeholders that
    /// only remember the key position.
    document: Map<String, Value>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Declares the given dependency map, replacing any previous one of that kind
    pub fn with_dependencies<I, K, V>(mut self, kind: DependencyKind, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: DependencyMap = entries
            .into_iter()
            .map(|(name, version)| (name.into(), version.into()))
            .collect();
        *self.slot_mut(kind) = Some(Arc::new(map));
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns the dependency map of the given kind, if the manifest declares one
    pub fn dependency_map(&self, kind: DependencyKind) -> Option<&DependencyMap> {
        self.slot(kind).as_deref()
    }

    /// Returns the shared handle of a dependency map, for identity comparisons
    pub fn shared_dependency_map(&self, kind: DependencyKind) -> Option<&Arc<DependencyMap>> {
        self.slot(kind).as_ref()
    }

    /// Version declared for `name` in the map of the given kind
    pub fn declared_version(&self, kind: DependencyKind, name: &str) -> Option<&str> {
        self.dependency_map(kind)
            .and_then(|map| map.get(name))
            .map(String::as_str)
    }

    /// Iterates every (kind, name, version) declaration in index scan order
    pub fn declarations(&self) -> impl Iterator<Item = (DependencyKind, &str, &str)> + '_ {
        DependencyKind::ALL.into_iter().flat_map(move |kind| {
            self.dependency_map(kind).into_iter().flat_map(move |map| {
                map.iter()
                    .map(move |(name, version)| (kind, name.as_str(), version.as_str()))
            })
        })
    }

    /// True if any of the three maps declares `name`
    pub fn references(&self, name: &str) -> bool {
        DependencyKind::ALL.into_iter().any(|kind| {
            self.dependency_map(kind)
                .is_some_and(|map| map.contains_key(name))
        })
    }

    /// Sets the version of an already declared dependency.
    ///
    /// A map shared with another manifest is cloned before it is modified.
    pub(crate) fn set_dependency_version(
        &mut self,
        kind: DependencyKind,
        name: &str,
        version: &str,
    ) {
        if let Some(map) = self.slot_mut(kind).as_mut() {
            if let Some(slot) = Arc::make_mut(map).get_mut(name) {
                *slot = version.to_string();
            }
        }
    }

    pub(crate) fn set_version(&mut self, version: &str) {
        self.version = Some(version.to_string());
    }

    /// Rebuilds the JSON document, original key order first, then any typed
    /// field that was not part of the source document.
    pub fn to_document(&self) -> Map<String, Value> {
        let mut document = Map::with_capacity(self.document.len() + 5);
        for (key, value) in &self.document {
            let value = match self.typed_value(key) {
                Some(typed) => typed.unwrap_or(Value::Null),
                None => value.clone(),
            };
            document.insert(key.clone(), value);
        }

        let typed_fields = [NAME_FIELD, VERSION_FIELD]
            .into_iter()
            .chain(DependencyKind::ALL.into_iter().map(DependencyKind::field_name));
        for key in typed_fields {
            if document.contains_key(key) {
                continue;
            }
            if let Some(Some(value)) = self.typed_value(key) {
                document.insert(key.to_string(), value);
            }
        }

        document
    }

    /// `None` for untyped keys, `Some(None)` for typed fields that are unset
    fn typed_value(&self, key: &str) -> Option<Option<Value>> {
        match key {
            NAME_FIELD => Some(self.name.clone().map(Value::String)),
            VERSION_FIELD => Some(self.version.clone().map(Value::String)),
            other => DependencyKind::from_field_name(other).map(|kind| {
                self.dependency_map(kind).map(|map| {
                    Value::Object(
                        map.iter()
                            .map(|(name, version)| (name.clone(), Value::String(version.clone())))
                            .collect(),
                    )
                })
            }),
        }
    }

    fn slot(&self, kind: DependencyKind) -> &Option<Arc<DependencyMap>> {
        match kind {
            DependencyKind::Regular => &self.dependencies,
            DependencyKind::Dev => &self.dev_dependencies,
            DependencyKind::Peer => &self.peer_dependencies,
        }
    }

    fn slot_mut(&mut self, kind: DependencyKind) -> &mut Option<Arc<DependencyMap>> {
        match kind {
            DependencyKind::Regular => &mut self.dependencies,
            DependencyKind::Dev => &mut self.dev_dependencies,
            DependencyKind::Peer => &mut self.peer_dependencies,
        }
    }
}

impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_document().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Manifest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut document = Map::<String, Value>::deserialize(deserializer)?;
        let mut manifest = Manifest::default();

        for (key, value) in document.iter_mut() {
            if key == NAME_FIELD {
                manifest.name = take_string(key, value)?;
            } else if key == VERSION_FIELD {
                manifest.version = take_string(key, value)?;
            } else if let Some(kind) = DependencyKind::from_field_name(key) {
                *manifest.slot_mut(kind) = take_dependency_map(key, value)?.map(Arc::new);
            }
        }

        manifest.document = document;
        Ok(manifest)
    }
}

fn take_string<E: de::Error>(field: &str, value: &mut Value) -> Result<Option<String>, E> {
    match std::mem::take(value) {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Err(E::custom(format!(
            "field `{}` must be a string, found {}",
            field, other
        ))),
    }
}

fn take_dependency_map<E: de::Error>(
    field: &str,
    value: &mut Value,
) -> Result<Option<DependencyMap>, E> {
    match std::mem::take(value) {
        Value::Null => Ok(None),
        Value::Object(entries) => entries
            .into_iter()
            .map(|(name, version)| match version {
                Value::String(version) => Ok((name, version)),
                other => Err(E::custom(format!(
                    "dependency `{}` in `{}` must map to a version string, found {}",
                    name, field, other
                ))),
            })
            .collect::<Result<DependencyMap, E>>()
            .map(Some),
        other => Err(E::custom(format!(
            "field `{}` must be an object, found {}",
            field, other
        ))),
    }
}

/// A manifest paired with the identifier it is reported under
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedManifest {
    id: ManifestId,
    manifest: Manifest,
}

impl LocatedManifest {
    pub fn new(id: impl Into<ManifestId>, manifest: Manifest) -> Self {
        Self {
            id: id.into(),
            manifest,
        }
    }

    pub fn id(&self) -> &ManifestId {
        &self.id
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
