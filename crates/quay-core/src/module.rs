//! Module descriptors and the build outputs they publish.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use quay_util::errors::QuayError;

use crate::version::{self, VersionClass};

/// One build output: primary jar, sources jar, docs jar, and so on.
///
/// Produced by an external build step; the content is treated as opaque.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub classifier: Option<String>,
    pub extension: String,
    #[serde(skip)]
    pub content: Vec<u8>,
}

impl Artifact {
    pub fn new(classifier: Option<&str>, extension: &str, content: Vec<u8>) -> Self {
        Self {
            classifier: classifier.map(str::to_string),
            extension: extension.to_string(),
            content,
        }
    }

    /// Maven file name: `{artifact}-{version}[-{classifier}].{ext}`.
    pub fn file_name(&self, artifact_id: &str, version: &str) -> String {
        match &self.classifier {
            Some(c) => format!("{artifact_id}-{version}-{c}.{}", self.extension),
            None => format!("{artifact_id}-{version}.{}", self.extension),
        }
    }

    fn sort_key(&self) -> (bool, &str, &str) {
        (
            self.classifier.is_some(),
            self.classifier.as_deref().unwrap_or(""),
            &self.extension,
        )
    }
}

impl fmt::Debug for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Artifact")
            .field("classifier", &self.classifier)
            .field("extension", &self.extension)
            .field("len", &self.content.len())
            .finish()
    }
}

/// `group:artifact:version` of another module this one depends on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ModuleCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl fmt::Display for ModuleCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// A module ready for publication.
///
/// Built once per invocation and immutable afterwards: there is no way to
/// change the artifact id or version once resolution has started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    group_id: String,
    artifact_id: String,
    version: String,
    outputs: Vec<Artifact>,
    dependencies: Vec<ModuleCoordinate>,
}

impl ModuleDescriptor {
    /// Build a descriptor, rejecting blank coordinates and duplicate outputs.
    ///
    /// Outputs are ordered primary artifact first, then by classifier, so two
    /// descriptors built from the same files compare equal.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        mut outputs: Vec<Artifact>,
        mut dependencies: Vec<ModuleCoordinate>,
    ) -> Result<Self, QuayError> {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        let version = version.into();

        for (field, value) in [
            ("group", &group_id),
            ("artifact id", &artifact_id),
            ("version", &version),
        ] {
            if value.trim().is_empty() {
                return Err(QuayError::configuration(format!(
                    "module '{artifact_id}' has an empty {field}"
                )));
            }
            if value.chars().any(|c| c.is_whitespace() || c == '/' || c == ':') {
                return Err(QuayError::configuration(format!(
                    "module {field} '{value}' contains an illegal character"
                )));
            }
        }

        outputs.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        if let Some(dup) = outputs
            .windows(2)
            .find(|w| w[0].sort_key() == w[1].sort_key())
        {
            return Err(QuayError::configuration(format!(
                "module '{artifact_id}' has two outputs named {}",
                dup[0].file_name(&artifact_id, &version)
            )));
        }
        dependencies.sort();
        dependencies.dedup();

        Ok(Self {
            group_id,
            artifact_id,
            version,
            outputs,
            dependencies,
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn outputs(&self) -> &[Artifact] {
        &self.outputs
    }

    pub fn dependencies(&self) -> &[ModuleCoordinate] {
        &self.dependencies
    }

    pub fn version_class(&self) -> VersionClass {
        version::classify(&self.version)
    }

    pub fn coordinate(&self) -> ModuleCoordinate {
        ModuleCoordinate {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            version: self.version.clone(),
        }
    }
}

/// Default artifact id for a module: its name with `suffix` removed.
///
/// `aegis-common` with suffix `-common` publishes as `aegis`.
pub fn default_artifact_id(module_name: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        return module_name.to_string();
    }
    match module_name.strip_suffix(suffix) {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => module_name.to_string(),
    }
}

/// Read build outputs named `{stem}-{version}[-{classifier}].{ext}` from `dir`.
///
/// Each stem is tried in order (typically the module's directory name, then
/// its artifact id). A missing directory yields no outputs.
pub fn collect_outputs(
    dir: &Path,
    stems: &[&str],
    version: &str,
) -> Result<Vec<Artifact>, QuayError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut names: Vec<String> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();

    for stem in stems {
        let prefix = format!("{stem}-{version}");
        let mut outputs = Vec::new();
        for name in &names {
            let Some((classifier, extension)) = split_output_name(name, &prefix) else {
                continue;
            };
            let content = std::fs::read(dir.join(name))?;
            tracing::debug!("Found output {name} ({} bytes)", content.len());
            outputs.push(Artifact::new(classifier, extension, content));
        }
        if !outputs.is_empty() {
            return Ok(outputs);
        }
    }
    Ok(Vec::new())
}

/// Split `{prefix}[-{classifier}].{ext}` into its classifier and extension.
///
/// Names that would extend the version instead (`1.0.1`, `1.0-SNAPSHOT`,
/// `1.0-2`) belong to another build and are rejected.
fn split_output_name<'a>(name: &'a str, prefix: &str) -> Option<(Option<&'a str>, &'a str)> {
    let rest = name.strip_prefix(prefix)?;
    if let Some(ext) = rest.strip_prefix('.') {
        return is_extension(ext).then_some((None, ext));
    }
    let rest = rest.strip_prefix('-')?;
    let (classifier, ext) = rest.split_once('.')?;
    if !is_classifier(classifier) || !is_extension(ext) {
        return None;
    }
    Some((Some(classifier), ext))
}

fn is_extension(ext: &str) -> bool {
    ext.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && ext.chars().all(|c| c.is_ascii_alphanumeric())
}

fn is_classifier(classifier: &str) -> bool {
    classifier.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && !classifier.starts_with(version::SNAPSHOT_SUFFIX.trim_start_matches('-'))
}
