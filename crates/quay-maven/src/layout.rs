//! Standard Maven repository layout for a module's published files.

use quay_core::module::ModuleDescriptor;
use quay_util::errors::QuayError;

use crate::{checksum, pom};

/// Standard Maven layout path for a given coordinate.
///
/// `io.mikeamiry.aegis:aegis:2.0.2` becomes `io/mikeamiry/aegis/aegis/2.0.2`
pub fn coordinate_path(group: &str, artifact: &str, version: &str) -> String {
    format!("{}/{}/{}", group.replace('.', "/"), artifact, version)
}

/// A file to place in a repository, addressed relative to the repository root.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub path: String,
    pub content: Vec<u8>,
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("path", &self.path)
            .field("len", &self.content.len())
            .finish()
    }
}

/// Every file making up a module's publication, in upload order.
///
/// Artifacts come first, the POM last, each followed by its checksum
/// sidecars.
pub fn publication_files(module: &ModuleDescriptor) -> Result<Vec<UploadFile>, QuayError> {
    let dir = coordinate_path(module.group_id(), module.artifact_id(), module.version());
    let mut files = Vec::new();

    let mut push = |name: String, content: Vec<u8>| {
        let sidecars = checksum::sidecars(&name, &content);
        files.push(UploadFile {
            path: format!("{dir}/{name}"),
            content,
        });
        files.extend(sidecars.into_iter().map(|(sidecar, digest)| UploadFile {
            path: format!("{dir}/{sidecar}"),
            content: digest.into_bytes(),
        }));
    };

    for artifact in module.outputs() {
        push(
            artifact.file_name(module.artifact_id(), module.version()),
            artifact.content.clone(),
        );
    }

    let pom_name = format!("{}-{}.pom", module.artifact_id(), module.version());
    push(pom_name, pom::render(module)?.into_bytes());

    Ok(files)
}
