//! POM generation for a published module.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use quay_core::module::ModuleDescriptor;
use quay_util::errors::QuayError;

const POM_NS: &str = "http://maven.apache.org/POM/4.0.0";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const POM_XSD: &str =
    "http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd";

/// Packaging declared in the POM: the primary artifact's extension, or `pom`
/// when the module has no primary artifact.
pub fn packaging(module: &ModuleDescriptor) -> &str {
    module
        .outputs()
        .iter()
        .find(|a| a.classifier.is_none())
        .map(|a| a.extension.as_str())
        .unwrap_or("pom")
}

/// Render the POM for `module`, declaring its inter-module dependencies
/// with `compile` scope.
pub fn render(module: &ModuleDescriptor) -> Result<String, QuayError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    emit(
        &mut writer,
        Event::Start(BytesStart::new("project").with_attributes([
            ("xmlns", POM_NS),
            ("xmlns:xsi", XSI_NS),
            ("xsi:schemaLocation", POM_XSD),
        ])),
    )?;
    text_element(&mut writer, "modelVersion", "4.0.0")?;
    text_element(&mut writer, "groupId", module.group_id())?;
    text_element(&mut writer, "artifactId", module.artifact_id())?;
    text_element(&mut writer, "version", module.version())?;
    text_element(&mut writer, "packaging", packaging(module))?;

    if !module.dependencies().is_empty() {
        emit(&mut writer, Event::Start(BytesStart::new("dependencies")))?;
        for dep in module.dependencies() {
            emit(&mut writer, Event::Start(BytesStart::new("dependency")))?;
            text_element(&mut writer, "groupId", &dep.group_id)?;
            text_element(&mut writer, "artifactId", &dep.artifact_id)?;
            text_element(&mut writer, "version", &dep.version)?;
            text_element(&mut writer, "scope", "compile")?;
            emit(&mut writer, Event::End(BytesEnd::new("dependency")))?;
        }
        emit(&mut writer, Event::End(BytesEnd::new("dependencies")))?;
    }

    emit(&mut writer, Event::End(BytesEnd::new("project")))?;

    let mut xml = String::from_utf8(writer.into_inner()).map_err(|e| QuayError::Generic {
        message: format!("Generated POM is not UTF-8: {e}"),
    })?;
    xml.push('\n');
    Ok(xml)
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, value: &str) -> Result<(), QuayError> {
    emit(writer, Event::Start(BytesStart::new(name)))?;
    emit(writer, Event::Text(BytesText::new(value)))?;
    emit(writer, Event::End(BytesEnd::new(name)))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), QuayError> {
    writer
        .write_event(event)
        .map_err(|e| QuayError::Generic {
            message: format!("Failed to write POM: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quay_core::module::{Artifact, ModuleCoordinate};

    fn store() -> ModuleDescriptor {
        ModuleDescriptor::new(
            "io.mikeamiry.aegis",
            "aegis-store",
            "2.0.2",
            vec![Artifact::new(None, "jar", vec![1])],
            vec![ModuleCoordinate {
                group_id: "io.mikeamiry.aegis".to_string(),
                artifact_id: "aegis".to_string(),
                version: "2.0.2".to_string(),
            }],
        )
        .unwrap()
    }

    #[test]
    fn renders_coordinates() {
        let xml = render(&store()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<modelVersion>4.0.0</modelVersion>"));
        assert!(xml.contains("<groupId>io.mikeamiry.aegis</groupId>"));
        assert!(xml.contains("<artifactId>aegis-store</artifactId>"));
        assert!(xml.contains("<version>2.0.2</version>"));
        assert!(xml.contains("<packaging>jar</packaging>"));
    }

    #[test]
    fn renders_dependencies() {
        let xml = render(&store()).unwrap();
        assert!(xml.contains("<dependencies>"));
        assert!(xml.contains("<artifactId>aegis</artifactId>"));
        assert!(xml.contains("<scope>compile</scope>"));
    }

    #[test]
    fn no_primary_artifact_is_pom_packaging() {
        let module =
            ModuleDescriptor::new("io.example", "bom", "1.0", vec![], vec![]).unwrap();
        let xml = render(&module).unwrap();
        assert!(xml.contains("<packaging>pom</packaging>"));
        assert!(!xml.contains("<dependencies>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render(&store()).unwrap(), render(&store()).unwrap());
    }
}
