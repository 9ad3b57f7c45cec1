#![deny(missing_docs)]

//! # Maven Manifest
//!
//! Writes the `pom.xml` of a full-project build. The project depends on the
//! javawebstack HTTP client, which pulls in gson.

use crate::error::CliResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Coordinates of the generated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    /// Maven group id.
    pub group_id: String,
    /// Maven artifact id.
    pub artifact_id: String,
    /// Project version.
    pub version: String,
}

/// Renders the manifest text.
pub fn render_pom(coords: &Coordinates) -> String {
    let mut pom = String::new();
    pom.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    pom.push_str("<project xmlns=\"http://maven.apache.org/POM/4.0.0\"\n");
    pom.push_str("         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"\n");
    pom.push_str("         xsi:schemaLocation=\"http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd\">\n");
    pom.push_str("    <modelVersion>4.0.0</modelVersion>\n\n");
    pom.push_str(&format!("    <groupId>{}</groupId>\n", xml_escape(&coords.group_id)));
    pom.push_str(&format!(
        "    <artifactId>{}</artifactId>\n",
        xml_escape(&coords.artifact_id)
    ));
    pom.push_str(&format!("    <version>{}</version>\n\n", xml_escape(&coords.version)));
    pom.push_str("    <repositories>\n");
    pom.push_str("        <repository>\n");
    pom.push_str("            <id>javawebstack</id>\n");
    pom.push_str("            <url>https://repo.javawebstack.org</url>\n");
    pom.push_str("        </repository>\n");
    pom.push_str("    </repositories>\n\n");
    pom.push_str("    <dependencies>\n");
    pom.push_str("        <dependency>\n");
    pom.push_str("            <groupId>org.javawebstack</groupId>\n");
    pom.push_str("            <artifactId>HTTP-Client</artifactId>\n");
    pom.push_str("            <version>1.0-SNAPSHOT</version>\n");
    pom.push_str("        </dependency>\n");
    pom.push_str("    </dependencies>\n\n");
    pom.push_str("    <build>\n");
    pom.push_str("        <plugins>\n");
    pom.push_str("            <plugin>\n");
    pom.push_str("                <groupId>org.apache.maven.plugins</groupId>\n");
    pom.push_str("                <artifactId>maven-compiler-plugin</artifactId>\n");
    pom.push_str("                <configuration>\n");
    pom.push_str("                    <source>8</source>\n");
    pom.push_str("                    <target>8</target>\n");
    pom.push_str("                </configuration>\n");
    pom.push_str("            </plugin>\n");
    pom.push_str("        </plugins>\n");
    pom.push_str("    </build>\n\n");
    pom.push_str("</project>\n");
    pom
}

/// Writes `pom.xml` into `dir`, returning its path.
pub fn write_pom(dir: &Path, coords: &Coordinates) -> CliResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join("pom.xml");
    fs::write(&path, render_pom(coords))?;
    Ok(path)
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
