//! The crate's own dependency list, read from the manifest it was built from.

use toml::{Table, Value};

use crate::models::{PackageData, PackageInfo, PackageKind};

const MANIFEST: &str = include_str!("../Cargo.toml");

/// Dependencies and dev-dependencies of this build, each section in name
/// order.
pub fn package_data() -> Result<PackageData, toml::de::Error> {
    from_manifest(MANIFEST)
}

/// Same shape with an empty package list, for when the manifest can't be read.
pub fn empty() -> PackageData {
    PackageData {
        project_name: env!("CARGO_PKG_NAME").to_string(),
        project_version: env!("CARGO_PKG_VERSION").to_string(),
        packages: Vec::new(),
    }
}

fn from_manifest(raw: &str) -> Result<PackageData, toml::de::Error> {
    let manifest: Table = raw.parse()?;
    let mut data = empty();
    for (section, kind) in [
        ("dependencies", PackageKind::Dependency),
        ("dev-dependencies", PackageKind::DevDependency),
    ] {
        let Some(table) = manifest.get(section).and_then(Value::as_table) else {
            continue;
        };
        data.packages.extend(table.iter().map(|(name, spec)| PackageInfo {
            name: name.clone(),
            version: requirement(spec),
            kind,
        }));
    }
    Ok(data)
}

// `foo = "1"` or `foo = { version = "1", ... }`; path and git deps have none.
fn requirement(spec: &Value) -> String {
    match spec {
        Value::String(version) => version.clone(),
        Value::Table(table) => table
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or("*")
            .to_string(),
        _ => "*".to_string(),
    }
}
