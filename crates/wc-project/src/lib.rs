//! wc-project: work-cell data model and cell file format.

pub mod product;
pub mod schema;

pub use product::*;
pub use schema::*;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<CellFile> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

pub fn save_yaml(path: &std::path::Path, cell: &CellFile) -> ProjectResult<()> {
    let content = serde_yaml::to_string(cell)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<CellFile> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_json(path: &std::path::Path, cell: &CellFile) -> ProjectResult<()> {
    let content = serde_json::to_string_pretty(cell)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a cell file, choosing the format from the extension (`.json` or YAML).
pub fn load_cell(path: &std::path::Path) -> ProjectResult<CellFile> {
    if is_json(path) {
        load_json(path)
    } else {
        load_yaml(path)
    }
}

pub fn save_cell(path: &std::path::Path, cell: &CellFile) -> ProjectResult<()> {
    if is_json(path) {
        save_json(path, cell)
    } else {
        save_yaml(path, cell)
    }
}

/// Load a bare hardware configuration (used for reconfiguration previews).
pub fn load_hardware(path: &std::path::Path) -> ProjectResult<HardwareConfig> {
    let content = std::fs::read_to_string(path)?;
    if is_json(path) {
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(serde_yaml::from_str(&content)?)
    }
}

fn is_json(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
