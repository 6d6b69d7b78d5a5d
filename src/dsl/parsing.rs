use super::definition::{DslDocument, RawTaskSpec};
use crate::error::DslError;
use ahash::AHashSet;

/// Parses DSL text into its structural sections.
///
/// Malformed YAML is reported as [`DslError::YamlParseError`]. Task entries are
/// checked only as far as graph construction needs: every task must carry a
/// non-empty `ref` and `task` tag, and refs must be unique within a section.
pub fn parse(text: &str) -> Result<DslDocument, DslError> {
    let document: DslDocument =
        serde_yaml::from_str(text).map_err(|e| DslError::YamlParseError(e.to_string()))?;

    if let Some(tasks) = &document.workflow {
        validate_tasks(tasks)?;
    }
    if let Some(tasks) = &document.pipeline {
        validate_tasks(tasks)?;
    }

    Ok(document)
}

fn validate_tasks(tasks: &[RawTaskSpec]) -> Result<(), DslError> {
    let mut seen: AHashSet<&str> = AHashSet::new();
    for task in tasks {
        if task.reference.trim().is_empty() {
            return Err(DslError::InvalidTask {
                reference: task.reference.clone(),
                message: "ref must not be empty".to_string(),
            });
        }
        if task.task.trim().is_empty() {
            return Err(DslError::InvalidTask {
                reference: task.reference.clone(),
                message: "task tag must not be empty".to_string(),
            });
        }
        if !seen.insert(task.reference.as_str()) {
            return Err(DslError::DuplicateTaskRef(task.reference.clone()));
        }
    }
    Ok(())
}
