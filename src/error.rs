use thiserror::Error;

/// Errors that can occur while reading a workflow or pipeline DSL document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DslError {
    #[error("Failed to parse DSL YAML: {0}")]
    YamlParseError(String),

    #[error("Task '{reference}' is invalid: {message}")]
    InvalidTask { reference: String, message: String },

    #[error("Task ref '{0}' is declared more than once")]
    DuplicateTaskRef(String),
}

/// Errors that can occur during the graph compilation phase.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error(transparent)]
    Dsl(#[from] DslError),
}

/// Errors reported by a renderer backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Renderer backend failed: {0}")]
    Backend(String),
}

/// Errors that can occur while constructing a graph view.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error("Graph compilation failed: {0}")]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors that can occur when loading a viewer configuration file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse config JSON: {0}")]
    Parse(String),

    #[error("Invalid zoom bounds: min {min}, max {max}, step {step} (need min <= max and step > 0)")]
    InvalidZoomBounds { min: u32, max: u32, step: u32 },
}
