use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while binding a controller.
///
/// Binding fails fast: on any error nothing has been installed and no
/// ownership has been claimed.
#[derive(Debug, Error, PartialEq)]
pub enum BindError {
    /// Selector resolved to no element in the document.
    #[error("No element matches selector '{0}'")]
    TargetNotFound(String),

    /// Configuration values failed validation.
    #[error("Invalid controller configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
