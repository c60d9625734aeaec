use thiserror::Error;

use crate::reflect::TypeInfo;

/////////////////////////////////////////////////////////////////////////////////////////

/// Raised while registering bindings into a [`crate::Registry`].
#[derive(Error, Debug, Clone)]
pub enum ConfigureError {
    #[error("Binding for {source_type} in scope {scope:?} is already registered")]
    Duplicate {
        source_type: TypeInfo,
        scope: String,
    },

    #[error("Eager initialization failed: {source}")]
    EagerInit {
        #[source]
        source: InjectionError,
    },
}

/////////////////////////////////////////////////////////////////////////////////////////

/// Raised while resolving a value out of a [`crate::Catalog`].
#[derive(Error, Debug, Clone)]
pub enum InjectionError {
    #[error("No binding registered for {source_type} in scope {scope:?}")]
    NoSuchBinding {
        source_type: TypeInfo,
        scope: String,
    },

    #[error("No catalog attached to the current context")]
    NoBindingsInContext,

    #[error(
        "Binding for {source_type} resolves to the abstract type {target_type}, which has no \
         concrete binding"
    )]
    UnsatisfiedAbstractType {
        source_type: TypeInfo,
        target_type: TypeInfo,
    },

    #[error("Binding chain starting at {source_type} exceeded the maximum indirection depth")]
    CyclicBinding { source_type: TypeInfo },

    #[error("{source_type}: {message}")]
    Source {
        source_type: TypeInfo,
        message: String,
    },
}

impl InjectionError {
    pub fn source(source_type: TypeInfo, err: impl std::fmt::Display) -> Self {
        InjectionError::Source {
            source_type,
            message: err.to_string(),
        }
    }
}
