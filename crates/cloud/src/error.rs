/// Errors raised while talking to the cloud provider.
#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    /// The provider rejected or failed a request.
    #[error("{operation} failed: {message}")]
    Api {
        operation: &'static str,
        message: String,
    },

    /// The provider answered but omitted a field the caller needs.
    #[error("{operation} response is missing {field}")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },
}

impl CloudError {
    pub fn api(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Api {
            operation,
            message: message.into(),
        }
    }
}
