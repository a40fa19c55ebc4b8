use thiserror::Error;

/// Failures surfaced by the triage client.
///
/// `Display` is the short message shown to the user next to the control that
/// triggered the action.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),

    #[error("{detail}")]
    Request { status: u16, detail: String },

    #[error("{0}")]
    Network(String),

    #[error("Resposta invalida do servidor: {0}")]
    Decode(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{0} indisponivel")]
    Unavailable(String),
}

impl From<gloo_net::Error> for ClientError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ClientError::Decode(e.to_string()),
            other => ClientError::Network(other.to_string()),
        }
    }
}

/// Best-effort message from a thrown JS value.
pub fn js_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_displays_server_detail() {
        let err = ClientError::Request {
            status: 429,
            detail: "Muitas requisicoes".to_string(),
        };
        assert_eq!(err.to_string(), "Muitas requisicoes");
    }

    #[test]
    fn test_network_error_displays_message() {
        let err = ClientError::Network("Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Failed to fetch");
    }
}
