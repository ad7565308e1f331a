//! Transport-neutral response envelope returned by the settings gateway

/// Outcome of a gateway call: a body to send, or an explicit empty answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayResponse<T> {
    Ok(T),
    NoContent,
}

#[cfg(test)]
impl<T> GatewayResponse<T> {
    pub fn into_body(self) -> Option<T> {
        match self {
            GatewayResponse::Ok(body) => Some(body),
            GatewayResponse::NoContent => None,
        }
    }

    pub fn is_no_content(&self) -> bool {
        matches!(self, GatewayResponse::NoContent)
    }
}

impl<T> From<Option<T>> for GatewayResponse<T> {
    fn from(body: Option<T>) -> Self {
        match body {
            Some(body) => GatewayResponse::Ok(body),
            None => GatewayResponse::NoContent,
        }
    }
}
