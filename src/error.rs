use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Transport(String),
    HttpStatus(u16),
    Api { code: i64, body: serde_json::Value },
    MalformedResponse(String),
    Config(String),
    Parse(String),
    Io(std::io::Error),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "Transport error: {}", e),
            Error::HttpStatus(status) => write!(f, "HTTP status not success: {}", status),
            Error::Api { code, body } => write!(f, "API error (code {}): {}", code, body),
            Error::MalformedResponse(e) => write!(f, "Malformed response: {}", e),
            Error::Config(e) => write!(f, "Config error: {}", e),
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Error {
        Error::Transport(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Error {
        Error::Config(format!("invalid endpoint url: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::MalformedResponse(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Error {
        Error::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_carries_body() {
        let body = serde_json::json!({"code": -403, "message": "forbidden"});
        let err = Error::Api { code: -403, body };
        let msg = err.to_string();
        assert!(msg.contains("-403"));
        assert!(msg.contains("forbidden"));
    }

    #[test]
    fn test_url_parse_error_is_config() {
        let err: Error = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
