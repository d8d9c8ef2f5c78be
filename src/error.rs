use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{code}: {description}")]
    Status { code: u16, description: String },

    #[error("Summoner not found: {0}")]
    SummonerNotFound(String),

    #[error("Player match information unable to be retrieved")]
    NoActiveGame {
        summoner_id: String,
        #[source]
        source: Box<AppError>,
    },

    #[error("No summoner name entered (input closed)")]
    InputClosed,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("JSON parsing error: {0}")]
    Json(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn status(code: u16) -> Self {
        AppError::Status {
            code,
            description: describe_status(code),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Human-readable description for a Riot API status code.
pub fn describe_status(code: u16) -> String {
    let description = match code {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Data Not Found",
        405 => "Method Not Allowed",
        415 => "Unsupported Media Type",
        429 => "Rate Limit Exceeded",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => return format!("Unknown Error, code {}", code),
    };
    description.to_string()
}
