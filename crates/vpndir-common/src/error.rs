use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Decoding \"{url}\": {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No {dimension} with identifier \"{identifier}\"")]
    UnknownIdentifier {
        dimension: &'static str,
        identifier: String,
    },

    #[error("Country not found")]
    CountryNotFound,

    #[error("Server not found")]
    ServerNotFound,
}

pub type Result<T> = std::result::Result<T, CatalogError>;
