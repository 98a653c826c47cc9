use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("itinerary error: {0}")]
    Itinerary(#[from] wayfare_itinerary::DraftError),

    #[error("catalog error: {0}")]
    Catalog(#[from] wayfare_catalog::CatalogError),

    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
