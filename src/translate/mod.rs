pub mod interface;
pub mod error;
pub mod validation;
pub mod upstream;
pub mod relay;

pub use interface::{ErrorResponse, TranslationApi, TranslationRequest, TranslationResponse, UpstreamResponse};
pub use error::{RelayError, UpstreamError};
pub use upstream::HttpTranslationApi;
pub use relay::relay;
