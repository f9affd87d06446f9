pub mod interface;
pub mod client;
pub mod state;

pub use interface::{ClientError, TranslationService};
pub use client::RelayClient;
pub use state::{Display, Phase, TranslatorForm};
