pub mod namescan;
pub mod screening;

pub use namescan::{NameScanError, NameScanOutcome, NameScanner};
pub use screening::{BackendError, ScreeningBackend, ScreeningServiceClient, UpstreamHealth};
