pub mod aggregate;
pub mod catalog;
pub mod commit;
pub mod credentials;
pub mod session;

pub use aggregate::{ProviderCategory, ProviderId, ProviderKind};
pub use catalog::{validate_catalog, CatalogError, ContentProvider, ExtField, FilterMode};
pub use commit::{CommitAdapter, CommitId, CommitPayload, ConnectionLookup};
pub use credentials::{CredentialField, CredentialForm};
pub use session::{ConnectTicket, ConnectionPhase, ProviderSession, SessionError};
