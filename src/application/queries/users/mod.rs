mod profile;
mod service;

pub use profile::GetAccountQuery;
pub use service::UserQueryService;
