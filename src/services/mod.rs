pub mod context;
pub mod environments_service;
pub mod releases_service;
pub mod stats_service;

pub use environments_service::EnvironmentsService;
pub use releases_service::ReleasesService;
pub use stats_service::ReleaseStatsService;
