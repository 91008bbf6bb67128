pub mod commits;
pub mod environments;
pub mod organizations;
pub mod releases;
pub mod stats;

pub use commits::{CommitsRepo, ReleaseCommitsRepo};
pub use environments::EnvironmentsRepo;
pub use organizations::{OrganizationsRepo, ProjectsRepo};
pub use releases::{ReleaseProjectsRepo, ReleasesRepo};
pub use stats::ReleaseStatsRepo;
