use diesel::prelude::*;

use crate::{
    db::models::commit::{CommitData, NewReleaseCommit},
    db::models::environment::Environment,
    db::models::release::{
        CreateReleaseRequest, CreateStatus, NewRelease, Release, ReleaseInfo, ReleaseListQuery,
    },
    db::repositories::commits::{CommitsRepo, ReleaseCommitsRepo},
    db::repositories::organizations::ProjectsRepo,
    db::repositories::releases::{ReleaseProjectsRepo, ReleasesRepo},
    error::AppError,
    services::context::RequestContext,
    services::environments_service::EnvironmentsService,
    services::stats_service::ReleaseStatsService,
    validation::release::validate_version,
};

pub struct ReleasesService;

impl ReleasesService {
    /// Creates a release in the organization scope and links it to the
    /// requesting project, as one atomic unit with commit attachment.
    ///
    /// The status distinguishes a true duplicate (version known AND
    /// already linked to this project) from a new cross-project link,
    /// which still counts as `Created` for the caller.
    pub fn create(
        conn: &mut SqliteConnection,
        ctx: &RequestContext,
        req: &CreateReleaseRequest,
    ) -> Result<(ReleaseInfo, CreateStatus), AppError> {
        validate_version(&req.version)?;

        // The boundary resolves the scope, but the pair still has to agree.
        ProjectsRepo::find_by_id_in_organization(conn, ctx.organization_id, ctx.project_id)?
            .ok_or_else(|| AppError::not_found("project"))?;

        let (release, status) = conn.transaction::<(Release, CreateStatus), AppError, _>(|conn| {
            let new_release = NewRelease {
                organization_id: ctx.organization_id,
                version: req.version.clone(),
                date_added: req
                    .date_added
                    .unwrap_or_else(|| chrono::Utc::now().naive_utc()),
                date_released: req.date_released,
                owner_id: req.owner_id,
            };
            let (release, was_created) = ReleasesRepo::get_or_create(conn, &new_release)?;
            let new_association = ReleaseProjectsRepo::add(conn, release.id, ctx.project_id)?;

            if let Some(commits) = req.commits.as_deref() {
                Self::attach_commits(conn, &release, commits)?;
            }

            let status = if was_created || new_association {
                CreateStatus::Created
            } else {
                CreateStatus::AlreadyExists
            };
            Ok((release, status))
        })?;

        tracing::info!(
            version = %release.version,
            organization_id = ctx.organization_id,
            project_id = ctx.project_id,
            status = ?status,
            "release create resolved"
        );

        let new_groups = ReleaseProjectsRepo::new_groups(conn, release.id, ctx.project_id)?;
        Ok((Self::to_info(release, new_groups), status))
    }

    /// The release query engine: candidate releases come from the
    /// release↔project join; an environment filter narrows to releases
    /// seen there and swaps the counters for folded per-environment stats.
    pub fn list(
        conn: &mut SqliteConnection,
        ctx: &RequestContext,
        query: &ReleaseListQuery,
    ) -> Result<Vec<ReleaseInfo>, AppError> {
        let environment: Option<Environment> = match query.environment.as_deref() {
            Some(name) => match EnvironmentsService::resolve_by_name(conn, ctx, name)? {
                Some(environment) => Some(environment),
                // Unknown environment name filters everything out.
                None => return Ok(Vec::new()),
            },
            None => None,
        };

        let releases = ReleasesRepo::list_for_project(
            conn,
            ctx.project_id,
            query.query.as_deref(),
            environment.as_ref().map(|e| e.id),
        )?;

        let mut infos = Vec::with_capacity(releases.len());
        for release in releases {
            let info = match &environment {
                Some(environment) => {
                    let stats = ReleaseStatsService::fold(conn, ctx, release.id, environment.id)?;
                    let new_groups = stats.as_ref().map(|s| s.new_issues_count).unwrap_or(0);
                    let mut info = Self::to_info(release, new_groups);
                    info.first_event = stats.as_ref().map(|s| s.first_seen);
                    info.last_event = stats.as_ref().map(|s| s.last_seen);
                    info
                }
                None => {
                    // Environment-independent first/last aggregation is
                    // future work; unfiltered listings expose the
                    // per-project counter only.
                    let new_groups =
                        ReleaseProjectsRepo::new_groups(conn, release.id, ctx.project_id)?;
                    Self::to_info(release, new_groups)
                }
            };
            infos.push(info);
        }
        Ok(infos)
    }

    /// Replaces the release's commit list with the given ordered set,
    /// resolving each revision within the release's organization. Runs
    /// inside the creation transaction, so a failure here unwinds the
    /// whole create.
    fn attach_commits(
        conn: &mut SqliteConnection,
        release: &Release,
        commits: &[CommitData],
    ) -> Result<(), AppError> {
        ReleaseCommitsRepo::clear_for_release(conn, release.id)?;
        for (index, data) in commits.iter().enumerate() {
            let commit = CommitsRepo::get_or_create(conn, release.organization_id, &data.id)?;
            ReleaseCommitsRepo::insert(
                conn,
                &NewReleaseCommit {
                    organization_id: release.organization_id,
                    release_id: release.id,
                    commit_id: commit.id,
                    sort_order: index as i64,
                },
            )?;
        }
        Ok(())
    }

    fn to_info(release: Release, new_groups: i64) -> ReleaseInfo {
        ReleaseInfo {
            version: release.version,
            date_added: release.date_added,
            date_released: release.date_released,
            new_groups,
            first_event: None,
            last_event: None,
        }
    }
}
