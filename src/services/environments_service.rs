use diesel::prelude::*;

use crate::{
    db::models::environment::Environment,
    db::repositories::environments::EnvironmentsRepo,
    error::AppError,
    services::context::RequestContext,
};

pub struct EnvironmentsService;

impl EnvironmentsService {
    /// Get-or-create scoped to (project, name), and keep the
    /// environment↔project join current.
    pub fn get_or_create(
        conn: &mut SqliteConnection,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<Environment, AppError> {
        let environment =
            EnvironmentsRepo::get_or_create(conn, ctx.project_id, ctx.organization_id, name)?;
        EnvironmentsRepo::add_project(conn, environment.id, ctx.project_id)?;
        Ok(environment)
    }

    /// Name resolution for list filters. A miss means "no results", not
    /// an error, so this stays an Option.
    pub fn resolve_by_name(
        conn: &mut SqliteConnection,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<Option<Environment>, AppError> {
        let environment = EnvironmentsRepo::find_by_name(conn, ctx.project_id, name)?;
        Ok(environment)
    }
}
