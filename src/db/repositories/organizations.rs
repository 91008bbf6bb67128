use diesel::prelude::*;

use crate::db::models::organization::{NewOrganization, NewProject, Organization, Project};

pub struct OrganizationsRepo;

impl OrganizationsRepo {
    pub fn insert(
        conn: &mut SqliteConnection,
        new_organization: &NewOrganization,
    ) -> Result<Organization, diesel::result::Error> {
        diesel::insert_into(crate::schema::organizations::table)
            .values(new_organization)
            .get_result(conn)
    }

}

pub struct ProjectsRepo;

impl ProjectsRepo {
    pub fn insert(
        conn: &mut SqliteConnection,
        new_project: &NewProject,
    ) -> Result<Project, diesel::result::Error> {
        diesel::insert_into(crate::schema::projects::table)
            .values(new_project)
            .get_result(conn)
    }

    pub fn find_by_id_in_organization(
        conn: &mut SqliteConnection,
        org: i64,
        project_id: i64,
    ) -> Result<Option<Project>, diesel::result::Error> {
        use crate::schema::projects::dsl::*;
        projects
            .filter(id.eq(project_id))
            .filter(organization_id.eq(org))
            .first::<Project>(conn)
            .optional()
    }
}
