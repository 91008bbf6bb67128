/// Scope resolved by the boundary layer before any engine call; no
/// operation reads tenant state from anywhere else.
#[derive(Clone, Copy, Debug)]
pub struct RequestContext {
    pub organization_id: i64,
    pub project_id: i64,
}
