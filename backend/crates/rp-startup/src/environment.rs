/// Execution environment the application is mounted into.
pub trait Environment {
    /// Handle to a location the application can attach to
    type Mount;

    /// Look up a mount point by id
    fn mount_point(&self, id: &str) -> Option<Self::Mount>;
}
