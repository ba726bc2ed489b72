use uuid::Uuid;

use crate::server::error::AppError;

/// Moderation operations.
pub struct AdminService;

impl AdminService {
    pub fn new() -> Self {
        Self
    }

    /// Records a ban request for `user_id`.
    ///
    /// There is no user store yet, so the request is only logged.
    pub async fn ban_user(&self, user_id: Uuid, admin_id: Uuid) -> Result<(), AppError> {
        tracing::info!(%user_id, %admin_id, "User ban requested");
        Ok(())
    }
}

impl Default for AdminService {
    fn default() -> Self {
        Self::new()
    }
}
