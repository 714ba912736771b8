use storage::Database;

use crate::clients::email::EmailClient;
use crate::clients::identity::IdentityClient;
use crate::clients::images::ImageClient;

/// Everything a handler needs: the pool plus the external-service clients,
/// all cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub identity: IdentityClient,
    pub images: ImageClient,
    pub email: EmailClient,
}
