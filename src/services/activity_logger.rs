use actix_web::HttpRequest;
use uuid::Uuid;

use crate::database::models::CreateActivityInput;
use crate::database::repositories::ActivityRepository;

/// Records who did what, with the client address and user agent taken
/// from the request. Logging must never fail a request, so callers
/// discard the error after reporting it.
#[derive(Clone)]
pub struct ActivityLogger {
    repository: ActivityRepository,
}

impl ActivityLogger {
    pub fn new(repository: ActivityRepository) -> Self {
        Self { repository }
    }

    pub async fn log(
        &self,
        user_id: Option<Uuid>,
        action: &str,
        description: impl Into<String>,
        req: &HttpRequest,
    ) {
        let (ip_address, user_agent) = client_info(req);

        let input = CreateActivityInput {
            user_id,
            action: action.to_string(),
            description: description.into(),
            ip_address,
            user_agent,
        };

        if let Err(e) = self.repository.log(input).await {
            log::error!("failed to record activity '{}': {}", action, e);
        }
    }
}

fn client_info(req: &HttpRequest) -> (Option<String>, Option<String>) {
    let ip_address = req
        .connection_info()
        .realip_remote_addr()
        .map(|addr| addr.split(':').next().unwrap_or(addr).to_string());

    let user_agent = req
        .headers()
        .get("User-Agent")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());

    (ip_address, user_agent)
}
