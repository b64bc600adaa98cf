use std::rc::Rc;

use fitcoach::api::HttpApiClient;
use fitcoach::service::{AuthFlow, CoachingService};

use crate::providers::session::stored_token;

/// Base URL of the coaching service API.
const COACHING_BASE_URL: &str = "https://fitness-coaching.azurewebsites.net";
/// Base URL of the external secondary sign-in service.
const SIGNIN_BASE_URL: &str = "https://member-signin.azurewebsites.net";

fn coaching_client() -> HttpApiClient {
    HttpApiClient::new(COACHING_BASE_URL).with_token_source(Rc::new(stored_token))
}

/// Service handle for the coaching API. The bearer token is re-read from
/// session storage on every request, so a fresh login is picked up without
/// rebuilding anything.
pub fn create() -> CoachingService<HttpApiClient> {
    CoachingService::new(coaching_client())
}

/// The dual-service sign-in saga. The secondary client carries no token
/// source; that service only ever sees credentials.
pub fn auth() -> AuthFlow<HttpApiClient, HttpApiClient> {
    AuthFlow::new(coaching_client(), HttpApiClient::new(SIGNIN_BASE_URL))
}
