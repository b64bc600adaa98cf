//! Flows over the coaching API: class listing, signup, two-step class
//! registration, and the dual-service sign-in saga.
//!
//! Everything here is generic over [`ApiClient`] so the logic runs against a
//! recording mock in tests and [`crate::api::HttpApiClient`] in the browser.

use tracing::{info, warn};

use crate::api::{ApiClient, ApiError, ApiResult};
use crate::data::{
    DEFAULT_ROLE, FitnessClass, LoginRequest, Registration, SigninRequest, SigninResponse,
    SignupRequest, Token, User,
};
use crate::errors::{AuthError, SignupError};
use crate::session::Session;

/// Endpoint wrappers and multi-request flows against the coaching service.
pub struct CoachingService<C> {
    api: C,
}

impl<C: ApiClient> CoachingService<C> {
    pub fn new(api: C) -> Self {
        Self { api }
    }

    pub async fn classes(&self) -> ApiResult<Vec<FitnessClass>> {
        self.api.get("/classes").await
    }

    pub async fn current_user(&self) -> ApiResult<User> {
        self.api.get("/current_user").await
    }

    /// Create an account. Password confirmation is checked locally first;
    /// on mismatch no request is issued. Every self-registration gets the
    /// default role.
    pub async fn signup(
        &self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<User, SignupError> {
        if password != confirm_password {
            return Err(SignupError::PasswordMismatch);
        }

        let request = SignupRequest {
            username: username.to_string(),
            password: password.to_string(),
            role: DEFAULT_ROLE.to_string(),
        };
        let user: User = self.api.post("/signup", &request).await?;
        info!("account created for {}", user.username);
        Ok(user)
    }

    /// Register the authenticated user for a class. The user id comes from
    /// the server, not from local state, so this is two dependent requests:
    /// a failed `current_user` lookup means `/register` is never called.
    /// There is no compensation if the second request fails after the first
    /// succeeds; the lookup has no side effects to undo.
    pub async fn register_for_class(&self, class_id: i64) -> ApiResult<Registration> {
        let user = self.current_user().await?;
        let registration = Registration {
            user_id: user.user_id,
            class_id,
        };
        self.api.post("/register", &registration).await
    }

    /// The authenticated user's own registrations.
    pub async fn registrations(&self) -> ApiResult<Vec<Registration>> {
        self.api.get("/registrations").await
    }

    pub async fn cancel_registration(&self, class_id: i64) -> ApiResult<()> {
        // The server replies with a {"detail": ...} confirmation we don't need.
        let _: serde_json::Value = self
            .api
            .delete(&format!("/cancel_registration/{class_id}"))
            .await?;
        Ok(())
    }
}

/// Two-step sign-in against the primary coaching service and the external
/// secondary sign-in service. Both must accept before a session exists.
pub struct AuthFlow<P, S> {
    primary: P,
    secondary: S,
}

impl<P: ApiClient, S: ApiClient> AuthFlow<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    /// Run the sign-in saga. If the secondary service rejects after the
    /// primary accepted, the primary token is discarded here and never
    /// reaches the session store, so no half-authenticated session leaks
    /// out.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let login = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let token: Token = self
            .primary
            .post("/login", &login)
            .await
            .map_err(AuthError::Primary)?;

        let signin = SigninRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let secondary: SigninResponse = match self.secondary.post("/signin", &signin).await {
            Ok(response) => response,
            Err(err) => {
                warn!("secondary sign-in rejected after primary login, discarding primary token");
                return Err(AuthError::Secondary(err));
            }
        };

        info!("signed in as user {}", token.user_id);
        Ok(Session {
            token: Some(token.access_token),
            secondary_token: Some(secondary.token),
            user_id: Some(token.user_id.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiResult, HttpMethod};
    use futures::executor::block_on;
    use gloo_net::http::Response;
    use serde_json::{Value, json};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Canned per-endpoint replies for the mock client.
    enum Reply {
        Json(Value),
        BadRequest(String),
        NotFound(String),
        Unauthorized,
    }

    /// [`ApiClient`] double that serves canned replies and records every
    /// request it is asked to make.
    #[derive(Default)]
    struct MockApi {
        replies: HashMap<String, Reply>,
        calls: RefCell<Vec<(String, Option<Value>)>>,
    }

    impl MockApi {
        fn new() -> Self {
            Self::default()
        }

        fn reply(mut self, endpoint: &str, reply: Reply) -> Self {
            self.replies.insert(endpoint.to_string(), reply);
            self
        }

        fn endpoints_called(&self) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .map(|(endpoint, _)| endpoint.clone())
                .collect()
        }

        fn body_sent_to(&self, endpoint: &str) -> Option<Value> {
            self.calls
                .borrow()
                .iter()
                .find(|(called, _)| called == endpoint)
                .and_then(|(_, body)| body.clone())
        }

        fn serve<T>(&self, endpoint: &str, body: Option<Value>) -> ApiResult<T>
        where
            T: serde::de::DeserializeOwned,
        {
            self.calls.borrow_mut().push((endpoint.to_string(), body));
            match self.replies.get(endpoint) {
                Some(Reply::Json(value)) => serde_json::from_value(value.clone())
                    .map_err(|err| ApiError::ParseError(gloo_net::Error::SerdeError(err))),
                Some(Reply::BadRequest(detail)) => Err(ApiError::BadRequest(detail.clone())),
                Some(Reply::NotFound(detail)) => Err(ApiError::NotFound(detail.clone())),
                Some(Reply::Unauthorized) => Err(ApiError::UnauthorizedAccess),
                None => Err(ApiError::NotFound(format!("{endpoint} not found"))),
            }
        }
    }

    #[async_trait::async_trait(?Send)]
    impl ApiClient for MockApi {
        async fn make_request(&self, _: HttpMethod, _: &str) -> ApiResult<Response> {
            unreachable!("flows only use the typed methods")
        }

        async fn make_request_with_body<B>(
            &self,
            _: HttpMethod,
            _: &str,
            _: &B,
        ) -> ApiResult<Response>
        where
            B: serde::Serialize,
        {
            unreachable!("flows only use the typed methods")
        }

        async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
        where
            T: serde::de::DeserializeOwned,
        {
            self.serve(endpoint, None)
        }

        async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
        where
            T: serde::de::DeserializeOwned,
            B: serde::Serialize,
        {
            let body = serde_json::to_value(body).ok();
            self.serve(endpoint, body)
        }

        async fn delete<T>(&self, endpoint: &str) -> ApiResult<T>
        where
            T: serde::de::DeserializeOwned,
        {
            self.serve(endpoint, None)
        }
    }

    fn current_user_reply() -> Reply {
        Reply::Json(json!({
            "user_id": 7,
            "username": "alice",
            "role": "customer",
            "disabled": false
        }))
    }

    #[test]
    fn signup_with_mismatched_passwords_makes_no_request() {
        let api = MockApi::new();
        let service = CoachingService::new(api);

        let result = block_on(service.signup("alice", "pw1", "pw2"));

        assert!(matches!(result, Err(SignupError::PasswordMismatch)));
        assert!(service.api.endpoints_called().is_empty());
    }

    #[test]
    fn signup_posts_default_role() {
        let api = MockApi::new().reply(
            "/signup",
            Reply::Json(json!({
                "user_id": 3,
                "username": "bob",
                "role": "customer",
                "disabled": false
            })),
        );
        let service = CoachingService::new(api);

        let user = block_on(service.signup("bob", "pw", "pw")).unwrap();

        assert_eq!(user.username, "bob");
        let body = service.api.body_sent_to("/signup").unwrap();
        assert_eq!(body["role"], "customer");
        assert_eq!(body["username"], "bob");
    }

    #[test]
    fn signup_surfaces_server_detail() {
        let api = MockApi::new().reply(
            "/signup",
            Reply::BadRequest("Username already exists".to_string()),
        );
        let service = CoachingService::new(api);

        let err = block_on(service.signup("bob", "pw", "pw")).unwrap_err();
        assert_eq!(err.to_string(), "Username already exists");
    }

    #[test]
    fn sign_in_builds_session_from_both_services() {
        let primary = MockApi::new().reply(
            "/login",
            Reply::Json(json!({
                "access_token": "tok123",
                "token_type": "bearer",
                "user_id": 7,
                "role": "customer"
            })),
        );
        let secondary = MockApi::new().reply("/signin", Reply::Json(json!({"token": "tok456"})));
        let flow = AuthFlow::new(primary, secondary);

        let session = block_on(flow.sign_in("alice", "pw1")).unwrap();

        assert_eq!(session.token.as_deref(), Some("tok123"));
        assert_eq!(session.secondary_token.as_deref(), Some("tok456"));
        assert_eq!(session.user_id.as_deref(), Some("7"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn primary_rejection_skips_secondary() {
        let primary = MockApi::new().reply(
            "/login",
            Reply::BadRequest("Incorrect username or password".to_string()),
        );
        let secondary = MockApi::new().reply("/signin", Reply::Json(json!({"token": "tok456"})));
        let flow = AuthFlow::new(primary, secondary);

        let err = block_on(flow.sign_in("alice", "wrong")).unwrap_err();

        assert!(matches!(err, AuthError::Primary(_)));
        assert_eq!(err.to_string(), "Incorrect username or password");
        assert!(flow.secondary.endpoints_called().is_empty());
    }

    #[test]
    fn secondary_rejection_discards_primary_token() {
        let primary = MockApi::new().reply(
            "/login",
            Reply::Json(json!({
                "access_token": "tok123",
                "token_type": "bearer",
                "user_id": 7,
                "role": "customer"
            })),
        );
        let secondary = MockApi::new().reply("/signin", Reply::Unauthorized);
        let flow = AuthFlow::new(primary, secondary);

        let err = block_on(flow.sign_in("alice", "pw1")).unwrap_err();

        // The saga failed as a whole: no session, no token to persist.
        assert!(matches!(err, AuthError::Secondary(_)));
        assert_eq!(flow.primary.endpoints_called(), vec!["/login"]);
        assert_eq!(flow.secondary.endpoints_called(), vec!["/signin"]);
    }

    #[test]
    fn register_resolves_user_before_posting() {
        let api = MockApi::new()
            .reply("/current_user", current_user_reply())
            .reply(
                "/register",
                Reply::Json(json!({"user_id": 7, "class_id": 12})),
            );
        let service = CoachingService::new(api);

        let registration = block_on(service.register_for_class(12)).unwrap();

        assert_eq!(registration.user_id, 7);
        assert_eq!(registration.class_id, 12);
        assert_eq!(
            service.api.endpoints_called(),
            vec!["/current_user", "/register"]
        );
        let body = service.api.body_sent_to("/register").unwrap();
        assert_eq!(body["user_id"], 7);
    }

    #[test]
    fn failed_user_lookup_never_posts_registration() {
        let api = MockApi::new().reply("/current_user", Reply::Unauthorized);
        let service = CoachingService::new(api);

        let err = block_on(service.register_for_class(12)).unwrap_err();

        assert!(matches!(err, ApiError::UnauthorizedAccess));
        assert_eq!(service.api.endpoints_called(), vec!["/current_user"]);
    }

    #[test]
    fn classes_preserve_server_order() {
        let api = MockApi::new().reply(
            "/classes",
            Reply::Json(json!([
                {"class_id": 3, "coach_id": 1, "start_time": "09:00", "end_time": "10:00", "class_type": "Yoga"},
                {"class_id": 1, "coach_id": 2, "start_time": "10:00", "end_time": "11:00", "class_type": "HIIT"},
                {"class_id": 2, "coach_id": 1, "start_time": "11:00", "end_time": "12:00", "class_type": "Spin"},
            ])),
        );
        let service = CoachingService::new(api);

        let classes = block_on(service.classes()).unwrap();

        assert_eq!(classes.len(), 3);
        let ids: Vec<_> = classes.iter().map(|class| class.class_id).collect();
        assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);
    }

    #[test]
    fn empty_class_list_passes_through() {
        let api = MockApi::new().reply("/classes", Reply::Json(json!([])));
        let service = CoachingService::new(api);

        let classes = block_on(service.classes()).unwrap();
        assert!(classes.is_empty());
    }

    #[test]
    fn cancel_hits_the_class_specific_endpoint() {
        let api = MockApi::new().reply(
            "/cancel_registration/12",
            Reply::Json(json!({"detail": "Registration cancelled successfully"})),
        );
        let service = CoachingService::new(api);

        block_on(service.cancel_registration(12)).unwrap();
        assert_eq!(
            service.api.endpoints_called(),
            vec!["/cancel_registration/12"]
        );
    }

    #[test]
    fn missing_class_surfaces_not_found_detail() {
        let api = MockApi::new()
            .reply("/current_user", current_user_reply())
            .reply(
                "/register",
                Reply::NotFound("Fitness class not found".to_string()),
            );
        let service = CoachingService::new(api);

        let err = block_on(service.register_for_class(99)).unwrap_err();
        assert_eq!(err.to_string(), "Fitness class not found");
    }
}
