//! Test helpers for inbound HTTP components.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::{App, HttpResponse, test, web};

use super::session::{Role, SessionContext};
use super::state::HttpState;
use crate::domain::{Error, UserId};

const SESSION_COOKIE: &str = "session";
const TEST_KEY: [u8; 64] = [7; 64];

/// Session middleware shared by every test app.
///
/// The key is fixed so a cookie minted by [`login_cookie`] is accepted by
/// any other app under test. The `Secure` flag is off for plain HTTP.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::from(&TEST_KEY))
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build()
}

/// Mint a session cookie carrying `user` with `role`.
pub async fn login_cookie(user: UserId, role: Role) -> Cookie<'static> {
    let app = test::init_service(App::new().wrap(test_session_middleware()).route(
        "/login",
        web::post().to(move |session: SessionContext| async move {
            session.persist_identity(&user, role)?;
            Ok::<_, Error>(HttpResponse::Ok())
        }),
    ))
    .await;
    let response =
        test::call_service(&app, test::TestRequest::post().uri("/login").to_request()).await;
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .expect("session cookie set")
        .into_owned()
}

/// Serve `request` through the full API surface backed by `state`.
pub async fn call(state: HttpState, request: test::TestRequest) -> ServiceResponse {
    let app = test::init_service(
        App::new()
            .wrap(test_session_middleware())
            .app_data(web::Data::new(state))
            .configure(super::configure),
    )
    .await;
    test::call_service(&app, request.to_request()).await
}
