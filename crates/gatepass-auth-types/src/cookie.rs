//! Builders for the verified-phone cookie.
//!
//! The cookie is the client-held proof of a completed OTP challenge. Its
//! value is always the canonical local phone form — taking a [`PhoneNumber`]
//! rather than a raw string fixes the shape at write time, so every consumer
//! can rely on it. It is deliberately not `HttpOnly`: the resident app shell
//! reads it to render the signed-in state.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::phone::PhoneNumber;

/// Cookie name asserting a completed phone verification.
pub const VERIFIED_PHONE: &str = "verified_phone";

/// Cookie Max-Age in seconds (one year).
pub const VERIFIED_PHONE_MAX_AGE_SECS: i64 = 31_536_000;

/// Set the verified-phone cookie on the jar.
///
/// `secure` should be true on production transport (HTTPS) only.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use gatepass_auth_types::cookie::{set_verified_phone_cookie, VERIFIED_PHONE};
/// use gatepass_auth_types::phone::PhoneNumber;
///
/// let phone = PhoneNumber::parse("+2348012345678").unwrap();
/// let jar = set_verified_phone_cookie(CookieJar::new(), &phone, true);
/// let cookie = jar.get(VERIFIED_PHONE).unwrap();
/// assert_eq!(cookie.value(), "08012345678");
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(31_536_000)));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_verified_phone_cookie(jar: CookieJar, phone: &PhoneNumber, secure: bool) -> CookieJar {
    let cookie = Cookie::build((VERIFIED_PHONE, phone.local().to_owned()))
        .path("/")
        .max_age(Duration::seconds(VERIFIED_PHONE_MAX_AGE_SECS))
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Clear the verified-phone cookie by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use gatepass_auth_types::cookie::{
///     clear_verified_phone_cookie, set_verified_phone_cookie, VERIFIED_PHONE,
/// };
/// use gatepass_auth_types::phone::PhoneNumber;
///
/// let phone = PhoneNumber::parse("08012345678").unwrap();
/// let jar = set_verified_phone_cookie(CookieJar::new(), &phone, true);
/// let jar = clear_verified_phone_cookie(jar, true);
/// let cookie = jar.get(VERIFIED_PHONE).unwrap();
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_verified_phone_cookie(jar: CookieJar, secure: bool) -> CookieJar {
    let cookie = Cookie::build((VERIFIED_PHONE, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}
