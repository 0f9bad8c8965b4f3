use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;

const COOKIE_NAME: &str = "flash";

#[derive(Debug, Clone, Copy)]
pub enum FlashLevel {
    Success,
    Warning,
    Danger,
}

impl FlashLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Warning => "warning",
            FlashLevel::Danger => "danger",
        }
    }
}

/// A one-shot message carried across a redirect. Rendered by the next page
/// and cleared.
#[derive(Debug, Clone, Default)]
pub struct Flash {
    pub level: String,
    pub message: String,
}

impl Flash {
    pub fn is_set(&self) -> bool {
        !self.message.is_empty()
    }
}

fn encode(level: FlashLevel, message: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("level", level.as_str())
        .append_pair("message", message)
        .finish()
}

fn decode(value: &str) -> Flash {
    let mut flash = Flash::default();
    for (key, value) in form_urlencoded::parse(value.as_bytes()) {
        match &*key {
            "level" => flash.level = value.into_owned(),
            "message" => flash.message = value.into_owned(),
            _ => {}
        }
    }
    flash
}

fn flash_cookie(value: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Redirect (303) to `to` with a flash message set for the next render.
pub fn redirect(to: &str, level: FlashLevel, message: &str) -> Response {
    let jar = CookieJar::new().add(flash_cookie(encode(level, message)));
    (jar, Redirect::to(to)).into_response()
}

/// Pop the pending flash, clearing its cookie.
pub fn take(jar: CookieJar) -> (CookieJar, Flash) {
    match jar.get(COOKIE_NAME).map(|cookie| cookie.value().to_string()) {
        Some(value) => (jar.remove(flash_cookie(String::new())), decode(&value)),
        None => (jar, Flash::default()),
    }
}
