use async_trait::async_trait;
use log::warn;
use quicknotes::access_token::AccessTokenDecoder;
use quicknotes::owner_id::OwnerId;
use rocket::http::Status;
use rocket::http::hyper::header;
use rocket::outcome::try_outcome;
use rocket::request::{FromRequest, Outcome};
use rocket::{Request, State};
use time::OffsetDateTime;

/// Resolves the bearer credential to the calling owner. There is no
/// fallback identity: a missing, malformed, expired or unverifiable
/// token fails the request with 401.
#[derive(Debug)]
pub struct Authenticated(pub OwnerId);

#[async_trait]
impl<'r> FromRequest<'r> for Authenticated {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(auth_header) = request.headers()
            .get_one(header::AUTHORIZATION.as_str())
        else {
            return Outcome::Error((Status::Unauthorized, ()));
        };
        let Some(token) = auth_header.strip_prefix("Bearer ") else {
            warn!("rejecting request with a malformed authorization header");
            return Outcome::Error((Status::Unauthorized, ()));
        };
        let decoder = try_outcome!(request.guard::<&State<AccessTokenDecoder>>().await);
        let data = match decoder.decode_token(token) {
            Ok(data) => data,
            Err(e) => {
                warn!("rejecting request with an undecodable access token: {e}");
                return Outcome::Error((Status::Unauthorized, ()));
            },
        };
        let now = OffsetDateTime::now_utc();
        if data.not_before > now || now >= data.expires_at {
            warn!(
                "rejecting request with an expired access token \
                    for owner \"{}\"",
                data.owner,
            );
            return Outcome::Error((Status::Unauthorized, ()));
        }
        Outcome::Success(Authenticated(data.owner))
    }
}
