use super::error::AuthError;
use super::headers::Headers;

pub const AUTHORIZATION: &str = "Authorization";
const API_KEY_SCHEME: &str = "ApiKey";

/// Extract the API key from an `Authorization: ApiKey <token>` header.
///
/// The header name is matched exactly and only its first value is read.
/// The token is the field right after the first space, up to the next one;
/// anything after it is ignored. No trimming happens, so `"ApiKey "` and
/// `"ApiKey  key"` both yield an empty token.
pub fn get_api_key(headers: &Headers) -> Result<&str, AuthError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(AuthError::MissingHeader),
    };

    let (scheme, rest) = value.split_once(' ').ok_or(AuthError::MalformedHeader)?;
    if scheme != API_KEY_SCHEME {
        return Err(AuthError::MalformedHeader);
    }

    Ok(rest.split_once(' ').map_or(rest, |(token, _)| token))
}
