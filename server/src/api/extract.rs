use axum::{
    async_trait,
    body::{Bytes, HttpBody},
    extract::{FromRequest, FromRequestParts, Path as AxumPath},
    http::{request::Parts, Request},
    BoxError,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::Error;

/// An `application/x-www-form-urlencoded` body. Repeated keys become lists,
/// so multi-selects deserialize into `Vec`s.
pub struct Form<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for Form<T>
where
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Error;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| Error::BadRequest(Some(e.to_string())))?;
        let pairs = serde_urlencoded::from_bytes::<Vec<(String, String)>>(&bytes)
            .map_err(|e| Error::BadRequest(Some(e.to_string())))?;
        let value = serde_path_to_error::deserialize(collect_pairs(pairs))
            .map_err(|e| Error::BadRequest(Some(e.to_string())))?;
        Ok(Form(value))
    }
}

pub fn collect_pairs(pairs: Vec<(String, String)>) -> Value {
    let mut map = Map::new();
    for (key, value) in pairs {
        match map.get_mut(&key) {
            None => {
                map.insert(key, Value::String(value));
            }
            Some(Value::Array(values)) => values.push(Value::String(value)),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
        }
    }
    Value::Object(map)
}

/// Path parameters that do not parse are a missing page, not a bad request.
pub struct Path<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AxumPath(t) = AxumPath::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| Error::NotFound(Some(e.to_string())))?;
        Ok(Self(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn repeated_keys_become_lists() {
        let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(
            "name=The+Musical+Hop&genres=Jazz&genres=Reggae&genres=Swing&seeking_talent=y",
        )
        .unwrap();
        assert_eq!(
            collect_pairs(pairs),
            json!({
                "name": "The Musical Hop",
                "genres": ["Jazz", "Reggae", "Swing"],
                "seeking_talent": "y",
            })
        );
    }

    #[test]
    fn single_keys_stay_strings() {
        let pairs = vec![("genres".to_string(), "R&B".to_string())];
        assert_eq!(collect_pairs(pairs), json!({ "genres": "R&B" }));
    }
}
