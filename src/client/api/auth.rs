use serde_json::Value;

use crate::{
    client::{
        api::helper::{ApiClient, Method, Transport},
        model::error::ClientError,
    },
    model::auth::{SessionDto, SignInDto, SignUpDto},
};

/// Current session, or `None` when nobody is signed in.
pub async fn get_session<T: Transport>(
    client: &ApiClient<T>,
) -> Result<Option<SessionDto>, ClientError> {
    client.get("/get-session").await
}

pub async fn sign_in<T: Transport>(
    client: &ApiClient<T>,
    payload: &SignInDto,
) -> Result<Value, ClientError> {
    client.post("/sign-in/email", payload).await
}

pub async fn sign_up<T: Transport>(
    client: &ApiClient<T>,
    payload: &SignUpDto,
) -> Result<Value, ClientError> {
    client.post("/sign-up/email", payload).await
}

/// Ends the session; the provider clears its cookies through `Set-Cookie`.
pub async fn sign_out<T: Transport>(client: &ApiClient<T>) -> Result<Value, ClientError> {
    client.request(Method::Post, "/sign-out", None).await
}
