use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpMessage, HttpResponse,
};
use futures_util::future::{ok, Ready};

use crate::common::errors::AuthError;
use crate::services::auth::AuthVerifier;
use crate::types::AuthErrorBody;

/// Bearer-token guard for the admin scope.
///
/// Verification is whatever the injected [`AuthVerifier`] says; with the
/// stock prefix verifier that means token identity is not actually
/// checked beyond its shape, and the attached identity is always the
/// fixed admin record.
pub struct AdminAuth {
    verifier: Arc<dyn AuthVerifier>,
}

impl AdminAuth {
    pub fn new(verifier: Arc<dyn AuthVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AdminAuthMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AdminAuthMiddleware {
            service,
            verifier: self.verifier.clone(),
        })
    }
}

pub struct AdminAuthMiddleware<S> {
    service: S,
    verifier: Arc<dyn AuthVerifier>,
}

impl<S, B> Service<ServiceRequest> for AdminAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let identity = bearer_token(&req)
            .ok_or(AuthError::MissingHeader)
            .and_then(|token| {
                self.verifier
                    .verify(token)
                    .ok_or(AuthError::InvalidToken)
            });

        match identity {
            Ok(identity) => {
                req.extensions_mut().insert(identity);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) })
            }
            Err(reason) => {
                let response = HttpResponse::Unauthorized()
                    .json(AuthErrorBody {
                        error: reason.to_string(),
                    })
                    .map_into_right_body();
                let (req, _) = req.into_parts();
                Box::pin(async move { Ok(ServiceResponse::new(req, response)) })
            }
        }
    }
}

/// Pulls the token out of `Authorization: Bearer <token>`. A header
/// without the `Bearer ` marker is passed through whole, matching the
/// permissive behavior this guard replaces.
fn bearer_token(req: &ServiceRequest) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    Some(value.strip_prefix("Bearer ").unwrap_or(value))
}
