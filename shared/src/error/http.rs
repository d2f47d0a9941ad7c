//! Where each error code lands in HTTP status space

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// HTTP status a response carrying this code gets
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists => StatusCode::CONFLICT,

            // 401: the caller is not (or not acceptably) logged in
            Self::NotAuthenticated | Self::InvalidCredentials | Self::LoginRejected => {
                StatusCode::UNAUTHORIZED
            }

            // 422: request was well-formed, backend said no
            Self::RegistrationRejected => StatusCode::UNPROCESSABLE_ENTITY,

            // 403: logged in, wrong portal
            Self::PermissionDenied | Self::SellerRequired | Self::CustomerRequired => {
                StatusCode::FORBIDDEN
            }

            // 502/504: the backend failed us, not the caller
            Self::BackendUnreachable | Self::BadUpstreamResponse => StatusCode::BAD_GATEWAY,
            Self::BackendTimeout => StatusCode::GATEWAY_TIMEOUT,

            Self::InternalError | Self::StorageError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // everything else is the caller's request being wrong
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_outcomes() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::AlreadyExists.http_status(), StatusCode::CONFLICT);
    }

    #[test]
    fn login_failures_are_unauthorized() {
        for code in [
            ErrorCode::NotAuthenticated,
            ErrorCode::InvalidCredentials,
            ErrorCode::LoginRejected,
        ] {
            assert_eq!(code.http_status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn rejected_registration_is_unprocessable() {
        assert_eq!(
            ErrorCode::RegistrationRejected.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn portal_denials_are_forbidden() {
        for code in [
            ErrorCode::PermissionDenied,
            ErrorCode::SellerRequired,
            ErrorCode::CustomerRequired,
        ] {
            assert_eq!(code.http_status(), StatusCode::FORBIDDEN);
        }
    }

    #[test]
    fn backend_failures_split_bad_gateway_and_timeout() {
        assert_eq!(
            ErrorCode::BackendUnreachable.http_status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ErrorCode::BadUpstreamResponse.http_status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ErrorCode::BackendTimeout.http_status(),
            StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[test]
    fn gateway_faults_are_internal_errors() {
        for code in [
            ErrorCode::InternalError,
            ErrorCode::StorageError,
            ErrorCode::ConfigError,
        ] {
            assert_eq!(code.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn malformed_requests_are_bad_requests() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidRequest,
            ErrorCode::RequiredField,
            ErrorCode::Unknown,
        ] {
            assert_eq!(code.http_status(), StatusCode::BAD_REQUEST);
        }
    }
}
