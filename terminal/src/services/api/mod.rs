//! # Customer API Client Module
//!
//! HTTP client for the remote banking API.
//! Handles authentication, email verification, password reset, the customer
//! document and account creation.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports and endpoint paths
//! ├── client.rs    - ApiClient struct, request execution, ApiService impl
//! ├── auth.rs      - Login, registration, password reset
//! ├── email.rs     - Verification code send/check
//! └── customer.rs  - Customer document and account creation (bearer auth)
//! ```

pub mod auth;
pub mod client;
pub mod customer;
pub mod email;

pub use client::ApiClient;

/// Endpoint paths, joined to the configured origin.
pub mod endpoints {
    pub const LOG_IN: &str = "/api/v1/log-in";
    pub const REGISTER: &str = "/api/register";
    pub const EMAIL_SEND: &str = "/api/email/send";
    pub const EMAIL_CHECK: &str = "/api/email/check";
    pub const FORGOT_PASSWORD: &str = "/api/customers/forgot-password";
    pub const CUSTOMER: &str = "/api/customers/customer";
    pub const CREATE_ACCOUNT: &str = "/api/accounts/create";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use crate::core::service::ApiService;
    use serde_json::json;
    use shared::{AccountType, RegisterRequest};
    use wiremock::matchers::{body_json, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_login_posts_credentials_and_parses_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoints::LOG_IN))
            .and(body_json(json!({"email": "a@b.com", "password": "x"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "t1", "role": "ADMIN_USER"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client.login("a@b.com".to_string(), "x".to_string()).await.unwrap();

        assert_eq!(response.token, "t1");
        assert_eq!(response.role, "ADMIN_USER");
    }

    #[tokio::test]
    async fn test_login_failure_surfaces_body_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoints::LOG_IN))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid password"})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.login("a@b.com".to_string(), "bad".to_string()).await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Status {
                status: 401,
                message: Some("Invalid password".to_string())
            }
        );
    }

    #[tokio::test]
    async fn test_non_json_error_body_has_no_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoints::REGISTER))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let request = RegisterRequest {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "new@x.com".to_string(),
            password: "secret123".to_string(),
            phone_number: "+380501234567".to_string(),
        };
        let err = client.register(request).await.unwrap_err();

        assert_eq!(err, ApiError::Status { status: 500, message: None });
        assert_eq!(err.user_message("Registration failed"), "Registration failed");
    }

    #[tokio::test]
    async fn test_register_sends_camel_case_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoints::REGISTER))
            .and(body_json(json!({
                "firstName": "Olena",
                "lastName": "Shevchenko",
                "email": "new@x.com",
                "password": "secret123",
                "phoneNumber": "+380501234567"
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let request = RegisterRequest {
            first_name: "Olena".to_string(),
            last_name: "Shevchenko".to_string(),
            email: "new@x.com".to_string(),
            password: "secret123".to_string(),
            phone_number: "+380501234567".to_string(),
        };
        client.register(request).await.unwrap();
    }

    #[tokio::test]
    async fn test_email_code_endpoints() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoints::EMAIL_SEND))
            .and(body_json(json!({"email": "new@x.com"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(endpoints::EMAIL_CHECK))
            .and(body_json(json!({"email": "new@x.com", "code": "123456"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.send_verification_code("new@x.com".to_string()).await.unwrap();
        client
            .check_verification_code("new@x.com".to_string(), "123456".to_string())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_reset_password_uses_put() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(endpoints::FORGOT_PASSWORD))
            .and(body_json(json!({"email": "a@b.com", "password": "newpass123"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client
            .reset_password("a@b.com".to_string(), "newpass123".to_string())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_fetch_customer_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(endpoints::CUSTOMER))
            .and(header("Authorization", "Bearer t1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "firstName": "Olena",
                "lastName": "Shevchenko",
                "email": "olena@example.com",
                "phoneNumber": "+380501234567",
                "accounts": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let customer = client.fetch_customer("t1").await.unwrap();
        assert_eq!(customer.first_name, "Olena");
    }

    #[tokio::test]
    async fn test_missing_token_sent_as_empty_credential() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(endpoints::CUSTOMER))
            .and(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.fetch_customer("").await.unwrap_err();
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn test_create_account_posts_account_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoints::CREATE_ACCOUNT))
            .and(header("Authorization", "Bearer t1"))
            .and(body_json(json!({"accountType": "EUR"})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.create_account("t1", AccountType::EUR).await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(endpoints::CUSTOMER))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.fetch_customer("t1").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let client = ApiClient::with_base_url("http://127.0.0.1:9");
        let err = client.send_verification_code("a@b.com".to_string()).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
