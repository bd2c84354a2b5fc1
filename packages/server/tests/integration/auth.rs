use serde_json::json;

use crate::common::{TestApp, routes};

mod login {
    use super::*;

    #[tokio::test]
    async fn registered_user_can_login_and_receives_token() {
        let app = TestApp::spawn().await;
        app.create_user("mluukkai", "salainen").await;

        let res = app
            .post_without_token(
                routes::LOGIN,
                &json!({"username": "mluukkai", "password": "salainen"}),
            )
            .await;

        assert_eq!(res.status, 200);
        assert!(res.body["token"].is_string());
        assert_eq!(res.body["username"], "mluukkai");
        assert_eq!(res.body["name"], "Test User");
    }

    #[tokio::test]
    async fn cannot_login_with_wrong_password() {
        let app = TestApp::spawn().await;
        app.create_user("mluukkai", "salainen").await;

        let res = app
            .post_without_token(
                routes::LOGIN,
                &json!({"username": "mluukkai", "password": "wrongpass"}),
            )
            .await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn cannot_login_with_nonexistent_username() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                routes::LOGIN,
                &json!({"username": "nobody", "password": "salainen"}),
            )
            .await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn empty_credentials_are_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(routes::LOGIN, &json!({"username": " ", "password": ""}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod request_validation {
    use super::*;

    #[tokio::test]
    async fn malformed_json_body_returns_validation_error() {
        let app = TestApp::spawn().await;

        let res = app.post_raw(routes::BLOGS, "{not valid json").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn unknown_endpoint_returns_structured_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get("/api/v1/nothing-here").await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
        assert_eq!(res.body["message"], "Unknown endpoint");
    }

    #[tokio::test]
    async fn token_signed_with_another_secret_is_rejected() {
        let app = TestApp::spawn_with_blogs().await;
        let id = app.blogs_in_db().await[0].id;
        let forged = blog_server::utils::jwt::sign(1, "mallory", "some-other-secret", 1).unwrap();

        let res = app.delete_with_token(&routes::blog(id), &forged).await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "TOKEN_INVALID");
    }
}
