use serde_json::json;

use crate::common::{TestApp, routes};

mod creation {
    use super::*;

    #[tokio::test]
    async fn creation_succeeds_with_a_fresh_username() {
        let app = TestApp::spawn().await;
        app.create_user("root", "sekret").await;
        let before = app.user_count().await;

        let res = app
            .post_without_token(
                routes::USERS,
                &json!({
                    "username": "mluukkai",
                    "name": "Matti Luukkainen",
                    "password": "salainen",
                }),
            )
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["username"], "mluukkai");
        assert_eq!(res.body["name"], "Matti Luukkainen");
        assert_eq!(res.body["blogs"], json!([]));
        assert!(res.body.get("password").is_none());
        assert!(res.body.get("password_hash").is_none());
        assert_eq!(app.user_count().await, before + 1);
    }

    #[tokio::test]
    async fn name_is_optional() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                routes::USERS,
                &json!({"username": "anonymous", "password": "salainen"}),
            )
            .await;

        assert_eq!(res.status, 201);
        assert!(res.body["name"].is_null());
    }

    #[tokio::test]
    async fn creation_fails_if_username_already_taken() {
        let app = TestApp::spawn().await;
        app.create_user("root", "sekret").await;

        let res = app
            .post_without_token(
                routes::USERS,
                &json!({"username": "root", "name": "Superuser", "password": "salainen"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "USERNAME_TAKEN");
        assert!(
            res.body["message"]
                .as_str()
                .unwrap()
                .contains("`username` to be unique")
        );
        assert_eq!(app.user_count().await, 1);
    }

    #[tokio::test]
    async fn creation_fails_without_a_username() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                routes::USERS,
                &json!({"username": "", "name": "Matti H", "password": "topsecret"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(
            res.body["message"],
            "username must be at least 3 characters long"
        );
        assert_eq!(app.user_count().await, 0);
    }

    #[tokio::test]
    async fn creation_fails_with_a_short_username() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                routes::USERS,
                &json!({"username": "xx", "name": "Matti H", "password": "topsecret"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(
            res.body["message"],
            "username must be at least 3 characters long"
        );
        assert_eq!(app.user_count().await, 0);
    }

    #[tokio::test]
    async fn creation_fails_without_a_password() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                routes::USERS,
                &json!({"username": "matti", "name": "Matti H", "password": ""}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(
            res.body["message"],
            "password must be at least 3 characters long"
        );
        assert_eq!(app.user_count().await, 0);
    }

    #[tokio::test]
    async fn creation_fails_with_a_short_password() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                routes::USERS,
                &json!({"username": "matti", "name": "Matti H", "password": "pw"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(
            res.body["message"],
            "password must be at least 3 characters long"
        );
        assert_eq!(app.user_count().await, 0);
    }
}

mod listing {
    use super::*;

    #[tokio::test]
    async fn users_are_listed_with_their_blogs() {
        let app = TestApp::spawn().await;
        let token = app.create_authenticated_user("mluukkai", "salainen").await;
        app.create_user("hellas", "sekret").await;
        app.create_blog(&token, "Type wars", "Robert C. Martin", 2).await;
        app.create_blog(&token, "First class tests", "Robert C. Martin", 10).await;

        let res = app.get(routes::USERS).await;

        assert_eq!(res.status, 200);
        let users = res.body.as_array().unwrap();
        assert_eq!(users.len(), 2);

        let blogs = users[0]["blogs"].as_array().unwrap();
        assert_eq!(blogs.len(), 2);
        assert_eq!(blogs[0]["title"], "Type wars");
        assert_eq!(blogs[1]["title"], "First class tests");
        assert!(blogs[0].get("likes").is_none());
        assert!(blogs[0].get("user").is_none());

        assert_eq!(users[1]["username"], "hellas");
        assert_eq!(users[1]["blogs"], json!([]));
    }

    #[tokio::test]
    async fn unowned_blogs_are_not_listed_under_any_user() {
        let app = TestApp::spawn_with_blogs().await;
        app.create_user("root", "sekret").await;

        let res = app.get(routes::USERS).await;

        assert_eq!(res.body[0]["blogs"], json!([]));
    }
}
