//! Startup configuration and end-to-end flows over the assembled router

#[cfg(test)]
mod config_tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use crate::config::AppConfig;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.database_url, None);
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:5000");
        assert_eq!(config.bootstrap.username, "admin");
        assert_eq!(config.bootstrap.password, "admin123");
        assert_eq!(config.probe.timeout, Duration::from_secs(5));
        assert_eq!(config.probe.ping_program, "ping");
        assert_eq!(config.auth.session_cookie_name, "admin_session");
        assert_eq!(config.auth.password_pepper, None);
    }

    #[test]
    fn test_overrides() {
        let secret = platform::crypto::to_base64(&[7u8; 32]);
        let config = load(&[
            ("DATABASE_URL", "postgres://inventory@localhost/inventory"),
            ("LISTEN_ADDR", "127.0.0.1:8080"),
            ("SESSION_SECRET", secret.as_str()),
            ("COOKIE_SECURE", "true"),
            ("ADMIN_USERNAME", "ops"),
            ("ADMIN_PASSWORD", "Rack-42-Switch!"),
            ("PASSWORD_PEPPER", "pepper"),
            ("PROBE_TIMEOUT_SECS", "2"),
            ("PING_PROGRAM", "/usr/bin/ping"),
        ])
        .unwrap();

        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://inventory@localhost/inventory")
        );
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.auth.session_secret, [7u8; 32]);
        assert!(config.auth.cookie_secure);
        assert_eq!(config.bootstrap.username, "ops");
        assert_eq!(config.auth.pepper(), Some(b"pepper".as_slice()));
        assert_eq!(config.probe.timeout, Duration::from_secs(2));
        assert_eq!(config.probe.ping_program, "/usr/bin/ping");
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = load(&[("DATABASE_URL", "  "), ("ADMIN_USERNAME", "")]).unwrap();
        assert_eq!(config.database_url, None);
        assert_eq!(config.bootstrap.username, "admin");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let short_secret = platform::crypto::to_base64(&[1u8; 16]);
        assert!(load(&[("SESSION_SECRET", short_secret.as_str())]).is_err());
        assert!(load(&[("SESSION_SECRET", "not base64!")]).is_err());
        assert!(load(&[("LISTEN_ADDR", "localhost")]).is_err());
        assert!(load(&[("COOKIE_SECURE", "maybe")]).is_err());
        assert!(load(&[("PROBE_TIMEOUT_SECS", "0")]).is_err());
        assert!(load(&[("PROBE_TIMEOUT_SECS", "soon")]).is_err());
    }
}

#[cfg(test)]
mod app_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use auth::application::BootstrapAdmin;
    use auth::{AuthConfig, EnsureAdminUseCase, MemoryAuthRepository};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use inventory::MemoryServerRepository;
    use inventory::domain::probe::{ProbeOutcome, ProbeReport, Prober};
    use inventory::domain::value_objects::{Ipv4Address, Port};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::app::build_app;

    #[derive(Clone)]
    struct AlwaysUp;

    impl Prober for AlwaysUp {
        async fn ping(&self, ip: &Ipv4Address) -> ProbeReport {
            ProbeReport {
                target: ip.to_string(),
                outcome: ProbeOutcome::Reachable {
                    output: "1 packets transmitted, 1 received".to_string(),
                },
                elapsed: Duration::from_millis(1),
            }
        }

        async fn tcp_connect(&self, ip: &Ipv4Address, port: Port) -> ProbeReport {
            ProbeReport {
                target: format!("{ip}:{port}"),
                outcome: ProbeOutcome::Reachable {
                    output: String::new(),
                },
                elapsed: Duration::from_millis(1),
            }
        }
    }

    async fn app() -> Router {
        let config = Arc::new(AuthConfig::development());
        let auth_repo = Arc::new(MemoryAuthRepository::new());
        EnsureAdminUseCase::new(auth_repo.clone(), config.clone())
            .execute(&BootstrapAdmin::default())
            .await
            .unwrap();

        build_app(
            auth_repo,
            Arc::new(MemoryServerRepository::new()),
            Arc::new(AlwaysUp),
            config,
        )
    }

    async fn login(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(
                Request::post("/login")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("username=admin&password=admin123"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    fn add_request(cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::post("/add").header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder
            .body(Body::from(
                json!({"ip": "192.168.0.10", "name": "edge", "port": 22}).to_string(),
            ))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_admin_session_gates_writes() {
        let app = app().await;

        let response = app.clone().oneshot(add_request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let cookie = login(&app).await;
        let response = app
            .clone()
            .oneshot(add_request(Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(Request::get("/list").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let servers: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(
            servers,
            json!([{"id": 1, "ip": "192.168.0.10", "name": "edge", "port": 22}])
        );

        // Logging out invalidates the session server-side
        let response = app
            .clone()
            .oneshot(
                Request::get("/logout")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = app.oneshot(add_request(Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_index_reflects_session() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let guest = body_text(response).await;
        assert!(guest.contains("Admin login"));
        assert!(!guest.contains("Signed in as"));

        let cookie = login(&app).await;
        let response = app
            .oneshot(
                Request::get("/")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let admin = body_text(response).await;
        assert!(admin.contains("Signed in as <strong>admin</strong>"));
    }

    #[tokio::test]
    async fn test_probes_and_health_are_public() {
        let app = app().await;

        for uri in ["/ping/10.1.1.1", "/telnet/10.1.1.1/443", "/health"] {
            let response = app
                .clone()
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }
    }
}

#[cfg(test)]
mod cleanup_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use auth::MemoryAuthRepository;
    use auth::domain::entity::admin_session::AdminSession;
    use auth::domain::repository::AdminSessionRepository;
    use kernel::id::AdminId;

    use crate::spawn_session_cleanup;

    #[tokio::test]
    async fn test_sweep_runs_at_startup() {
        let repo = Arc::new(MemoryAuthRepository::new());
        let expired = AdminSession::new(AdminId::new(), "admin", None, None, chrono::Duration::zero());
        AdminSessionRepository::create(&*repo, &expired).await.unwrap();

        spawn_session_cleanup(repo.clone());

        for _ in 0..100 {
            if repo.session_count().await == 0 {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("expired session was not swept");
    }
}
