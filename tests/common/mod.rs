use std::net::SocketAddr;

use reqwest::Client;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use surveyor::config::Config;
use surveyor::store::SurveyStore;

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed")
    }

    pub async fn post_form(&self, path: &str, pairs: &[(String, String)]) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .form(pairs)
            .send()
            .await
            .expect("post request failed")
    }

    /// Post the creation form. Each question is (text, type, options), with
    /// options newline-separated as the form sends them.
    pub async fn create_survey(
        &self,
        title: &str,
        is_template: bool,
        questions: &[(&str, &str, &str)],
    ) -> reqwest::Response {
        let mut pairs = vec![("title".to_string(), title.to_string())];
        if is_template {
            pairs.push(("is_template".to_string(), "on".to_string()));
        }
        for (text, kind, options) in questions {
            pairs.push(("question_text".to_string(), text.to_string()));
            pairs.push(("question_type".to_string(), kind.to_string()));
            pairs.push(("question_options".to_string(), options.to_string()));
        }
        self.post_form("/create", &pairs).await
    }

    /// Fresh store loaded from the durable mirror, bypassing the server.
    pub async fn store(&self) -> SurveyStore {
        SurveyStore::load(self.pool.clone())
            .await
            .expect("failed to load store from test database")
    }

    pub async fn survey_id_by_title(&self, title: &str) -> Uuid {
        let store = self.store().await;
        let mut all = store.list(false).await;
        all.extend(store.list(true).await);
        all.into_iter()
            .find(|summary| summary.title == title)
            .map(|summary| summary.id)
            .expect("survey not found by title")
    }
}

/// Redirect target of a 303 response.
pub fn location(resp: &reqwest::Response) -> String {
    resp.headers()
        .get(reqwest::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app() -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    // Create a unique test database
    let db_name = format!(
        "surveyor_test_{}",
        Uuid::now_v7().to_string().replace('-', "")
    );

    // Connect to default postgres DB to create test DB
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    // Connect to test DB and run migrations
    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        log_level: "warn".to_string(),
    };

    let app = surveyor::build_app(pool.clone(), config)
        .await
        .expect("Failed to build app");

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        addr,
        pool,
        client,
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    if let Ok(admin_pool) = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
    {
        let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
            .execute(&admin_pool)
            .await;
        admin_pool.close().await;
    }
}
