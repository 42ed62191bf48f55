//! Opening the SurrealDB session shared by the server and `usercli`.

use std::fmt::{self, Debug, Formatter};

use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;
use tracing::{debug, info};

use crate::error::DbError;
use crate::schema::run_migrations;

/// Where SurrealDB lives and which root credentials to present.
///
/// Every field has a default, so a config file only needs the ones that
/// differ from a local development instance.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// `host:port` of the WebSocket endpoint.
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: "127.0.0.1:8000".into(),
            namespace: "baaham".into(),
            database: "main".into(),
            username: "root".into(),
            password: "root".into(),
        }
    }
}

// Keeps the root password out of `{:?}` output and logs.
impl Debug for DbConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("url", &self.url)
            .field("namespace", &self.namespace)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A signed-in SurrealDB session with the schema at the latest version.
#[derive(Clone)]
pub struct Database {
    client: Surreal<Client>,
}

impl Database {
    /// Connects, signs in as root, selects namespace and database, then
    /// applies pending migrations. Each step reports its own failure.
    pub async fn open(config: &DbConfig) -> Result<Self, DbError> {
        info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Opening SurrealDB session"
        );

        let client = Surreal::new::<Ws>(&config.url)
            .await
            .map_err(|e| DbError::Connect {
                stage: "connect",
                reason: e.to_string(),
            })?;
        debug!("WebSocket established");

        client
            .signin(Root {
                username: config.username.clone(),
                password: config.password.clone(),
            })
            .await
            .map_err(|e| DbError::Connect {
                stage: "signin",
                reason: e.to_string(),
            })?;

        client
            .use_ns(&config.namespace)
            .use_db(&config.database)
            .await
            .map_err(|e| DbError::Connect {
                stage: "select namespace/database",
                reason: e.to_string(),
            })?;

        run_migrations(&client).await?;

        info!("SurrealDB session ready");
        Ok(Self { client })
    }

    pub fn client(&self) -> &Surreal<Client> {
        &self.client
    }

    pub fn into_client(self) -> Surreal<Client> {
        self.client
    }
}
