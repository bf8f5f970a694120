use crate::{accesso, cli::actions::Action};
use anyhow::{Context, Result, bail};
use url::Url;

/// Handle the server action
///
/// # Errors
/// Returns an error if the DSN is not a Postgres URL or the server fails to
/// start.
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server { port, dsn } => {
            // Fail on a malformed DSN before touching the network.
            let parsed = Url::parse(&dsn).context("Invalid database connection string")?;

            if parsed.scheme() != "postgres" && parsed.scheme() != "postgresql" {
                bail!("Unsupported DSN scheme: {}", parsed.scheme());
            }

            accesso::new(port, dsn).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::cli::actions::Action;

    #[tokio::test]
    async fn handle_rejects_a_malformed_dsn() {
        let action = Action::Server {
            port: 8080,
            dsn: "not a url".to_string(),
        };
        assert!(handle(action).await.is_err());
    }

    #[tokio::test]
    async fn handle_rejects_a_non_postgres_scheme() {
        let action = Action::Server {
            port: 8080,
            dsn: "mysql://localhost:3306/accesso".to_string(),
        };
        let err = handle(action).await.expect_err("must fail");
        assert!(err.to_string().contains("Unsupported DSN scheme"));
    }
}
