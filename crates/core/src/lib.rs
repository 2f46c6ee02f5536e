pub mod catalog;
pub mod domain;
pub mod market;
pub mod screen;
pub mod sentiment;

pub(crate) mod num;

pub mod config {
    #[derive(Debug, Clone)]
    pub struct Settings {
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            })
        }
    }
}
