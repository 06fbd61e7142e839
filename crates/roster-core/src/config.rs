/// Loads service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; field names map to upper-case
/// env vars (`database_url` reads `DATABASE_URL`). Use `#[serde(default = ..)]`
/// for optional settings.
///
/// # Panics
///
/// `from_env` panics if a required env var is missing or cannot be parsed.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Self {
        envy::from_env().expect("failed to load config from environment")
    }

    /// Same as [`from_env`](Self::from_env) but over an explicit variable set.
    fn from_iter<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
