/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize` (field names map to upper-cased
/// env vars) and call `Config::from_env()` once at startup. A `.env` file in
/// the working directory is read first if present; real env vars win.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Result<Self, envy::Error> {
        let _ = dotenvy::dotenv();
        envy::from_env()
    }

    /// Deserialize from an explicit set of key/value pairs, ignoring the process
    /// environment. Keys use the same upper-case names as the env vars.
    fn from_pairs<I>(pairs: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(pairs)
    }
}
