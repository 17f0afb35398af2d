/// Variables read directly rather than through the config figment.
const DIRECT_ENV_KEYS: &[&str] = &["TINTA_LOG"];

/// Emit warnings for `TINTA_*` env vars that cannot reach any config section.
pub fn warn_misnamed_env() {
    for warning in collect_env_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_env_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut keys = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with("TINTA_"))
        .filter(|key| !DIRECT_ENV_KEYS.contains(&key.as_str()))
        .filter(|key| !key.contains("__"))
        .collect::<Vec<_>>();
    keys.sort();

    keys.into_iter()
        .map(|key| {
            format!(
                "{key} is ignored. Use double underscores between section and field (example: TINTA_GENERAL__LOCALE)."
            )
        })
        .collect()
}
