use std::env;

use bimari_core::model::ServiceSettingsDraft;

pub const ENV_DB_URL: &str = "BIMARIBOT_DB_URL";
pub const ENV_PREDICT_URL: &str = "BIMARIBOT_PREDICT_URL";
pub const ENV_TIMEOUT_SECS: &str = "BIMARIBOT_PREDICT_TIMEOUT_SECS";
pub const ENV_REPORT_DIR: &str = "BIMARIBOT_REPORT_DIR";

/// Settings draft from the process environment. Unparsable numbers are
/// ignored so validation falls back to defaults.
#[must_use]
pub fn settings_draft_from_env() -> ServiceSettingsDraft {
    settings_draft_from(|key| env::var(key).ok())
}

/// Same as `settings_draft_from_env`, reading through `lookup`.
#[must_use]
pub fn settings_draft_from(lookup: impl Fn(&str) -> Option<String>) -> ServiceSettingsDraft {
    ServiceSettingsDraft {
        predict_url: lookup(ENV_PREDICT_URL),
        timeout_secs: lookup(ENV_TIMEOUT_SECS).and_then(|raw| raw.trim().parse().ok()),
        report_dir: lookup(ENV_REPORT_DIR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn reads_known_variables() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_PREDICT_URL, "http://localhost:9000/predict"),
            (ENV_TIMEOUT_SECS, " 12 "),
            (ENV_REPORT_DIR, "/tmp/reports"),
        ]);
        let draft = settings_draft_from(|key| vars.get(key).map(|v| (*v).to_string()));
        let settings = draft.validate().unwrap();
        assert_eq!(settings.predict_url(), "http://localhost:9000/predict");
        assert_eq!(settings.timeout().as_secs(), 12);
        assert_eq!(settings.report_dir(), "/tmp/reports");
    }

    #[test]
    fn bad_timeout_is_ignored() {
        let draft = settings_draft_from(|key| {
            (key == ENV_TIMEOUT_SECS).then(|| "soon".to_string())
        });
        assert_eq!(draft.timeout_secs, None);
    }
}
