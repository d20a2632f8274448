//! `BW_*` environment override helpers.

/// Accepts "true"/"1"; anything else is false.
pub(crate) fn apply_env_bool(var_name: &str, target: &mut bool) {
    if let Ok(val) = std::env::var(var_name) {
        *target = val == "true" || val == "1";
    }
}

/// Unparseable values are ignored.
pub(crate) fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
    if let Ok(val) = std::env::var(var_name)
        && let Ok(parsed) = val.parse()
    {
        *target = parsed;
    }
}

pub(crate) fn apply_env_option_parse<T: std::str::FromStr>(
    var_name: &str,
    target: &mut Option<T>,
) {
    if let Ok(val) = std::env::var(var_name) {
        match val.parse() {
            Ok(parsed) => *target = Some(parsed),
            Err(_) => log::warn!("Ignoring {var_name}={val}: not a valid value"),
        }
    }
}

pub(crate) fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
    if let Ok(val) = std::env::var(var_name)
        && !val.is_empty()
    {
        *target = Some(val);
    }
}
