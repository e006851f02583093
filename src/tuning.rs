use crate::constants::TUNING_ATTR_PREFIX;
use parallax_core::Tuning;
use web_sys as web;

/// Defaults plus any `data-fx-*` overrides found on `<body>`. Rejected
/// values are logged and keep their default.
pub fn read_tuning(document: &web::Document) -> Tuning {
    let Some(body) = document.body() else {
        return Tuning::default();
    };
    let raw: Vec<(&str, String)> = Tuning::KEYS
        .iter()
        .filter_map(|key| {
            body.get_attribute(&format!("{}{}", TUNING_ATTR_PREFIX, key))
                .map(|v| (*key, v))
        })
        .collect();
    let (tuning, errors) = Tuning::with_overrides(raw.iter().map(|(k, v)| (*k, v.as_str())));
    for e in &errors {
        log::warn!("[tuning] {}", e);
    }
    if !raw.is_empty() {
        log::info!(
            "[tuning] {} override(s) applied, {} rejected",
            raw.len() - errors.len(),
            errors.len()
        );
    }
    tuning
}
