//! `runwatch classify`: Show how a failure would be reported.

use runwatch_config::AppConfig;
use runwatch_core::{ERRORS_NAMESPACE, RawFailure, TextResolver};
use runwatch_gateway::{CatalogResolver, ClassifierMode, classify_with};

pub fn failure_from_args(status: Option<u16>, text: Option<String>, unknown: bool) -> RawFailure {
    match (status, text) {
        (Some(status), _) if !unknown => RawFailure::transport(status),
        (None, Some(text)) if !unknown => RawFailure::text(text),
        _ => RawFailure::Unknown,
    }
}

pub fn run(
    config: &AppConfig,
    status: Option<u16>,
    text: Option<String>,
    unknown: bool,
) {
    let failure = failure_from_args(status, text, unknown);
    let mode = ClassifierMode::from_quota_aware(config.gateway.quota_aware);
    let key = classify_with(&failure, mode);
    let resolver = CatalogResolver::from_config(config);

    println!("  Failure:  {failure:?}");
    println!("  Mode:     {mode:?}");
    println!("  Key:      {key}");
    println!("  Text:     {}", resolver.resolve(key.as_str(), ERRORS_NAMESPACE));
}
