//! `runwatch status`: Show the effective configuration.

use std::path::Path;

use runwatch_config::AppConfig;

pub fn run(config: &AppConfig, config_path: &Path) {
    let mut locales: Vec<&str> = config.messages.keys().map(String::as_str).collect();
    locales.sort_unstable();

    println!("runwatch Status");
    println!("===============");
    println!("  Config file:      {}", config_path.display());
    println!("  Locale:           {}", config.locale);
    println!("  Fallback locale:  {}", config.fallback_locale);
    println!("  Log level:        {}", config.log_level);
    println!(
        "  Classifier:       {}",
        if config.gateway.quota_aware { "quota-aware" } else { "literal" }
    );
    println!(
        "  Catalog locales:  {}",
        if locales.is_empty() { "(built-in only)".to_string() } else { locales.join(", ") }
    );

    if config_path.exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file, run `runwatch init` first");
    }
}
