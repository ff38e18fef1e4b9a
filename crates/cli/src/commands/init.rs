//! `runwatch init`: Write the default configuration file.

use std::path::Path;

use runwatch_config::AppConfig;

pub fn run(config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if config_path.exists() {
        println!("⚠️  Config already exists at: {}", config_path.display());
        println!("   Edit it manually or delete it and re-run init.");
        return Ok(());
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(config_path, AppConfig::default_toml())?;

    println!("✅ Created config at: {}", config_path.display());
    println!("\n📝 Next steps:");
    println!("   1. Add locales under [messages.<locale>.errors] / [messages.<locale>.chat]");
    println!("   2. Run: runwatch replay <script.jsonl>");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_default_config_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        run(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("quota_aware = false"));

        std::fs::write(&path, "locale = \"fr\"\n").unwrap();
        run(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "locale = \"fr\"\n");
    }
}
