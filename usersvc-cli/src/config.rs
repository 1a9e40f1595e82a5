use std::path::PathBuf;

use tracing::debug;

/// Load environment variables from .env files
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ~/.usersvc/.env
///
/// Returns the files that were loaded.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded .env from current directory: {}", path.display());
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            // dotenvy never overwrites variables that are already set
            match dotenvy::from_path(&env_file) {
                Ok(()) => {
                    debug!("Loaded .env from ~/.usersvc: {}", env_file.display());
                    loaded_from.push(env_file);
                }
                Err(e) => {
                    debug!("Failed to load {}: {}", env_file.display(), e);
                }
            }
        }
    }

    loaded_from
}

/// Get the usersvc config directory path (~/.usersvc)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".usersvc"))
}
