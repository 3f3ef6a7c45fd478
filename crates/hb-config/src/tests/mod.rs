
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    #[allow(dead_code)]
    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and set HB_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("HB_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Point the dashboard section at a plausible workspace so validate() passes
pub(crate) fn dashboard_env() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("HB_DASHBOARD_INSTANCE_URL", "https://acme.cloud.example.com"),
        EnvGuard::set("HB_DASHBOARD_WORKSPACE_ID", "1444828305810485"),
        EnvGuard::set("HB_DASHBOARD_DASHBOARD_ID", "01f0fd70293d1fb2b56879b9058116b3"),
    ]
}
