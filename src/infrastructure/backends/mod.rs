pub mod learnbuddy;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::BackendBox;

pub struct BackendManager {}

impl BackendManager {
    pub fn get() -> Result<BackendBox> {
        let backend = learnbuddy::LearnBuddy::default();
        if backend.url.is_empty() {
            bail!("LearnBuddy server URL is not defined");
        }

        return Ok(Box::new(backend));
    }
}
