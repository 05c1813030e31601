//! Cookie-backed task persistence.

use super::codec::{decode_tasks, encode_tasks};
use super::TaskPersistence;
use crate::config::CoreConfig;
use crate::model::task::{TaskList, TaskRecord};
use crate::repo::cookie_repo::{Cookie, CookieJar};
use log::{debug, warn};

/// Stores the whole task collection in a single cookie.
pub struct CookieTaskPersistence<J: CookieJar> {
    jar: J,
    cookie_name: String,
    cookie_path: String,
    max_age_secs: u32,
}

impl<J: CookieJar> CookieTaskPersistence<J> {
    /// Uses default cookie name, path and one-year retention.
    pub fn new(jar: J) -> Self {
        Self::with_config(jar, &CoreConfig::default())
    }

    pub fn with_config(jar: J, config: &CoreConfig) -> Self {
        Self {
            jar,
            cookie_name: config.cookie_name.clone(),
            cookie_path: config.cookie_path.clone(),
            max_age_secs: config.max_age_secs,
        }
    }

    /// Underlying jar, mainly for inspection in tests.
    pub fn jar(&self) -> &J {
        &self.jar
    }
}

impl<J: CookieJar> TaskPersistence for CookieTaskPersistence<J> {
    fn load(&self) -> TaskList {
        let raw = match self.jar.get(&self.cookie_name, &self.cookie_path) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=tasks_load module=persistence status=empty reason=absent");
                return TaskList::new();
            }
            Err(err) => {
                warn!(
                    "event=tasks_load module=persistence status=fallback reason=read_failed error={err}"
                );
                return TaskList::new();
            }
        };

        match decode_tasks(&raw) {
            Ok(tasks) => {
                debug!(
                    "event=tasks_load module=persistence status=ok len={}",
                    tasks.len()
                );
                tasks
            }
            Err(err) => {
                // Never log the raw value: it holds task text.
                warn!(
                    "event=tasks_load module=persistence status=fallback reason=decode_failed value_len={} error={err}",
                    raw.len()
                );
                TaskList::new()
            }
        }
    }

    fn save(&self, tasks: &[TaskRecord]) {
        let value = match encode_tasks(tasks) {
            Ok(value) => value,
            Err(err) => {
                warn!("event=tasks_save module=persistence status=error reason=encode_failed error={err}");
                return;
            }
        };

        let cookie = Cookie {
            name: self.cookie_name.clone(),
            value,
            path: self.cookie_path.clone(),
            max_age_secs: self.max_age_secs,
        };
        match self.jar.set(&cookie) {
            Ok(()) => debug!(
                "event=tasks_save module=persistence status=ok len={}",
                tasks.len()
            ),
            Err(err) => {
                warn!("event=tasks_save module=persistence status=error reason=write_failed error={err}")
            }
        }
    }
}
