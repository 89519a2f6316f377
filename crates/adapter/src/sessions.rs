//! Session registry - one engine per game session, one lock per engine
//!
//! The registry lock only guards the name lookup and is released before the
//! session's own lock is taken, so turns on different sessions run in
//! parallel while each turn holds its engine for its whole duration.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::core::{ConfigError, EngineConfig, GameEngine};

pub type SharedEngine = Arc<Mutex<GameEngine>>;

/// Named game sessions sharing one rule set
#[derive(Debug)]
pub struct SessionRegistry {
    config: EngineConfig,
    base_seed: u64,
    inner: Mutex<Sessions>,
}

#[derive(Debug, Default)]
struct Sessions {
    engines: HashMap<String, SharedEngine>,
    created: u64,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // Poisoned locks still hand out the engine.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SessionRegistry {
    /// Each new session seeds its RNG from `base_seed` plus its creation order.
    pub fn new(config: EngineConfig, base_seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            base_seed,
            inner: Mutex::new(Sessions::default()),
        })
    }

    /// Look up a session, creating a not-yet-started one if it does not exist
    pub fn get_or_create(&self, name: &str) -> Result<SharedEngine, ConfigError> {
        let mut sessions = lock(&self.inner);
        if let Some(engine) = sessions.engines.get(name) {
            return Ok(Arc::clone(engine));
        }
        let seed = self.base_seed.wrapping_add(sessions.created);
        sessions.created += 1;
        let engine = Arc::new(Mutex::new(GameEngine::new(self.config, seed)?));
        sessions.engines.insert(name.to_string(), Arc::clone(&engine));
        debug!(session = name, seed, "session created");
        Ok(engine)
    }

    pub fn get(&self, name: &str) -> Option<SharedEngine> {
        lock(&self.inner).engines.get(name).cloned()
    }

    /// Run `f` on a session's engine while holding its lock.
    ///
    /// `None` if no such session exists.
    pub fn with_session<T, F>(&self, name: &str, f: F) -> Option<T>
    where
        F: FnOnce(&mut GameEngine) -> T,
    {
        let engine = self.get(name)?;
        let mut guard = lock(&engine);
        Some(f(&mut guard))
    }

    /// Drop a session. Returns whether it existed.
    pub fn close(&self, name: &str) -> bool {
        let removed = lock(&self.inner).engines.remove(name).is_some();
        if removed {
            debug!(session = name, "session closed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Phase, TapOutcome};
    use std::thread;

    fn registry() -> SessionRegistry {
        SessionRegistry::new(EngineConfig::classic(), 100).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            palette_size: 0,
            ..EngineConfig::classic()
        };
        assert!(SessionRegistry::new(config, 0).is_err());
    }

    #[test]
    fn test_create_lookup_close() {
        let reg = registry();
        assert!(reg.is_empty());
        assert!(reg.with_session("a", |g| g.score()).is_none());

        let engine = reg.get_or_create("a").unwrap();
        assert_eq!(lock(&engine).phase(), Phase::NotStarted);
        assert_eq!(reg.len(), 1);

        let again = reg.get_or_create("a").unwrap();
        assert!(Arc::ptr_eq(&engine, &again));

        assert_eq!(reg.with_session("a", |g| g.start()), Some(TapOutcome::Started));
        assert!(reg.close("a"));
        assert!(!reg.close("a"));
        assert!(reg.get("a").is_none());
    }

    #[test]
    fn test_sessions_are_independent() {
        let reg = registry();
        reg.get_or_create("a").unwrap();
        reg.get_or_create("b").unwrap();
        reg.with_session("a", |g| g.start());
        assert_eq!(reg.with_session("a", |g| g.started()), Some(true));
        assert_eq!(reg.with_session("b", |g| g.started()), Some(false));
    }

    #[test]
    fn test_concurrent_sessions() {
        let reg = Arc::new(registry());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let reg = Arc::clone(&reg);
                thread::spawn(move || {
                    let name = format!("s{}", i);
                    reg.get_or_create(&name).unwrap();
                    reg.with_session(&name, |g| {
                        g.start();
                        let piece = g
                            .grid()
                            .cells()
                            .iter()
                            .position(|c| !c.is_empty())
                            .unwrap();
                        g.tap(piece).unwrap()
                    })
                    .unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert!(matches!(handle.join().unwrap(), TapOutcome::Selected { .. }));
        }
        assert_eq!(reg.len(), 4);
    }
}
