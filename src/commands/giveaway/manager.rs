use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::commands::giveaway::models::Giveaway;
use crate::error::{Error, Result};

// Keeps track of the giveaways that are currently running. Each giveaway
// owns its own state; the registry only exists so that the running ones
// can be listed and looked up. Concurrent invocations register and
// deregister independently.
#[derive(Debug)]
#[non_exhaustive]
pub struct GiveawayManager {
    giveaways: Arc<DashMap<Uuid, Arc<Giveaway>>>,
}

impl GiveawayManager {
    pub fn new() -> Self {
        GiveawayManager {
            giveaways: Arc::new(DashMap::new()),
        }
    }

    // Returns all giveaways that are running at the moment.
    pub fn get_giveaways(&self) -> Vec<Arc<Giveaway>> {
        self.giveaways
            .iter()
            .map(|pair| pair.value().clone())
            .collect()
    }

    pub fn get_giveaway(&self, id: Uuid) -> Result<Arc<Giveaway>> {
        match self.giveaways.get(&id) {
            Some(pair) => Ok(pair.value().clone()),
            None => {
                let message = "The requested giveaway was not found.".to_string();
                Err(Error::Giveaway(message))
            }
        }
    }

    pub fn register(&self, giveaway: Arc<Giveaway>) {
        self.giveaways.insert(giveaway.id(), giveaway);
    }

    pub fn deregister(&self, id: Uuid) {
        self.giveaways.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use uuid::Uuid;

    use crate::commands::giveaway::manager::GiveawayManager;
    use crate::commands::giveaway::models::{ChannelRef, Giveaway, GiveawaySpec, Organizer};
    use crate::error::Error;

    fn get_giveaway() -> Arc<Giveaway> {
        let spec = GiveawaySpec::new("10s", 1, "PS5", ChannelRef::new(1)).unwrap();
        Arc::new(Giveaway::new(spec, Organizer::new(1, "Owner")))
    }

    #[test]
    fn test_read_a_new_registry() {
        let manager = GiveawayManager::new();
        let giveaways = manager.get_giveaways();

        assert_eq!(giveaways.len(), 0);
    }

    #[test]
    fn test_read_after_register() {
        let manager = GiveawayManager::new();

        let mut giveaways = manager.get_giveaways();
        assert_eq!(giveaways.len(), 0);

        manager.register(get_giveaway());
        giveaways = manager.get_giveaways();
        assert_eq!(giveaways.len(), 1);
    }

    #[test]
    fn test_get_giveaway_by_id() {
        let manager = GiveawayManager::new();
        let giveaway = get_giveaway();
        manager.register(giveaway.clone());

        let result = manager.get_giveaway(giveaway.id());
        assert_eq!(result.is_ok(), true);
        assert_eq!(result.unwrap(), giveaway);
    }

    #[test]
    fn test_get_error_for_unknown_id_on_read() {
        let manager = GiveawayManager::new();

        let result = manager.get_giveaway(Uuid::new_v4());
        assert_eq!(result.is_err(), true);
        assert_eq!(
            result.unwrap_err(),
            Error::Giveaway("The requested giveaway was not found.".to_string())
        );
    }

    #[test]
    fn test_deregister_removes_the_giveaway() {
        let manager = GiveawayManager::new();
        let giveaway = get_giveaway();
        manager.register(giveaway.clone());
        assert_eq!(manager.get_giveaways().len(), 1);

        manager.deregister(giveaway.id());
        assert_eq!(manager.get_giveaways().len(), 0);
    }

    #[test]
    fn test_deregister_for_unknown_id_is_a_noop() {
        let manager = GiveawayManager::new();
        manager.register(get_giveaway());

        manager.deregister(Uuid::new_v4());
        assert_eq!(manager.get_giveaways().len(), 1);
    }
}
