/// Handle returned by [`Observable::subscribe`]; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn Fn(&T) + Send + Sync>;

/// A value with explicit subscribe/unsubscribe lifecycle.
///
/// Listeners run synchronously, in subscription order, every time the value
/// is published.
pub struct Observable<T> {
    value: T,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and notify every listener.
    pub fn publish(&mut self, value: T) {
        self.value = value;
        for (_, listener) in &self.listeners {
            listener(&self.value);
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the id was unknown (already removed).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_publish_notifies_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut obs = Observable::new(0);
        for tag in ["a", "b"] {
            let seen = seen.clone();
            obs.subscribe(move |v: &i32| seen.lock().unwrap().push(format!("{tag}{v}")));
        }
        obs.publish(7);
        assert_eq!(*obs.get(), 7);
        assert_eq!(*seen.lock().unwrap(), vec!["a7", "b7"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Arc::new(Mutex::new(0));
        let mut obs = Observable::new(false);
        let id = {
            let count = count.clone();
            obs.subscribe(move |_| *count.lock().unwrap() += 1)
        };
        obs.publish(true);
        assert!(obs.unsubscribe(id));
        assert!(!obs.unsubscribe(id));
        obs.publish(false);
        assert_eq!(*count.lock().unwrap(), 1);
        assert_eq!(obs.subscriber_count(), 0);
    }
}
