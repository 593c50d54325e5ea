use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestEvent(pub usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtherEvent(pub usize);

/// Shared log of everything a listener saw.
pub fn recorder<T: Clone + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(&T) + Send + Sync + 'static)
{
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    (log, move |event: &T| sink.lock().push(event.clone()))
}
