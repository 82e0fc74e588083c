//! Engine frontend (C6): accepts connections and spawns a worker thread
//! per connection. Matches the "parallel OS-level threads, one per active
//! connection, no event loop" scheduling model — there is no async
//! runtime anywhere in the accept/dispatch path.

use std::sync::Arc;

use orderbook::{Clock, EventSink};

use crate::registry::Registry;
use crate::wire::Connection;
use crate::worker;

pub struct Engine {
    registry: Arc<Registry>,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn EventSink>,
}

impl Engine {
    pub fn new(clock: Arc<dyn Clock>, sink: Arc<dyn EventSink>) -> Self {
        Self { registry: Arc::new(Registry::new()), clock, sink }
    }

    /// Spawns a worker bound to `conn` and returns immediately.
    pub fn accept<C>(&self, conn: C)
    where
        C: Connection + Send + 'static,
    {
        let registry = Arc::clone(&self.registry);
        let clock = Arc::clone(&self.clock);
        let sink = Arc::clone(&self.sink);
        std::thread::spawn(move || {
            worker::run(conn, &registry, clock.as_ref(), sink.as_ref());
        });
    }
}
