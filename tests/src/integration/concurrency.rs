//! # Shared Emitters Across Tasks
//!
//! A single bus shared between tokio worker threads. Concurrent subscribe and
//! unsubscribe must not lose updates, and `fire` must stay usable while other
//! threads mutate the table.

#[cfg(test)]
mod tests {
    use crate::support::init_tracing;
    use observable::{args, event_bus, Args, Callback, EventBus, Observable};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    type Cb = Callback<EventBus, Args>;

    fn counter(hits: &Arc<AtomicUsize>) -> Cb {
        let hits = Arc::clone(hits);
        Callback::new(move |_, _| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_subscribe_loses_nothing() {
        init_tracing();
        let bus = Arc::new(event_bus());
        let hits = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for task in 0..8 {
            let bus = Arc::clone(&bus);
            let hits = Arc::clone(&hits);
            handles.push(tokio::spawn(async move {
                for _ in 0..50 {
                    bus.on("tick", [counter(&hits)]);
                    bus.on(&format!("task-{task}"), [counter(&hits)]);
                }
            }));
        }
        for handle in handles {
            handle.await.expect("task panicked");
        }

        assert_eq!(bus.listener_count("tick"), 400);
        assert_eq!(bus.get_events().len(), 9);

        bus.fire("tick", args![]).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 400);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_unsubscribe_and_fire() {
        let bus = Arc::new(event_bus());
        let hits = Arc::new(AtomicUsize::new(0));
        let callbacks: Vec<Cb> = (0..200).map(|_| counter(&hits)).collect();
        bus.on("tick", callbacks.clone());

        let remover = {
            let bus = Arc::clone(&bus);
            tokio::spawn(async move {
                for cb in callbacks {
                    bus.off("tick", [cb]);
                    tokio::task::yield_now().await;
                }
            })
        };
        let firer = {
            let bus = Arc::clone(&bus);
            tokio::spawn(async move {
                for _ in 0..100 {
                    bus.fire("tick", args![]).expect("dispatch failed");
                    tokio::task::yield_now().await;
                }
            })
        };

        remover.await.expect("remover panicked");
        firer.await.expect("firer panicked");

        assert!(bus.get_events().is_empty());
        assert_eq!(bus.emitter().events_fired(), 100);
        assert!(hits.load(Ordering::SeqCst) <= 200 * 100);
    }

    #[tokio::test]
    async fn test_bus_fires_from_blocking_task() {
        let bus = Arc::new(event_bus());
        let hits = Arc::new(AtomicUsize::new(0));
        bus.on("work", [counter(&hits), counter(&hits)]);

        let shared = Arc::clone(&bus);
        tokio::task::spawn_blocking(move || shared.fire("work", args![1]).map(|_| ()))
            .await
            .expect("blocking task panicked")
            .expect("dispatch failed");

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
