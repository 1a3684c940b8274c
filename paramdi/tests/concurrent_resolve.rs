mod components;

use std::thread;

use paramdi::Registry;

use crate::components::{shopping, WareComponent};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn registry_is_send_and_sync() {
    assert_send_sync::<Registry>();
}

#[test]
fn every_thread_builds_its_own_graph() {
    let registry = shopping();

    let stocks = thread::scope(|s| {
        let handles = (1..=4)
            .map(|n| {
                let registry = &registry;
                s.spawn(move || {
                    let mut component = registry.get_service::<WareComponent>().unwrap();
                    for _ in 0..n {
                        component.add_to_cart();
                    }
                    component.ware_service.stock
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });

    assert_eq!(stocks, [9, 8, 7, 6]);
}
