#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use paramdi::{Registry, RegistryBuilder, Type};

/// Names of the types in the order they were constructed.
#[derive(Clone, Default)]
pub(crate) struct Log(Arc<Mutex<Vec<&'static str>>>);

impl Log {
    pub(crate) fn push(&self, name: &'static str) {
        self.0.lock().unwrap().push(name);
    }

    pub(crate) fn take(&self) -> Vec<&'static str> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

/// Hands out increasing serial numbers, one per construction.
#[derive(Clone, Default)]
pub(crate) struct Serials(Arc<AtomicUsize>);

impl Serials {
    pub(crate) fn next(&self) -> usize {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

#[derive(Debug)]
pub(crate) struct A {
    pub(crate) serial: usize,
    pub(crate) c: C,
}

#[derive(Debug)]
pub(crate) struct B {
    pub(crate) serial: usize,
}

#[derive(Debug)]
pub(crate) struct C {
    pub(crate) serial: usize,
}

#[derive(Debug)]
pub(crate) struct Pair {
    pub(crate) a: A,
    pub(crate) b: B,
}

#[derive(Debug)]
pub(crate) struct Twins {
    pub(crate) first: A,
    pub(crate) second: A,
}

/// A graph where `Pair: [A, B]`, `A: [C]`, `Twins: [A, A]` and `B`, `C`
/// take nothing. `B` carries no metadata, `C` an empty list.
pub(crate) fn recording(log: &Log, serials: &Serials) -> RegistryBuilder {
    let (l, s) = (log.clone(), serials.clone());
    let builder = Registry::builder().register_with([], move |_| {
        l.push("C");
        Ok(C { serial: s.next() })
    });

    let (l, s) = (log.clone(), serials.clone());
    let builder = builder.register_fn(move |_| {
        l.push("B");
        Ok(B { serial: s.next() })
    });

    let (l, s) = (log.clone(), serials.clone());
    let builder = builder.register_with([Type::of::<C>()], move |args| {
        let c = args.take()?;
        l.push("A");
        Ok(A { serial: s.next(), c })
    });

    let l = log.clone();
    let builder = builder.register_with([Type::of::<A>(), Type::of::<B>()], move |args| {
        let a = args.take()?;
        let b = args.take()?;
        l.push("Pair");
        Ok(Pair { a, b })
    });

    builder.register_with([Type::of::<A>(), Type::of::<A>()], |args| {
        Ok(Twins {
            first: args.take()?,
            second: args.take()?,
        })
    })
}

/// Shopping cart fixtures, with their initial counters.
#[derive(Debug)]
pub(crate) struct WareService {
    pub(crate) stock: i32,
}

impl Default for WareService {
    fn default() -> Self {
        Self { stock: 10 }
    }
}

#[derive(Debug, Default)]
pub(crate) struct CartService {
    pub(crate) ware_count: i32,
}

#[derive(Debug)]
pub(crate) struct WareComponent {
    pub(crate) ware_service: WareService,
    pub(crate) cart_service: CartService,
}

impl WareComponent {
    pub(crate) fn add_to_cart(&mut self) -> String {
        self.ware_service.stock -= 1;
        self.cart_service.ware_count += 1;
        format!(
            "stock: {}; cart: {}",
            self.ware_service.stock, self.cart_service.ware_count
        )
    }
}

pub(crate) fn shopping() -> Registry {
    Registry::builder()
        .register_default::<WareService>()
        .register_default::<CartService>()
        .register_with(
            [Type::of::<WareService>(), Type::of::<CartService>()],
            |args| {
                Ok(WareComponent {
                    ware_service: args.take()?,
                    cart_service: args.take()?,
                })
            },
        )
        .build()
}
