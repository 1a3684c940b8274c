use std::fmt;

use paramdi::{Injectable, Registry, Type};

/// Keeps the stock of the ware.
#[derive(Debug)]
pub(crate) struct WareService {
    stock: i32,
}

impl Default for WareService {
    fn default() -> Self {
        Self { stock: 10 }
    }
}

impl WareService {
    pub(crate) fn stock(&self) -> i32 {
        self.stock
    }

    // Not bounded below, the stock may go negative.
    pub(crate) fn decrease_stock(&mut self) {
        self.stock -= 1;
    }
}

/// Keeps the number of wares in the cart.
#[derive(Debug, Default)]
pub(crate) struct CartService {
    ware_count: i32,
}

impl CartService {
    pub(crate) fn ware_count(&self) -> i32 {
        self.ware_count
    }

    pub(crate) fn increase_ware_count(&mut self) {
        self.ware_count += 1;
    }
}

#[derive(Debug)]
#[Injectable]
pub(crate) struct WareComponent {
    ware_service: WareService,
    cart_service: CartService,
}

impl WareComponent {
    /// Moves one ware from the stock into the cart.
    pub(crate) fn add_to_cart(&mut self) -> CartStatus {
        self.ware_service.decrease_stock();
        self.cart_service.increase_ware_count();

        let status = CartStatus {
            stock: self.ware_service.stock(),
            ware_count: self.cart_service.ware_count(),
        };

        tracing::debug!(stock = status.stock, ware_count = status.ware_count, "added to cart");

        status
    }

    pub(crate) fn ware_service(&self) -> &WareService {
        &self.ware_service
    }

    pub(crate) fn cart_service(&self) -> &CartService {
        &self.cart_service
    }
}

/// Counters read back right after [`WareComponent::add_to_cart`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CartStatus {
    pub(crate) stock: i32,
    pub(crate) ware_count: i32,
}

impl fmt::Display for CartStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "added ware to cart, ware stock: {}; cart ware count: {}.",
            self.stock, self.ware_count
        )
    }
}

#[derive(Debug)]
pub(crate) struct Index {
    ware_component: WareComponent,
}

impl Index {
    fn new(ware_component: WareComponent) -> Self {
        Self { ware_component }
    }

    pub(crate) fn run(&mut self) -> CartStatus {
        self.ware_component.add_to_cart()
    }
}

/// The services are registered without parameter metadata, the component
/// describes itself, and `Index` is wired by hand.
pub(crate) fn registry() -> Registry {
    Registry::builder()
        .register_default::<WareService>()
        .register_default::<CartService>()
        .register::<WareComponent>()
        .register_with([Type::of::<WareComponent>()], |args| {
            Ok(Index::new(args.take()?))
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_to_cart_twice() {
        let registry = registry();
        let mut component = registry.get_service::<WareComponent>().unwrap();

        let lines = [component.add_to_cart(), component.add_to_cart()]
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();

        assert_eq!(
            lines,
            [
                "added ware to cart, ware stock: 9; cart ware count: 1.",
                "added ware to cart, ware stock: 8; cart ware count: 2.",
            ]
        );
        assert_eq!(component.ware_service().stock(), 8);
        assert_eq!(component.cart_service().ware_count(), 2);
    }

    #[test]
    fn index_gets_its_own_graph() {
        let registry = registry();

        let mut component = registry.get_service::<WareComponent>().unwrap();
        component.add_to_cart();

        let mut index = registry.get_service::<Index>().unwrap();
        assert_eq!(
            index.run(),
            CartStatus {
                stock: 9,
                ware_count: 1
            }
        );
        assert_eq!(component.ware_service().stock(), 9);
    }

    #[test]
    fn stock_goes_negative() {
        let mut component = registry().get_service::<WareComponent>().unwrap();

        let last = (0..11).map(|_| component.add_to_cart()).last().unwrap();

        assert_eq!(last.stock, -1);
        assert_eq!(last.ware_count, 11);
    }
}
