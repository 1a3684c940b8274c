mod shop;

use paramdi::ResolveError;
use tracing_subscriber::EnvFilter;

use crate::shop::{Index, WareComponent};

fn main() -> Result<(), ResolveError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let registry = shop::registry();
    tracing::info!("{} types registered", registry.len());

    let mut ware_component = registry.get_service::<WareComponent>()?;
    println!("{}", ware_component.add_to_cart());

    tracing::info!(
        stock = ware_component.ware_service().stock(),
        ware_count = ware_component.cart_service().ware_count(),
        "ware component state"
    );

    // a fresh graph, unaffected by the component above
    let mut index = registry.get_service::<Index>()?;
    println!("{}", index.run());

    Ok(())
}
