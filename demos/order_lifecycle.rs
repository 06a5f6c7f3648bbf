//! Order Lifecycle
//!
//! This example walks an e-commerce order machine through a purchase flow.
//!
//! Key concepts:
//! - Declaring the transition graph and terminal states up front
//! - Build-time validation (every state reachable, no dead ends)
//! - A failed traversal diagnosed with `peek`
//!
//! Run with: cargo run --example order_lifecycle

use trellis::MachineBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // States track how many items are in the order (0S..4S); "1R"/"2R" add
    // one or two items, "BUY" checks out once four items are in, and
    // "CANCEL" is valid from anywhere before checkout.
    let mut order = MachineBuilder::new()
        .transition("0S", "1R", "1S")?
        .transition("0S", "2R", "2S")?
        .transition("1S", "1R", "2S")?
        .transition("1S", "2R", "3S")?
        .transition("2S", "1R", "3S")?
        .transition("2S", "2R", "4S")?
        .transition("3S", "1R", "4S")?
        .transition("4S", "BUY", "COMPLETED")?
        .transition("0S", "CANCEL", "CANCELLED")?
        .transition("1S", "CANCEL", "CANCELLED")?
        .transition("2S", "CANCEL", "CANCELLED")?
        .transition("3S", "CANCEL", "CANCELLED")?
        .transition("4S", "CANCEL", "CANCELLED")?
        .terminal("CANCELLED")?
        .terminal("COMPLETED")?
        .build("0S")?;

    // Four items, then checkout.
    order.process(["1R", "2R", "1R", "BUY"])?;
    println!("first run terminated: {}", order.is_terminated());

    // "BUY" is only recognized once the order holds four items.
    order.reset();
    let outcome = order.process(["1R", "2R", "BUY"]).map(|_| ());
    if let Err(err) = outcome {
        println!("second run rejected: {err}");
        println!(
            "order is still at {:?}, terminated: {}",
            order.peek(),
            order.is_terminated()
        );
    }

    // The machine is reusable after a failure.
    order.reset();
    order.process(["2R", "CANCEL"])?;
    println!("third run ended at {:?}", order.peek());

    Ok(())
}
