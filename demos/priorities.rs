//! # Priorities Example
//!
//! Registers listeners with different priorities, one of them suspending and one failing,
//! and shows the order they run in plus the error cascade.
//!
//! ## Run
//! ```bash
//! cargo run --example priorities --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use prio_emitter::{
    EventEmitter, Handler, HandlerError, ListenerOptions, LogWriter, Value, args,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let emitter = EventEmitter::new();

    emitter.on(
        "order",
        Handler::sync(|_, args| {
            println!(" ├─► [p=0]  billing   id={:?}", args.first().and_then(Value::as_int));
            Ok(())
        }),
        None,
    )?;

    emitter.on(
        "order",
        Handler::suspending(|_, args| async move {
            println!(" ├─► [p=10] validate  id={:?} (checking stock...)", args[0].as_int());
            tokio::time::sleep(Duration::from_millis(150)).await;
            println!(" │           stock ok");
            Ok(())
        }),
        ListenerOptions::priority(10),
    )?;

    emitter.on(
        "order",
        Handler::sync(|_, _| Err(HandlerError::failed("mail server unreachable"))),
        ListenerOptions::priority(5),
    )?;

    emitter.on(
        "order",
        Handler::sync(|_, _| {
            println!(" └─► [p=-1] audit");
            Ok(())
        }),
        ListenerOptions::priority(-1),
    )?;

    emitter.on("error", Handler::listener(Arc::new(LogWriter::new())), None)?;

    println!("emit(\"order\", 42)");
    emitter.emit("order", args![42]).await?;
    Ok(())
}
