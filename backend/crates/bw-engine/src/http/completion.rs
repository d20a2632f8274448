use crate::{EventHub, ServerEvent};

use std::convert::Infallible;
use std::sync::Arc;

use axum::body::{Body, Bytes};
use futures::{StreamExt, future, stream};

/// A body that publishes `event` once its bytes have been handed to the
/// connection.
///
/// The event fires when the body stream is polled past its last chunk. A
/// client that disconnects mid-body never sees it published.
pub(crate) fn publish_after_body(
    bytes: impl Into<Bytes>,
    events: Arc<EventHub>,
    event: ServerEvent,
) -> Body {
    let chunk = stream::once(future::ready(Ok::<_, Infallible>(bytes.into())));
    let flushed = stream::once(async move {
        events.publish(&event);
        None::<Result<Bytes, Infallible>>
    })
    .filter_map(future::ready);

    Body::from_stream(chunk.chain(flushed))
}
