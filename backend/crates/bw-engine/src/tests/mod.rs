mod request_info;

use crate::{RequestInfo, ServerEvent};

pub(crate) fn responded(request_id: &str) -> ServerEvent {
    ServerEvent::ResponseFlushed {
        request: RequestInfo::new(request_id).with_path("/"),
        status: 200,
    }
}

pub(crate) fn not_responded(request_id: &str) -> ServerEvent {
    ServerEvent::NotResponded {
        request: RequestInfo::new(request_id),
    }
}
