//! Request IDs.
//!
//! Every request gets an `x-request-id` header (unless the client already sent
//! one), which is recorded in the request's tracing span and copied onto the
//! response.

use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

pub fn set_layer() -> SetRequestIdLayer<MakeRequestUuid>
{
	SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

pub fn propagate_layer() -> PropagateRequestIdLayer
{
	PropagateRequestIdLayer::x_request_id()
}
