/*
[INPUT]:  Terminal ids, serial numbers and event payloads
[OUTPUT]: Paystack Terminal devices and event delivery status
[POS]:    Resource layer - /terminal endpoints
[UPDATE]: When terminal endpoints change
*/

use serde_json::{Value, json};

use crate::http::request::paginated_path;
use crate::http::{ApiRequest, PaystackError, Query, Result, Transport};
use crate::types::{
    Terminal, TerminalEvent, TerminalEventAction, TerminalEventRequest, TerminalEventStatus,
    TerminalEventType, TerminalPresence,
};

resource!(
    /// In-person payment terminals
    Terminals
);

impl<X: Transport> Terminals<'_, X> {
    /// Push an invoice or transaction event to a terminal
    ///
    /// POST /terminal/{terminal_id}/event
    pub fn send_event(&self, terminal_id: &str, event: &TerminalEventRequest) -> X::Output<TerminalEvent> {
        self.transport.dispatch(event_request(terminal_id, event))
    }

    /// GET /terminal/{terminal_id}/event/{event_id}
    pub fn event_status(&self, terminal_id: &str, event_id: &str) -> X::Output<TerminalEventStatus> {
        let path = endpoint!("/terminal/{}/event/{}", terminal_id, event_id);
        self.transport.dispatch(Ok(ApiRequest::get(path)))
    }

    /// GET /terminal/{terminal_id}/presence
    pub fn presence(&self, terminal_id: &str) -> X::Output<TerminalPresence> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/terminal/{}/presence", terminal_id))))
    }

    /// GET /terminal?perPage=..
    pub fn list(
        &self,
        per_page: Option<u32>,
        next: Option<&str>,
        previous: Option<&str>,
    ) -> X::Output<Vec<Terminal>> {
        let path = Query::new()
            .push("next", next)
            .push("previous", previous)
            .append_to(&paginated_path("/terminal", per_page));
        self.transport.dispatch(Ok(ApiRequest::get(path)))
    }

    /// GET /terminal/{terminal_id}
    pub fn fetch(&self, terminal_id: &str) -> X::Output<Terminal> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/terminal/{}", terminal_id))))
    }

    /// PUT /terminal/{terminal_id}
    pub fn update(&self, terminal_id: &str, name: &str, address: &str) -> X::Output<Value> {
        self.transport.dispatch(Ok(ApiRequest::put(endpoint!("/terminal/{}", terminal_id))
            .with_body(json!({ "name": name, "address": address }))))
    }

    /// Activate a terminal on the integration
    ///
    /// POST /terminal/commission_device
    pub fn commission(&self, serial_number: &str) -> X::Output<Value> {
        self.transport.dispatch(Ok(ApiRequest::post("/terminal/commission_device")
            .with_body(json!({ "serial_number": serial_number }))))
    }

    /// POST /terminal/decommission_device
    pub fn decommission(&self, serial_number: &str) -> X::Output<Value> {
        self.transport.dispatch(Ok(ApiRequest::post("/terminal/decommission_device")
            .with_body(json!({ "serial_number": serial_number }))))
    }
}

fn event_request(terminal_id: &str, event: &TerminalEventRequest) -> Result<ApiRequest> {
    let supported = match event.event_type {
        TerminalEventType::Invoice => {
            matches!(event.action, TerminalEventAction::Process | TerminalEventAction::View)
        }
        TerminalEventType::Transaction => {
            matches!(event.action, TerminalEventAction::Process | TerminalEventAction::Print)
        }
    };
    if !supported {
        return Err(PaystackError::invalid_argument(format!(
            "{:?} events do not support the {:?} action",
            event.event_type, event.action
        )));
    }
    ApiRequest::post(endpoint!("/terminal/{}/event", terminal_id)).json(event)
}
