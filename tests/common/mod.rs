//! Shared setup and Harvest response fixtures for the integration tests.

#![allow(dead_code)]

use harvest::{Config, Credentials, HarvestClient};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const ACCOUNT_ID: u64 = 1234567;
pub const TOKEN: &str = "1234567.pt.k3Jx9aQz";

/// A client pointed at `server`, authenticated with a personal access token.
pub fn client_for(server: &MockServer) -> HarvestClient {
    let config = Config::new(server.uri(), Credentials::personal(ACCOUNT_ID, TOKEN))
        .expect("mock server uri is a valid base url")
        .with_user_agent("harvest-tests (dev@example.com)");
    HarvestClient::new(&config).expect("client builds")
}

/// Wraps `items` in Harvest's list envelope.
pub fn page(key: &str, items: Vec<Value>, page: u32, next_page: Option<u32>) -> Value {
    let total_pages = next_page.unwrap_or(page);
    let mut body = json!({
        "per_page": 100,
        "total_pages": total_pages,
        "total_entries": items.len(),
        "next_page": next_page,
        "previous_page": if page > 1 { Some(page - 1) } else { None },
        "page": page,
        "links": {
            "first": format!("https://api.harvestapp.com/v2/{}?page=1&per_page=100", key),
            "next": next_page.map(|n| format!("https://api.harvestapp.com/v2/{}?page={}&per_page=100", key, n)),
            "previous": null,
            "last": format!("https://api.harvestapp.com/v2/{}?page={}&per_page=100", key, total_pages)
        }
    });
    body[key] = Value::Array(items);
    body
}

pub fn company(wants_timestamp_timers: bool) -> Value {
    json!({
        "base_uri": "https://apiexamples.harvestapp.com",
        "full_domain": "apiexamples.harvestapp.com",
        "name": "API Examples",
        "is_active": true,
        "week_start_day": "Monday",
        "wants_timestamp_timers": wants_timestamp_timers,
        "time_format": "hours_minutes",
        "plan_type": "sponsored",
        "clock": "12h",
        "decimal_symbol": ".",
        "thousands_separator": ",",
        "color_scheme": "orange",
        "expense_feature": true,
        "invoice_feature": true,
        "estimate_feature": true,
        "approval_feature": true
    })
}

pub fn client(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "is_active": true,
        "address": "123 Main St.\r\nAnytown, LA 71223",
        "statement_key": "0a39d3e33c8058cf7c3f8097d854c64e",
        "created_at": "2017-06-26T21:02:12Z",
        "updated_at": "2017-06-26T21:34:11Z",
        "currency": "EUR"
    })
}

pub fn contact(id: u64, first_name: &str) -> Value {
    json!({
        "id": id,
        "title": "Owner",
        "first_name": first_name,
        "last_name": "Cook",
        "email": "georgecook@example.com",
        "phone_office": "",
        "phone_mobile": "",
        "fax": "",
        "created_at": "2017-06-26T21:20:07Z",
        "updated_at": "2017-06-26T21:27:07Z",
        "client": {"id": 5735776, "name": "123 Industries"}
    })
}

pub fn project(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "code": "OS1",
        "is_active": true,
        "bill_by": "Project",
        "budget": 200.0,
        "budget_by": "project",
        "budget_is_monthly": false,
        "notify_when_over_budget": true,
        "over_budget_notification_percentage": 80.0,
        "show_budget_to_all": false,
        "created_at": "2017-06-26T21:52:18Z",
        "updated_at": "2017-06-26T21:54:06Z",
        "starts_on": "2017-06-01",
        "ends_on": null,
        "is_billable": true,
        "is_fixed_fee": false,
        "notes": "",
        "client": {"id": 5735776, "name": "123 Industries", "currency": "EUR"},
        "cost_budget": null,
        "cost_budget_include_expenses": false,
        "hourly_rate": 100.0,
        "fee": null
    })
}

pub fn user_assignment(id: u64) -> Value {
    json!({
        "id": id,
        "is_project_manager": true,
        "is_active": true,
        "use_default_rates": false,
        "budget": null,
        "created_at": "2017-06-26T22:32:52Z",
        "updated_at": "2017-06-26T22:32:52Z",
        "hourly_rate": 100.0,
        "project": {"id": 14308069, "name": "Online Store - Phase 1", "code": "OS1"},
        "user": {"id": 1782959, "name": "Kim Allen"}
    })
}

pub fn task_assignment(id: u64) -> Value {
    json!({
        "id": id,
        "billable": true,
        "is_active": true,
        "created_at": "2017-06-26T21:53:20Z",
        "updated_at": "2017-06-26T21:53:20Z",
        "hourly_rate": 100.0,
        "budget": null,
        "project": {"id": 14308069, "name": "Online Store - Phase 1", "code": "OS1"},
        "task": {"id": 8083365, "name": "Graphic Design"}
    })
}

pub fn task(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "billable_by_default": true,
        "default_hourly_rate": 120.0,
        "is_default": false,
        "is_active": true,
        "created_at": "2017-06-26T22:08:25Z",
        "updated_at": "2017-06-26T22:08:25Z"
    })
}

pub fn user(id: u64, first_name: &str, last_name: &str) -> Value {
    json!({
        "id": id,
        "first_name": first_name,
        "last_name": last_name,
        "email": "kimallen@example.com",
        "telephone": "",
        "timezone": "Eastern Time (US & Canada)",
        "has_access_to_all_future_projects": false,
        "is_contractor": false,
        "is_active": true,
        "weekly_capacity": 126000,
        "default_hourly_rate": 100.0,
        "cost_rate": 50.0,
        "roles": ["Designer"],
        "access_roles": ["member"],
        "avatar_url": "https://cache.harvestapp.com/assets/profile_images/abraj_albait_towers.png?1498516481",
        "created_at": "2017-05-01T22:34:41Z",
        "updated_at": "2017-05-01T22:34:52Z"
    })
}

pub fn role(id: u64, name: &str, user_ids: &[u64]) -> Value {
    json!({
        "id": id,
        "name": name,
        "user_ids": user_ids,
        "created_at": "2017-06-26T22:34:41Z",
        "updated_at": "2017-06-26T22:34:52Z"
    })
}

pub fn rate(id: u64, amount: f64) -> Value {
    json!({
        "id": id,
        "amount": amount,
        "start_date": null,
        "end_date": null,
        "created_at": "2019-06-19T19:46:51Z",
        "updated_at": "2019-06-19T19:46:51Z"
    })
}

pub fn project_assignment(id: u64) -> Value {
    json!({
        "id": id,
        "is_project_manager": true,
        "is_active": true,
        "use_default_rates": true,
        "budget": null,
        "hourly_rate": 100.0,
        "created_at": "2017-06-26T22:32:52Z",
        "updated_at": "2017-06-26T22:32:52Z",
        "project": {"id": 14308069, "name": "Online Store - Phase 1", "code": "OS1"},
        "client": {"id": 5735776, "name": "123 Industries"},
        "task_assignments": [task_assignment(155505013)]
    })
}

pub fn time_entry(id: u64, hours: f64) -> Value {
    json!({
        "id": id,
        "spent_date": "2017-03-21",
        "user": {"id": 1782959, "name": "Kim Allen"},
        "client": {"id": 5735774, "name": "ABC Corp"},
        "project": {"id": 14307913, "name": "Marketing Website"},
        "task": {"id": 8083365, "name": "Graphic Design"},
        "user_assignment": user_assignment(125068553),
        "task_assignment": task_assignment(155502709),
        "hours": hours,
        "notes": "Adding CSS styling",
        "created_at": "2017-06-27T15:50:15Z",
        "updated_at": "2017-06-27T16:47:14Z",
        "is_locked": false,
        "locked_reason": null,
        "is_closed": false,
        "is_billed": false,
        "timer_started_at": null,
        "started_time": "3:00pm",
        "ended_time": "5:00pm",
        "is_running": false,
        "invoice": null,
        "external_reference": null,
        "billable": true,
        "budgeted": true,
        "billable_rate": 100.0,
        "cost_rate": 50.0
    })
}

pub fn expense(id: u64, total_cost: f64) -> Value {
    json!({
        "id": id,
        "notes": "Dinner",
        "total_cost": total_cost,
        "units": 1.0,
        "is_closed": false,
        "is_locked": false,
        "is_billed": false,
        "locked_reason": null,
        "spent_date": "2017-03-03",
        "created_at": "2017-06-27T15:09:54Z",
        "updated_at": "2017-06-27T16:47:14Z",
        "billable": true,
        "receipt": {
            "url": "https://apiexamples.harvestapp.com/expenses/15296442/receipt",
            "file_name": "dinner_receipt.gif",
            "file_size": 39410,
            "content_type": "image/gif"
        },
        "user": {"id": 1782959, "name": "Kim Allen"},
        "user_assignment": user_assignment(125068553),
        "project": {"id": 14307913, "name": "Marketing Website"},
        "expense_category": {"id": 4195926, "name": "Meals", "unit_price": null, "unit_name": null},
        "client": {"id": 5735774, "name": "ABC Corp", "currency": "USD"},
        "invoice": null
    })
}

pub fn expense_category(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "unit_price": 0.575,
        "unit_name": "mile",
        "is_active": true,
        "created_at": "2017-06-27T15:01:32Z",
        "updated_at": "2017-06-27T15:01:32Z"
    })
}

fn line_item(id: u64, kind: &str, description: &str, unit_price: f64) -> Value {
    json!({
        "id": id,
        "kind": kind,
        "description": description,
        "quantity": 1.0,
        "unit_price": unit_price,
        "amount": unit_price,
        "taxed": false,
        "taxed2": false,
        "project": {"id": 14307913, "name": "Marketing Website", "code": "MW"}
    })
}

pub fn invoice(id: u64, line_items: &[(u64, &str)]) -> Value {
    let lines: Vec<Value> = line_items
        .iter()
        .map(|(line_id, description)| line_item(*line_id, "Service", description, 5000.0))
        .collect();
    json!({
        "id": id,
        "client_key": "21312da13d457947a217da6775477afee8c2eba8",
        "number": "1001",
        "purchase_order": "",
        "amount": 10000.0,
        "due_amount": 10000.0,
        "tax": null,
        "tax_amount": 0.0,
        "tax2": null,
        "tax2_amount": 0.0,
        "discount": null,
        "discount_amount": 0.0,
        "subject": "Online Store - Phase 1",
        "notes": "Some notes about the invoice.",
        "state": "draft",
        "period_start": null,
        "period_end": null,
        "issue_date": "2017-06-27",
        "due_date": "2017-07-27",
        "payment_term": "custom",
        "sent_at": null,
        "paid_at": null,
        "paid_date": null,
        "closed_at": null,
        "created_at": "2017-06-27T16:27:16Z",
        "updated_at": "2017-08-23T22:25:59Z",
        "currency": "EUR",
        "client": {"id": 5735776, "name": "123 Industries"},
        "estimate": null,
        "retainer": null,
        "creator": {"id": 1782884, "name": "Bob Powell"},
        "line_items": lines
    })
}

pub fn invoice_message(id: u64, event_type: Option<&str>) -> Value {
    json!({
        "id": id,
        "sent_by": "Bob Powell",
        "sent_by_email": "bobpowell@example.com",
        "sent_from": "Bob Powell",
        "sent_from_email": "bobpowell@example.com",
        "recipients": [{"name": "Richard Roe", "email": "richardroe@example.com"}],
        "subject": "Past due invoice reminder: #1001 from API Examples",
        "body": "Dear Customer,\r\n\r\nThis is a friendly reminder.",
        "include_link_to_client_invoice": false,
        "attach_pdf": true,
        "send_me_a_copy": false,
        "thank_you": false,
        "reminder": false,
        "send_reminder_on": null,
        "event_type": event_type,
        "created_at": "2017-08-23T22:15:06Z",
        "updated_at": "2017-08-23T22:15:06Z"
    })
}

pub fn invoice_payment(id: u64, amount: f64) -> Value {
    json!({
        "id": id,
        "amount": amount,
        "paid_at": "2017-07-24T13:32:18Z",
        "paid_date": "2017-07-24",
        "recorded_by": "Alice Doe",
        "recorded_by_email": "alice@example.com",
        "notes": "Paid by phone",
        "transaction_id": null,
        "created_at": "2017-07-28T14:42:44Z",
        "updated_at": "2017-07-28T14:42:44Z",
        "payment_gateway": {"id": null, "name": null}
    })
}

pub fn item_category(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "use_as_service": false,
        "use_as_expense": false,
        "created_at": "2017-06-27T16:06:35Z",
        "updated_at": "2017-06-27T16:06:35Z"
    })
}

pub fn estimate(id: u64, line_items: &[(u64, &str)]) -> Value {
    let lines: Vec<Value> = line_items
        .iter()
        .map(|(line_id, description)| {
            let mut line = line_item(*line_id, "Service", description, 5000.0);
            if let Some(fields) = line.as_object_mut() {
                fields.remove("project");
            }
            line
        })
        .collect();
    json!({
        "id": id,
        "client_key": "13dc088aa7d51ec687f186b146730c3c75dc7423",
        "number": "1001",
        "purchase_order": "5678",
        "amount": 9630.0,
        "tax": 5.0,
        "tax_amount": 450.0,
        "tax2": 2.0,
        "tax2_amount": 180.0,
        "discount": null,
        "discount_amount": 0.0,
        "subject": "Online Store - Phase 1",
        "notes": "Some notes about the estimate",
        "state": "sent",
        "issue_date": "2017-06-01",
        "sent_at": "2017-06-27T16:11:33Z",
        "created_at": "2017-06-27T16:11:24Z",
        "updated_at": "2017-06-27T16:13:56Z",
        "accepted_at": null,
        "declined_at": null,
        "currency": "USD",
        "client": {"id": 5735776, "name": "123 Industries"},
        "creator": {"id": 1782884, "name": "Bob Powell"},
        "line_items": lines
    })
}

pub fn estimate_message(id: u64, event_type: Option<&str>) -> Value {
    json!({
        "id": id,
        "sent_by": "Bob Powell",
        "sent_by_email": "bobpowell@example.com",
        "sent_from": "Bob Powell",
        "sent_from_email": "bobpowell@example.com",
        "recipients": [{"name": "Richard Roe", "email": "richardroe@example.com"}],
        "subject": "Estimate #1001 from API Examples",
        "body": "---------------------------------------------\r\nEstimate Summary",
        "send_me_a_copy": true,
        "event_type": event_type,
        "created_at": "2017-08-25T21:23:40Z",
        "updated_at": "2017-08-25T21:23:40Z"
    })
}

pub fn estimate_item_category(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "created_at": "2017-06-26T20:41:00Z",
        "updated_at": "2017-06-26T20:41:00Z"
    })
}
