//! Company (account) settings.

use serde::{Deserialize, Serialize};

/// The company behind the authenticated account.
///
/// Returned by `GET /company`. `wants_timestamp_timers` decides which kind
/// of time entry the account accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Harvest URL for the company.
    pub base_uri: String,

    /// Harvest domain for the company.
    pub full_domain: String,

    /// Company name.
    pub name: String,

    /// Whether the company is active or archived.
    #[serde(default)]
    pub is_active: bool,

    /// First day of the week, e.g. `Monday`.
    pub week_start_day: String,

    /// Whether time is tracked via start and end times (`true`) or durations.
    #[serde(default)]
    pub wants_timestamp_timers: bool,

    /// `decimal` or `hours_minutes`.
    pub time_format: String,

    /// Date display format, e.g. `%m/%d/%Y`.
    #[serde(default)]
    pub date_format: Option<String>,

    /// Subscription plan.
    pub plan_type: String,

    /// `12h` or `24h`.
    pub clock: String,

    /// How currency codes are displayed.
    #[serde(default)]
    pub currency_code_display: Option<String>,

    /// How currency symbols are displayed.
    #[serde(default)]
    pub currency_symbol_display: Option<String>,

    /// Decimal separator.
    pub decimal_symbol: String,

    /// Thousands separator.
    pub thousands_separator: String,

    /// UI color scheme.
    pub color_scheme: String,

    /// Weekly capacity in seconds.
    #[serde(default)]
    pub weekly_capacity: Option<u32>,

    /// Whether the expenses feature is enabled.
    #[serde(default)]
    pub expense_feature: bool,

    /// Whether the invoices feature is enabled.
    #[serde(default)]
    pub invoice_feature: bool,

    /// Whether the estimates feature is enabled.
    #[serde(default)]
    pub estimate_feature: bool,

    /// Whether timesheet approval is enabled.
    #[serde(default, alias = "approval_required")]
    pub approval_feature: bool,
}
