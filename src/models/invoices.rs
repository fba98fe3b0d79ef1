//! Invoices, their messages and payments, and invoice item categories.

use serde::{Deserialize, Serialize};

use super::{ClientRef, Creator, IdRef, LineItem, Recipient};
use crate::pagination::paged_list;

/// An invoice sent to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique invoice id.
    pub id: u64,

    /// Key used to build the client-facing invoice URL.
    pub client_key: String,

    /// Invoice number.
    pub number: String,

    /// Purchase order number.
    #[serde(default)]
    pub purchase_order: Option<String>,

    /// Total amount, including taxes and discounts.
    pub amount: f64,

    /// Amount still owed.
    pub due_amount: f64,

    /// First tax rate, in percent.
    #[serde(default)]
    pub tax: Option<f64>,

    /// First tax amount.
    #[serde(default)]
    pub tax_amount: f64,

    /// Second tax rate, in percent.
    #[serde(default)]
    pub tax2: Option<f64>,

    /// Second tax amount.
    #[serde(default)]
    pub tax2_amount: f64,

    /// Discount rate, in percent.
    #[serde(default)]
    pub discount: Option<f64>,

    /// Discount amount.
    #[serde(default)]
    pub discount_amount: f64,

    /// Subject line.
    #[serde(default)]
    pub subject: Option<String>,

    /// Notes shown on the invoice.
    #[serde(default)]
    pub notes: Option<String>,

    /// `draft`, `open`, `paid` or `closed`.
    pub state: String,

    /// Start of the billed period.
    #[serde(default)]
    pub period_start: Option<String>,

    /// End of the billed period.
    #[serde(default)]
    pub period_end: Option<String>,

    /// Issue date (YYYY-MM-DD).
    pub issue_date: String,

    /// Due date (YYYY-MM-DD).
    pub due_date: String,

    /// Payment terms, e.g. `upon receipt` or `net 30`.
    #[serde(default)]
    pub payment_term: Option<String>,

    /// When the invoice was sent.
    #[serde(default)]
    pub sent_at: Option<String>,

    /// When the invoice was paid.
    #[serde(default)]
    pub paid_at: Option<String>,

    /// Date the invoice was paid.
    #[serde(default)]
    pub paid_date: Option<String>,

    /// When the invoice was closed.
    #[serde(default)]
    pub closed_at: Option<String>,

    /// Currency code.
    pub currency: String,

    /// The billed client.
    pub client: ClientRef,

    /// The estimate the invoice was created from.
    #[serde(default)]
    pub estimate: Option<IdRef>,

    /// The retainer the invoice draws from.
    #[serde(default)]
    pub retainer: Option<IdRef>,

    /// Who created the invoice.
    #[serde(default)]
    pub creator: Option<Creator>,

    /// Invoice lines.
    #[serde(default)]
    pub line_items: Vec<LineItem>,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

impl Invoice {
    /// Returns the line item with the given id.
    pub fn line_item(&self, id: u64) -> Option<&LineItem> {
        self.line_items.iter().find(|item| item.id == id)
    }
}

/// A message sent for an invoice, or a recorded state change.
///
/// State changes (`send`, `close`, `re-open`, `draft`) are messages with an
/// `event_type` and no recipients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceMessage {
    /// Unique message id.
    pub id: u64,

    /// Name of the user who created the message.
    pub sent_by: String,

    /// Email of the user who created the message.
    pub sent_by_email: String,

    /// Name the message was sent from.
    pub sent_from: String,

    /// Email the message was sent from.
    pub sent_from_email: String,

    /// Recipients.
    #[serde(default)]
    pub recipients: Vec<Recipient>,

    /// Subject.
    #[serde(default)]
    pub subject: Option<String>,

    /// Body.
    #[serde(default)]
    pub body: Option<String>,

    /// Whether a link to the client invoice was included.
    #[serde(default)]
    pub include_link_to_client_invoice: bool,

    /// Whether the invoice PDF was attached.
    #[serde(default)]
    pub attach_pdf: bool,

    /// Whether the sender was copied.
    #[serde(default)]
    pub send_me_a_copy: bool,

    /// Whether this is a thank-you note.
    #[serde(default)]
    pub thank_you: bool,

    /// Whether this is a reminder.
    #[serde(default)]
    pub reminder: bool,

    /// Date a scheduled reminder goes out.
    #[serde(default)]
    pub send_reminder_on: Option<String>,

    /// State change recorded by this message, if any.
    #[serde(default)]
    pub event_type: Option<String>,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

/// The gateway a payment came through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentGateway {
    /// Gateway id.
    #[serde(default)]
    pub id: Option<u64>,

    /// Gateway name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A payment recorded against an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePayment {
    /// Unique payment id.
    pub id: u64,

    /// Amount paid.
    pub amount: f64,

    /// When the payment was made.
    #[serde(default)]
    pub paid_at: Option<String>,

    /// Date the payment was made.
    #[serde(default)]
    pub paid_date: Option<String>,

    /// Who recorded the payment.
    #[serde(default)]
    pub recorded_by: Option<String>,

    /// Email of who recorded the payment.
    #[serde(default)]
    pub recorded_by_email: Option<String>,

    /// Notes.
    #[serde(default)]
    pub notes: Option<String>,

    /// Gateway transaction id.
    #[serde(default)]
    pub transaction_id: Option<String>,

    /// Gateway, for online payments.
    #[serde(default)]
    pub payment_gateway: Option<PaymentGateway>,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

/// A category invoice lines are filed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItemCategory {
    /// Unique category id.
    pub id: u64,

    /// Category name.
    pub name: String,

    /// Whether the category is used for imported time.
    #[serde(default)]
    pub use_as_service: bool,

    /// Whether the category is used for imported expenses.
    #[serde(default)]
    pub use_as_expense: bool,

    /// Creation timestamp.
    pub created_at: String,

    /// Last update timestamp.
    pub updated_at: String,
}

paged_list!(
    /// A page of invoices.
    Invoices,
    invoices: Invoice
);

paged_list!(
    /// A page of invoice messages.
    InvoiceMessages,
    invoice_messages: InvoiceMessage
);

paged_list!(
    /// A page of invoice payments.
    InvoicePayments,
    invoice_payments: InvoicePayment
);

paged_list!(
    /// A page of invoice item categories.
    InvoiceItemCategories,
    invoice_item_categories: InvoiceItemCategory
);
