//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;
pub mod payment;

pub use assessment::{
    GetHistoryHandler, GetHistoryQuery, GetProgressHandler, GetProgressQuery,
    GetQuestionsHandler, GetQuestionsQuery, GetQuestionsResult, GetReportHandler,
    GetReportQuery, SubmitAnswersCommand, SubmitAnswersHandler, SubmitAnswersResult,
};
pub use payment::{
    CreateOrderCommand, CreateOrderHandler, CreateOrderResult, ExecutePaymentCommand,
    ExecutePaymentHandler, ExecutePaymentResult, GetPaymentHistoryHandler,
    GetPaymentHistoryQuery, GetPaymentStatusHandler, GetPaymentStatusQuery,
};
