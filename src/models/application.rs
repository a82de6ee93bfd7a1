use serde::Serialize;

/// An application to a listing. With `bid_amount` set it is a salary bid.
#[derive(Debug, Clone, Serialize)]
pub struct Application {
    pub id: i64,
    pub listing_id: i64,
    pub applicant: String,
    pub amount: f64,
    pub bid_amount: Option<f64>,
    pub bid_reason: String,
    pub created_at: String,
}

impl Application {
    pub fn is_bid(&self) -> bool {
        self.bid_amount.is_some()
    }
}
