use serde_json::{json, Value};

/// Body of a create-subscription request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRequest {
    /// Payment method token issued by Stripe
    pub stripe_token: String,
    pub plan_type: String,
}

impl SubscriptionRequest {
    pub fn new(stripe_token: impl Into<String>, plan_type: impl Into<String>) -> Self {
        Self {
            stripe_token: stripe_token.into(),
            plan_type: plan_type.into(),
        }
    }

    /// JSON body as sent on the wire
    pub fn to_json(&self) -> Value {
        json!({
            "stripeToken": self.stripe_token,
            "planType": self.plan_type,
        })
    }
}
