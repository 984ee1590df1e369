/// Known payment model tags. Candidates carry the tag as an opaque string;
/// only `stipend` changes which rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentModel {
    Unpaid,
    Stipend,
    Equity,
}

impl PaymentModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentModel::Unpaid => "unpaid",
            PaymentModel::Stipend => "stipend",
            PaymentModel::Equity => "equity",
        }
    }
}
